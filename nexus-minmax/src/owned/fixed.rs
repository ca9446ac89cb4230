//! FixedMinMax - a sorted min/max list over a fixed number of slots.

use crate::minmax::{BoxedMinMaxStorage, Iter, Keys, MinMaxList};
use crate::{Full, Key};

/// A sorted doubly-linked list with O(1) min/max over fixed-capacity storage.
///
/// Wraps [`MinMaxList`] + [`BoxedMinMaxStorage`]. All slots are allocated
/// at construction; nothing allocates afterwards. Insertion fails with
/// [`Full`] once every slot is taken.
///
/// [`Default`] gives [`DEFAULT_CAPACITY`] (16) slots. Size it with
/// [`with_capacity`](Self::with_capacity) for anything else.
///
/// # Example
///
/// ```
/// use nexus_minmax::FixedMinMax;
///
/// let mut list: FixedMinMax<u64> = FixedMinMax::with_capacity(3);
///
/// list.try_insert(30).unwrap();
/// list.try_insert(10).unwrap();
/// list.try_insert(20).unwrap();
/// assert!(list.is_full());
///
/// // The rejected value comes back
/// let err = list.try_insert(5).unwrap_err();
/// assert_eq!(err.into_inner(), 5);
///
/// assert_eq!(list.pop_min(), Some(10));
/// list.try_insert(5).unwrap();
/// assert_eq!(list.min(), Some(&5));
/// ```
pub struct FixedMinMax<T, K: Key = u32> {
    storage: BoxedMinMaxStorage<T, K>,
    list: MinMaxList<T, BoxedMinMaxStorage<T, K>, K>,
}

impl<T, K: Key> FixedMinMax<T, K> {
    /// Creates an empty list with exactly `capacity` slots.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is 0 or does not fit below `K::NONE`.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            storage: BoxedMinMaxStorage::with_capacity(capacity),
            list: MinMaxList::new(),
        }
    }

    /// Returns the number of values.
    #[inline]
    pub fn len(&self) -> usize {
        self.list.len()
    }

    /// Returns `true` if the list is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Returns the number of slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.storage.capacity()
    }

    /// Returns `true` if every slot is taken.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.storage.is_full()
    }

    /// Returns the smallest value, or `None` if empty. O(1).
    #[inline]
    pub fn min(&self) -> Option<&T> {
        self.list.min(&self.storage)
    }

    /// Returns the largest value, or `None` if empty. O(1).
    #[inline]
    pub fn max(&self) -> Option<&T> {
        self.list.max(&self.storage)
    }

    /// Returns the key of the smallest value.
    #[inline]
    pub fn min_key(&self) -> Option<K> {
        self.list.min_key()
    }

    /// Returns the key of the largest value.
    #[inline]
    pub fn max_key(&self) -> Option<K> {
        self.list.max_key()
    }

    /// Removes and returns the smallest value, or `None` if empty. O(1).
    #[inline]
    pub fn pop_min(&mut self) -> Option<T> {
        self.list.pop_min(&mut self.storage)
    }

    /// Removes and returns the largest value, or `None` if empty. O(1).
    #[inline]
    pub fn pop_max(&mut self) -> Option<T> {
        self.list.pop_max(&mut self.storage)
    }

    /// Returns the value behind `key`.
    #[inline]
    pub fn get(&self, key: K) -> Option<&T> {
        self.list.get(&self.storage, key)
    }

    /// Removes the value behind `key`. O(1).
    #[inline]
    pub fn remove_key(&mut self, key: K) -> Option<T> {
        self.list.remove_key(&mut self.storage, key)
    }

    /// Drops every value and returns its slot to the free stack.
    ///
    /// O(len). Vacant slots are not touched, so clearing a nearly empty list
    /// is cheap whatever its capacity.
    pub fn clear(&mut self) {
        self.list.clear(&mut self.storage);
    }

    /// Returns an iterator over values, smallest first.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T, BoxedMinMaxStorage<T, K>, K> {
        self.list.iter(&self.storage)
    }

    /// Returns an iterator over keys, smallest value first.
    #[inline]
    pub fn keys(&self) -> Keys<'_, T, BoxedMinMaxStorage<T, K>, K> {
        self.list.keys(&self.storage)
    }

    /// Copies the values out in ascending order.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }
}

impl<T: Ord, K: Key> FixedMinMax<T, K> {
    /// Inserts `value` in sorted position and returns its key.
    ///
    /// # Errors
    ///
    /// Returns `Err(Full(value))` if every slot is taken.
    #[inline]
    pub fn try_insert(&mut self, value: T) -> Result<K, Full<T>> {
        self.list.try_insert(&mut self.storage, value)
    }

    /// Removes the earliest inserted value equal to `value`.
    #[inline]
    pub fn remove(&mut self, value: &T) -> bool {
        self.list.remove(&mut self.storage, value)
    }

    /// Returns `true` if some value equals `value`.
    #[inline]
    pub fn contains(&self, value: &T) -> bool {
        self.list.contains(&self.storage, value)
    }

    /// Returns the key of the earliest inserted value equal to `value`.
    #[inline]
    pub fn find(&self, value: &T) -> Option<K> {
        self.list.find(&self.storage, value)
    }
}

/// Slot count used by [`FixedMinMax::default`].
pub const DEFAULT_CAPACITY: usize = 16;

impl<T, K: Key> Default for FixedMinMax<T, K> {
    /// Creates an empty list with [`DEFAULT_CAPACITY`] slots.
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl<T: core::fmt::Debug, K: Key> core::fmt::Debug for FixedMinMax<T, K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a, T, K: Key> IntoIterator for &'a FixedMinMax<T, K> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T, BoxedMinMaxStorage<T, K>, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
