//! OwnedMinMax - a sorted min/max list that owns growable storage.

use crate::minmax::{Iter, Keys, MinMaxList, SlabMinMaxStorage};

/// A sorted doubly-linked list with O(1) min/max that owns its storage.
///
/// Wraps [`MinMaxList`] + `slab::Slab`. Storage grows as needed, so
/// insertion never fails. Keys are `usize` slab indices and stay valid until
/// their node is removed.
///
/// # Example
///
/// ```
/// use nexus_minmax::OwnedMinMax;
///
/// let mut list = OwnedMinMax::new();
/// for value in [5, 3, 8, 3] {
///     list.insert(value);
/// }
///
/// assert_eq!(list.to_vec(), vec![3, 3, 5, 8]);
/// assert_eq!(list.min(), Some(&3));
/// assert_eq!(list.max(), Some(&8));
///
/// assert_eq!(list.pop_min(), Some(3));
/// assert_eq!(list.pop_max(), Some(8));
/// assert!(list.remove(&3));
/// assert!(!list.remove(&99));
/// assert_eq!(list.to_vec(), vec![5]);
/// ```
pub struct OwnedMinMax<T> {
    storage: SlabMinMaxStorage<T>,
    list: MinMaxList<T, SlabMinMaxStorage<T>, usize>,
}

impl<T> OwnedMinMax<T> {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self {
            storage: slab::Slab::new(),
            list: MinMaxList::new(),
        }
    }

    /// Creates an empty list with room for `capacity` values before
    /// reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            storage: slab::Slab::with_capacity(capacity),
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
    pub fn min_key(&self) -> Option<usize> {
        self.list.min_key()
    }

    /// Returns the key of the largest value.
    #[inline]
    pub fn max_key(&self) -> Option<usize> {
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
    pub fn get(&self, key: usize) -> Option<&T> {
        self.list.get(&self.storage, key)
    }

    /// Removes the value behind `key`. O(1).
    #[inline]
    pub fn remove_key(&mut self, key: usize) -> Option<T> {
        self.list.remove_key(&mut self.storage, key)
    }

    /// Drops every value. O(len).
    ///
    /// Freed slots stay allocated for later inserts.
    pub fn clear(&mut self) {
        self.list.clear(&mut self.storage);
    }

    /// Returns an iterator over values, smallest first.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T, SlabMinMaxStorage<T>, usize> {
        self.list.iter(&self.storage)
    }

    /// Returns an iterator over keys, smallest value first.
    #[inline]
    pub fn keys(&self) -> Keys<'_, T, SlabMinMaxStorage<T>, usize> {
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

impl<T: Ord> OwnedMinMax<T> {
    /// Inserts `value` in sorted position and returns its key.
    ///
    /// Equal values go after the ones already present.
    #[inline]
    pub fn insert(&mut self, value: T) -> usize {
        self.list.insert(&mut self.storage, value)
    }

    /// Removes the earliest inserted value equal to `value`.
    ///
    /// Returns `false` if there is none.
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
    pub fn find(&self, value: &T) -> Option<usize> {
        self.list.find(&self.storage, value)
    }
}

impl<T> Default for OwnedMinMax<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: core::fmt::Debug> core::fmt::Debug for OwnedMinMax<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Ord> Extend<T> for OwnedMinMax<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T: Ord> FromIterator<T> for OwnedMinMax<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut list = Self::with_capacity(iter.size_hint().0);
        list.extend(iter);
        list
    }
}

impl<'a, T> IntoIterator for &'a OwnedMinMax<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T, SlabMinMaxStorage<T>, usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
