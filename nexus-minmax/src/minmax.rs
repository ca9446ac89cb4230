//! Sorted doubly-linked list with O(1) access to both ends.
//!
//! Values are kept in non-decreasing order from the low end (minimum) to the
//! high end (maximum). Reading or extracting either end is O(1); insertion
//! walks from the low end to find its slot, so it is O(n) in the worst case.
//!
//! ```text
//!  low                                   high
//!   │                                     │
//!   ▼                                     ▼
//!  [3] ◄──► [3] ◄──► [5] ◄──► [8]
//! ```
//!
//! Nodes live in external storage, same as the rest of this crate's
//! structures. The list only tracks the two ends and its length.
//!
//! # Storage Invariant
//!
//! A list instance must always be used with the same storage instance.
//! Passing a different storage is a logic error and may panic or corrupt the
//! list. Enforcing this is the caller's responsibility (same discipline as the
//! `slab` crate). The wrappers in [`owned`](crate::owned) bundle the two and
//! remove the hazard.
//!
//! The same goes for keys when several lists share one storage: a key handed
//! to [`MinMaxList::remove_key`] must belong to that list. Debug builds panic
//! when such a key is removed from an empty list; release builds do not check.
//!
//! # Duplicates
//!
//! Every insert creates its own node. Equal values stay in insertion order:
//! a new value goes after any existing equal values, and value-based removal
//! takes the earliest inserted one.
//!
//! # Example
//!
//! ```
//! use nexus_minmax::{BoxedMinMaxStorage, MinMaxList};
//!
//! let mut storage: BoxedMinMaxStorage<i64> = BoxedMinMaxStorage::with_capacity(16);
//! let mut list: MinMaxList<i64, BoxedMinMaxStorage<i64>> = MinMaxList::new();
//!
//! for value in [5, 3, 8, 3] {
//!     list.try_insert(&mut storage, value).unwrap();
//! }
//!
//! assert_eq!(list.iter(&storage).copied().collect::<Vec<_>>(), vec![3, 3, 5, 8]);
//! assert_eq!(list.min(&storage), Some(&3));
//! assert_eq!(list.max(&storage), Some(&8));
//!
//! assert_eq!(list.pop_min(&mut storage), Some(3));
//! assert_eq!(list.pop_max(&mut storage), Some(8));
//! assert!(list.remove(&mut storage, &3));
//! assert!(!list.remove(&mut storage, &99));
//! assert_eq!(list.iter(&storage).copied().collect::<Vec<_>>(), vec![5]);
//! ```

use core::iter::FusedIterator;
use core::marker::PhantomData;

use crate::key::to_option;
use crate::{BoundedStorage, BoxedStorage, Full, Key, Storage, UnboundedStorage};

/// Bounded storage for a [`MinMaxList`], backed by one boxed allocation.
pub type BoxedMinMaxStorage<T, K = u32> = BoxedStorage<MinMaxNode<T, K>, K>;

/// Unbounded storage for a [`MinMaxList`], backed by `slab::Slab`.
pub type SlabMinMaxStorage<T> = slab::Slab<MinMaxNode<T, usize>>;

/// A node in the list: the value plus links to its ordered neighbours.
///
/// `prev` points at the next-smaller-or-equal node, `next` at the
/// next-larger-or-equal node. Missing links are `K::NONE`.
#[derive(Debug)]
pub struct MinMaxNode<T, K: Key = u32> {
    pub(crate) value: T,
    pub(crate) prev: K,
    pub(crate) next: K,
}

impl<T, K: Key> MinMaxNode<T, K> {
    #[inline]
    fn new(value: T) -> Self {
        Self {
            value,
            prev: K::NONE,
            next: K::NONE,
        }
    }

    /// Returns the stored value.
    #[inline]
    pub fn value(&self) -> &T {
        &self.value
    }
}

/// A sorted doubly-linked list over external storage.
///
/// # Type Parameters
///
/// - `T`: Element type
/// - `S`: Storage type (e.g., [`BoxedMinMaxStorage<T>`])
/// - `K`: Key type (default `u32`)
#[derive(Debug)]
pub struct MinMaxList<T, S, K: Key = u32>
where
    S: Storage<MinMaxNode<T, K>, Key = K>,
{
    low: K,
    high: K,
    len: usize,
    _marker: PhantomData<(T, S)>,
}

impl<T, S, K: Key> Default for MinMaxList<T, S, K>
where
    S: Storage<MinMaxNode<T, K>, Key = K>,
{
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Base impl - ends, extraction, key-based access
// =============================================================================

impl<T, S, K: Key> MinMaxList<T, S, K>
where
    S: Storage<MinMaxNode<T, K>, Key = K>,
{
    /// Creates an empty list.
    #[inline]
    pub const fn new() -> Self {
        Self {
            low: K::NONE,
            high: K::NONE,
            len: 0,
            _marker: PhantomData,
        }
    }

    /// Returns the number of elements.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the key of the low end (minimum), or `None` if empty.
    #[inline]
    pub fn min_key(&self) -> Option<K> {
        to_option(self.low)
    }

    /// Returns the key of the high end (maximum), or `None` if empty.
    #[inline]
    pub fn max_key(&self) -> Option<K> {
        to_option(self.high)
    }

    /// Returns `true` if `key` is the low end.
    #[inline]
    pub fn is_min(&self, key: K) -> bool {
        key.is_some() && self.low == key
    }

    /// Returns `true` if `key` is the high end.
    #[inline]
    pub fn is_max(&self, key: K) -> bool {
        key.is_some() && self.high == key
    }

    /// Returns the smallest value, or `None` if empty. O(1).
    #[inline]
    pub fn min<'a>(&self, storage: &'a S) -> Option<&'a T>
    where
        T: 'a,
        K: 'a,
    {
        if self.low.is_none() {
            None
        } else {
            // Safety: low is occupied whenever it is not NONE
            Some(unsafe { &storage.get_unchecked(self.low).value })
        }
    }

    /// Returns the largest value, or `None` if empty. O(1).
    #[inline]
    pub fn max<'a>(&self, storage: &'a S) -> Option<&'a T>
    where
        T: 'a,
        K: 'a,
    {
        if self.high.is_none() {
            None
        } else {
            // Safety: high is occupied whenever it is not NONE
            Some(unsafe { &storage.get_unchecked(self.high).value })
        }
    }

    /// Removes and returns the smallest value, or `None` if empty. O(1).
    #[inline]
    pub fn pop_min(&mut self, storage: &mut S) -> Option<T> {
        if self.low.is_none() {
            return None;
        }

        let key = self.low;
        Some(self.unlink_and_remove(storage, key))
    }

    /// Removes and returns the largest value, or `None` if empty. O(1).
    #[inline]
    pub fn pop_max(&mut self, storage: &mut S) -> Option<T> {
        if self.high.is_none() {
            return None;
        }

        let key = self.high;
        Some(self.unlink_and_remove(storage, key))
    }

    /// Returns the value behind `key`.
    #[inline]
    pub fn get<'a>(&self, storage: &'a S, key: K) -> Option<&'a T>
    where
        T: 'a,
        K: 'a,
    {
        storage.get(key).map(|node| &node.value)
    }

    /// Removes the node behind `key` and returns its value. O(1).
    ///
    /// Returns `None` if the slot is vacant. The key must have come from this
    /// list; a key of another list sharing the storage corrupts both.
    #[inline]
    pub fn remove_key(&mut self, storage: &mut S, key: K) -> Option<T> {
        if storage.get(key).is_none() {
            return None;
        }

        Some(self.unlink_and_remove(storage, key))
    }

    /// Removes every element, releasing each node's storage slot. O(len).
    ///
    /// Slots that hold nodes of other lists are left alone.
    pub fn clear(&mut self, storage: &mut S) {
        let mut key = self.low;
        while key.is_some() {
            // Safety: key came from list traversal
            let next = unsafe { storage.get_unchecked(key) }.next;
            unsafe { storage.remove_unchecked(key) };
            key = next;
        }

        self.low = K::NONE;
        self.high = K::NONE;
        self.len = 0;
    }

    /// Returns an iterator over values, low end to high end.
    ///
    /// Call again for a fresh pass; `.rev()` walks high to low.
    #[inline]
    pub fn iter<'a>(&self, storage: &'a S) -> Iter<'a, T, S, K> {
        Iter {
            storage,
            front: self.low,
            back: self.high,
            remaining: self.len,
            _marker: PhantomData,
        }
    }

    /// Returns an iterator over node keys, low end to high end.
    #[inline]
    pub fn keys<'a>(&self, storage: &'a S) -> Keys<'a, T, S, K> {
        Keys {
            storage,
            front: self.low,
            back: self.high,
            remaining: self.len,
            _marker: PhantomData,
        }
    }

    // ========================================================================
    // Linking
    // ========================================================================

    /// Links an unlinked node directly before `before`, or at the high end
    /// when `before` is NONE.
    #[inline]
    fn link_before(&mut self, storage: &mut S, before: K, key: K) {
        if before.is_none() {
            self.link_back(storage, key);
            return;
        }

        // Safety: before came from list traversal, key was just inserted
        let prev = unsafe { storage.get_unchecked(before) }.prev;
        let node = unsafe { storage.get_unchecked_mut(key) };
        node.prev = prev;
        node.next = before;

        unsafe { storage.get_unchecked_mut(before) }.prev = key;

        if prev.is_some() {
            // Safety: prev is occupied when is_some() (list invariant)
            unsafe { storage.get_unchecked_mut(prev) }.next = key;
        } else {
            self.low = key;
        }

        self.len += 1;
    }

    #[inline]
    fn link_back(&mut self, storage: &mut S, key: K) {
        // Safety: key was just inserted
        let node = unsafe { storage.get_unchecked_mut(key) };
        node.prev = self.high;
        node.next = K::NONE;

        if self.high.is_some() {
            // Safety: high is occupied when is_some()
            unsafe { storage.get_unchecked_mut(self.high) }.next = key;
        } else {
            self.low = key;
        }

        self.high = key;
        self.len += 1;
    }

    /// Unlinks `key` from its neighbours and frees its slot.
    ///
    /// `key` must be a linked node of this list.
    #[inline]
    fn unlink_and_remove(&mut self, storage: &mut S, key: K) -> T {
        // Safety: caller guarantees key is a linked node
        let node = unsafe { storage.get_unchecked(key) };
        let prev = node.prev;
        let next = node.next;
        debug_assert!(self.len > 0, "unlinking a node from an empty list");

        if prev.is_some() {
            // Safety: prev is occupied when is_some() (list invariant)
            unsafe { storage.get_unchecked_mut(prev) }.next = next;
        } else {
            self.low = next;
        }

        if next.is_some() {
            // Safety: next is occupied when is_some() (list invariant)
            unsafe { storage.get_unchecked_mut(next) }.prev = prev;
        } else {
            self.high = prev;
        }

        self.len -= 1;
        // Safety: key validated by caller
        unsafe { storage.remove_unchecked(key) }.value
    }
}

// =============================================================================
// Ordered impl - search and value-based removal
// =============================================================================

impl<T: Ord, S, K: Key> MinMaxList<T, S, K>
where
    S: Storage<MinMaxNode<T, K>, Key = K>,
{
    /// First node, from the low end, whose value is strictly greater than
    /// `value`. NONE if there is none.
    #[inline]
    fn upper_bound(&self, storage: &S, value: &T) -> K {
        let mut key = self.low;
        while key.is_some() {
            // Safety: key came from list traversal
            let node = unsafe { storage.get_unchecked(key) };
            if node.value > *value {
                break;
            }
            key = node.next;
        }
        key
    }

    /// First node, from the low end, whose value is not less than `value`.
    /// NONE if there is none.
    #[inline]
    fn lower_bound(&self, storage: &S, value: &T) -> K {
        let mut key = self.low;
        while key.is_some() {
            // Safety: key came from list traversal
            let node = unsafe { storage.get_unchecked(key) };
            if node.value >= *value {
                break;
            }
            key = node.next;
        }
        key
    }

    /// Returns the key of the earliest inserted node equal to `value`. O(n).
    ///
    /// The scan stops at the first larger value.
    pub fn find(&self, storage: &S, value: &T) -> Option<K> {
        let key = self.lower_bound(storage, value);
        if key.is_none() {
            return None;
        }

        // Safety: lower_bound only returns linked keys
        let node = unsafe { storage.get_unchecked(key) };
        if node.value == *value { Some(key) } else { None }
    }

    /// Returns `true` if some node equals `value`. O(n).
    #[inline]
    pub fn contains(&self, storage: &S, value: &T) -> bool {
        self.find(storage, value).is_some()
    }

    /// Removes the earliest inserted node equal to `value`. O(n).
    ///
    /// Returns `false`, leaving the list untouched, if no node matches.
    pub fn remove(&mut self, storage: &mut S, value: &T) -> bool {
        match self.find(storage, value) {
            Some(key) => {
                self.unlink_and_remove(storage, key);
                true
            }
            None => false,
        }
    }
}

// =============================================================================
// Bounded storage impl - fallible insertion
// =============================================================================

impl<T: Ord, S, K: Key> MinMaxList<T, S, K>
where
    S: BoundedStorage<MinMaxNode<T, K>, Key = K>,
{
    /// Inserts `value` in sorted position and returns its key.
    ///
    /// Equal values are placed after the ones already present. O(n) worst
    /// case, O(1) into an empty list.
    ///
    /// # Errors
    ///
    /// Returns `Err(Full(value))` if storage is full. The list is unchanged.
    #[inline]
    pub fn try_insert(&mut self, storage: &mut S, value: T) -> Result<K, Full<T>> {
        let before = self.upper_bound(storage, &value);
        let key = storage
            .try_insert(MinMaxNode::new(value))
            .map_err(|e| Full(e.0.value))?;
        self.link_before(storage, before, key);
        Ok(key)
    }
}

// =============================================================================
// Unbounded storage impl - infallible insertion
// =============================================================================

impl<T: Ord, S, K: Key> MinMaxList<T, S, K>
where
    S: UnboundedStorage<MinMaxNode<T, K>, Key = K>,
{
    /// Inserts `value` in sorted position and returns its key.
    ///
    /// Equal values are placed after the ones already present. O(n) worst
    /// case, O(1) into an empty list.
    #[inline]
    pub fn insert(&mut self, storage: &mut S, value: T) -> K {
        let before = self.upper_bound(storage, &value);
        let key = storage.insert(MinMaxNode::new(value));
        self.link_before(storage, before, key);
        key
    }
}

// =============================================================================
// Iterators
// =============================================================================

/// Iterator over values, low end to high end.
pub struct Iter<'a, T, S, K: Key> {
    storage: &'a S,
    front: K,
    back: K,
    remaining: usize,
    _marker: PhantomData<T>,
}

impl<T, S, K: Key> Clone for Iter<'_, T, S, K> {
    fn clone(&self) -> Self {
        Self {
            storage: self.storage,
            front: self.front,
            back: self.back,
            remaining: self.remaining,
            _marker: PhantomData,
        }
    }
}

impl<'a, T: 'a, S, K: Key + 'a> Iterator for Iter<'a, T, S, K>
where
    S: Storage<MinMaxNode<T, K>, Key = K>,
{
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        // Safety: remaining > 0 means front is a linked node
        let node = unsafe { self.storage.get_unchecked(self.front) };
        self.front = node.next;
        self.remaining -= 1;

        Some(&node.value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T: 'a, S, K: Key + 'a> DoubleEndedIterator for Iter<'a, T, S, K>
where
    S: Storage<MinMaxNode<T, K>, Key = K>,
{
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        // Safety: remaining > 0 means back is a linked node
        let node = unsafe { self.storage.get_unchecked(self.back) };
        self.back = node.prev;
        self.remaining -= 1;

        Some(&node.value)
    }
}

impl<'a, T: 'a, S, K: Key + 'a> ExactSizeIterator for Iter<'a, T, S, K> where
    S: Storage<MinMaxNode<T, K>, Key = K>
{
}

impl<'a, T: 'a, S, K: Key + 'a> FusedIterator for Iter<'a, T, S, K> where
    S: Storage<MinMaxNode<T, K>, Key = K>
{
}

/// Iterator over node keys, low end to high end.
pub struct Keys<'a, T, S, K: Key> {
    storage: &'a S,
    front: K,
    back: K,
    remaining: usize,
    _marker: PhantomData<T>,
}

impl<T, S, K: Key> Iterator for Keys<'_, T, S, K>
where
    S: Storage<MinMaxNode<T, K>, Key = K>,
{
    type Item = K;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let key = self.front;
        // Safety: remaining > 0 means front is a linked node
        self.front = unsafe { self.storage.get_unchecked(key) }.next;
        self.remaining -= 1;

        Some(key)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T, S, K: Key> DoubleEndedIterator for Keys<'_, T, S, K>
where
    S: Storage<MinMaxNode<T, K>, Key = K>,
{
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let key = self.back;
        // Safety: remaining > 0 means back is a linked node
        self.back = unsafe { self.storage.get_unchecked(key) }.prev;
        self.remaining -= 1;

        Some(key)
    }
}

impl<T, S, K: Key> ExactSizeIterator for Keys<'_, T, S, K> where
    S: Storage<MinMaxNode<T, K>, Key = K>
{
}
