//! Slab-like storage with stable keys.
//!
//! Storage owns the nodes of a [`MinMaxList`](crate::MinMaxList). A key
//! returned by insertion stays valid until that slot is removed, after which
//! the slot goes back on a free list and is handed out again.
//!
//! ```text
//! Storage<T>               - get, remove, len
//!     │
//!     ├── BoundedStorage<T>    - fixed capacity, try_insert -> Result
//!     │
//!     └── UnboundedStorage<T>  - growable, insert -> Key
//! ```

use crate::Key;

/// Slab-like storage with stable keys.
///
/// # Requirements
///
/// - **Stable keys**: a key remains valid until explicitly removed
/// - **O(1)** insert, remove, get
/// - **Slot reuse**: removed slots are reused by later inserts
///
/// # Implementations
///
/// - [`BoxedStorage<T, K>`] - fixed capacity chosen at runtime
/// - `slab::Slab<T>` - growable, keyed by `usize`
pub trait Storage<T> {
    /// Key type handed out by this storage.
    type Key: Key;

    /// Removes and returns the value at `key`, if occupied.
    fn remove(&mut self, key: Self::Key) -> Option<T>;

    /// Returns a reference to the value at `key`, if occupied.
    fn get(&self, key: Self::Key) -> Option<&T>;

    /// Returns a mutable reference to the value at `key`, if occupied.
    fn get_mut(&mut self, key: Self::Key) -> Option<&mut T>;

    /// Returns the number of occupied slots.
    fn len(&self) -> usize;

    /// Returns `true` if no slots are occupied.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns a reference without checking occupancy.
    ///
    /// # Safety
    ///
    /// `key` must be in bounds and occupied.
    unsafe fn get_unchecked(&self, key: Self::Key) -> &T;

    /// Returns a mutable reference without checking occupancy.
    ///
    /// # Safety
    ///
    /// `key` must be in bounds and occupied.
    unsafe fn get_unchecked_mut(&mut self, key: Self::Key) -> &mut T;

    /// Removes a value without checking occupancy.
    ///
    /// # Safety
    ///
    /// `key` must be in bounds and occupied.
    unsafe fn remove_unchecked(&mut self, key: Self::Key) -> T;
}

/// Storage with a fixed number of slots.
pub trait BoundedStorage<T>: Storage<T> {
    /// Inserts a value, returning its key.
    ///
    /// # Errors
    ///
    /// Returns `Err(Full(value))` when every slot is occupied.
    fn try_insert(&mut self, value: T) -> Result<Self::Key, Full<T>>;

    /// Returns the total number of slots.
    fn capacity(&self) -> usize;
}

/// Storage that grows on demand.
pub trait UnboundedStorage<T>: Storage<T> {
    /// Inserts a value, returning its key.
    fn insert(&mut self, value: T) -> Self::Key;
}

/// Error returned when fixed-capacity storage is full.
///
/// Hands the rejected value back to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Full<T>(pub T);

impl<T> Full<T> {
    /// Returns the value that could not be inserted.
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> core::fmt::Display for Full<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "storage is full")
    }
}

impl<T: core::fmt::Debug> std::error::Error for Full<T> {}

// =============================================================================
// BoxedStorage - runtime capacity, one slot slice, LIFO free stack
// =============================================================================

/// Fixed-capacity storage with runtime-determined size.
///
/// Slots live in a single boxed slice allocated up front; vacant slot keys
/// sit on a free stack. Nothing allocates after construction.
///
/// # Example
///
/// ```
/// use nexus_minmax::{BoundedStorage, BoxedStorage, Storage};
///
/// let mut storage: BoxedStorage<u64> = BoxedStorage::with_capacity(4);
///
/// let key = storage.try_insert(42).unwrap();
/// assert_eq!(storage.get(key), Some(&42));
/// assert_eq!(storage.remove(key), Some(42));
/// assert!(storage.is_empty());
/// ```
pub struct BoxedStorage<T, K: Key = u32> {
    slots: Box<[Option<T>]>,
    free: Vec<K>,
}

impl<T, K: Key> BoxedStorage<T, K> {
    /// Creates storage with exactly `capacity` slots.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is 0 or does not fit below the key type's sentinel.
    pub fn with_capacity(capacity: usize) -> Self {
        assert!(capacity > 0, "capacity must be > 0");
        assert!(
            capacity <= K::NONE.as_usize(),
            "capacity exceeds key type maximum"
        );

        let slots = (0..capacity).map(|_| None).collect();
        // Reversed so the first insert takes slot 0.
        let free = (0..capacity).rev().map(K::from_usize).collect();

        Self { slots, free }
    }

    /// Returns the number of slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if every slot is occupied.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.free.is_empty()
    }

    /// Drops every stored value and returns all slots to the free stack.
    ///
    /// Any list still holding keys into this storage must be dropped first.
    pub fn clear(&mut self) {
        for slot in self.slots.iter_mut() {
            *slot = None;
        }
        self.free.clear();
        self.free.extend((0..self.slots.len()).rev().map(K::from_usize));
    }
}

impl<T, K: Key> Storage<T> for BoxedStorage<T, K> {
    type Key = K;

    #[inline]
    fn remove(&mut self, key: K) -> Option<T> {
        let value = self.slots.get_mut(key.as_usize())?.take()?;
        self.free.push(key);
        Some(value)
    }

    #[inline]
    fn get(&self, key: K) -> Option<&T> {
        self.slots.get(key.as_usize())?.as_ref()
    }

    #[inline]
    fn get_mut(&mut self, key: K) -> Option<&mut T> {
        self.slots.get_mut(key.as_usize())?.as_mut()
    }

    #[inline]
    fn len(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    #[inline]
    unsafe fn get_unchecked(&self, key: K) -> &T {
        unsafe {
            self.slots
                .get_unchecked(key.as_usize())
                .as_ref()
                .unwrap_unchecked()
        }
    }

    #[inline]
    unsafe fn get_unchecked_mut(&mut self, key: K) -> &mut T {
        unsafe {
            self.slots
                .get_unchecked_mut(key.as_usize())
                .as_mut()
                .unwrap_unchecked()
        }
    }

    #[inline]
    unsafe fn remove_unchecked(&mut self, key: K) -> T {
        let value = unsafe {
            self.slots
                .get_unchecked_mut(key.as_usize())
                .take()
                .unwrap_unchecked()
        };
        self.free.push(key);
        value
    }
}

impl<T, K: Key> BoundedStorage<T> for BoxedStorage<T, K> {
    #[inline]
    fn try_insert(&mut self, value: T) -> Result<K, Full<T>> {
        let Some(key) = self.free.pop() else {
            return Err(Full(value));
        };
        self.slots[key.as_usize()] = Some(value);
        Ok(key)
    }

    #[inline]
    fn capacity(&self) -> usize {
        self.slots.len()
    }
}

impl<T: core::fmt::Debug, K: Key> core::fmt::Debug for BoxedStorage<T, K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("BoxedStorage")
            .field("len", &Storage::len(self))
            .field("capacity", &self.slots.len())
            .finish()
    }
}

// =============================================================================
// slab::Slab implementation
// =============================================================================

impl<T> Storage<T> for slab::Slab<T> {
    type Key = usize;

    #[inline]
    fn remove(&mut self, key: usize) -> Option<T> {
        self.try_remove(key)
    }

    #[inline]
    fn get(&self, key: usize) -> Option<&T> {
        slab::Slab::get(self, key)
    }

    #[inline]
    fn get_mut(&mut self, key: usize) -> Option<&mut T> {
        slab::Slab::get_mut(self, key)
    }

    #[inline]
    fn len(&self) -> usize {
        slab::Slab::len(self)
    }

    #[inline]
    unsafe fn get_unchecked(&self, key: usize) -> &T {
        unsafe { slab::Slab::get_unchecked(self, key) }
    }

    #[inline]
    unsafe fn get_unchecked_mut(&mut self, key: usize) -> &mut T {
        unsafe { slab::Slab::get_unchecked_mut(self, key) }
    }

    #[inline]
    unsafe fn remove_unchecked(&mut self, key: usize) -> T {
        // slab checks occupancy itself
        slab::Slab::remove(self, key)
    }
}

impl<T> UnboundedStorage<T> for slab::Slab<T> {
    #[inline]
    fn insert(&mut self, value: T) -> usize {
        slab::Slab::insert(self, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_is_empty() {
        let storage: BoxedStorage<u64> = BoxedStorage::with_capacity(16);
        assert!(storage.is_empty());
        assert!(!storage.is_full());
        assert_eq!(storage.len(), 0);
        assert_eq!(storage.capacity(), 16);
    }

    #[test]
    fn capacity_is_exact() {
        let storage: BoxedStorage<u64> = BoxedStorage::with_capacity(100);
        assert_eq!(storage.capacity(), 100);
    }

    #[test]
    #[should_panic(expected = "capacity must be > 0")]
    fn zero_capacity_panics() {
        let _storage: BoxedStorage<u64> = BoxedStorage::with_capacity(0);
    }

    #[test]
    #[should_panic(expected = "capacity exceeds key type maximum")]
    fn capacity_beyond_sentinel_panics() {
        let _storage: BoxedStorage<u8, u16> = BoxedStorage::with_capacity(u16::MAX as usize + 1);
    }

    #[test]
    fn insert_get_remove() {
        let mut storage: BoxedStorage<u64> = BoxedStorage::with_capacity(16);

        let key = storage.try_insert(42).unwrap();
        assert_eq!(key, 0);
        assert_eq!(storage.len(), 1);
        assert_eq!(storage.get(key), Some(&42));

        assert_eq!(storage.remove(key), Some(42));
        assert_eq!(storage.get(key), None);
        assert_eq!(storage.len(), 0);
    }

    #[test]
    fn get_mut() {
        let mut storage: BoxedStorage<u64> = BoxedStorage::with_capacity(16);

        let key = storage.try_insert(10).unwrap();
        *storage.get_mut(key).unwrap() = 20;

        assert_eq!(storage.get(key), Some(&20));
    }

    #[test]
    fn fill_to_capacity() {
        let mut storage: BoxedStorage<u64> = BoxedStorage::with_capacity(3);

        let k0 = storage.try_insert(0).unwrap();
        let k1 = storage.try_insert(1).unwrap();
        let k2 = storage.try_insert(2).unwrap();
        assert!(storage.is_full());

        let err = storage.try_insert(3);
        assert_eq!(err, Err(Full(3)));
        assert_eq!(err.unwrap_err().into_inner(), 3);

        assert_eq!(storage.get(k0), Some(&0));
        assert_eq!(storage.get(k1), Some(&1));
        assert_eq!(storage.get(k2), Some(&2));
    }

    #[test]
    fn slot_reuse_is_lifo() {
        let mut storage: BoxedStorage<u64> = BoxedStorage::with_capacity(4);

        let k0 = storage.try_insert(0).unwrap();
        let _k1 = storage.try_insert(1).unwrap();

        storage.remove(k0);

        let k2 = storage.try_insert(2).unwrap();
        assert_eq!(k2, k0);
    }

    #[test]
    fn remove_vacant_and_out_of_bounds() {
        let mut storage: BoxedStorage<u64> = BoxedStorage::with_capacity(4);

        let key = storage.try_insert(42).unwrap();
        storage.remove(key);

        assert_eq!(storage.remove(key), None);
        assert_eq!(storage.remove(100), None);
        assert_eq!(storage.get(u32::NONE), None);
        assert_eq!(storage.len(), 0);
    }

    #[test]
    fn clear_frees_every_slot() {
        let mut storage: BoxedStorage<u64> = BoxedStorage::with_capacity(2);
        storage.try_insert(1).unwrap();
        storage.try_insert(2).unwrap();
        assert!(storage.is_full());

        storage.clear();
        assert!(storage.is_empty());
        assert_eq!(storage.try_insert(3), Ok(0));
        assert_eq!(storage.try_insert(4), Ok(1));
    }

    #[test]
    fn drop_cleans_up() {
        use std::sync::atomic::{AtomicUsize, Ordering};

        static DROP_COUNT: AtomicUsize = AtomicUsize::new(0);

        #[derive(Debug)]
        struct DropCounter;
        impl Drop for DropCounter {
            fn drop(&mut self) {
                DROP_COUNT.fetch_add(1, Ordering::SeqCst);
            }
        }

        DROP_COUNT.store(0, Ordering::SeqCst);

        {
            let mut storage: BoxedStorage<DropCounter> = BoxedStorage::with_capacity(8);
            storage.try_insert(DropCounter).unwrap();
            storage.try_insert(DropCounter).unwrap();
            storage.try_insert(DropCounter).unwrap();
        }

        assert_eq!(DROP_COUNT.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn unchecked_access() {
        let mut storage: BoxedStorage<u64, u16> = BoxedStorage::with_capacity(4);
        let key = storage.try_insert(5).unwrap();

        unsafe {
            assert_eq!(*storage.get_unchecked(key), 5);
            *storage.get_unchecked_mut(key) = 6;
            assert_eq!(storage.remove_unchecked(key), 6);
        }
        assert!(storage.is_empty());
    }

    mod slab_tests {
        use super::*;

        #[test]
        fn insert_get_remove() {
            let mut storage = slab::Slab::new();

            let key = UnboundedStorage::insert(&mut storage, 42u64);
            assert_eq!(Storage::get(&storage, key), Some(&42));

            assert_eq!(Storage::remove(&mut storage, key), Some(42));
            assert_eq!(Storage::remove(&mut storage, key), None);
            assert_eq!(Storage::len(&storage), 0);
        }

        #[test]
        fn slot_reuse() {
            let mut storage = slab::Slab::new();

            let k1 = UnboundedStorage::insert(&mut storage, 1u64);
            Storage::remove(&mut storage, k1);

            let k2 = UnboundedStorage::insert(&mut storage, 2u64);
            assert_eq!(k1, k2);
        }
    }
}
