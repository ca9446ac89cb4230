//! Sorted list with O(1) min and max, built on slab-style storage.
//!
//! [`MinMaxList`] keeps its values in non-decreasing order as a doubly-linked
//! list whose nodes live in an arena addressed by stable integer keys. The
//! two ends of the list are the minimum and the maximum, so reading or
//! extracting either one is O(1).
//!
//! | Operation | Cost | Absent result |
//! |-----------|------|---------------|
//! | `insert` / `try_insert` | O(n) worst, O(1) into empty | - |
//! | `min` / `max` | O(1) | `None` |
//! | `pop_min` / `pop_max` | O(1) | `None` |
//! | `remove(&value)` | O(n) | `false` |
//! | `remove_key(key)` | O(1) | `None` |
//! | `clear` | O(len), vacant slots untouched | - |
//! | `iter` | O(n), restartable, double-ended | empty |
//!
//! # Quick Start
//!
//! ```
//! use nexus_minmax::OwnedMinMax;
//!
//! let mut list = OwnedMinMax::new();
//! list.insert(5);
//! list.insert(3);
//! list.insert(8);
//! list.insert(3);
//!
//! assert_eq!(list.to_vec(), vec![3, 3, 5, 8]);
//! assert_eq!(list.min(), Some(&3));
//! assert_eq!(list.max(), Some(&8));
//! assert_eq!(list.pop_min(), Some(3));
//! ```
//!
//! # Storage
//!
//! The raw [`MinMaxList`] does not own its nodes. They live in a
//! [`Storage`] which hands out keys:
//!
//! ```text
//! Storage (arena)  - owns nodes, provides stable keys, reuses freed slots
//! MinMaxList       - links keys in sorted order, tracks low and high ends
//! ```
//!
//! Storage is split into bounded and unbounded variants:
//!
//! - [`BoundedStorage`] ([`BoxedStorage`]) - `try_insert -> Result<K, Full<T>>`
//! - [`UnboundedStorage`] (`slab::Slab`) - `insert -> K`, infallible
//!
//! Several lists may share one storage pool. Every call on a list must use
//! the storage that list was filled from.
//!
//! ```
//! use nexus_minmax::{BoxedMinMaxStorage, MinMaxList};
//!
//! let mut storage: BoxedMinMaxStorage<u64> = BoxedMinMaxStorage::with_capacity(64);
//! let mut bids: MinMaxList<u64, BoxedMinMaxStorage<u64>> = MinMaxList::new();
//! let mut asks: MinMaxList<u64, BoxedMinMaxStorage<u64>> = MinMaxList::new();
//!
//! bids.try_insert(&mut storage, 99).unwrap();
//! bids.try_insert(&mut storage, 100).unwrap();
//! asks.try_insert(&mut storage, 102).unwrap();
//! asks.try_insert(&mut storage, 101).unwrap();
//!
//! assert_eq!(bids.max(&storage), Some(&100));
//! assert_eq!(asks.min(&storage), Some(&101));
//! ```
//!
//! The [`owned`] wrappers bundle a list with its own storage and are the
//! simplest way in.
//!
//! # Ordering
//!
//! Values must be `Ord`. Floats need a total-order wrapper. Equal values keep
//! insertion order: later inserts sit after earlier ones, and
//! `remove(&value)` takes the earliest.
//!
//! # Threading
//!
//! Nothing here synchronizes. Mutation takes `&mut self`; to share a list
//! across threads, put it behind a `Mutex` at the boundary.

#![warn(missing_docs)]

pub mod key;
pub mod minmax;
pub mod owned;
pub mod storage;

pub use key::Key;
pub use minmax::{BoxedMinMaxStorage, MinMaxList, MinMaxNode, SlabMinMaxStorage};
pub use owned::{FixedMinMax, OwnedMinMax};
pub use storage::{BoundedStorage, BoxedStorage, Full, Storage, UnboundedStorage};
