//! Convenience wrappers that own their storage.
//!
//! The types in this module combine a [`MinMaxList`](crate::MinMaxList) with
//! its backing storage, so callers never pass `&mut storage` and can never
//! mix up storage instances.
//!
//! # Which one
//!
//! - [`OwnedMinMax`] grows on demand (`slab::Slab`). Insertion is infallible.
//! - [`FixedMinMax`] allocates its slots once, up front. Insertion returns
//!   `Err(Full(value))` when every slot is taken.
//!
//! Use the raw [`MinMaxList`](crate::MinMaxList) when several lists should
//! share one storage pool.
//!
//! # Example
//!
//! ```
//! use nexus_minmax::{FixedMinMax, OwnedMinMax};
//!
//! let mut growable: OwnedMinMax<i32> = [5, 3, 8, 3].into_iter().collect();
//! assert_eq!(growable.to_vec(), vec![3, 3, 5, 8]);
//! assert_eq!(growable.pop_min(), Some(3));
//!
//! let mut fixed: FixedMinMax<i32> = FixedMinMax::with_capacity(2);
//! fixed.try_insert(1).unwrap();
//! fixed.try_insert(2).unwrap();
//! assert!(fixed.try_insert(3).is_err());
//! ```

mod fixed;
mod growable;

pub use fixed::{DEFAULT_CAPACITY, FixedMinMax};
pub use growable::OwnedMinMax;
