//! Key trait for storage slots.
//!
//! Nodes link to their neighbours by key rather than by pointer. A reserved
//! sentinel (`NONE`) marks a missing link, which keeps nodes the size of
//! the value plus two integers instead of two `Option<K>`s.

/// Integer handle into a storage slot, with a sentinel "no key" value.
///
/// # Example
///
/// ```
/// use nexus_minmax::Key;
///
/// let key: u32 = 7;
/// assert!(key.is_some());
/// assert!(u32::NONE.is_none());
/// assert_eq!(u32::from_usize(7), key);
/// ```
pub trait Key: Copy + Eq + core::fmt::Debug {
    /// Sentinel used for empty `prev`/`next` links and empty ends.
    const NONE: Self;

    /// Creates a key from a slot position.
    fn from_usize(val: usize) -> Self;

    /// Returns the slot position.
    fn as_usize(&self) -> usize;

    /// Returns `true` if this is the sentinel.
    #[inline]
    fn is_none(&self) -> bool {
        *self == Self::NONE
    }

    /// Returns `true` if this is a real slot key.
    #[inline]
    fn is_some(&self) -> bool {
        !self.is_none()
    }
}

macro_rules! impl_key_for_unsigned {
    ($($ty:ty),*) => {
        $(
            impl Key for $ty {
                const NONE: Self = <$ty>::MAX;

                #[inline]
                fn from_usize(val: usize) -> Self {
                    val as Self
                }

                #[inline]
                fn as_usize(&self) -> usize {
                    *self as usize
                }
            }
        )*
    };
}

impl_key_for_unsigned!(u16, u32, u64, usize);

/// Converts a sentinel-encoded key into an `Option`.
#[inline]
pub(crate) fn to_option<K: Key>(key: K) -> Option<K> {
    if key.is_none() { None } else { Some(key) }
}
