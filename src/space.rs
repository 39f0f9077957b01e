//! Inline storage for [`InlineFn`](crate::InlineFn).
//!
//! The capacity of a box is a const generic parameter. Every buffer is aligned
//! to [`MAX_ALIGN`] regardless of its capacity, so a callable fits when its
//! size is at most the capacity and its alignment at most [`MAX_ALIGN`].
//!
//! ```
//! use inline_fn::InlineFn;
//! use inline_fn::space::DEFAULT_CAPACITY;
//!
//! let f: InlineFn<fn() -> u8> = InlineFn::new(|| 1);
//! assert_eq!(f.capacity(), DEFAULT_CAPACITY);
//!
//! let g: InlineFn<fn() -> u8, 128> = InlineFn::new(|| 2);
//! assert_eq!(g.capacity(), 128);
//! ```

use core::mem::MaybeUninit;

/// Capacity in bytes used when none is given.
pub const DEFAULT_CAPACITY: usize = 40;

/// Alignment of every inline buffer, the largest fundamental alignment on
/// mainstream 64-bit targets.
pub const MAX_ALIGN: usize = 16;

/// `N` bytes of uninitialized storage aligned to [`MAX_ALIGN`].
///
/// The space never drops what it holds.
#[repr(C, align(16))]
pub(crate) struct Space<const N: usize> {
    bytes: [MaybeUninit<u8>; N],
}

const _: () = assert!(core::mem::align_of::<Space<0>>() == MAX_ALIGN);

impl<const N: usize> Space<N> {
    pub(crate) const fn uninit() -> Self {
        Space {
            bytes: [MaybeUninit::uninit(); N],
        }
    }

    pub(crate) fn as_ptr(&self) -> *const u8 {
        self.bytes.as_ptr().cast()
    }

    pub(crate) fn as_mut_ptr(&mut self) -> *mut u8 {
        self.bytes.as_mut_ptr().cast()
    }
}
