//! # InlineFn: Callables Without Heap Allocation
//!
//! [`InlineFn`] is a type-erased callable, similar to `Box<dyn FnMut>`, that
//! stores the closure inline in a fixed-size buffer instead of on the heap.
//! Most closures capture a handful of scalars or references, so they fit in a
//! few dozen bytes and never need an allocation.
//!
//! ## Core Concept
//!
//! An [`InlineFn<'a, S, N>`](InlineFn) holds any cloneable callable, valid
//! for `'a`, matching the signature `S` in `N` bytes of storage (40 by default) aligned
//! to [`space::MAX_ALIGN`]. A callable that does not fit is a build error, never
//! a silent fallback to the heap.
//!
//! The box behaves like a value: it can be cloned, moved, reassigned and
//! emptied.
//!
//! ## Quick Start
//!
//! ```rust
//! use inline_fn::InlineFn;
//!
//! let (a, b, c) = (1, 4, 5);
//! let mut f: InlineFn<fn(i32) -> i32> = InlineFn::new(move |x: i32| a + b + c + x);
//! assert_eq!(f.call(5), Ok(15));
//!
//! // Copies are independent.
//! let mut g = f.clone();
//! drop(f);
//! assert_eq!(g.call(1), Ok(11));
//! ```
//!
//! ## Signatures
//!
//! The signature is spelled as a function pointer type, `fn(A, B) -> R`,
//! with up to eight arguments. See [`signature`].
//!
//! ## Capacity
//!
//! The capacity is a const generic parameter:
//!
//! ```rust
//! use inline_fn::InlineFn;
//!
//! let table = [1u64; 8];
//! let mut sum: InlineFn<fn() -> u64, 64> = InlineFn::new(move || table.iter().sum::<u64>());
//! assert_eq!(sum.call(), Ok(8));
//! ```
//!
//! The same closure does not fit the default capacity and fails to compile:
//!
//! ```compile_fail
//! use inline_fn::InlineFn;
//!
//! let table = [1u64; 8];
//! let sum: InlineFn<fn() -> u64> = InlineFn::new(move || table.iter().sum::<u64>());
//! ```
//!
//! ## Empty Boxes
//!
//! Moving out of a box with [`InlineFn::take`] or emptying it with
//! [`InlineFn::clear`] leaves it empty. Calling an empty box returns
//! [`Error::Empty`]:
//!
//! ```rust
//! use inline_fn::{Error, InlineFn};
//!
//! let mut f: InlineFn<fn() -> &'static str> = InlineFn::new(|| "hello");
//! let mut g = f.take();
//!
//! assert!(f.is_empty());
//! assert_eq!(f.call(), Err(Error::Empty));
//! assert_eq!(g.call(), Ok("hello"));
//! ```
//!
//! ## Feature Flags
//!
//! - **`std`** (enabled by default)
//!   - Links to the standard library
//!   - Disable for `#![no_std]` environments: `default-features = false`
//!
//! - **`nightly`** (optional, requires nightly)
//!   - Uses the pointer metadata API instead of the layout-checked fallback
//!
//! ## Thread Safety
//!
//! An [`InlineFn`] is neither `Send` nor `Sync`.

#![cfg_attr(feature = "nightly", feature(set_ptr_value))]
#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![deny(missing_docs)]
#![deny(clippy::as_conversions)]

mod callable;
mod error;
mod inline_fn;
pub mod signature;
pub mod space;
mod sptr;

pub use crate::error::Error;
pub use crate::inline_fn::InlineFn;
pub use crate::signature::{Callable, Signature};
