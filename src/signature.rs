//! Call signatures.
//!
//! A signature is spelled as a function pointer type: `fn(i32, i32) -> i32`
//! describes callables taking two `i32` and returning an `i32`. Signatures
//! with up to eight arguments are supported.
//!
//! Closure parameter types are not inferred from a signature, so closures
//! handed to [`InlineFn`] annotate them: `|x: i32| x + 1`.
//!
//! Function pointer types with elided reference lifetimes are higher-ranked
//! and are not signatures; spell such lifetimes out, e.g.
//! `fn(&'static str) -> usize`.

use crate::{Error, InlineFn};

/// A compile-time call contract `(Args) -> Output`.
pub trait Signature {
    /// The arguments, as a tuple.
    type Args;
    /// The returned value.
    type Output;
}

/// A value that can be called with the signature `S`.
///
/// Implemented for every cloneable closure or function whose `FnMut`
/// signature matches `S`. Closures may capture borrows.
pub trait Callable<S: Signature>: Clone {
    /// Calls `self` with the unpacked `args`.
    fn call_with(&mut self, args: S::Args) -> S::Output;
}

macro_rules! impl_signature {
    ($($arg:ident: $ty:ident),*) => {
        impl<R, $($ty,)*> Signature for fn($($ty),*) -> R {
            type Args = ($($ty,)*);
            type Output = R;
        }

        impl<F, R, $($ty,)*> Callable<fn($($ty),*) -> R> for F
        where
            F: FnMut($($ty),*) -> R + Clone,
        {
            #[inline]
            fn call_with(&mut self, ($($arg,)*): ($($ty,)*)) -> R {
                (*self)($($arg),*)
            }
        }

        impl<'a, R, $($ty,)* const N: usize> InlineFn<'a, fn($($ty),*) -> R, N> {
            /// Calls the stored callable with the given arguments.
            ///
            /// Returns [`Error::Empty`] when the box holds no callable.
            #[inline]
            pub fn call(&mut self, $($arg: $ty),*) -> Result<R, Error> {
                self.invoke(($($arg,)*))
            }
        }
    };
}

impl_signature!();
impl_signature!(a: A);
impl_signature!(a: A, b: B);
impl_signature!(a: A, b: B, c: C);
impl_signature!(a: A, b: B, c: C, d: D);
impl_signature!(a: A, b: B, c: C, d: D, e: E);
impl_signature!(a: A, b: B, c: C, d: D, e: E, f: G);
impl_signature!(a: A, b: B, c: C, d: D, e: E, f: G, g: H);
impl_signature!(a: A, b: B, c: C, d: D, e: E, f: G, g: H, h: I);

#[cfg(test)]
mod tests {
    use super::*;

    fn call<S: Signature, F: Callable<S>>(mut f: F, args: S::Args) -> S::Output {
        f.call_with(args)
    }

    #[test]
    fn test_unpack() {
        assert_eq!(call::<fn() -> u8, _>(|| 3u8, ()), 3);
        assert_eq!(call::<fn(u8) -> u8, _>(|a: u8| a * 2, (4,)), 8);
        assert_eq!(call::<fn(u8, u8, u8) -> u8, _>(|a: u8, b: u8, c: u8| a + b + c, (1, 2, 3)), 6);
    }

    #[test]
    fn test_fn_item() {
        fn double(x: i64) -> i64 {
            x * 2
        }
        assert_eq!(call::<fn(i64) -> i64, _>(double, (21,)), 42);
    }

    #[test]
    fn test_borrowed() {
        let words = ["a", "bb", "ccc"];
        let words = &words;
        assert_eq!(call::<fn(usize) -> usize, _>(move |i: usize| words[i].len(), (2,)), 3);
    }

    #[test]
    fn test_state_is_kept() {
        let mut total = 0u32;
        let mut acc = move |x: u32| {
            total += x;
            total
        };
        assert_eq!(Callable::<fn(u32) -> u32>::call_with(&mut acc, (2,)), 2);
        assert_eq!(Callable::<fn(u32) -> u32>::call_with(&mut acc, (3,)), 5);
    }
}
