use crate::signature::{Callable, Signature};

/// Object-safe interface to a callable of signature `S` held in a buffer.
///
/// Destruction goes through the trait object's drop glue, so dropping a
/// `*mut dyn Invoke<S>` in place runs the concrete callable's destructor.
pub(crate) trait Invoke<S: Signature> {
    fn invoke(&mut self, args: S::Args) -> S::Output;

    /// Writes a clone of `self` to `dst`.
    ///
    /// # Safety
    ///
    /// `dst` must be valid for writes of `size_of_val(self)` bytes and aligned
    /// to `align_of_val(self)`. The caller owns the written value.
    unsafe fn clone_to(&self, dst: *mut u8);
}

/// Wraps a concrete callable behind [`Invoke`].
#[repr(transparent)]
pub(crate) struct Adapter<F>(pub(crate) F);

impl<S: Signature, F: Callable<S>> Invoke<S> for Adapter<F> {
    #[inline]
    fn invoke(&mut self, args: S::Args) -> S::Output {
        self.0.call_with(args)
    }

    unsafe fn clone_to(&self, dst: *mut u8) {
        dst.cast::<Self>().write(Adapter(self.0.clone()))
    }
}
