use core::any;
use core::fmt;
use core::marker::PhantomData;
use core::mem;
use core::ptr;

use log::trace;

use crate::callable::{Adapter, Invoke};
use crate::error::Error;
use crate::signature::{Callable, Signature};
use crate::space::{Space, DEFAULT_CAPACITY, MAX_ALIGN};
use crate::sptr;

/// Fails the build when `T` does not fit an `N`-byte inline space.
struct AssertFits<T, const N: usize>(PhantomData<T>);

impl<T, const N: usize> AssertFits<T, N> {
    const ASSERT: () = assert!(
        mem::size_of::<T>() <= N && mem::align_of::<T>() <= MAX_ALIGN,
        "callable does not fit in the inline space of `InlineFn`"
    );
}

/// A type-erased callable of signature `S`, stored inline in `N` bytes.
///
/// The box never allocates. A callable that does not fit is rejected when the
/// program is built. The callable may borrow from the environment for `'a`.
///
/// # Example
///
/// ```
/// use inline_fn::InlineFn;
///
/// let (a, b, c) = (2, 3, 5);
/// let mut add: InlineFn<fn(i32) -> i32> = InlineFn::new(move |x: i32| a + b + c + x);
/// assert_eq!(add.call(5), Ok(15));
///
/// add.assign(|x: i32| x * 2);
/// assert_eq!(add.call(5), Ok(10));
///
/// let data = vec![10, 20, 30];
/// let items = &data;
/// let mut get: InlineFn<fn(usize) -> i32> = InlineFn::new(move |i: usize| items[i]);
/// assert_eq!(get.call(1), Ok(20));
/// ```
pub struct InlineFn<'a, S: Signature, const N: usize = DEFAULT_CAPACITY> {
    space: Space<N>,
    // Only the vtable half is meaningful; the data half is rebound to
    // `space` on every access since the box may have moved.
    handle: Option<*mut (dyn Invoke<S> + 'a)>,
}

impl<'a, S: Signature, const N: usize> InlineFn<'a, S, N> {
    /// Stores `f` inline.
    ///
    /// `f` must be `Clone`, since copying the box clones the callable. A
    /// callable that owns a move-only value cannot be stored, even if the box
    /// is never copied.
    ///
    /// # Example
    ///
    /// ```
    /// use inline_fn::InlineFn;
    ///
    /// let mut answer: InlineFn<fn() -> i32> = InlineFn::new(|| 42);
    /// assert_eq!(answer.call(), Ok(42));
    /// ```
    ///
    /// A callable larger than the capacity does not compile:
    ///
    /// ```compile_fail
    /// use inline_fn::InlineFn;
    ///
    /// let big = [0u8; 64];
    /// let f: InlineFn<fn() -> u8> = InlineFn::new(move || big[0]);
    /// ```
    ///
    /// Neither does one aligned above [`MAX_ALIGN`], whatever the capacity.
    /// Aligned to 16 it fits:
    ///
    /// ```
    /// use inline_fn::InlineFn;
    ///
    /// #[repr(align(16))]
    /// #[derive(Clone, Copy)]
    /// struct Wide(u8);
    ///
    /// let wide = Wide(7);
    /// let mut f: InlineFn<fn() -> u8, 64> = InlineFn::new(move || {
    ///     let whole: Wide = wide;
    ///     whole.0
    /// });
    /// assert_eq!(f.call(), Ok(7));
    /// ```
    ///
    /// Aligned to 32 it does not:
    ///
    /// ```compile_fail
    /// use inline_fn::InlineFn;
    ///
    /// #[repr(align(32))]
    /// #[derive(Clone, Copy)]
    /// struct Wide(u8);
    ///
    /// let wide = Wide(7);
    /// let mut f: InlineFn<fn() -> u8, 64> = InlineFn::new(move || {
    ///     let whole: Wide = wide;
    ///     whole.0
    /// });
    /// assert_eq!(f.call(), Ok(7));
    /// ```
    ///
    /// [`MAX_ALIGN`]: crate::space::MAX_ALIGN
    pub fn new<F: Callable<S> + 'a>(f: F) -> Self {
        let mut this = Self::empty();
        this.place(f);
        this
    }

    const fn empty() -> Self {
        InlineFn {
            space: Space::uninit(),
            handle: None,
        }
    }

    /// Replaces the stored callable with `f`.
    ///
    /// The previous callable is dropped before `f` is stored.
    pub fn assign<F: Callable<S> + 'a>(&mut self, f: F) {
        self.clear();
        self.place(f);
    }

    fn place<F: Callable<S> + 'a>(&mut self, f: F) {
        let () = AssertFits::<Adapter<F>, N>::ASSERT;
        debug_assert!(self.handle.is_none());

        trace!(
            "placing `{}` ({} bytes) in {}-byte inline space",
            any::type_name::<F>(),
            mem::size_of::<F>(),
            N
        );

        let typed = self.space.as_mut_ptr().cast::<Adapter<F>>();
        // SAFETY: `ASSERT` above bounds size and alignment by the space, and
        // the space is unoccupied.
        unsafe { typed.write(Adapter(f)) };
        let handle: *mut (dyn Invoke<S> + 'a) = typed;
        self.handle = Some(handle);
    }

    /// Calls the stored callable with a tuple of arguments.
    ///
    /// Returns [`Error::Empty`] when the box holds no callable. Prefer the
    /// `call` method, which takes the arguments unpacked.
    ///
    /// # Example
    ///
    /// ```
    /// use inline_fn::{Error, InlineFn};
    ///
    /// let mut sub: InlineFn<fn(i32, i32) -> i32> = InlineFn::new(|a: i32, b: i32| a - b);
    /// assert_eq!(sub.invoke((7, 2)), Ok(5));
    ///
    /// let _moved = sub.take();
    /// assert_eq!(sub.invoke((7, 2)), Err(Error::Empty));
    /// ```
    #[inline]
    pub fn invoke(&mut self, args: S::Args) -> Result<S::Output, Error> {
        let handle = self.handle.ok_or(Error::Empty)?;
        let object = self.object_mut(handle);
        // SAFETY: a handle is only present while its occupant is live.
        Ok(unsafe { (*object).invoke(args) })
    }

    /// Returns true if the box holds no callable.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.handle.is_none()
    }

    /// Returns the size of the inline space in bytes.
    #[inline]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Drops the stored callable, leaving the box empty.
    pub fn clear(&mut self) {
        if let Some(handle) = self.handle.take() {
            trace!("dropping callable held in {}-byte inline space", N);
            // SAFETY: the handle was just taken, so the occupant is dropped
            // exactly once.
            unsafe { ptr::drop_in_place(self.object_mut(handle)) }
        }
    }

    /// Moves the stored callable out into a new box, leaving this one empty.
    ///
    /// No destructor runs.
    ///
    /// # Example
    ///
    /// ```
    /// use inline_fn::InlineFn;
    ///
    /// let mut a: InlineFn<fn() -> i32> = InlineFn::new(|| 1);
    /// let mut b = a.take();
    ///
    /// assert!(a.is_empty());
    /// assert_eq!(b.call(), Ok(1));
    /// ```
    pub fn take(&mut self) -> Self {
        match self.handle.take() {
            None => Self::empty(),
            Some(handle) => {
                trace!("relocating callable out of {}-byte inline space", N);
                InlineFn {
                    // SAFETY: `self` gave up the occupant above, so this read
                    // moves it.
                    space: unsafe { ptr::read(&self.space) },
                    handle: Some(handle),
                }
            }
        }
    }

    /// Change the capacity of `InlineFn`.
    ///
    /// Returns the box unchanged when the stored callable does not fit
    /// the new capacity.
    ///
    /// # Example
    ///
    /// ```
    /// use inline_fn::InlineFn;
    ///
    /// let offset = 1u64;
    /// let f: InlineFn<fn(u64) -> u64> = InlineFn::new(move |x: u64| x + offset);
    ///
    /// let mut small = f.resize::<8>().ok().unwrap();
    /// assert_eq!(small.call(1), Ok(2));
    /// assert!(small.resize::<4>().is_err());
    /// ```
    pub fn resize<const M: usize>(mut self) -> Result<InlineFn<'a, S, M>, Self> {
        let Some(handle) = self.handle else {
            return Ok(InlineFn::empty());
        };

        // SAFETY: the occupant is live while the handle is present.
        let size = unsafe { mem::size_of_val(&*self.object(handle)) };
        if size > M {
            return Err(self);
        }

        trace!(
            "relocating {}-byte callable from {}-byte to {}-byte inline space",
            size,
            N,
            M
        );

        let mut resized = InlineFn::<'a, S, M>::empty();
        // SAFETY: `size` fits `M`, both spaces share `MAX_ALIGN`, and the
        // handle moves with the bytes below.
        unsafe { ptr::copy_nonoverlapping(self.space.as_ptr(), resized.space.as_mut_ptr(), size) };
        resized.handle = self.handle.take();
        Ok(resized)
    }

    fn object(&self, handle: *mut (dyn Invoke<S> + 'a)) -> *const (dyn Invoke<S> + 'a) {
        sptr::with_metadata_of(self.space.as_ptr(), handle)
    }

    fn object_mut(&mut self, handle: *mut (dyn Invoke<S> + 'a)) -> *mut (dyn Invoke<S> + 'a) {
        sptr::with_metadata_of_mut(self.space.as_mut_ptr(), handle)
    }
}

impl<'a, S: Signature, const N: usize> Drop for InlineFn<'a, S, N> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<'a, S: Signature, const N: usize> Clone for InlineFn<'a, S, N> {
    fn clone(&self) -> Self {
        let mut cloned = Self::empty();
        cloned.clone_from(self);
        cloned
    }

    fn clone_from(&mut self, source: &Self) {
        self.clear();
        if let Some(handle) = source.handle {
            // SAFETY: `source` is occupied and `self` was just cleared; both
            // spaces have the same capacity.
            unsafe { (*source.object(handle)).clone_to(self.space.as_mut_ptr()) };
            self.handle = Some(handle);
        }
    }
}

impl<S: Signature, const N: usize> fmt::Debug for InlineFn<'_, S, N> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("InlineFn")
            .field("capacity", &N)
            .field("empty", &self.is_empty())
            .finish()
    }
}
