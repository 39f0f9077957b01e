#[cfg(feature = "nightly")]
mod implementation {
    pub fn with_metadata_of<T, U: ?Sized>(ptr: *const T, meta: *const U) -> *const U {
        ptr.with_metadata_of(meta)
    }

    pub fn with_metadata_of_mut<T, U: ?Sized>(ptr: *mut T, meta: *const U) -> *mut U {
        ptr.with_metadata_of(meta)
    }
}

#[cfg(not(feature = "nightly"))]
#[allow(clippy::as_conversions)]
mod implementation {
    use core::ptr::addr_of_mut;

    pub fn with_metadata_of<T, U: ?Sized>(ptr: *const T, meta: *const U) -> *const U {
        with_metadata_of_mut(ptr.cast_mut(), meta)
    }

    /// Replaces the data address of the fat pointer `meta` with `ptr`,
    /// keeping its vtable. The layout is verified by `build.rs`.
    pub fn with_metadata_of_mut<T, U: ?Sized>(ptr: *mut T, mut meta: *const U) -> *mut U {
        let meta_ptr = addr_of_mut!(meta).cast::<usize>();
        // SAFETY: the data address is the first word of a fat pointer,
        // checked by `build.rs`. The `nightly` feature skips the integer
        // round trip.
        unsafe { meta_ptr.write(ptr.cast::<u8>() as usize) }
        meta.cast_mut()
    }
}

pub use implementation::*;
