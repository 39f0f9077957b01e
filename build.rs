use std::ptr;

#[allow(dead_code)]
struct Sample(usize);

trait Invoke {
    fn invoke(&mut self, arg: u32) -> u32;
}

impl Invoke for Sample {
    fn invoke(&mut self, arg: u32) -> u32 {
        arg + 1
    }
}

fn layout_broken(what: &str) {
    panic!(
        concat!(
            "Assumptions on layout are broken, this crate relies on ",
            "`unsafe code guidelines` layout specification, ",
            "now layout of {:?} is broken, report about it on github"
        ),
        what
    );
}

/// The stable fallback rebinds the data half of a `*mut dyn Trait` in place,
/// so the data pointer has to come first and the vtable second.
fn test_dyn_layout() {
    #[repr(C)]
    struct DynObj {
        data_ptr: *const u8,
        vtable: *const u8,
    }

    let sample = Box::new(Sample(100));
    let data_ptr = Box::into_raw(sample);

    let trait_obj: *mut dyn Invoke = data_ptr;
    let dyn_obj_repr: DynObj = unsafe { ptr::read(ptr::addr_of!(trait_obj) as *const DynObj) };

    if dyn_obj_repr.data_ptr != data_ptr as *const u8 {
        layout_broken("trait objects");
    }

    // Rebinding to another address must keep the vtable usable.
    let mut other = Sample(7);
    let mut rebound = trait_obj;
    unsafe {
        ptr::addr_of_mut!(rebound)
            .cast::<usize>()
            .write(ptr::addr_of_mut!(other) as usize);
        if (*rebound).invoke(1) != 2 {
            layout_broken("trait object vtables");
        }
    }

    let _ = unsafe { Box::from_raw(data_ptr) };
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    // NOTE: host layout may differ from target layout, this is a best effort
    // check for the common case.
    test_dyn_layout();
}
