//! FFI bindings for the C reference sorts.

use crate::counter::ComparisonCounter;
use crate::error::AlgoError;

#[cfg(c_implementation_active)]
mod ffi {
    use libc::{c_int, c_ulonglong, size_t};

    extern "C" {
        pub fn bubble_sort_c(data: *mut c_int, len: size_t, comparisons: *mut c_ulonglong);
        pub fn selection_sort_c(data: *mut c_int, len: size_t, comparisons: *mut c_ulonglong);
        pub fn insertion_sort_c(data: *mut c_int, len: size_t, comparisons: *mut c_ulonglong);
        pub fn quick_sort_c(data: *mut c_int, len: size_t, comparisons: *mut c_ulonglong);
        pub fn merge_sort_c(data: *mut c_int, len: size_t, comparisons: *mut c_ulonglong) -> c_int;
    }
}

/// Check if C implementations are available
#[cfg(c_implementation_active)]
pub const C_IMPL_AVAILABLE: bool = true;

#[cfg(not(c_implementation_active))]
pub const C_IMPL_AVAILABLE: bool = false;

#[cfg(c_implementation_active)]
macro_rules! c_sort_wrapper {
    ($(#[$doc:meta])* $name:ident => $ffi:ident) => {
        $(#[$doc])*
        pub fn $name(data: &mut [i32], counter: &mut ComparisonCounter) -> Result<(), AlgoError> {
            let mut comparisons: libc::c_ulonglong = 0;
            // SAFETY: the pointer/length pair describes `data` exactly and the
            // C side only touches `data[0..len)`.
            unsafe { ffi::$ffi(data.as_mut_ptr(), data.len(), &mut comparisons) };
            counter.add(comparisons);
            Ok(())
        }
    };
}

#[cfg(c_implementation_active)]
c_sort_wrapper!(
    /// C bubble sort wrapper
    bubble_sort_c => bubble_sort_c
);
#[cfg(c_implementation_active)]
c_sort_wrapper!(
    /// C selection sort wrapper
    selection_sort_c => selection_sort_c
);
#[cfg(c_implementation_active)]
c_sort_wrapper!(
    /// C insertion sort wrapper
    insertion_sort_c => insertion_sort_c
);
#[cfg(c_implementation_active)]
c_sort_wrapper!(
    /// C quick sort wrapper
    quick_sort_c => quick_sort_c
);

/// C merge sort wrapper
#[cfg(c_implementation_active)]
pub fn merge_sort_c(data: &mut [i32], counter: &mut ComparisonCounter) -> Result<(), AlgoError> {
    let mut comparisons: libc::c_ulonglong = 0;
    // SAFETY: see `c_sort_wrapper!`.
    let status = unsafe { ffi::merge_sort_c(data.as_mut_ptr(), data.len(), &mut comparisons) };
    counter.add(comparisons);
    if status != 0 {
        return Err(AlgoError::AllocationFailure { requested: data.len() });
    }
    Ok(())
}

// Stub implementations for missing C compiler
#[cfg(not(c_implementation_active))]
macro_rules! c_sort_stub {
    ($($name:ident),*) => {
        $(
            pub fn $name(_data: &mut [i32], _counter: &mut ComparisonCounter) -> Result<(), AlgoError> {
                panic!("C implementation not compiled (requires GCC, MSVC, or Apple Clang)")
            }
        )*
    };
}

#[cfg(not(c_implementation_active))]
c_sort_stub!(bubble_sort_c, selection_sort_c, insertion_sort_c, quick_sort_c, merge_sort_c);
