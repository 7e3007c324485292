//! C-ABI entry points imported by the managed runtime.
//!
//! Strings cross by reference. A null string behaves like an out-of-range
//! index: reads yield `0`, writes do nothing.

#![allow(non_snake_case)]

use kbridge_core::{Char, Int32};

use crate::string::{ManagedString, NULL_CHAR, StringMut, StringRef};

/// Code unit `index` of `text`, or `0` when out of range.
///
/// # Safety
/// `text` must be null or point at a live managed string.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn GetCharAt(text: *const ManagedString, index: Int32) -> Char {
    // SAFETY: upheld by the caller.
    match unsafe { StringRef::from_raw(text) } {
        Some(text) => text.get_char(index),
        None => NULL_CHAR,
    }
}

/// Overwrite code unit `index` of `text`; out-of-range indices are ignored.
///
/// # Safety
/// `text` must be null or point at a live managed string no other context is
/// mutating.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn SetCharAt(text: *mut ManagedString, index: Int32, value: Char) {
    // SAFETY: upheld by the caller.
    if let Some(mut text) = unsafe { StringMut::from_raw(text) } {
        text.set_char(index, value);
    }
}

/// Clear the runtime canvas and draw the greeting.
#[cfg(feature = "canvas")]
#[unsafe(export_name = "test_gcc_function")]
pub extern "C" fn draw_greeting() {
    crate::canvas::draw_greeting(&mut crate::canvas::ExternCanvas);
}
