//! Managed string objects as seen from native code.
//!
//! The runtime owns every string; native code only reads code units and,
//! through a mutable view, overwrites them in place. Out-of-range indices
//! degrade to a `0` read or a skipped write; the boundary has no error
//! channel back into the runtime.

#[cfg(feature = "std")]
mod image;
mod layout;
mod view;

#[cfg(feature = "std")]
pub use image::{ImageError, MAX_LENGTH, StringImage};
pub use layout::{ManagedString, StringLayout};
pub use view::{NULL_CHAR, StringMut, StringRef, Units, get_char, set_char};

#[cfg(all(test, feature = "std"))]
mod image_tests;
#[cfg(test)]
mod layout_tests;
#[cfg(all(test, feature = "std"))]
mod view_tests;
