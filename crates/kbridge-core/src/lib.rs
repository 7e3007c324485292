#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![cfg_attr(not(feature = "std"), no_std)]

//! Core definitions shared by every kbridge crate.
//!
//! Two parts:
//! - **Type layer** (`types`): fixed-width aliases both compilation units agree on
//! - **Terminal palette** (`Colors`): used by host-side tooling output, needs `std`
//!
//! Without the default `std` feature the crate is `no_std`.

#[cfg(feature = "std")]
pub mod colors;
pub mod types;

#[cfg(feature = "std")]
pub use colors::Colors;
pub use types::{
    Byte, Char, Int8, Int16, Int32, Int64, IntPtr, SByte, TypeTag, UInt, UInt8, UInt16, UInt32,
    UInt64, ULong, UShort,
};

#[cfg(all(test, feature = "std"))]
mod colors_tests;
