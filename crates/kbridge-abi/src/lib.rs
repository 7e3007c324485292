//! Native side of the managed-runtime boundary.
//!
//! This crate contains:
//! - Managed string layout and bounds-checked views (`string`)
//! - Linker-placed binary section descriptors (`section`)
//! - The opaque drawing sink native code hands strings to (`canvas`)
//! - C-ABI entry points the runtime links against (`exports`)
//!
//! Without the default `std` feature the crate is `no_std`; the host-only
//! pieces (`StringImage`, `FileSection`) drop out.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![cfg_attr(not(feature = "std"), no_std)]

pub mod canvas;
#[cfg(feature = "exports")]
pub mod exports;
pub mod section;
pub mod string;

mod invariants;

pub use canvas::{Canvas, draw_greeting};
#[cfg(feature = "std")]
pub use section::FileSection;
pub use section::{
    BinarySection, LinkerSection, SectionBounds, SectionError, SectionHandle, SectionProvider,
    SectionSlot, StaticSection,
};
pub use string::{ManagedString, StringLayout, StringMut, StringRef, get_char, set_char};
#[cfg(feature = "std")]
pub use string::{ImageError, StringImage};

#[cfg(all(not(feature = "std"), feature = "panic-handler"))]
#[panic_handler]
fn panic(_info: &core::panic::PanicInfo<'_>) -> ! {
    loop {
        core::hint::spin_loop();
    }
}
