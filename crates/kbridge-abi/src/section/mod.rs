//! Binary regions placed in the image by the build step.
//!
//! The build step brackets each embedded blob with a start and an end marker
//! symbol. Resolution turns the pair into a `(start, size)` descriptor; how a
//! toolchain exposes the markers is hidden behind [`SectionProvider`].

mod descriptor;
mod provider;
mod slot;

#[cfg(feature = "pci-ids")]
pub mod pci_ids;

pub use descriptor::{BinarySection, SectionBounds, SectionError};
#[cfg(feature = "std")]
pub use provider::FileSection;
pub use provider::{LinkerSection, SectionHandle, SectionProvider, StaticSection};
pub use slot::SectionSlot;

#[cfg(all(test, feature = "pci-ids", target_os = "linux"))]
mod pci_ids_tests;
