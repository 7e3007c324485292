//! PCI vendor/device ID table embedded by the build step.
//!
//! The blob's format is the consumer's business; this module only locates it.

use super::descriptor::BinarySection;
use super::slot::SectionSlot;

crate::linker_section! {
    pub static PCI_IDS = "pcieids", pcieids_start .. pcieids_end;
}

static PCI_IDS_SLOT: SectionSlot = SectionSlot::new();

/// Descriptor of the PCI ID table, re-resolved on every call.
#[allow(non_snake_case)]
#[unsafe(no_mangle)]
pub extern "C" fn getPcieIds() -> *const BinarySection {
    PCI_IDS_SLOT.publish(PCI_IDS.resolve())
}
