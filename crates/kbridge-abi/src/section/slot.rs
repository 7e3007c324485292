//! Stable descriptor address for the managed consumer.
//!
//! The consumer imports a function returning a pointer to a descriptor. The
//! slot is a static with the descriptor's layout; each publish re-resolves
//! and overwrites it, so no resolution is ever cached.

use core::sync::atomic::{AtomicPtr, AtomicU64, Ordering};

use super::descriptor::BinarySection;

/// Atomic cell laid out like [`BinarySection`].
#[derive(Debug)]
#[repr(C)]
pub struct SectionSlot {
    start: AtomicPtr<u8>,
    size: AtomicU64,
}

#[cfg(target_pointer_width = "64")]
const _: () = {
    assert!(size_of::<SectionSlot>() == size_of::<BinarySection>());
    assert!(align_of::<SectionSlot>() == align_of::<BinarySection>());
};

impl Default for SectionSlot {
    fn default() -> Self {
        Self::new()
    }
}

impl SectionSlot {
    pub const fn new() -> Self {
        Self {
            start: AtomicPtr::new(core::ptr::null_mut()),
            size: AtomicU64::new(0),
        }
    }

    /// Store `section` and return the slot's address, readable as a
    /// `BinarySection` from C.
    pub fn publish(&self, section: BinarySection) -> *const BinarySection {
        self.start.store(section.start.cast_mut(), Ordering::Relaxed);
        self.size.store(section.size, Ordering::Relaxed);
        (self as *const Self).cast()
    }

    pub fn load(&self) -> BinarySection {
        BinarySection {
            start: self.start.load(Ordering::Relaxed).cast_const(),
            size: self.size.load(Ordering::Relaxed),
        }
    }
}
