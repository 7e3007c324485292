//! Section descriptor shared with the managed consumer.

#[cfg(feature = "std")]
use std::io;

use kbridge_core::UInt64;

/// Resolved region: first byte and byte length.
///
/// Matches the consumer's sequential `{ byte* start; ulong size; }`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(C)]
pub struct BinarySection {
    pub start: *const u8,
    pub size: UInt64,
}

#[cfg(target_pointer_width = "64")]
const _: () = assert!(core::mem::size_of::<BinarySection>() == 16);

/// Marker addresses as the build step left them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SectionBounds {
    pub start: *const u8,
    pub end: *const u8,
}

/// Section resolution or loading error.
#[derive(Debug, thiserror::Error)]
pub enum SectionError {
    #[error("section markers misordered: start {start:#x} is past end {end:#x}")]
    Misordered { start: usize, end: usize },
    #[cfg(feature = "std")]
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

impl SectionBounds {
    pub fn from_slice(bytes: &[u8]) -> Self {
        let range = bytes.as_ptr_range();
        Self {
            start: range.start,
            end: range.end,
        }
    }

    pub fn is_ordered(&self) -> bool {
        self.start.addr() <= self.end.addr()
    }
}

impl BinarySection {
    pub const EMPTY: Self = Self {
        start: core::ptr::null(),
        size: 0,
    };

    /// Descriptor for `[start, end)`.
    pub fn from_bounds(bounds: SectionBounds) -> Result<Self, SectionError> {
        let (start, end) = (bounds.start.addr(), bounds.end.addr());
        let size = end
            .checked_sub(start)
            .ok_or(SectionError::Misordered { start, end })?;
        Ok(Self {
            start: bounds.start,
            size: size as UInt64,
        })
    }

    pub fn len(&self) -> usize {
        self.size as usize
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// One past the last byte.
    pub fn end(&self) -> *const u8 {
        self.start.wrapping_add(self.len())
    }

    /// View the region as bytes.
    ///
    /// # Safety
    /// The descriptor must come from a provider whose region is readable and
    /// unmodified for `'a`.
    pub unsafe fn as_bytes<'a>(&self) -> &'a [u8] {
        if self.is_empty() {
            return &[];
        }
        // SAFETY: upheld by the caller; `start` is non-null for a non-empty
        // region that came from real bounds.
        unsafe { core::slice::from_raw_parts(self.start, self.len()) }
    }
}
