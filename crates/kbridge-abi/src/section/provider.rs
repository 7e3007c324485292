//! Where section markers come from.

#[cfg(feature = "std")]
use std::path::Path;

use super::descriptor::{BinarySection, SectionBounds, SectionError};

/// Supplies the marker pair for one region.
///
/// # Safety
/// `bounds` must delimit readable memory that stays unmodified and alive at
/// least as long as the provider, whenever the markers are ordered.
pub unsafe trait SectionProvider {
    /// Name used in diagnostics.
    fn name(&self) -> &str;

    fn bounds(&self) -> SectionBounds;
}

/// Resolves a provider's markers into a [`BinarySection`].
///
/// The descriptor is recomputed on every call; the region itself never
/// changes, so repeated calls agree.
#[derive(Clone, Copy, Debug)]
pub struct SectionHandle<P> {
    provider: P,
}

impl<P> SectionHandle<P> {
    pub const fn new(provider: P) -> Self {
        Self { provider }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }
}

impl<P: SectionProvider> SectionHandle<P> {
    /// Resolve the region.
    ///
    /// # Panics
    /// If the markers are misordered. That is a build-configuration defect;
    /// use [`try_resolve`](Self::try_resolve) to report it instead.
    pub fn resolve(&self) -> BinarySection {
        self.ensure_resolved(self.try_resolve())
    }

    pub fn try_resolve(&self) -> Result<BinarySection, SectionError> {
        let section = BinarySection::from_bounds(self.provider.bounds())?;
        log::debug!(
            "section `{}` resolved: {:p} + {} bytes",
            self.provider.name(),
            section.start,
            section.size
        );
        Ok(section)
    }

    /// The region's bytes.
    pub fn bytes(&self) -> Result<&[u8], SectionError> {
        let section = self.try_resolve()?;
        // SAFETY: the provider contract keeps ordered regions readable and
        // unmodified for as long as `self.provider` is borrowed.
        Ok(unsafe { section.as_bytes() })
    }
}

/// Region delimited by two linker symbols.
///
/// Declare with [`linker_section!`](crate::linker_section).
#[derive(Clone, Copy, Debug)]
pub struct LinkerSection {
    name: &'static str,
    bounds: fn() -> SectionBounds,
}

impl LinkerSection {
    /// # Safety
    /// `bounds` must return the addresses of the start and end markers of a
    /// region the build step fills and that nothing writes at run time.
    pub const unsafe fn new(name: &'static str, bounds: fn() -> SectionBounds) -> Self {
        Self { name, bounds }
    }
}

// SAFETY: guaranteed by the `LinkerSection::new` contract.
unsafe impl SectionProvider for LinkerSection {
    fn name(&self) -> &str {
        self.name
    }

    fn bounds(&self) -> SectionBounds {
        (self.bounds)()
    }
}

/// Declare a [`SectionHandle`] over a region delimited by linker symbols.
///
/// ```ignore
/// kbridge_abi::linker_section! {
///     pub static FONT = "font", font_start .. font_end;
/// }
/// let font = FONT.resolve();
/// ```
#[macro_export]
macro_rules! linker_section {
    ($vis:vis static $handle:ident = $name:literal, $start:ident .. $end:ident;) => {
        $vis static $handle: $crate::section::SectionHandle<$crate::section::LinkerSection> = {
            #[allow(non_upper_case_globals)]
            unsafe extern "C" {
                static $start: [u8; 0];
                static $end: [u8; 0];
            }

            #[allow(unused_unsafe)]
            fn bounds() -> $crate::section::SectionBounds {
                // Only the addresses are taken; the markers are never read.
                unsafe {
                    $crate::section::SectionBounds {
                        start: (&raw const $start).cast::<u8>(),
                        end: (&raw const $end).cast::<u8>(),
                    }
                }
            }

            // SAFETY: the build step places both markers around an immutable region.
            $crate::section::SectionHandle::new(unsafe {
                $crate::section::LinkerSection::new($name, bounds)
            })
        };
    };
}

/// Region backed by a `'static` slice, e.g. from `include_bytes!`.
#[derive(Clone, Copy, Debug)]
pub struct StaticSection {
    name: &'static str,
    bytes: &'static [u8],
}

impl StaticSection {
    pub const fn new(name: &'static str, bytes: &'static [u8]) -> Self {
        Self { name, bytes }
    }
}

// SAFETY: a shared `'static` slice is readable and immutable forever.
unsafe impl SectionProvider for StaticSection {
    fn name(&self) -> &str {
        self.name
    }

    fn bounds(&self) -> SectionBounds {
        SectionBounds::from_slice(self.bytes)
    }
}

/// Region loaded from a blob file, for inspecting build outputs on the host.
#[cfg(feature = "std")]
#[derive(Clone, Debug)]
pub struct FileSection {
    name: String,
    bytes: Box<[u8]>,
}

#[cfg(feature = "std")]
impl FileSection {
    /// Read a file into memory.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SectionError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)?.into_boxed_slice();
        log::debug!("loaded {} bytes from {}", bytes.len(), path.display());
        Ok(Self {
            name: path.display().to_string(),
            bytes,
        })
    }

    pub fn from_vec(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes: bytes.into_boxed_slice(),
        }
    }
}

// SAFETY: the boxed bytes live and stay unmodified as long as `self`.
#[cfg(feature = "std")]
unsafe impl SectionProvider for FileSection {
    fn name(&self) -> &str {
        &self.name
    }

    fn bounds(&self) -> SectionBounds {
        SectionBounds::from_slice(&self.bytes)
    }
}
