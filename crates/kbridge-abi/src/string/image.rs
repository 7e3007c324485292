//! Byte-exact managed string images for hosts without a runtime.
//!
//! Tests and host-side tools need something shaped exactly like a runtime
//! string to hand to the views. `StringImage` lays out header and code units
//! the way [`ManagedString`] declares them, in storage aligned for the
//! header's pointer-sized type tag.

use core::ptr::{self, NonNull};

use kbridge_core::{Char, Int32, TypeTag};

use super::layout::{ManagedString, StringLayout};
use super::view::{StringMut, StringRef};

/// Longest string the runtime can describe (its length field is an `i32`).
pub const MAX_LENGTH: usize = Int32::MAX as usize;

/// Storage unit; its alignment covers `ManagedString`'s.
#[repr(C, align(8))]
#[derive(Clone, Copy)]
struct Block([u8; 8]);

const BLOCK: usize = size_of::<Block>();

const _: () = assert!(align_of::<Block>() >= StringLayout::ALIGN);

/// Error building a [`StringImage`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ImageError {
    #[error("string too long: {0} code units (maximum {MAX_LENGTH})")]
    TooLong(usize),
}

/// Owned image of a managed string object.
///
/// Uses `Vec<Block>` internally: Vec guarantees element alignment, so the
/// header starts on a suitably aligned address without a custom allocator.
pub struct StringImage {
    blocks: Vec<Block>,
    length: Int32,
}

impl StringImage {
    /// Build an image with a null type tag.
    pub fn from_units(units: &[Char]) -> Result<Self, ImageError> {
        Self::with_type_tag(ptr::null(), units)
    }

    /// Build an image from UTF-16 encoded `text`.
    pub fn encode(text: &str) -> Result<Self, ImageError> {
        let units: Vec<Char> = text.encode_utf16().collect();
        Self::from_units(&units)
    }

    /// Build an image carrying `type_tag` in its header.
    pub fn with_type_tag(type_tag: TypeTag, units: &[Char]) -> Result<Self, ImageError> {
        if units.len() > MAX_LENGTH {
            return Err(ImageError::TooLong(units.len()));
        }
        let length = units.len() as Int32;

        // A zero-length string still carries its inline unit field.
        let size = StringLayout::occupied_size(units.len()).max(size_of::<ManagedString>());
        let mut blocks = vec![Block([0; BLOCK]); size.div_ceil(BLOCK)];

        let base = blocks.as_mut_ptr().cast::<ManagedString>();
        // SAFETY: `blocks` spans `size` zeroed, aligned bytes, enough for the
        // header plus `units.len()` code units. Pointers are derived from the
        // Vec's own pointer, so they cover the whole allocation.
        unsafe {
            ptr::addr_of_mut!((*base).type_tag).write(type_tag);
            ptr::addr_of_mut!((*base).length).write(length);
            let first = ptr::addr_of_mut!((*base).first_char);
            ptr::copy_nonoverlapping(units.as_ptr(), first, units.len());
        }

        Ok(Self { blocks, length })
    }

    /// Number of code units.
    pub fn len(&self) -> usize {
        self.length as usize
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Bytes the string occupies under the runtime's layout.
    pub fn occupied_size(&self) -> usize {
        StringLayout::occupied_size(self.len())
    }

    pub fn as_ptr(&self) -> *const ManagedString {
        self.blocks.as_ptr().cast()
    }

    pub fn as_mut_ptr(&mut self) -> *mut ManagedString {
        self.blocks.as_mut_ptr().cast()
    }

    pub fn view(&self) -> StringRef<'_> {
        // SAFETY: Vec pointers are never null. The image holds a complete
        // string and `&self` keeps it alive and unmodified for the view's
        // lifetime.
        unsafe { StringRef::from_ptr(NonNull::new_unchecked(self.as_ptr().cast_mut())) }
    }

    pub fn view_mut(&mut self) -> StringMut<'_> {
        // SAFETY: as in `view`, and `&mut self` makes the access exclusive.
        unsafe { StringMut::from_ptr(NonNull::new_unchecked(self.as_mut_ptr())) }
    }

    /// The occupied bytes, header included.
    pub fn as_bytes(&self) -> &[u8] {
        let len = self.occupied_size();
        // SAFETY: `with_type_tag` allocates at least `occupied_size` bytes.
        // Block is repr(C) over [u8; 8], and every byte was initialized when
        // the blocks were zeroed.
        unsafe { std::slice::from_raw_parts(self.blocks.as_ptr().cast::<u8>(), len) }
    }
}

impl Clone for StringImage {
    fn clone(&self) -> Self {
        Self {
            blocks: self.blocks.clone(),
            length: self.length,
        }
    }
}

impl std::fmt::Debug for StringImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StringImage")
            .field("length", &self.length)
            .field(
                "aligned",
                &(self.blocks.as_ptr() as usize).is_multiple_of(StringLayout::ALIGN),
            )
            .finish()
    }
}
