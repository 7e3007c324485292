//! Managed string object layout.
//!
//! Layout (64-bit target):
//! - 0-7: type tag (runtime method table pointer)
//! - 8-11: length in code units (i32)
//! - 12..: code units, `length` of them, no terminator
//!
//! This is the runtime's ABI. If the runtime changes its string
//! representation, `ManagedString` is the only declaration to update; every
//! offset below is derived from it.

use core::mem::{align_of, offset_of, size_of};

use kbridge_core::{Char, Int32, TypeTag};

/// Header of a managed string object.
///
/// Only the first code unit is declared; the remaining `length - 1` units
/// follow it in memory. Never hold a `&ManagedString` to reach them: a
/// reference covers `size_of::<ManagedString>()` bytes only. Go through
/// [`StringRef`](super::StringRef) / [`StringMut`](super::StringMut), which
/// keep the runtime's raw pointer.
#[derive(Debug)]
#[repr(C)]
pub struct ManagedString {
    pub(crate) type_tag: TypeTag,
    pub(crate) length: Int32,
    pub(crate) first_char: Char,
}

/// Symbolic offsets into [`ManagedString`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StringLayout {
    pub type_tag_offset: usize,
    pub length_offset: usize,
    pub first_char_offset: usize,
    pub unit_size: usize,
    pub align: usize,
}

impl StringLayout {
    pub const TYPE_TAG: usize = offset_of!(ManagedString, type_tag);
    pub const LENGTH: usize = offset_of!(ManagedString, length);
    pub const FIRST_CHAR: usize = offset_of!(ManagedString, first_char);
    pub const UNIT_SIZE: usize = size_of::<Char>();
    pub const ALIGN: usize = align_of::<ManagedString>();

    /// Layout of the current target.
    pub const fn native() -> Self {
        Self {
            type_tag_offset: Self::TYPE_TAG,
            length_offset: Self::LENGTH,
            first_char_offset: Self::FIRST_CHAR,
            unit_size: Self::UNIT_SIZE,
            align: Self::ALIGN,
        }
    }

    /// Bytes a string of `length` code units occupies, header included.
    pub const fn occupied_size(length: usize) -> usize {
        Self::FIRST_CHAR + length * Self::UNIT_SIZE
    }

    /// Byte offset of code unit `index` from the start of the object.
    pub const fn unit_offset(index: usize) -> usize {
        Self::FIRST_CHAR + index * Self::UNIT_SIZE
    }
}

const _: () = assert!(StringLayout::TYPE_TAG == 0);
const _: () = assert!(StringLayout::LENGTH == size_of::<TypeTag>());
const _: () = assert!(StringLayout::FIRST_CHAR == StringLayout::LENGTH + size_of::<Int32>());
const _: () = assert!(StringLayout::UNIT_SIZE == 2);
