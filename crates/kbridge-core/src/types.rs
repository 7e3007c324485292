//! Fixed-width type aliases for the native/managed boundary.
//!
//! Names follow the managed runtime's primitive names so signatures read the
//! same on both sides. Widths are pinned at compile time; a target where any
//! of these fails to hold cannot share objects with the runtime.

use core::ffi::c_void;
use core::mem::size_of;

// Signed
pub type Int8 = i8;
pub type Int16 = i16;
pub type Int32 = i32;
pub type Int64 = i64;

// Unsigned
pub type UInt8 = u8;
pub type UInt16 = u16;
pub type UInt32 = u32;
pub type UInt64 = u64;

/// One UTF-16 code unit.
pub type Char = u16;

/// Pointer-sized signed integer.
pub type IntPtr = isize;

/// Opaque object header word written by the runtime (method table pointer).
pub type TypeTag = *const c_void;

// Short spellings used by native sources.
pub type SByte = i8;
pub type Byte = u8;
pub type UShort = u16;
pub type UInt = u32;
pub type ULong = u64;

const _: () = assert!(size_of::<Int8>() == 1);
const _: () = assert!(size_of::<Int16>() == 2);
const _: () = assert!(size_of::<Int32>() == 4);
const _: () = assert!(size_of::<Int64>() == 8);
const _: () = assert!(size_of::<UInt8>() == 1);
const _: () = assert!(size_of::<UInt16>() == 2);
const _: () = assert!(size_of::<UInt32>() == 4);
const _: () = assert!(size_of::<UInt64>() == 8);
const _: () = assert!(size_of::<Char>() == 2);
const _: () = assert!(size_of::<IntPtr>() == size_of::<TypeTag>());
