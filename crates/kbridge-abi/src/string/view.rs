//! Bounds-checked views over runtime-owned strings.

use core::marker::PhantomData;
use core::ptr::{self, NonNull};

use kbridge_core::{Char, Int32, TypeTag};

use super::layout::ManagedString;

/// Code unit returned for out-of-range reads.
pub const NULL_CHAR: Char = 0;

/// Read-only view of a managed string.
///
/// Holds the runtime's pointer rather than a reference so the trailing code
/// units stay reachable.
#[derive(Clone, Copy)]
pub struct StringRef<'a> {
    ptr: NonNull<ManagedString>,
    _marker: PhantomData<&'a ManagedString>,
}

/// Mutable view of a managed string. Code units can be overwritten; the
/// length cannot change.
pub struct StringMut<'a> {
    ptr: NonNull<ManagedString>,
    _marker: PhantomData<&'a mut ManagedString>,
}

/// Map a caller index onto the unit buffer, or `None` when out of range.
#[inline]
fn checked_index(length: Int32, index: Int32) -> Option<usize> {
    if index < 0 || index >= length {
        None
    } else {
        Some(index as usize)
    }
}

/// Address of code unit `index`.
///
/// # Safety
/// `ptr` must point at a live managed string and `index` must be below its
/// length.
#[inline]
unsafe fn unit_ptr(ptr: NonNull<ManagedString>, index: usize) -> *mut Char {
    unsafe { ptr::addr_of_mut!((*ptr.as_ptr()).first_char).add(index) }
}

/// Read code unit `index`, or `0` if `index` is outside `0..length`.
pub fn get_char(text: StringRef<'_>, index: Int32) -> Char {
    let length = text.length();
    let Some(i) = checked_index(length, index) else {
        log::trace!("get_char: index {index} out of range for length {length}");
        return NULL_CHAR;
    };
    // SAFETY: `i < length`, and the view guarantees `length` readable units.
    unsafe { unit_ptr(text.ptr, i).read() }
}

/// Overwrite code unit `index` with `value`. Out-of-range indices are ignored.
pub fn set_char(text: &mut StringMut<'_>, index: Int32, value: Char) {
    let length = text.length();
    let Some(i) = checked_index(length, index) else {
        log::trace!("set_char: index {index} out of range for length {length}, skipped");
        return;
    };
    // SAFETY: `i < length`, and the exclusive view guarantees writable units.
    unsafe { unit_ptr(text.ptr, i).write(value) }
}

impl<'a> StringRef<'a> {
    /// # Safety
    /// `ptr` must point at a managed string laid out as [`ManagedString`],
    /// with `length` code units readable after the header, and nothing may
    /// write to it for `'a` except through this crate's views.
    pub unsafe fn from_ptr(ptr: NonNull<ManagedString>) -> Self {
        Self {
            ptr,
            _marker: PhantomData,
        }
    }

    /// Like [`from_ptr`](Self::from_ptr); returns `None` for null.
    ///
    /// # Safety
    /// Same as [`from_ptr`](Self::from_ptr) when `ptr` is non-null.
    pub unsafe fn from_raw(ptr: *const ManagedString) -> Option<Self> {
        NonNull::new(ptr.cast_mut()).map(|p| unsafe { Self::from_ptr(p) })
    }

    pub fn as_ptr(self) -> *const ManagedString {
        self.ptr.as_ptr()
    }

    /// Raw length as stored by the runtime.
    pub fn length(self) -> Int32 {
        // SAFETY: the header is always readable through a live view.
        unsafe { ptr::addr_of!((*self.ptr.as_ptr()).length).read() }
    }

    /// Number of code units.
    pub fn len(self) -> usize {
        self.length().max(0) as usize
    }

    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// Opaque header word. Preserved, never interpreted.
    pub fn type_tag(self) -> TypeTag {
        // SAFETY: see `length`.
        unsafe { ptr::addr_of!((*self.ptr.as_ptr()).type_tag).read() }
    }

    pub fn get_char(self, index: Int32) -> Char {
        get_char(self, index)
    }

    pub fn units(self) -> Units<'a> {
        Units {
            text: self,
            next: 0,
            end: self.len(),
        }
    }

    #[cfg(feature = "std")]
    pub fn to_units(self) -> Vec<Char> {
        self.units().collect()
    }
}

impl<'a> StringMut<'a> {
    /// # Safety
    /// Same as [`StringRef::from_ptr`], and the caller must have exclusive
    /// access to the code units for `'a`.
    pub unsafe fn from_ptr(ptr: NonNull<ManagedString>) -> Self {
        Self {
            ptr,
            _marker: PhantomData,
        }
    }

    /// Like [`from_ptr`](Self::from_ptr); returns `None` for null.
    ///
    /// # Safety
    /// Same as [`from_ptr`](Self::from_ptr) when `ptr` is non-null.
    pub unsafe fn from_raw(ptr: *mut ManagedString) -> Option<Self> {
        NonNull::new(ptr).map(|p| unsafe { Self::from_ptr(p) })
    }

    /// Reborrow as a read-only view.
    pub fn as_view(&self) -> StringRef<'_> {
        StringRef {
            ptr: self.ptr,
            _marker: PhantomData,
        }
    }

    pub fn as_mut_ptr(&mut self) -> *mut ManagedString {
        self.ptr.as_ptr()
    }

    pub fn length(&self) -> Int32 {
        self.as_view().length()
    }

    pub fn len(&self) -> usize {
        self.as_view().len()
    }

    pub fn is_empty(&self) -> bool {
        self.as_view().is_empty()
    }

    pub fn get_char(&self, index: Int32) -> Char {
        get_char(self.as_view(), index)
    }

    pub fn set_char(&mut self, index: Int32, value: Char) {
        set_char(self, index, value)
    }
}

impl core::fmt::Debug for StringRef<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("StringRef")
            .field("ptr", &self.ptr)
            .field("length", &self.length())
            .finish()
    }
}

impl core::fmt::Debug for StringMut<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("StringMut")
            .field("ptr", &self.ptr)
            .field("length", &self.length())
            .finish()
    }
}

/// Iterator over the code units of a [`StringRef`].
#[derive(Clone, Debug)]
pub struct Units<'a> {
    text: StringRef<'a>,
    next: usize,
    end: usize,
}

impl Iterator for Units<'_> {
    type Item = Char;

    fn next(&mut self) -> Option<Char> {
        if self.next >= self.end {
            return None;
        }
        // SAFETY: `next < end == len`.
        let unit = unsafe { unit_ptr(self.text.ptr, self.next).read() };
        self.next += 1;
        Some(unit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Units<'_> {}
