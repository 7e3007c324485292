//! Drawing sink provided by the managed runtime.
//!
//! Native code hands it either a managed string or a null-terminated byte
//! string. Nothing is returned; the sink is fire-and-forget.

use core::ffi::CStr;

use kbridge_core::{Char, Int32, UInt32};

use crate::string::StringRef;

pub const BLACK: UInt32 = 0x000000;
pub const WHITE: UInt32 = 0xFFFFFF;

/// Text drawn by [`draw_greeting`].
pub const GREETING: &CStr = c"Hello World";

/// Draw commands accepted by the runtime's canvas.
pub trait Canvas {
    fn clear_screen(&mut self, color: UInt32);

    fn draw_char(&mut self, unit: Char, x: Int32, y: Int32, color: UInt32);

    /// Draw a runtime-owned string, passed by reference.
    fn draw_managed(&mut self, text: StringRef<'_>, x: Int32, y: Int32, color: UInt32);

    fn draw_unmanaged(&mut self, text: &CStr, x: Int32, y: Int32, color: UInt32);
}

/// Clear to black and draw [`GREETING`] at (10, 10) in white.
pub fn draw_greeting(canvas: &mut impl Canvas) {
    canvas.clear_screen(BLACK);
    canvas.draw_unmanaged(GREETING, 10, 10, WHITE);
}

#[cfg(feature = "canvas")]
pub use runtime::ExternCanvas;

#[cfg(feature = "canvas")]
mod runtime {
    use core::ffi::{CStr, c_char};

    use kbridge_core::{Char, Int32, UInt32};

    use super::Canvas;
    use crate::string::{ManagedString, StringRef};

    mod externs {
        use super::*;

        #[allow(non_snake_case)]
        unsafe extern "C" {
            pub(super) fn Canvas_ClearScreen(color: UInt32);
            pub(super) fn Canvas_DrawChar(c: Char, x: Int32, y: Int32, color: UInt32);
            pub(super) fn Canvas_DrawString_Managed(
                text: *const ManagedString,
                x: Int32,
                y: Int32,
                color: UInt32,
            );
            pub(super) fn Canvas_DrawString_Unmanaged(
                text: *const c_char,
                x: Int32,
                y: Int32,
                color: UInt32,
            );
        }
    }

    /// The runtime's canvas, reached through its exported `Canvas_*` symbols.
    #[derive(Clone, Copy, Debug, Default)]
    pub struct ExternCanvas;

    impl Canvas for ExternCanvas {
        fn clear_screen(&mut self, color: UInt32) {
            // SAFETY: runtime export; takes plain values.
            unsafe { externs::Canvas_ClearScreen(color) }
        }

        fn draw_char(&mut self, unit: Char, x: Int32, y: Int32, color: UInt32) {
            // SAFETY: runtime export; takes plain values.
            unsafe { externs::Canvas_DrawChar(unit, x, y, color) }
        }

        fn draw_managed(&mut self, text: StringRef<'_>, x: Int32, y: Int32, color: UInt32) {
            // SAFETY: the view keeps the string alive for the call.
            unsafe { externs::Canvas_DrawString_Managed(text.as_ptr(), x, y, color) }
        }

        fn draw_unmanaged(&mut self, text: &CStr, x: Int32, y: Int32, color: UInt32) {
            // SAFETY: `text` is null-terminated and outlives the call.
            unsafe { externs::Canvas_DrawString_Unmanaged(text.as_ptr(), x, y, color) }
        }
    }
}
