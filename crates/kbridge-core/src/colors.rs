//! ANSI color codes for host-side tool output.
//!
//! Three semantic colors plus reset:
//! - Blue: field and symbol names
//! - Green: values read from memory
//! - Dim: offsets, sizes, addresses

/// ANSI color palette for CLI output.
///
/// Only standard 16-color codes, so output reads on light and dark themes.
#[derive(Clone, Copy, Debug)]
pub struct Colors {
    pub name: &'static str,
    pub value: &'static str,
    pub dim: &'static str,
    pub reset: &'static str,
}

impl Default for Colors {
    fn default() -> Self {
        Self::OFF
    }
}

impl Colors {
    pub const ON: Self = Self {
        name: "\x1b[34m",
        value: "\x1b[32m",
        dim: "\x1b[2m",
        reset: "\x1b[0m",
    };

    pub const OFF: Self = Self {
        name: "",
        value: "",
        dim: "",
        reset: "",
    };

    pub fn new(enabled: bool) -> Self {
        if enabled { Self::ON } else { Self::OFF }
    }

    pub fn is_enabled(&self) -> bool {
        !self.reset.is_empty()
    }

    /// Wrap `text` in the given color code, followed by a reset.
    pub fn paint(&self, code: &'static str, text: impl std::fmt::Display) -> String {
        if code.is_empty() {
            text.to_string()
        } else {
            format!("{code}{text}{}", self.reset)
        }
    }
}
