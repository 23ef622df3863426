//! ANSI color codes for declarations printed to a terminal.
//!
//! - Blue: declaration and type names
//! - Green: enum member values
//! - Dim: keywords and punctuation
//!
//! Output written to files is never colored.

/// ANSI palette. With `Colors::OFF` every code is the empty string, so
/// formatting with it yields plain text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Colors {
    pub blue: &'static str,
    pub green: &'static str,
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
        blue: "\x1b[34m",
        green: "\x1b[32m",
        dim: "\x1b[2m",
        reset: "\x1b[0m",
    };

    pub const OFF: Self = Self {
        blue: "",
        green: "",
        dim: "",
        reset: "",
    };

    pub fn new(enabled: bool) -> Self {
        if enabled { Self::ON } else { Self::OFF }
    }

    pub fn is_enabled(&self) -> bool {
        !self.reset.is_empty()
    }

    /// Keyword such as `export` or `interface`.
    pub fn keyword(&self, text: &str) -> String {
        format!("{}{}{}", self.dim, text, self.reset)
    }

    /// Declaration or type name.
    pub fn name(&self, text: &str) -> String {
        format!("{}{}{}", self.blue, text, self.reset)
    }

    /// Enum member value.
    pub fn value(&self, text: &str) -> String {
        format!("{}{}{}", self.green, text, self.reset)
    }
}
