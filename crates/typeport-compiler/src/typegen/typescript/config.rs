//! Configuration types for TypeScript emission.

use typeport_core::Colors;

/// How an enum member without an explicit value is rendered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EnumFallback {
    /// `NAME = "NAME"` - the member's own name as a string value
    #[default]
    QuotedName,
    /// `NAME` - a numeric member
    Bare,
}

/// Configuration for TypeScript emission.
#[derive(Clone, Debug)]
pub struct Config {
    /// Indentation of members inside a declaration body
    pub(crate) indent: String,
    /// Rendering of enum members without a literal value
    pub(crate) enum_fallback: EnumFallback,
    /// Prefix of generated module specifiers
    pub(crate) import_prefix: String,
    /// Color configuration for output
    pub(crate) colors: Colors,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            indent: "  ".to_owned(),
            enum_fallback: EnumFallback::default(),
            import_prefix: "@".to_owned(),
            colors: Colors::OFF,
        }
    }
}

impl Config {
    /// Create a new Config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the member indentation.
    pub fn indent(mut self, value: &str) -> Self {
        self.indent = value.to_owned();
        self
    }

    /// Set how enum members without a literal value are rendered.
    pub fn enum_fallback(mut self, value: EnumFallback) -> Self {
        self.enum_fallback = value;
        self
    }

    /// Set the prefix of generated module specifiers.
    pub fn import_prefix(mut self, value: &str) -> Self {
        self.import_prefix = value.to_owned();
        self
    }

    /// Set whether to use colored output.
    pub fn colored(mut self, enabled: bool) -> Self {
        self.colors = Colors::new(enabled);
        self
    }
}
