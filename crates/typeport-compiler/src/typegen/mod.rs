//! Target-language declaration generation.

pub mod typescript;
