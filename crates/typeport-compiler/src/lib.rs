//! typeport compiler: type closure translation and TypeScript emission.
//!
//! This crate turns a seed declaration of a `SourceModel` into TypeScript:
//! - `registry` - run-scoped memo of translated types, breaks cycles
//! - `translate` - closure walker and type name mapper
//! - `typegen` - declaration and import rendering
//! - `output` - output paths, file grouping, import linking, writing
//! - `seed` - seed lookup by name query

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use std::path::PathBuf;

mod invariants;
pub mod output;
pub mod registry;
pub mod seed;
pub mod translate;
pub mod typegen;

#[cfg(test)]
pub mod test_utils;

pub use output::{Linker, OutputGroup, OutputLayout, WriteMode, write_group};
pub use registry::{
    EnumValue, Field, Registry, Slot, TranslatedEnum, TranslatedInterface, TranslatedType,
};
pub use seed::SeedError;
pub use translate::{Translator, map_type};

/// Errors that can occur while translating and writing output.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to write '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error(transparent)]
    Seed(#[from] SeedError),
}

/// Result type for translation operations.
pub type Result<T> = std::result::Result<T, Error>;
