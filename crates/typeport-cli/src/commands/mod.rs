pub mod dump;
pub mod model_loader;
pub mod prompt;
pub mod search;
pub mod translate;

#[cfg(test)]
mod dump_tests;
#[cfg(test)]
mod test_utils;

use std::fmt::Display;
use std::path::Path;

use typeport_compiler::OutputLayout;

/// Errors surfaced by command handlers.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("classpath is empty: pass at least one source root with -p")]
    EmptyClasspath,

    #[error(transparent)]
    Model(#[from] typeport_java::Error),

    #[error(transparent)]
    Compile(#[from] typeport_compiler::Error),

    #[error(transparent)]
    Seed(#[from] typeport_compiler::SeedError),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to serialize output: {0}")]
    Json(#[from] serde_json::Error),
}

/// Report `err` and exit with status 1.
pub fn fail(err: impl Display) -> ! {
    eprintln!("error: {}", err);
    std::process::exit(1);
}

/// Layout for `-o DIR [--source-root MARKER]`; `None` prints instead.
pub fn output_layout(output: Option<&Path>, marker: Option<&str>) -> Option<OutputLayout> {
    let layout = OutputLayout::new(output?);
    Some(match marker {
        Some(marker) => layout.source_root(marker),
        None => layout,
    })
}
