//! Java source model for typeport.
//!
//! Discovers `.java` files under classpath roots, parses them with the
//! tree-sitter Java grammar, and resolves type names into a
//! [`typeport_core::Model`]:
//!
//! - `syntax` - per-file extraction from the CST
//! - `resolve` - package/import/nesting-aware name resolution
//!
//! ```ignore
//! use typeport_java::JavaModelBuilder;
//!
//! let model = JavaModelBuilder::new().root("src/main/java").build()?;
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use std::fs;
use std::path::{Path, PathBuf};

use arborium_tree_sitter as tree_sitter;
use tracing::{debug, info, warn};

use typeport_core::{Model, SourceLocation};

mod resolve;
mod syntax;

#[cfg(test)]
mod lib_tests;

use resolve::ParsedFile;

/// Errors that can occur while building a Java source model.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("classpath root not found: {}", .0.display())]
    MissingRoot(PathBuf),

    #[error("invalid classpath pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error("failed to scan classpath: {0}")]
    Scan(#[from] glob::GlobError),

    #[error("failed to read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to load the Java grammar: {0}")]
    Language(#[from] tree_sitter::LanguageError),

    #[error("parser produced no tree for '{}'", .0.display())]
    Parse(PathBuf),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Builds a `Model` from classpath roots and in-memory sources.
#[derive(Debug, Default)]
pub struct JavaModelBuilder {
    roots: Vec<PathBuf>,
    sources: Vec<(SourceLocation, String)>,
}

impl JavaModelBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a classpath root. A directory contributes every `.java` file below
    /// it; a single file contributes itself.
    pub fn root(mut self, path: impl Into<PathBuf>) -> Self {
        self.roots.push(path.into());
        self
    }

    pub fn roots<I, P>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.roots.extend(paths.into_iter().map(Into::into));
        self
    }

    /// Add a source that does not live on disk.
    pub fn source(mut self, location: SourceLocation, text: impl Into<String>) -> Self {
        self.sources.push((location, text.into()));
        self
    }

    pub fn build(self) -> Result<Model> {
        let mut inputs = Vec::new();
        for root in &self.roots {
            for file in discover(root)? {
                let text = fs::read_to_string(&file).map_err(|source| Error::Read {
                    path: file.clone(),
                    source,
                })?;
                inputs.push((SourceLocation::new(root, file), text));
            }
        }
        inputs.extend(self.sources);

        info!(files = inputs.len(), "building source model");
        let mut parser = java_parser()?;
        let mut files = Vec::with_capacity(inputs.len());
        for (location, text) in inputs {
            let tree = parser
                .parse(&text, None)
                .ok_or_else(|| Error::Parse(location.file.clone()))?;
            if tree.root_node().has_error() {
                warn!(file = %location.file.display(), "syntax errors, model may be incomplete");
            }
            let syntax = syntax::extract(&tree, &text);
            debug!(
                file = %location.file.display(),
                types = syntax.types.len(),
                "parsed"
            );
            files.push(ParsedFile { location, syntax });
        }

        let model = resolve::build_model(&files);
        info!(declarations = typeport_core::SourceModel::len(&model), "source model ready");
        Ok(model)
    }
}

/// Model a single in-memory compilation unit.
pub fn parse_source(file_name: &str, text: &str) -> Result<Model> {
    JavaModelBuilder::new()
        .source(SourceLocation::new("", file_name), text)
        .build()
}

fn java_parser() -> Result<tree_sitter::Parser> {
    let language: tree_sitter::Language = arborium_java::language().into();
    let mut parser = tree_sitter::Parser::new();
    parser.set_language(&language)?;
    Ok(parser)
}

/// All `.java` files under `root`, sorted for a deterministic model.
fn discover(root: &Path) -> Result<Vec<PathBuf>> {
    if root.is_file() {
        return Ok(vec![root.to_path_buf()]);
    }
    if !root.is_dir() {
        return Err(Error::MissingRoot(root.to_path_buf()));
    }

    let root_pattern = glob::Pattern::escape(&root.to_string_lossy());
    let pattern = format!("{}/**/*.java", root_pattern.trim_end_matches('/'));
    let mut files = Vec::new();
    for entry in glob::glob(&pattern)? {
        files.push(entry?);
    }
    files.sort();
    Ok(files)
}
