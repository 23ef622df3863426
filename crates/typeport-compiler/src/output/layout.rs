//! Output path resolution.

use std::path::{Component, Path, PathBuf};

use tracing::warn;

use typeport_core::SourceLocation;
use typeport_core::utils::to_kebab_case;

/// Extension of generated files.
pub const OUTPUT_EXTENSION: &str = "ts";

/// Where translated types are written.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputLayout {
    pub destination_root: PathBuf,
    /// Marker in source directories; the part after its first occurrence is
    /// mirrored under `destination_root`.
    pub source_root: Option<String>,
}

impl OutputLayout {
    pub fn new(destination_root: impl Into<PathBuf>) -> Self {
        Self {
            destination_root: destination_root.into(),
            source_root: None,
        }
    }

    pub fn source_root(mut self, marker: impl Into<String>) -> Self {
        self.source_root = Some(marker.into());
        self
    }

    /// `destination_root / sub-directory / kebab-stem.ts` for a source file.
    pub fn output_path(&self, location: &SourceLocation) -> PathBuf {
        let file_name = format!(
            "{}.{OUTPUT_EXTENSION}",
            to_kebab_case(location.file_stem())
        );
        self.destination_root
            .join(self.sub_directory(location))
            .join(file_name)
    }

    fn sub_directory(&self, location: &SourceLocation) -> PathBuf {
        let directory = location.directory();

        if let Some(marker) = self.source_root.as_deref().filter(|m| !m.is_empty()) {
            let text = directory.to_string_lossy();
            if let Some((_, after)) = text.split_once(marker) {
                return relative_components(Path::new(after));
            }
            warn!(
                directory = %directory.display(),
                marker,
                "source root marker not found, using classpath-relative directory"
            );
        }

        let relative = directory
            .strip_prefix(&location.root)
            .unwrap_or(Path::new(""));
        relative_components(relative)
    }
}

/// Drop root and prefix components so the path can be joined under another root.
fn relative_components(path: &Path) -> PathBuf {
    path.components()
        .filter(|c| matches!(c, Component::Normal(_) | Component::ParentDir))
        .collect()
}
