//! File grouping and import linking.

use std::path::{Component, Path, PathBuf};

use indexmap::{IndexMap, IndexSet};
use tracing::debug;

use crate::Result;
use crate::registry::{Registry, TranslatedType};
use crate::typegen::typescript::{Config, render_import, render_type};

use super::layout::OUTPUT_EXTENSION;
use super::writer::{WriteMode, write_group};

/// Translated types sharing one output file, in finalization order.
#[derive(Debug)]
pub struct OutputGroup<'r> {
    /// `None` when the run had no output layout.
    pub path: Option<&'r Path>,
    pub members: Vec<&'r TranslatedType>,
}

/// Assembles per-file output from a finished registry.
pub struct Linker<'r> {
    registry: &'r Registry,
    import_root: Option<PathBuf>,
    config: Config,
}

impl<'r> Linker<'r> {
    pub fn new(registry: &'r Registry, config: Config) -> Self {
        Self {
            registry,
            import_root: None,
            config,
        }
    }

    /// Directory module specifiers are computed from. Without one, no
    /// imports are emitted.
    pub fn import_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.import_root = Some(root.into());
        self
    }

    /// Partition translations by output path. Groups are ordered by their
    /// first member.
    pub fn groups(&self) -> Vec<OutputGroup<'r>> {
        let mut groups: IndexMap<Option<&'r Path>, Vec<&'r TranslatedType>> = IndexMap::new();
        for ty in self.registry.translated() {
            groups.entry(ty.output_path()).or_default().push(ty);
        }
        groups
            .into_iter()
            .map(|(path, members)| OutputGroup { path, members })
            .collect()
    }

    /// Import block (if any), then declarations separated by a blank line.
    pub fn render_group(&self, group: &OutputGroup<'_>) -> String {
        let declarations = group
            .members
            .iter()
            .map(|ty| render_type(ty, &self.config))
            .collect::<Vec<_>>()
            .join("\n\n");

        let imports = self.imports(group);
        if imports.is_empty() {
            return declarations;
        }
        format!("{}\n\n{declarations}", imports.join("\n"))
    }

    /// Every translation in finalization order, for console output.
    pub fn render_all(&self) -> String {
        self.registry
            .translated()
            .map(|ty| render_type(ty, &self.config))
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// Write every group that has an output path. Returns the paths written.
    pub fn write(&self, mode: WriteMode) -> Result<Vec<PathBuf>> {
        let mut written = Vec::new();
        for group in self.groups() {
            let Some(path) = group.path else {
                continue;
            };
            write_group(path, &self.render_group(&group), mode)?;
            written.push(path.to_path_buf());
        }
        Ok(written)
    }

    fn imports(&self, group: &OutputGroup<'_>) -> Vec<String> {
        let Some(root) = &self.import_root else {
            return Vec::new();
        };

        let mut lines = IndexSet::new();
        for member in &group.members {
            let TranslatedType::Interface(interface) = member else {
                continue;
            };
            for qualified_name in &interface.imports {
                let Some(target) = self.registry.get(qualified_name) else {
                    debug!(name = %qualified_name, "no output to import");
                    continue;
                };
                let Some(target_path) = target.output_path() else {
                    continue;
                };
                if group.path == Some(target_path) {
                    continue;
                }
                let module = format!(
                    "{}{}",
                    self.config.import_prefix,
                    module_path(target_path, root)
                );
                lines.insert(render_import(target.name(), &module));
            }
        }
        lines.into_iter().collect()
    }
}

/// `path` relative to `root` with `/` separators and no output extension.
pub fn module_path(path: &Path, root: &Path) -> String {
    let path = match path.extension() {
        Some(ext) if ext == OUTPUT_EXTENSION => path.with_extension(""),
        _ => path.to_path_buf(),
    };
    let target: Vec<Component> = path.components().collect();
    let base: Vec<Component> = root
        .components()
        .filter(|c| *c != Component::CurDir)
        .collect();
    let common = target
        .iter()
        .zip(&base)
        .take_while(|(a, b)| a == b)
        .count();

    let mut segments = vec!["..".to_owned(); base.len() - common];
    segments.extend(
        target[common..]
            .iter()
            .filter(|c| **c != Component::CurDir)
            .map(|c| c.as_os_str().to_string_lossy().into_owned()),
    );
    segments.join("/")
}
