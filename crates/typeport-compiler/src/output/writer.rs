//! Group file writing.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use tracing::info;

use crate::{Error, Result};

/// What happens to an existing destination file.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WriteMode {
    /// Keep existing content; new content follows a blank line.
    #[default]
    Append,
    Overwrite,
}

/// Write rendered group content to `path`, creating parent directories.
///
/// Not atomic: a failure part-way through can leave a partial group behind.
pub fn write_group(path: &Path, content: &str, mode: WriteMode) -> Result<()> {
    let io_error = |source: std::io::Error| Error::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(io_error)?;
    }

    let separator = if mode == WriteMode::Append && path.exists() {
        "\n"
    } else {
        ""
    };

    let mut options = OpenOptions::new();
    options.create(true);
    match mode {
        WriteMode::Append => options.append(true),
        WriteMode::Overwrite => options.write(true).truncate(true),
    };
    let mut file = options.open(path).map_err(io_error)?;
    file.write_all(format!("{separator}{content}\n").as_bytes())
        .map_err(io_error)?;

    info!(path = %path.display(), ?mode, "writing");
    Ok(())
}
