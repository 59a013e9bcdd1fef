//! Version file serialization and writing
//!
//! The file is a flat JSON object with the keys `version`, `revision` and
//! `builtAt` in that order, each present only when it was collected.

use crate::VersionData;
use std::fs;
use std::io::{Error, Result};
use std::path::{Path, PathBuf};

/// Serialize a record, pretty (two-space indent) or compact.
pub fn render_version_json(data: &VersionData, pretty: bool) -> Result<String> {
    let text = if pretty {
        serde_json::to_string_pretty(data)
    } else {
        serde_json::to_string(data)
    };
    text.map_err(Error::other)
}

/// Write `data` to `<dir>/<file_name>`, creating `dir` (and parents) if needed.
///
/// An existing file is overwritten. Returns the path written.
pub fn write_version_file(
    dir: &Path,
    file_name: &str,
    data: &VersionData,
    pretty: bool,
) -> Result<PathBuf> {
    fs::create_dir_all(dir)?;

    let text = render_version_json(data, pretty)?;
    let file_path = dir.join(file_name);
    fs::write(&file_path, text)?;

    log::info!("version file written: {}", file_path.display());
    Ok(file_path)
}
