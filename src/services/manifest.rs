//! Project manifest reading

use crate::{Error, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Read the `version` string from a JSON manifest such as `package.json`.
///
/// The value is returned verbatim; no semver validation is applied.
pub fn read_manifest_version<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    let display = path.display().to_string();

    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(Error::ManifestNotFound { path: display });
        }
        Err(e) => return Err(Error::Io(e)),
    };

    let manifest: serde_json::Value = serde_json::from_str(&text)
        .map_err(|e| Error::InvalidManifest(format!("{display}: {e}")))?;

    match manifest.get("version").and_then(serde_json::Value::as_str) {
        Some(version) if !version.is_empty() => Ok(version.to_string()),
        _ => Err(Error::VersionFieldMissing { path: display }),
    }
}
