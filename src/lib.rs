//! Build Stamp Library
//!
//! A build hook that writes a small JSON file describing the build: the
//! application version from the project manifest, the short git revision,
//! and the build timestamp. Deployed applications read it to tell which
//! build they are running.

pub mod cli;
pub mod io;
pub mod models;
pub mod plugin;
pub mod services;

pub use models::{Field, HostConfig, VersionData, VersionOptions};
pub use plugin::{ApplyMode, BuildHook, VersionJsonPlugin, version_json_plugin};

use std::path::Path;
use std::result;

/// Custom error type for the library
#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    InvalidInput(String),
    ManifestNotFound { path: String },
    VersionFieldMissing { path: String },
    InvalidManifest(String),
    NotConfigured,
    /// A collection or write failure, attributed to the hook.
    Hook(Box<Error>),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O error: {e}"),
            Error::InvalidInput(msg) => write!(f, "Invalid input: {msg}"),
            Error::ManifestNotFound { path } => {
                let name = Path::new(path)
                    .file_name()
                    .map_or_else(|| path.clone(), |n| n.to_string_lossy().to_string());
                write!(f, "{name} not found at {path}")
            }
            Error::VersionFieldMissing { path } => {
                write!(f, "version field not found in {path}")
            }
            Error::InvalidManifest(msg) => write!(f, "Invalid manifest: {msg}"),
            Error::NotConfigured => write!(
                f,
                "{} was not configured: config_resolved must run before close_bundle",
                VersionJsonPlugin::NAME
            ),
            Error::Hook(inner) => write!(
                f,
                "[{}] failed to generate version file: {inner}",
                VersionJsonPlugin::NAME
            ),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            Error::Hook(inner) => Some(inner.as_ref()),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

pub type Result<T> = result::Result<T, Error>;

/// Run both lifecycle steps against `config`, as a host would for one build.
///
/// Returns the path of the written file.
pub fn stamp_build(options: VersionOptions, config: &HostConfig) -> Result<std::path::PathBuf> {
    let mut hook = version_json_plugin(options);
    hook.config_resolved(config);
    hook.close_bundle()
}
