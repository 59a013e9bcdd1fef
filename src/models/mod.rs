//! Data models for hook options, host configuration, and the version record

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// A field that can appear in the version file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Version,
    Revision,
    BuiltAt,
}

impl Field {
    /// Every field, in the order keys are written.
    pub const ALL: [Field; 3] = [Field::Version, Field::Revision, Field::BuiltAt];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Version => "version",
            Field::Revision => "revision",
            Field::BuiltAt => "builtAt",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = crate::Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|field| field.as_str() == value)
            .ok_or_else(|| {
                crate::Error::InvalidInput(format!(
                    "unknown field '{value}' (expected version, revision or builtAt)"
                ))
            })
    }
}

/// Options fixed when the hook is constructed
#[derive(Debug, Clone)]
pub struct VersionOptions {
    pub file_name: String,
    pub output_subdirectory: Option<String>,
    pub fields: Vec<Field>,
    pub fallback_revision: String,
    pub pretty: bool,
    pub manifest_path: PathBuf,
}

impl Default for VersionOptions {
    fn default() -> Self {
        Self {
            file_name: "version.json".to_string(),
            output_subdirectory: None,
            fields: Field::ALL.to_vec(),
            fallback_revision: "unknown".to_string(),
            pretty: true,
            manifest_path: PathBuf::from("package.json"),
        }
    }
}

impl VersionOptions {
    #[must_use]
    pub fn wants(&self, field: Field) -> bool {
        self.fields.contains(&field)
    }
}

/// The parts of the host's resolved build configuration the hook reads
#[derive(Debug, Clone, Default)]
pub struct HostConfig {
    pub out_dir: Option<PathBuf>,
}

impl HostConfig {
    pub const DEFAULT_OUT_DIR: &'static str = "dist";

    #[must_use]
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: Some(out_dir.into()),
        }
    }
}

/// Record written to the version file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revision: Option<String>,
    #[serde(rename = "builtAt", skip_serializing_if = "Option::is_none")]
    pub built_at: Option<String>,
}
