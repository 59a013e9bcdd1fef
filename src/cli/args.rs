//! CLI argument parsing

use crate::models::{Field, HostConfig, VersionOptions};
use std::path::PathBuf;

#[derive(Debug, Clone, Default)]
pub struct StampArgs {
    pub out_dir: Option<String>,
    pub subdir: Option<String>,
    pub file_name: Option<String>,
    pub fields: Option<Vec<Field>>,
    pub fallback_revision: Option<String>,
    pub manifest: Option<String>,
    pub compact: bool,
    pub quiet: bool,
}

impl StampArgs {
    /// Hook options, with defaults for anything not given on the command line.
    #[must_use]
    pub fn to_options(&self) -> VersionOptions {
        let defaults = VersionOptions::default();
        VersionOptions {
            file_name: self.file_name.clone().unwrap_or(defaults.file_name),
            output_subdirectory: self.subdir.clone(),
            fields: self.fields.clone().unwrap_or(defaults.fields),
            fallback_revision: self
                .fallback_revision
                .clone()
                .unwrap_or(defaults.fallback_revision),
            pretty: !self.compact,
            manifest_path: self
                .manifest
                .as_ref()
                .map_or(defaults.manifest_path, PathBuf::from),
        }
    }

    #[must_use]
    pub fn host_config(&self) -> HostConfig {
        HostConfig {
            out_dir: self.out_dir.as_ref().map(PathBuf::from),
        }
    }
}

/// Parse command line arguments (`args[0]` is the program name)
pub fn parse_args(args: &[String]) -> Result<StampArgs, String> {
    let mut stamp_args = StampArgs::default();
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "--out-dir" => {
                stamp_args.out_dir =
                    Some(take_value(args, &mut i, "--out-dir requires a directory")?);
            }
            "--subdir" => {
                stamp_args.subdir = Some(take_value(args, &mut i, "--subdir requires a value")?);
            }
            "--file-name" => {
                let name = take_value(args, &mut i, "--file-name requires a value")?;
                if name.is_empty() {
                    return Err("--file-name must not be empty".to_string());
                }
                stamp_args.file_name = Some(name);
            }
            "--fields" => {
                let list = take_value(args, &mut i, "--fields requires a value")?;
                stamp_args.fields = Some(parse_fields(&list)?);
            }
            "--fallback-revision" => {
                stamp_args.fallback_revision =
                    Some(take_value(args, &mut i, "--fallback-revision requires a value")?);
            }
            "--manifest" => {
                stamp_args.manifest =
                    Some(take_value(args, &mut i, "--manifest requires a file path")?);
            }
            "--compact" => {
                stamp_args.compact = true;
            }
            "--quiet" => {
                stamp_args.quiet = true;
            }
            arg if !arg.starts_with("--") => {
                return Err(format!("Unexpected argument: {arg}"));
            }
            _ => return Err(format!("Unknown option: {}", args[i])),
        }
        i += 1;
    }

    Ok(stamp_args)
}

/// Parse a comma-separated field list such as `version,builtAt`
pub fn parse_fields(list: &str) -> Result<Vec<Field>, String> {
    let mut fields = Vec::new();
    for name in list.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        let field = name.parse::<Field>().map_err(|e| e.to_string())?;
        if !fields.contains(&field) {
            fields.push(field);
        }
    }
    Ok(fields)
}

fn take_value(args: &[String], i: &mut usize, missing: &str) -> Result<String, String> {
    *i += 1;
    args.get(*i).cloned().ok_or_else(|| missing.to_string())
}
