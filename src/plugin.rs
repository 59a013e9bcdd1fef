//! Build hook surface
//!
//! A host build tool drives a hook through two callbacks, in order:
//! `config_resolved` once its configuration is final, then `close_bundle`
//! after every artifact has been emitted. `VersionJsonPlugin` resolves its
//! output directory in the first and writes the version file in the second.

use crate::io::version_file::write_version_file;
use crate::models::{HostConfig, VersionOptions};
use crate::services::collect::collect;
use crate::services::revision::{GitRevision, RevisionSource};
use crate::{Error, Result};
use std::path::{Path, PathBuf};

/// Which host modes a hook participates in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyMode {
    /// Production builds only.
    Build,
    /// Development / watch server only. No hook here uses it; hosts match on it.
    Serve,
}

/// Lifecycle callbacks a host invokes on a hook.
pub trait BuildHook {
    fn name(&self) -> &'static str;

    fn apply(&self) -> ApplyMode;

    /// Called once per run when the host's configuration is final.
    fn config_resolved(&mut self, config: &HostConfig);

    /// Called once per run after all artifacts are written.
    fn close_bundle(&mut self) -> Result<PathBuf>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HookState {
    Unconfigured,
    Configured { output_dir: PathBuf },
    Completed { path: PathBuf },
}

/// Join the host output directory with an optional subdirectory.
#[must_use]
pub fn resolve_output_dir(config: &HostConfig, subdirectory: Option<&str>) -> PathBuf {
    let out_dir = config
        .out_dir
        .clone()
        .unwrap_or_else(|| PathBuf::from(HostConfig::DEFAULT_OUT_DIR));

    match subdirectory {
        Some(sub) => out_dir.join(sub),
        None => out_dir,
    }
}

/// Writes `version.json` (or the configured file name) at the end of a build.
pub struct VersionJsonPlugin {
    options: VersionOptions,
    revisions: Box<dyn RevisionSource>,
    state: HookState,
}

/// Construct the hook with the given options.
#[must_use]
pub fn version_json_plugin(options: VersionOptions) -> VersionJsonPlugin {
    VersionJsonPlugin::new(options)
}

impl VersionJsonPlugin {
    pub const NAME: &'static str = "buildstamp:version-json";
    pub const APPLY: ApplyMode = ApplyMode::Build;

    #[must_use]
    pub fn new(options: VersionOptions) -> Self {
        Self {
            options,
            revisions: Box::new(GitRevision),
            state: HookState::Unconfigured,
        }
    }

    /// Replace the revision lookup (defaults to running git).
    #[must_use]
    pub fn with_revision_source<R: RevisionSource + 'static>(mut self, source: R) -> Self {
        self.revisions = Box::new(source);
        self
    }

    #[must_use]
    pub fn options(&self) -> &VersionOptions {
        &self.options
    }

    #[must_use]
    pub fn state(&self) -> &HookState {
        &self.state
    }

    /// Directory the file will be written to, once configured.
    #[must_use]
    pub fn output_dir(&self) -> Option<&Path> {
        match &self.state {
            HookState::Configured { output_dir } => Some(output_dir),
            _ => None,
        }
    }

    fn generate(&self, output_dir: &Path) -> Result<PathBuf> {
        let data = collect(&self.options, self.revisions.as_ref())?;
        let path = write_version_file(
            output_dir,
            &self.options.file_name,
            &data,
            self.options.pretty,
        )?;
        Ok(path)
    }
}

impl BuildHook for VersionJsonPlugin {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn apply(&self) -> ApplyMode {
        Self::APPLY
    }

    fn config_resolved(&mut self, config: &HostConfig) {
        let output_dir = resolve_output_dir(config, self.options.output_subdirectory.as_deref());
        log::debug!("{}: output directory {}", Self::NAME, output_dir.display());
        self.state = HookState::Configured { output_dir };
    }

    fn close_bundle(&mut self) -> Result<PathBuf> {
        let HookState::Configured { output_dir } = &self.state else {
            return Err(Error::NotConfigured);
        };

        let path = self
            .generate(output_dir)
            .map_err(|e| Error::Hook(Box::new(e)))?;

        self.state = HookState::Completed { path: path.clone() };
        Ok(path)
    }
}
