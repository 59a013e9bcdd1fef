//! Source-control revision lookup

use std::process::Command;

/// Something that can report the short revision of the current checkout.
///
/// `None` means the revision is unavailable; callers substitute a fallback.
pub trait RevisionSource {
    fn short_revision(&self) -> Option<String>;
}

/// Runs `git rev-parse --short HEAD` in the current working directory.
#[derive(Debug, Clone, Copy, Default)]
pub struct GitRevision;

impl RevisionSource for GitRevision {
    fn short_revision(&self) -> Option<String> {
        let output = match Command::new("git")
            .args(["rev-parse", "--short", "HEAD"])
            .output()
        {
            Ok(output) => output,
            Err(e) => {
                log::debug!("git not runnable, using fallback revision: {e}");
                return None;
            }
        };

        if !output.status.success() {
            log::debug!(
                "git rev-parse exited with {}, using fallback revision",
                output.status
            );
            return None;
        }

        let revision = String::from_utf8(output.stdout).ok()?;
        let revision = revision.trim();
        if revision.is_empty() {
            None
        } else {
            Some(revision.to_string())
        }
    }
}

/// A fixed answer, for hosts that already know the revision (or tests).
#[derive(Debug, Clone, Default)]
pub struct StaticRevision(pub Option<String>);

impl RevisionSource for StaticRevision {
    fn short_revision(&self) -> Option<String> {
        self.0.clone()
    }
}

/// Resolve the revision, substituting `fallback` when the source has none.
pub fn revision_or(source: &dyn RevisionSource, fallback: &str) -> String {
    source
        .short_revision()
        .unwrap_or_else(|| fallback.to_string())
}
