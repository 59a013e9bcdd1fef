//! Metadata collection for the version file

use crate::models::{Field, VersionData, VersionOptions};
use crate::services::manifest::read_manifest_version;
use crate::services::revision::{RevisionSource, revision_or};
use crate::services::timestamp::built_at_now;
use crate::Result;

/// Compute every field selected in `options`, in canonical order.
///
/// Unselected fields are skipped entirely, so a build that does not ask for
/// `version` needs no manifest on disk.
pub fn collect(options: &VersionOptions, revisions: &dyn RevisionSource) -> Result<VersionData> {
    let mut data = VersionData::default();

    for field in Field::ALL {
        if !options.wants(field) {
            continue;
        }
        match field {
            Field::Version => {
                data.version = Some(read_manifest_version(&options.manifest_path)?);
            }
            Field::Revision => {
                data.revision = Some(revision_or(revisions, &options.fallback_revision));
            }
            Field::BuiltAt => {
                data.built_at = Some(built_at_now());
            }
        }
    }

    Ok(data)
}
