//! Build timestamp formatting

use chrono::{DateTime, SecondsFormat, Utc};

/// Format an instant as `YYYY-MM-DDTHH:MM:SS.mmmZ`.
#[must_use]
pub fn format_built_at(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[must_use]
pub fn built_at_now() -> String {
    format_built_at(Utc::now())
}
