//! ISO-8601 timestamps in the `2026-01-01T00:00:00.000Z` shape clients expect.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serializer;

pub fn format_iso(at: &DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub fn now_iso() -> String {
    format_iso(&Utc::now())
}

/// `serialize_with` helper for `DateTime<Utc>` fields.
pub fn serialize_iso<S>(at: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format_iso(at))
}
