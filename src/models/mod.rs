mod auth;
mod inventory;
mod product;
mod store;

pub use auth::*;
pub use inventory::*;
pub use product::*;
pub use store::*;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serializer;

/// ISO-8601 with millisecond precision and a `Z` suffix, e.g. `2024-05-01T12:30:00.000Z`.
pub fn to_iso_millis(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub(crate) fn iso_millis<S: Serializer>(ts: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&to_iso_millis(ts))
}

/// Empty query values behave as if the parameter was never sent.
pub(crate) fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
