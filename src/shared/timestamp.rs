//! Timestamp helpers
//!
//! Rows store timestamps as fixed-width RFC 3339 text so that lexical
//! ordering in SQL matches chronological ordering. API responses render
//! them with millisecond precision.

use chrono::{DateTime, Utc};
use serde::Serializer;

/// Storage format: always six fractional digits
const STORAGE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6fZ";

/// API format: `2006-01-02T15:04:05.000Z`
const API_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

/// Current time rendered for storage
pub fn now() -> String {
    to_storage(Utc::now())
}

/// Render a timestamp for storage
pub fn to_storage(at: DateTime<Utc>) -> String {
    at.format(STORAGE_FORMAT).to_string()
}

/// Render a timestamp for API responses
pub fn to_api(at: &DateTime<Utc>) -> String {
    at.format(API_FORMAT).to_string()
}

/// `serialize_with` adapter for API timestamps
pub fn serialize_api<S>(at: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&to_api(at))
}
