//! Time and timestamp helpers.

use chrono::{DateTime, Utc};

/// Instant a device was first stored.
///
/// Always UTC. Stamped once by the service when a device is created and
/// carried unchanged through every later update. Serializes as an RFC 3339
/// string with a `Z` suffix, e.g. `"2024-01-02T03:04:05Z"`.
pub type Timestamp = DateTime<Utc>;

/// Current wall-clock time, used to stamp `created_at`.
#[must_use]
pub fn now() -> Timestamp {
    Utc::now()
}
