//! Relative age of a nanosecond epoch timestamp.

use chrono::{DateTime, Utc};

const NANOS_PER_MILLI: i64 = 1_000_000;
const MILLIS_PER_MINUTE: i64 = 60_000;

fn plural(n: i64) -> &'static str {
    if n == 1 {
        ""
    } else {
        "s"
    }
}

/// Age relative to the current wall clock.
pub fn relative_age(timestamp_nanos: i64) -> String {
    relative_age_at(timestamp_nanos, Utc::now())
}

/// Age of `timestamp_nanos` as seen from `now`.
///
/// Buckets: under a minute, minutes, hours, days. Timestamps in the future
/// are reported as "Just now".
pub fn relative_age_at(timestamp_nanos: i64, now: DateTime<Utc>) -> String {
    let then_ms = timestamp_nanos.div_euclid(NANOS_PER_MILLI);
    let minutes = now
        .timestamp_millis()
        .saturating_sub(then_ms)
        .div_euclid(MILLIS_PER_MINUTE);

    if minutes < 1 {
        return "Just now".to_string();
    }
    if minutes < 60 {
        return format!("{} min ago", minutes);
    }

    let hours = minutes / 60;
    if hours < 24 {
        return format!("{} hour{} ago", hours, plural(hours));
    }

    let days = hours / 24;
    format!("{} day{} ago", days, plural(days))
}
