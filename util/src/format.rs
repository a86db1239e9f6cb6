//! Timestamp formatting boundary.
//!
//! Timestamps are persisted as absolute UTC instants. The fixed UTC+7
//! (Asia/Bangkok) offset the deployment reports in is applied here, at the
//! formatting boundary, and nowhere else.

use chrono::{DateTime, FixedOffset, SecondsFormat, Utc};

/// Display offset for recorded timestamps, in seconds east of UTC.
pub const DISPLAY_OFFSET_SECS: i32 = 7 * 3600;

/// Renders a UTC instant as an RFC 3339 string in the UTC+7 display zone.
pub fn to_display_rfc3339(instant: DateTime<Utc>) -> String {
    let offset = FixedOffset::east_opt(DISPLAY_OFFSET_SECS).expect("valid fixed offset");
    instant
        .with_timezone(&offset)
        .to_rfc3339_opts(SecondsFormat::Secs, false)
}
