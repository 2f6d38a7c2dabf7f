use chrono::{DateTime, FixedOffset};

use crate::error::DecodeError;

/// Layout of `created_at`, e.g. `Sat Jun 06 12:09:03 +0000 2020`.
pub const TIMESTAMP_FORMAT: &str = "%a %b %d %H:%M:%S %z %Y";

/// Parses a `created_at` string, keeping its UTC offset.
///
/// ```rust
/// use tweetpack::decode::decode_timestamp;
///
/// let ts = decode_timestamp("Sat Jun 06 12:09:03 +0000 2020").unwrap();
/// assert_eq!(ts.to_rfc3339(), "2020-06-06T12:09:03+00:00");
/// ```
pub fn decode_timestamp(raw: &str) -> Result<DateTime<FixedOffset>, DecodeError> {
    DateTime::parse_from_str(raw, TIMESTAMP_FORMAT)
        .map_err(|_| DecodeError::malformed_timestamp(raw))
}
