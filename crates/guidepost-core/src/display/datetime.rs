//! DateTime display utilities.
//!
//! Wrapper type for formatting completion-log timestamps in a consistent,
//! human-readable form using the system timezone.

use std::fmt;

use jiff::{tz::TimeZone, Timestamp};

/// A wrapper around [`Timestamp`] that formats in the system timezone via the
/// `Display` trait.
///
/// # Format
///
/// `YYYY-MM-DD HH:MM:SS TZ` — zero-padded date and 24-hour time with the
/// timezone abbreviation (e.g. UTC, EST, JST).
pub struct LocalDateTime<'a>(pub &'a Timestamp);

impl<'a> fmt::Display for LocalDateTime<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.0
                .to_zoned(TimeZone::system())
                .strftime("%Y-%m-%d %H:%M:%S %Z")
        )
    }
}
