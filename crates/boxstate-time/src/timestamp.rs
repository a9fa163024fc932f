use crate::TimestampError;
use chrono::{DateTime, Datelike, SecondsFormat, Timelike, Utc};

/// Placeholder the runtime reports for a timestamp field that was never set.
pub const DOCKER_TIMESTAMP_ZERO: &str = "0001-01-01T00:00:00Z";

/// A normalized runtime timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Timestamp {
    /// Absent, empty, or the zero sentinel.
    Unset,
    /// An absolute instant, offset-independent.
    At(DateTime<Utc>),
}

impl Timestamp {
    pub fn is_set(&self) -> bool {
        matches!(self, Timestamp::At(_))
    }

    pub fn instant(&self) -> Option<DateTime<Utc>> {
        match self {
            Timestamp::Unset => None,
            Timestamp::At(instant) => Some(*instant),
        }
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(instant: DateTime<Utc>) -> Self {
        Timestamp::At(instant)
    }
}

/// Parse a runtime-reported timestamp.
///
/// `None`, blank strings, and the zero sentinel are `Unset`. Anything else must
/// be an RFC 3339 date-time carrying either a `Z` suffix or a `±HH:MM` offset;
/// fractional seconds up to nanosecond precision are accepted. The instant is
/// converted to UTC so later comparisons do not depend on the reported offset.
pub fn parse_timestamp(raw: Option<&str>) -> Result<Timestamp, TimestampError> {
    let Some(raw) = raw.map(str::trim) else {
        return Ok(Timestamp::Unset);
    };
    if raw.is_empty() || raw == DOCKER_TIMESTAMP_ZERO {
        return Ok(Timestamp::Unset);
    }

    let parsed = DateTime::parse_from_rfc3339(raw).map_err(|source| TimestampError::Malformed {
        raw: raw.to_owned(),
        source,
    })?;
    let instant = parsed.with_timezone(&Utc);

    // Some runtimes spell the sentinel with a fractional part.
    if is_zero_instant(&instant) {
        return Ok(Timestamp::Unset);
    }
    Ok(Timestamp::At(instant))
}

/// Whether `raw` carries a real timestamp (not absent, blank, or the sentinel).
pub fn is_timestamp_set(raw: Option<&str>) -> Result<bool, TimestampError> {
    Ok(parse_timestamp(raw)?.is_set())
}

/// Render an instant the way the runtime does: UTC, `Z` suffix, nanoseconds.
pub fn format_timestamp(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Nanos, true)
}

fn is_zero_instant(instant: &DateTime<Utc>) -> bool {
    instant.year() == 1
        && instant.ordinal() == 1
        && instant.num_seconds_from_midnight() == 0
        && instant.nanosecond() == 0
}
