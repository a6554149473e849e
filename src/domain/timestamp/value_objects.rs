use crate::domain::errors::{DomainError, DomainResult};
use chrono::{DateTime, FixedOffset, NaiveDateTime, Utc};
use std::{fmt, str::FromStr};

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// An absolute point in time, as carried by a timestamp element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UtcInstant(DateTime<Utc>);

impl UtcInstant {
    /// Parse an RFC 3339 timestamp (any offset, normalized to UTC) or an
    /// ISO-8601 date-time without offset, which is read as UTC.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::Parse`] for empty or unrecognized input.
    pub fn parse(value: &str) -> DomainResult<Self> {
        let value = value.trim();
        if value.is_empty() {
            return Err(DomainError::Parse("timestamp is empty".into()));
        }

        if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
            return Ok(Self(parsed.with_timezone(&Utc)));
        }

        NAIVE_FORMATS
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
            .map(|naive| Self(naive.and_utc()))
            .ok_or_else(|| DomainError::Parse(format!("'{value}' is not an ISO-8601 timestamp")))
    }

    #[must_use]
    pub const fn from_datetime(value: DateTime<Utc>) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Wall-clock time of this instant at the given offset.
    #[must_use]
    pub fn at_offset(&self, offset: FixedOffset) -> DateTime<FixedOffset> {
        self.0.with_timezone(&offset)
    }
}

impl From<DateTime<Utc>> for UtcInstant {
    fn from(value: DateTime<Utc>) -> Self {
        Self(value)
    }
}

impl From<UtcInstant> for DateTime<Utc> {
    fn from(value: UtcInstant) -> Self {
        value.0
    }
}

impl FromStr for UtcInstant {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for UtcInstant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.to_rfc3339())
    }
}

/// A viewer's offset from UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UtcOffset(FixedOffset);

impl UtcOffset {
    /// # Errors
    ///
    /// Returns [`DomainError::Validation`] unless `-1440 < minutes < 1440`.
    pub fn from_minutes(minutes: i32) -> DomainResult<Self> {
        minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .map(Self)
            .ok_or_else(|| {
                DomainError::Validation(format!("utc offset {minutes} minutes is out of range"))
            })
    }

    /// Accepts signed minutes east of UTC (`-300`) or `±HH:MM` (`+05:30`).
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::Validation`] for any other shape or an
    /// out-of-range offset.
    pub fn parse(value: &str) -> DomainResult<Self> {
        let value = value.trim();
        if let Ok(minutes) = value.parse::<i32>() {
            return Self::from_minutes(minutes);
        }

        let invalid =
            || DomainError::Validation(format!("'{value}' is not a utc offset (minutes or ±HH:MM)"));

        let (sign, rest) = match value.as_bytes().first() {
            Some(b'+') => (1, &value[1..]),
            Some(b'-') => (-1, &value[1..]),
            _ => return Err(invalid()),
        };
        let (hours, minutes) = rest.split_once(':').ok_or_else(invalid)?;
        let two_digits = |part: &str| part.len() == 2 && part.bytes().all(|b| b.is_ascii_digit());
        if !two_digits(hours) || !two_digits(minutes) {
            return Err(invalid());
        }
        let hours: i32 = hours.parse().map_err(|_| invalid())?;
        let minutes: i32 = minutes.parse().map_err(|_| invalid())?;
        if minutes >= 60 {
            return Err(invalid());
        }

        Self::from_minutes(sign * (hours * 60 + minutes))
    }

    #[must_use]
    pub const fn as_fixed(&self) -> FixedOffset {
        self.0
    }

    #[must_use]
    pub fn minutes(&self) -> i32 {
        self.0.local_minus_utc() / 60
    }
}

impl From<FixedOffset> for UtcOffset {
    fn from(value: FixedOffset) -> Self {
        Self(value)
    }
}

impl From<UtcOffset> for FixedOffset {
    fn from(value: UtcOffset) -> Self {
        value.0
    }
}

impl FromStr for UtcOffset {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn parses_rfc3339_and_normalizes_to_utc() {
        let instant = UtcInstant::parse("2024-03-01T10:30:00+02:00").unwrap();
        assert_eq!(instant.as_datetime().hour(), 8);
        assert_eq!(instant.as_datetime().minute(), 30);
    }

    #[test]
    fn naive_timestamps_are_read_as_utc() {
        let instant = UtcInstant::parse(" 2024-03-01 16:05:09.123 ").unwrap();
        assert_eq!(instant.as_datetime().hour(), 16);
        let short = UtcInstant::parse("2024-03-01T16:05").unwrap();
        assert_eq!(short.as_datetime().minute(), 5);
    }

    #[test]
    fn rejects_garbage() {
        assert!(matches!(UtcInstant::parse("yesterday"), Err(DomainError::Parse(_))));
        assert!(matches!(UtcInstant::parse("   "), Err(DomainError::Parse(_))));
        assert!(matches!(
            UtcInstant::parse("2024-13-01T00:00:00Z"),
            Err(DomainError::Parse(_))
        ));
    }

    #[test]
    fn offset_accepts_minutes_and_clock_notation() {
        assert_eq!(UtcOffset::parse("-300").unwrap().minutes(), -300);
        assert_eq!(UtcOffset::parse("+05:30").unwrap().minutes(), 330);
        assert_eq!(UtcOffset::parse("-09:45").unwrap().minutes(), -585);
        assert_eq!(UtcOffset::parse("0").unwrap().minutes(), 0);
    }

    #[test]
    fn offset_rejects_out_of_range_and_malformed() {
        assert!(UtcOffset::parse("1440").is_err());
        assert!(UtcOffset::parse("+24:00").is_err());
        assert!(UtcOffset::parse("+5:30").is_err());
        assert!(UtcOffset::parse("+05:75").is_err());
        assert!(UtcOffset::parse("+-5:30").is_err());
        assert!(UtcOffset::parse("-+5:30").is_err());
        assert!(UtcOffset::parse("+05:+3").is_err());
        assert!(UtcOffset::parse("EST").is_err());
        assert!(UtcOffset::parse("").is_err());
    }
}
