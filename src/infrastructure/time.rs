use crate::application::ports::time::TimeZoneProvider;
use crate::domain::timestamp::UtcOffset;
use chrono::{DateTime, Local, Utc};

/// Timezone of the machine running the process.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemTimeZone;

impl TimeZoneProvider for SystemTimeZone {
    fn offset_at(&self, instant: &DateTime<Utc>) -> UtcOffset {
        UtcOffset::from(*instant.with_timezone(&Local).offset())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FixedTimeZone(UtcOffset);

impl FixedTimeZone {
    #[must_use]
    pub const fn new(offset: UtcOffset) -> Self {
        Self(offset)
    }
}

impl TimeZoneProvider for FixedTimeZone {
    fn offset_at(&self, _instant: &DateTime<Utc>) -> UtcOffset {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_timezone_ignores_the_instant() {
        let offset = UtcOffset::from_minutes(330).unwrap();
        let tz = FixedTimeZone::new(offset);
        assert_eq!(tz.offset_at(&Utc::now()), offset);
        assert_eq!(tz.offset_at(&DateTime::<Utc>::MIN_UTC), offset);
    }

    #[test]
    fn timezones_are_debuggable() {
        let offset = UtcOffset::from_minutes(-300).unwrap();
        assert_eq!(format!("{SystemTimeZone:?}"), "SystemTimeZone");
        assert!(format!("{:?}", FixedTimeZone::new(offset)).starts_with("FixedTimeZone("));
    }

    #[test]
    fn system_timezone_matches_chrono_local() {
        let now = Utc::now();
        let expected = now.with_timezone(&Local).offset().local_minus_utc() / 60;
        assert_eq!(SystemTimeZone.offset_at(&now).minutes(), expected);
    }
}
