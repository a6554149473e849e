use crate::domain::errors::{DomainError, DomainResult};
use chrono::{
    DateTime, Datelike, TimeZone,
    format::{Item, StrftimeItems},
};
use std::fmt::{Display, Write};

pub const DEFAULT_DATE_PATTERN: &str = "%Y-%m-%d";

const ORDINAL_TOKEN: &str = "{S}";

/// Day of month with its English ordinal suffix: `1st`, `12th`, `22nd`.
#[must_use]
pub fn ordinal_day(day: u32) -> String {
    let suffix = match (day % 100, day % 10) {
        (11..=13, _) => "th",
        (_, 1) => "st",
        (_, 2) => "nd",
        (_, 3) => "rd",
        _ => "th",
    };
    format!("{day}{suffix}")
}

/// strftime-style date rendering where `{S}` expands to [`ordinal_day`].
///
/// # Errors
///
/// Returns [`DomainError::Validation`] if `pattern` has an unknown or
/// unterminated specifier.
pub fn format_date<Tz>(date: &DateTime<Tz>, pattern: &str) -> DomainResult<String>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
        return Err(DomainError::Validation(format!(
            "invalid date pattern '{pattern}'"
        )));
    }

    let mut rendered = String::new();
    write!(rendered, "{}", date.format_with_items(StrftimeItems::new(pattern))).map_err(|_| {
        DomainError::Validation(format!("date pattern '{pattern}' cannot be rendered"))
    })?;

    Ok(rendered.replace(ORDINAL_TOKEN, &ordinal_day(date.day())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    #[test]
    fn ordinal_suffixes() {
        let cases = [
            (1, "1st"),
            (2, "2nd"),
            (3, "3rd"),
            (4, "4th"),
            (11, "11th"),
            (12, "12th"),
            (13, "13th"),
            (21, "21st"),
            (22, "22nd"),
            (23, "23rd"),
            (30, "30th"),
            (31, "31st"),
        ];
        for (day, expected) in cases {
            assert_eq!(ordinal_day(day), expected);
        }
    }

    #[test]
    fn default_pattern() {
        let date = Utc.with_ymd_and_hms(2013, 2, 3, 4, 5, 6).unwrap();
        assert_eq!(format_date(&date, DEFAULT_DATE_PATTERN).unwrap(), "2013-02-03");
    }

    #[test]
    fn ordinal_token_expands() {
        let date = Utc.with_ymd_and_hms(2013, 2, 22, 0, 0, 0).unwrap();
        assert_eq!(format_date(&date, "%B {S}, %Y").unwrap(), "February 22nd, 2013");
    }

    #[test]
    fn uses_the_local_day() {
        let offset = FixedOffset::west_opt(5 * 3600).unwrap();
        let date = Utc
            .with_ymd_and_hms(2013, 3, 1, 2, 0, 0)
            .unwrap()
            .with_timezone(&offset);
        assert_eq!(format_date(&date, "{S}").unwrap(), "28th");
    }

    #[test]
    fn invalid_pattern_is_an_error() {
        let date = Utc.with_ymd_and_hms(2013, 2, 3, 0, 0, 0).unwrap();
        assert!(matches!(
            format_date(&date, "%Y-%"),
            Err(DomainError::Validation(_))
        ));
    }
}
