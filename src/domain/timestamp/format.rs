use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::timestamp::value_objects::{UtcInstant, UtcOffset};
use chrono::Timelike;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// How hours 0 and 12 are mapped onto the 12-hour clock.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HourStyle {
    /// Hours above 12 wrap and become "pm"; everything else is "am" as-is.
    /// Midnight renders as `0:00 am` and noon as `12:00 am`.
    #[default]
    Legacy,
    /// Midnight renders as `12:00 am` and noon as `12:00 pm`.
    Conventional,
}

impl HourStyle {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Legacy => "legacy",
            Self::Conventional => "conventional",
        }
    }

    fn split(self, hours24: u32) -> (u32, Meridiem) {
        match self {
            Self::Legacy => {
                if hours24 > 12 {
                    (hours24 - 12, Meridiem::Pm)
                } else {
                    (hours24, Meridiem::Am)
                }
            }
            Self::Conventional => {
                let meridiem = if hours24 >= 12 { Meridiem::Pm } else { Meridiem::Am };
                match hours24 % 12 {
                    0 => (12, meridiem),
                    hour => (hour, meridiem),
                }
            }
        }
    }
}

impl fmt::Display for HourStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HourStyle {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "legacy" => Ok(Self::Legacy),
            "conventional" => Ok(Self::Conventional),
            other => Err(DomainError::Validation(format!("unknown hour style '{other}'"))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Meridiem {
    Am,
    Pm,
}

impl Meridiem {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Am => "am",
            Self::Pm => "pm",
        }
    }
}

impl fmt::Display for Meridiem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LabelOptions {
    pub pad_minutes: bool,
    pub hour_style: HourStyle,
}

impl Default for LabelOptions {
    fn default() -> Self {
        Self {
            pad_minutes: true,
            hour_style: HourStyle::Legacy,
        }
    }
}

impl LabelOptions {
    #[must_use]
    pub const fn with_pad_minutes(mut self, pad_minutes: bool) -> Self {
        self.pad_minutes = pad_minutes;
        self
    }

    #[must_use]
    pub const fn with_hour_style(mut self, hour_style: HourStyle) -> Self {
        self.hour_style = hour_style;
        self
    }
}

/// Display text for a timestamp element, e.g. `4:05 pm`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RenderedLabel(String);

impl RenderedLabel {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for RenderedLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<RenderedLabel> for String {
    fn from(value: RenderedLabel) -> Self {
        value.0
    }
}

/// Pure 12-hour time-of-day rendering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimeFormatter {
    options: LabelOptions,
}

impl TimeFormatter {
    #[must_use]
    pub const fn new(options: LabelOptions) -> Self {
        Self { options }
    }

    #[must_use]
    pub const fn options(&self) -> LabelOptions {
        self.options
    }

    /// Render a local wall-clock time.
    #[must_use]
    pub fn render<T: Timelike>(&self, local: &T) -> RenderedLabel {
        let (hour, meridiem) = self.options.hour_style.split(local.hour());
        let minute = local.minute();
        let text = if self.options.pad_minutes {
            format!("{hour}:{minute:02} {meridiem}")
        } else {
            format!("{hour}:{minute} {meridiem}")
        };
        RenderedLabel(text)
    }

    #[must_use]
    pub fn render_instant(&self, instant: &UtcInstant, offset: UtcOffset) -> RenderedLabel {
        self.render(&instant.at_offset(offset.as_fixed()))
    }

    /// Parse `utc_instant` and render it at `offset`.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::Parse`] when `utc_instant` is not a timestamp.
    pub fn format(&self, utc_instant: &str, offset: UtcOffset) -> DomainResult<RenderedLabel> {
        let instant = UtcInstant::parse(utc_instant)?;
        Ok(self.render_instant(&instant, offset))
    }
}
