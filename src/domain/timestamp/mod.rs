pub mod date_text;
pub mod document;
pub mod format;
pub mod value_objects;

pub use date_text::{DEFAULT_DATE_PATTERN, format_date, ordinal_day};
pub use document::{TimestampDocument, TimestampElement};
pub use format::{HourStyle, LabelOptions, Meridiem, RenderedLabel, TimeFormatter};
pub use value_objects::{UtcInstant, UtcOffset};
