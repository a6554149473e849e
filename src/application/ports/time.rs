// src/application/ports/time.rs
use crate::domain::timestamp::UtcOffset;
use chrono::{DateTime, Utc};

/// Source of the local timezone offset that labels are rendered in.
pub trait TimeZoneProvider: Send + Sync {
    /// Offset in effect at `instant`. May differ between instants (DST).
    fn offset_at(&self, instant: &DateTime<Utc>) -> UtcOffset;
}
