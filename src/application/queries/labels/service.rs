use std::sync::Arc;

use crate::{
    application::ports::TimeZonePort,
    domain::{
        errors::DomainResult,
        timestamp::{LabelOptions, RenderedLabel, TimeFormatter, UtcInstant, UtcOffset},
    },
};

pub struct LabelQueryService {
    pub(super) timezone: Arc<TimeZonePort>,
    pub(super) options: LabelOptions,
}

impl LabelQueryService {
    #[must_use]
    pub fn new(timezone: Arc<TimeZonePort>, options: LabelOptions) -> Self {
        Self { timezone, options }
    }

    #[must_use]
    pub const fn options(&self) -> LabelOptions {
        self.options
    }

    pub(super) fn formatter(&self, pad_minutes: Option<bool>) -> TimeFormatter {
        let options = pad_minutes.map_or(self.options, |pad| self.options.with_pad_minutes(pad));
        TimeFormatter::new(options)
    }

    /// Viewer-supplied offset wins over the configured timezone.
    pub(super) fn offset_for(&self, instant: &UtcInstant, viewer: Option<UtcOffset>) -> UtcOffset {
        viewer.unwrap_or_else(|| self.timezone.offset_at(instant.as_datetime()))
    }

    pub(super) fn render(
        &self,
        formatter: &TimeFormatter,
        utc_instant: &str,
        viewer: Option<UtcOffset>,
    ) -> DomainResult<RenderedLabel> {
        let instant = UtcInstant::parse(utc_instant)?;
        let offset = self.offset_for(&instant, viewer);
        Ok(formatter.render_instant(&instant, offset))
    }
}
