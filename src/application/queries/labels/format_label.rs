use super::LabelQueryService;
use crate::{
    application::{dto::LabelDto, error::ApplicationResult},
    domain::timestamp::UtcOffset,
};

pub struct FormatLabelQuery {
    pub utc_instant: String,
    pub utc_offset: Option<UtcOffset>,
    pub pad_minutes: Option<bool>,
}

impl LabelQueryService {
    /// # Errors
    ///
    /// Fails when the timestamp cannot be parsed.
    pub fn format_label(&self, query: FormatLabelQuery) -> ApplicationResult<LabelDto> {
        let formatter = self.formatter(query.pad_minutes);
        let label = self.render(&formatter, &query.utc_instant, query.utc_offset)?;

        Ok(LabelDto {
            utc_instant: query.utc_instant,
            label: label.into_inner(),
        })
    }
}
