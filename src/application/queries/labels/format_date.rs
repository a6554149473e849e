use super::LabelQueryService;
use crate::{
    application::{dto::DateTextDto, error::ApplicationResult},
    domain::timestamp::{DEFAULT_DATE_PATTERN, UtcInstant, UtcOffset, format_date},
};

pub struct FormatDateQuery {
    pub utc_instant: String,
    pub pattern: Option<String>,
    pub utc_offset: Option<UtcOffset>,
}

impl LabelQueryService {
    /// Renders the date at the viewer's offset, `%Y-%m-%d` by default.
    ///
    /// # Errors
    ///
    /// Fails on an unparseable timestamp or an invalid pattern.
    pub fn format_date(&self, query: FormatDateQuery) -> ApplicationResult<DateTextDto> {
        let instant = UtcInstant::parse(&query.utc_instant)?;
        let offset = self.offset_for(&instant, query.utc_offset);
        let pattern = query.pattern.as_deref().unwrap_or(DEFAULT_DATE_PATTERN);
        let text = format_date(&instant.at_offset(offset.as_fixed()), pattern)?;

        Ok(DateTextDto {
            utc_instant: query.utc_instant,
            text,
        })
    }
}
