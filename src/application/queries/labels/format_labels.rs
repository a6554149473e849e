use super::LabelQueryService;
use crate::{application::dto::LabelOutcomeDto, domain::timestamp::UtcOffset};

pub struct FormatLabelsQuery {
    pub utc_instants: Vec<String>,
    pub utc_offset: Option<UtcOffset>,
    pub pad_minutes: Option<bool>,
}

impl LabelQueryService {
    /// Formats every timestamp independently; a malformed one only fails its own entry.
    #[must_use]
    pub fn format_labels(&self, query: FormatLabelsQuery) -> Vec<LabelOutcomeDto> {
        let formatter = self.formatter(query.pad_minutes);

        query
            .utc_instants
            .into_iter()
            .map(|utc_instant| {
                match self.render(&formatter, &utc_instant, query.utc_offset) {
                    Ok(label) => LabelOutcomeDto::formatted(utc_instant, label),
                    Err(err) => {
                        tracing::warn!(utc_instant = %utc_instant, error = %err, "skipping timestamp");
                        let message = err.to_string();
                        LabelOutcomeDto::skipped(utc_instant, message)
                    }
                }
            })
            .collect()
    }
}
