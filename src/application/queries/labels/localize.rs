use super::LabelQueryService;
use crate::{
    application::dto::LocalizeReportDto,
    domain::{
        errors::DomainError,
        timestamp::{TimestampDocument, TimestampElement, UtcOffset},
    },
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LocalizeOptions {
    pub utc_offset: Option<UtcOffset>,
    pub pad_minutes: Option<bool>,
}

impl LabelQueryService {
    /// Rewrites the text of every timestamp element in `document` to its local label.
    ///
    /// Elements are handled independently: one without a usable timestamp is
    /// left untouched and counted as skipped. Labels depend only on the
    /// element's timestamp attribute, so repeating the pass changes nothing.
    pub fn localize_document(
        &self,
        document: &mut dyn TimestampDocument,
        options: LocalizeOptions,
    ) -> LocalizeReportDto {
        let formatter = self.formatter(options.pad_minutes);
        let mut report = LocalizeReportDto::default();

        document.visit_timestamps(&mut |element: &mut dyn TimestampElement| {
            let rendered = match element.utc_instant() {
                Some(raw) => self.render(&formatter, raw, options.utc_offset),
                None => Err(DomainError::Parse("element has no timestamp".into())),
            };

            match rendered {
                Ok(label) => {
                    tracing::debug!(label = %label, "timestamp localized");
                    element.set_text(label.as_str());
                    report.formatted += 1;
                }
                Err(err) => {
                    tracing::warn!(error = %err, "skipping timestamp element");
                    report.skipped += 1;
                }
            }
        });

        tracing::info!(
            formatted = report.formatted,
            skipped = report.skipped,
            "document localized"
        );
        report
    }
}
