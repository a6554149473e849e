use crate::domain::timestamp::RenderedLabel;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct LabelDto {
    pub utc_instant: String,
    pub label: String,
}

/// Result for one timestamp of a batch: either a label or the reason it was skipped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct LabelOutcomeDto {
    pub utc_instant: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl LabelOutcomeDto {
    #[must_use]
    pub fn formatted(utc_instant: impl Into<String>, label: RenderedLabel) -> Self {
        Self {
            utc_instant: utc_instant.into(),
            label: Some(label.into_inner()),
            error: None,
        }
    }

    #[must_use]
    pub fn skipped(utc_instant: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            utc_instant: utc_instant.into(),
            label: None,
            error: Some(error.into()),
        }
    }

    #[must_use]
    pub const fn is_formatted(&self) -> bool {
        self.label.is_some()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct LocalizeReportDto {
    pub formatted: usize,
    pub skipped: usize,
}

impl LocalizeReportDto {
    #[must_use]
    pub const fn total(&self) -> usize {
        self.formatted + self.skipped
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DateTextDto {
    pub utc_instant: String,
    pub text: String,
}
