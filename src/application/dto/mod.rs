pub mod labels;

pub use labels::{DateTextDto, LabelDto, LabelOutcomeDto, LocalizeReportDto};
