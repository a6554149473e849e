mod format_date;
mod format_label;
mod format_labels;
mod localize;
mod service;

pub use format_date::FormatDateQuery;
pub use format_label::FormatLabelQuery;
pub use format_labels::FormatLabelsQuery;
pub use localize::LocalizeOptions;
pub use service::LabelQueryService;
