pub mod documents;
pub mod labels;
