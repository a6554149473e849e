// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{ports::time::TimeZoneProvider, queries::labels::LabelQueryService},
    domain::timestamp::LabelOptions,
};

pub struct ApplicationServices {
    pub label_queries: Arc<LabelQueryService>,
}

impl ApplicationServices {
    #[must_use]
    pub fn new(timezone: Arc<dyn TimeZoneProvider>, options: LabelOptions) -> Self {
        let label_queries = Arc::new(LabelQueryService::new(timezone, options));

        Self { label_queries }
    }
}
