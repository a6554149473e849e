// src/application/ports/mod.rs
pub mod time;

pub type TimeZonePort = dyn time::TimeZoneProvider;
