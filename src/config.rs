// src/config.rs
use crate::application::ports::time::TimeZoneProvider;
use crate::domain::timestamp::{HourStyle, LabelOptions, UtcOffset};
use crate::infrastructure::time::{FixedTimeZone, SystemTimeZone};
use std::{env, sync::Arc};
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    listen_addr: String,
    label_options: LabelOptions,
    local_offset: Option<UtcOffset>,
    allowed_origins: Vec<String>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_listen_addr() -> String {
    "127.0.0.1:8080".into()
}

fn default_allowed_origins() -> Vec<String> {
    vec!["http://localhost:3000".into()]
}

fn parse_flag(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" => Ok(true),
        "0" | "false" | "no" => Ok(false),
        other => Err(ConfigError::Invalid(format!(
            "{key} must be a boolean, got '{other}'"
        ))),
    }
}

impl AppConfig {
    /// Build configuration from environment variables, loading `.env` first.
    /// Every key is optional.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when a present key has a bad value.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// See [`AppConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let listen_addr = lookup("LISTEN_ADDR").unwrap_or_else(default_listen_addr);

        let pad_minutes = lookup("PAD_MINUTES")
            .map(|v| parse_flag("PAD_MINUTES", &v))
            .transpose()?
            .unwrap_or(true);

        let hour_style = lookup("HOUR_STYLE")
            .map(|v| v.parse::<HourStyle>())
            .transpose()
            .map_err(|err| ConfigError::Invalid(format!("HOUR_STYLE: {err}")))?
            .unwrap_or_default();

        let local_offset = lookup("LOCAL_UTC_OFFSET")
            .filter(|v| !v.trim().is_empty())
            .map(|v| UtcOffset::parse(&v))
            .transpose()
            .map_err(|err| ConfigError::Invalid(format!("LOCAL_UTC_OFFSET: {err}")))?;

        let allowed_origins = lookup("ALLOWED_ORIGINS")
            .map(|s| {
                s.split(',')
                    .map(|p| p.trim().to_string())
                    .filter(|p| !p.is_empty())
                    .collect()
            })
            .unwrap_or_else(default_allowed_origins);

        Ok(Self {
            listen_addr,
            label_options: LabelOptions {
                pad_minutes,
                hour_style,
            },
            local_offset,
            allowed_origins,
        })
    }

    #[must_use]
    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    #[must_use]
    pub const fn label_options(&self) -> LabelOptions {
        self.label_options
    }

    #[must_use]
    pub const fn local_offset(&self) -> Option<UtcOffset> {
        self.local_offset
    }

    #[must_use]
    pub fn allowed_origins(&self) -> &[String] {
        &self.allowed_origins
    }

    /// Timezone labels are rendered in when the viewer does not send one:
    /// the configured fixed offset, or else the system timezone.
    #[must_use]
    pub fn timezone(&self) -> Arc<dyn TimeZoneProvider> {
        match self.local_offset {
            Some(offset) => Arc::new(FixedTimeZone::new(offset)),
            None => Arc::new(SystemTimeZone),
        }
    }
}
