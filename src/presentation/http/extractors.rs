// src/presentation/http/extractors.rs
use crate::{application::error::ApplicationError, domain::timestamp::UtcOffset};
use axum::{extract::FromRequestParts, http::request::Parts};

use super::error::HttpError;

/// Request header carrying the viewer's offset from UTC, in minutes or `±HH:MM`.
pub const UTC_OFFSET_HEADER: &str = "x-utc-offset";

/// The viewer's timezone offset, when the client supplied one.
#[derive(Debug, Clone, Copy)]
pub struct ViewerOffset(pub Option<UtcOffset>);

impl<S: Send + Sync> FromRequestParts<S> for ViewerOffset {
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Some(value) = parts.headers.get(UTC_OFFSET_HEADER) else {
            return Ok(Self(None));
        };

        let value = value.to_str().map_err(|_| {
            HttpError::from_error(ApplicationError::validation(format!(
                "{UTC_OFFSET_HEADER} header is not valid text"
            )))
        })?;

        UtcOffset::parse(value)
            .map(|offset| Self(Some(offset)))
            .map_err(|err| HttpError::from_error(err.into()))
    }
}
