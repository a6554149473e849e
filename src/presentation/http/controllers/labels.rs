// src/presentation/http/controllers/labels.rs
use crate::application::{
    dto::{DateTextDto, LabelDto, LabelOutcomeDto},
    queries::labels::{FormatDateQuery, FormatLabelQuery, FormatLabelsQuery},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::ViewerOffset;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct FormatLabelsRequest {
    pub timestamps: Vec<String>,
    #[serde(default)]
    pub pad_minutes: Option<bool>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LabelListResponse {
    pub items: Vec<LabelOutcomeDto>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct FormatLabelRequest {
    pub timestamp: String,
    #[serde(default)]
    pub pad_minutes: Option<bool>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct FormatDateRequest {
    pub timestamp: String,
    /// strftime pattern; `{S}` expands to the ordinal day. Defaults to `%Y-%m-%d`.
    #[serde(default)]
    pub format: Option<String>,
}

#[utoipa::path(
    post,
    path = "/api/v1/labels",
    request_body = FormatLabelsRequest,
    params(("x-utc-offset" = Option<String>, Header, description = "Viewer offset from UTC in minutes or ±HH:MM")),
    responses(
        (status = 200, description = "One outcome per timestamp, in request order.", body = LabelListResponse),
        (status = 400, description = "Malformed offset header.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Labels"
)]
#[allow(clippy::missing_errors_doc)]
pub async fn format_labels(
    Extension(state): Extension<HttpState>,
    ViewerOffset(utc_offset): ViewerOffset,
    Json(payload): Json<FormatLabelsRequest>,
) -> HttpResult<Json<LabelListResponse>> {
    let items = state.services.label_queries.format_labels(FormatLabelsQuery {
        utc_instants: payload.timestamps,
        utc_offset,
        pad_minutes: payload.pad_minutes,
    });

    Ok(Json(LabelListResponse { items }))
}

#[utoipa::path(
    post,
    path = "/api/v1/labels/single",
    request_body = FormatLabelRequest,
    params(("x-utc-offset" = Option<String>, Header, description = "Viewer offset from UTC in minutes or ±HH:MM")),
    responses(
        (status = 200, description = "Local time-of-day label.", body = LabelDto),
        (status = 400, description = "Unparseable timestamp or offset.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Labels"
)]
#[allow(clippy::missing_errors_doc)]
pub async fn format_label(
    Extension(state): Extension<HttpState>,
    ViewerOffset(utc_offset): ViewerOffset,
    Json(payload): Json<FormatLabelRequest>,
) -> HttpResult<Json<LabelDto>> {
    state
        .services
        .label_queries
        .format_label(FormatLabelQuery {
            utc_instant: payload.timestamp,
            utc_offset,
            pad_minutes: payload.pad_minutes,
        })
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/dates/format",
    request_body = FormatDateRequest,
    params(("x-utc-offset" = Option<String>, Header, description = "Viewer offset from UTC in minutes or ±HH:MM")),
    responses(
        (status = 200, description = "Local date text.", body = DateTextDto),
        (status = 400, description = "Unparseable timestamp, offset or pattern.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Labels"
)]
#[allow(clippy::missing_errors_doc)]
pub async fn format_date(
    Extension(state): Extension<HttpState>,
    ViewerOffset(utc_offset): ViewerOffset,
    Json(payload): Json<FormatDateRequest>,
) -> HttpResult<Json<DateTextDto>> {
    state
        .services
        .label_queries
        .format_date(FormatDateQuery {
            utc_instant: payload.timestamp,
            pattern: payload.format,
            utc_offset,
        })
        .into_http()
        .map(Json)
}
