// src/presentation/http/controllers/documents.rs
use crate::application::queries::labels::LocalizeOptions;
use crate::infrastructure::document::HtmlDocument;
use crate::presentation::http::error::HttpResult;
use crate::presentation::http::extractors::ViewerOffset;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct LocalizeDocumentRequest {
    pub html: String,
    #[serde(default)]
    pub pad_minutes: Option<bool>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LocalizeDocumentResponse {
    pub html: String,
    pub formatted: usize,
    pub skipped: usize,
}

#[utoipa::path(
    post,
    path = "/api/v1/documents/localize",
    request_body = LocalizeDocumentRequest,
    params(("x-utc-offset" = Option<String>, Header, description = "Viewer offset from UTC in minutes or ±HH:MM")),
    responses(
        (status = 200, description = "Document with every <time datetime> element relabelled.", body = LocalizeDocumentResponse),
        (status = 400, description = "Malformed offset header.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Documents"
)]
#[allow(clippy::missing_errors_doc)]
pub async fn localize_document(
    Extension(state): Extension<HttpState>,
    ViewerOffset(utc_offset): ViewerOffset,
    Json(payload): Json<LocalizeDocumentRequest>,
) -> HttpResult<Json<LocalizeDocumentResponse>> {
    let mut document = HtmlDocument::parse(payload.html);
    let report = state.services.label_queries.localize_document(
        &mut document,
        LocalizeOptions {
            utc_offset,
            pad_minutes: payload.pad_minutes,
        },
    );

    Ok(Json(LocalizeDocumentResponse {
        html: document.render(),
        formatted: report.formatted,
        skipped: report.skipped,
    }))
}
