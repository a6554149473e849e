// tests/support/helpers.rs
use axum::body::{self, Body};
use axum::http::{Request, Response};
use serde_json::Value;
use std::sync::Arc;
use timelabel::application::services::ApplicationServices;
use timelabel::domain::timestamp::{LabelOptions, UtcOffset};
use timelabel::infrastructure::time::FixedTimeZone;
use timelabel::presentation::http::{routes::build_router, state::HttpState};

pub fn build_services(offset: UtcOffset, options: LabelOptions) -> ApplicationServices {
    ApplicationServices::new(Arc::new(FixedTimeZone::new(offset)), options)
}

pub fn make_test_router(offset: UtcOffset) -> axum::Router {
    let state = HttpState {
        services: Arc::new(build_services(offset, LabelOptions::default())),
    };
    build_router(state, &["*".to_string()])
}

pub fn json_request(uri: &str, payload: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap()
}

pub fn json_request_with_offset(uri: &str, offset: &str, payload: &Value) -> Request<Body> {
    let mut req = json_request(uri, payload);
    req.headers_mut()
        .insert("x-utc-offset", offset.parse().unwrap());
    req
}

pub async fn body_json(resp: Response<Body>) -> Value {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("json body")
}
