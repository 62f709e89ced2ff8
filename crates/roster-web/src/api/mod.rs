use axum::http::StatusCode;
use axum::response::Response;
use roster_types::{HealthResponse, error_code};

use crate::util::http::{json_error, json_ok};

pub mod companies;

pub async fn api_health() -> Response {
    json_ok(&HealthResponse { ok: true })
}

pub async fn api_not_found() -> Response {
    json_error(StatusCode::NOT_FOUND, error_code::NOT_FOUND, "Route not found.")
}
