use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use crate::api::companies::{api_companies_by_ids, api_list_companies};
use crate::api::{api_health, api_not_found};
use crate::store::Snapshot;

/// Shared by every request. The snapshot is never mutated after startup, so
/// handlers read it without locking.
#[derive(Clone)]
pub struct AppState {
    pub snapshot: Arc<Snapshot>,
}

impl AppState {
    pub fn new(snapshot: Snapshot) -> Self {
        Self {
            snapshot: Arc::new(snapshot),
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(api_health))
        .route("/companies", get(api_list_companies))
        .route("/companies/", get(api_list_companies))
        .route("/companies/{id}", get(api_companies_by_ids))
        .fallback(api_not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
