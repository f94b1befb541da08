pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers as analysis;
use crate::roles::handlers as roles;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/roles", get(roles::handle_list_roles))
        .route("/api/v1/analyze", post(analysis::handle_analyze))
        .route("/api/v1/report", post(analysis::handle_report))
        .layer(DefaultBodyLimit::max(upload_limit))
        .with_state(state)
}
