pub mod health;

use axum::{routing::get, Router};

use crate::audit::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/v1/audit",
            get(handlers::handle_get_audit)
                .post(handlers::handle_create_audit)
                .delete(handlers::handle_reset_audit),
        )
        .route(
            "/api/v1/audit/report.md",
            get(handlers::handle_audit_markdown),
        )
        .route("/api/v1/platforms", get(handlers::handle_platforms))
        .with_state(state)
}
