// Route table and middleware
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{
    dashboard_page, health_check, list_conversations, page_not_found, sign_in, sign_out,
    toggle_theme,
};
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(dashboard_page))
        .route("/healthz", get(health_check))
        .route("/api/conversations", get(list_conversations))
        .route("/auth/signin/:provider", post(sign_in))
        .route("/auth/signout", post(sign_out))
        .route("/theme", post(toggle_theme))
        .fallback(page_not_found)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
