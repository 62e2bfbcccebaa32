use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::features::preview::handlers::{get_preview_plan, unlock_preview};
use crate::features::preview::services::PreviewService;

/// Create routes for the preview feature
pub fn routes(preview_service: Arc<PreviewService>) -> Router {
    Router::new()
        .route("/api/notes/{id}/preview", get(get_preview_plan))
        .route("/api/notes/{id}/preview/unlock", post(unlock_preview))
        .with_state(preview_service)
}
