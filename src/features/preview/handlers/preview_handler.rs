use axum::{
    extract::{Path, Query, State},
    Json,
};
use std::sync::Arc;

use crate::core::error::Result;
use crate::features::preview::dtos::{PreviewPlanDto, PreviewQuery, UnlockResponseDto};
use crate::features::preview::services::PreviewService;

/// Get the bounded-preview plan for a note
#[utoipa::path(
    get,
    path = "/api/notes/{id}/preview",
    tag = "preview",
    params(
        ("id" = String, Path, description = "Note id"),
        PreviewQuery
    ),
    responses(
        (status = 200, description = "Preview plan", body = PreviewPlanDto),
        (status = 404, description = "Unknown note id")
    )
)]
pub async fn get_preview_plan(
    State(service): State<Arc<PreviewService>>,
    Path(id): Path<String>,
    Query(query): Query<PreviewQuery>,
) -> Result<Json<PreviewPlanDto>> {
    Ok(Json(service.plan(&id, query.pages).await?))
}

/// Unlock a gated preview: attribute a view and return the binary URL
#[utoipa::path(
    post,
    path = "/api/notes/{id}/preview/unlock",
    tag = "preview",
    params(("id" = String, Path, description = "Note id")),
    responses(
        (status = 200, description = "View attributed; URL for navigation", body = UnlockResponseDto),
        (status = 404, description = "Unknown note id")
    )
)]
pub async fn unlock_preview(
    State(service): State<Arc<PreviewService>>,
    Path(id): Path<String>,
) -> Result<Json<UnlockResponseDto>> {
    Ok(Json(service.unlock(&id).await?))
}
