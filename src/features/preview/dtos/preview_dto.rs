use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Query parameters for the preview plan endpoint
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct PreviewQuery {
    /// Total page count as reported by the client's renderer; the server
    /// caps the rendered range regardless
    pub pages: Option<u32>,
}

/// The bounded-preview plan for one document
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PreviewPlanDto {
    /// Whether partial content is shown at all
    pub previewable: bool,
    /// "pdf", "image", or "other"
    pub kind: String,
    pub mime_type: String,
    /// Pages to render, in order, before the gate (0 for non-previewable)
    pub render_pages: u32,
    /// The page the gate overlays; absent when nothing is rendered
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gate_page: Option<u32>,
}

/// Response to the unlock action: the new view count plus the binary URL
/// the client navigates to
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UnlockResponseDto {
    pub ok: bool,
    pub views: u64,
    pub url: String,
}
