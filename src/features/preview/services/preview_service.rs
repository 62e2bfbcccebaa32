use std::sync::Arc;

use crate::core::error::Result;
use crate::features::notes::store::NoteStore;
use crate::features::preview::dtos::{PreviewPlanDto, UnlockResponseDto};
use crate::features::preview::gate::{PreviewGate, PreviewKind};
use crate::shared::constants::PREVIEW_PAGE_LIMIT;

/// Service for the gated document preview.
///
/// The gate itself is a per-session state machine driven by the renderer;
/// this service derives the plan for a session and performs the unlock side
/// effects (view attribution plus handing out the binary URL).
pub struct PreviewService {
    store: Arc<NoteStore>,
}

impl PreviewService {
    pub fn new(store: Arc<NoteStore>) -> Self {
        Self { store }
    }

    /// Build the preview plan for a note.
    ///
    /// `reported_pages` is the renderer's page count; when absent the plan
    /// assumes enough pages to fill the preview window.
    pub async fn plan(&self, id: &str, reported_pages: Option<u32>) -> Result<PreviewPlanDto> {
        let note = self.store.get(id).await?;
        let kind = PreviewKind::from_mime(&note.mime_type);

        let total_pages = match kind {
            PreviewKind::Pdf => reported_pages.unwrap_or(PREVIEW_PAGE_LIMIT),
            PreviewKind::Image => 1,
            PreviewKind::Other => 0,
        };
        let gate = PreviewGate::new(kind, total_pages);

        Ok(PreviewPlanDto {
            previewable: gate.planned_pages() > 0,
            kind: kind.as_str().to_string(),
            mime_type: note.mime_type,
            render_pages: gate.planned_pages(),
            gate_page: gate.gate_page(),
        })
    }

    /// The "download to continue" action: attribute a view and return the
    /// binary URL for navigation.
    pub async fn unlock(&self, id: &str) -> Result<UnlockResponseDto> {
        let note = self.store.get(id).await?;
        let views = self.store.increment_view(id).await?;
        tracing::debug!("Preview unlocked: id={}, views={}", id, views);
        Ok(UnlockResponseDto {
            ok: true,
            views,
            url: note.url,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::notes::models::Note;

    fn note(id: &str, mime: &str) -> Note {
        Note {
            id: id.to_string(),
            title: "Calc Notes".to_string(),
            description: None,
            filename: format!("{}.bin", id),
            original_name: "calc.bin".to_string(),
            size: 10240,
            mime_type: mime.to_string(),
            url: format!("/uploads/{}.bin", id),
            uploaded_at: "2024-01-01T00:00:00.000Z".to_string(),
            owner_email: Some("a@x.com".to_string()),
            owner_name: None,
            subject: None,
            course: Some("BTech".to_string()),
            views: 0,
        }
    }

    async fn service_with(notes: Vec<Note>) -> (PreviewService, Arc<NoteStore>, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let store = Arc::new(NoteStore::new(dir.path().join("notes.json")));
        for n in notes {
            store.insert(n).await.unwrap();
        }
        (PreviewService::new(Arc::clone(&store)), store, dir)
    }

    #[tokio::test]
    async fn test_plan_for_pdf_caps_pages() {
        let (service, _, _dir) = service_with(vec![note("a", "application/pdf")]).await;

        let plan = service.plan("a", Some(10)).await.unwrap();
        assert!(plan.previewable);
        assert_eq!(plan.kind, "pdf");
        assert_eq!(plan.render_pages, 2);
        assert_eq!(plan.gate_page, Some(2));

        let plan = service.plan("a", Some(1)).await.unwrap();
        assert_eq!(plan.render_pages, 1);
        assert_eq!(plan.gate_page, Some(1));
    }

    #[tokio::test]
    async fn test_plan_for_image_and_other() {
        let (service, _, _dir) = service_with(vec![
            note("img", "image/png"),
            note("zip", "application/zip"),
        ])
        .await;

        let plan = service.plan("img", None).await.unwrap();
        assert!(plan.previewable);
        assert_eq!(plan.kind, "image");
        assert_eq!(plan.render_pages, 1);

        let plan = service.plan("zip", None).await.unwrap();
        assert!(!plan.previewable);
        assert_eq!(plan.kind, "other");
        assert_eq!(plan.render_pages, 0);
        assert_eq!(plan.gate_page, None);
    }

    #[tokio::test]
    async fn test_unlock_attributes_view_and_returns_url() {
        let (service, store, _dir) = service_with(vec![note("a", "application/pdf")]).await;

        let unlocked = service.unlock("a").await.unwrap();
        assert!(unlocked.ok);
        assert_eq!(unlocked.views, 1);
        assert_eq!(unlocked.url, "/uploads/a.bin");
        assert_eq!(store.get("a").await.unwrap().views, 1);
    }

    #[tokio::test]
    async fn test_unknown_note_is_not_found() {
        let (service, _, _dir) = service_with(vec![]).await;
        assert!(service.plan("missing", None).await.is_err());
        assert!(service.unlock("missing").await.is_err());
    }
}
