use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::features::notes::handlers::{
    add_view, delete_note, get_note, list_notes, update_note, upload_note,
};
use crate::features::notes::services::NoteService;
use crate::shared::constants::{MAX_UPLOAD_SIZE, MULTIPART_OVERHEAD};

/// Create routes for the notes feature
pub fn routes(note_service: Arc<NoteService>) -> Router {
    Router::new()
        .route(
            "/api/notes",
            get(list_notes)
                .post(upload_note)
                // Allow body size up to MAX_UPLOAD_SIZE + buffer for multipart overhead
                .layer(DefaultBodyLimit::max(MAX_UPLOAD_SIZE + MULTIPART_OVERHEAD)),
        )
        .route(
            "/api/notes/{id}",
            get(get_note).patch(update_note).delete(delete_note),
        )
        .route("/api/notes/{id}/view", post(add_view))
        .with_state(note_service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::notes::store::NoteStore;
    use crate::features::preview::{routes as preview_routes, PreviewService};
    use crate::modules::storage::DiskStore;
    use axum::http::StatusCode;
    use axum_test::multipart::{MultipartForm, Part};
    use axum_test::TestServer;
    use serde_json::Value;

    async fn test_server(dir: &tempfile::TempDir) -> TestServer {
        let store = Arc::new(NoteStore::new(dir.path().join("notes.json")));
        let disk = Arc::new(DiskStore::init(dir.path().join("uploads")).await.unwrap());
        let note_service = Arc::new(NoteService::new(Arc::clone(&store), disk));
        let preview_service = Arc::new(PreviewService::new(store));

        let app = Router::new()
            .merge(routes(note_service))
            .merge(preview_routes::routes(preview_service));
        TestServer::new(app).unwrap()
    }

    fn upload_form(owner_email: Option<&str>, title: Option<&str>, course: Option<&str>) -> MultipartForm {
        let mut form = MultipartForm::new().add_part(
            "file",
            Part::bytes(vec![7u8; 10240])
                .file_name("calc.pdf")
                .mime_type("application/pdf"),
        );
        if let Some(v) = title {
            form = form.add_text("title", v);
        }
        if let Some(v) = course {
            form = form.add_text("course", v);
        }
        if let Some(v) = owner_email {
            form = form.add_text("ownerEmail", v);
        }
        form
    }

    #[tokio::test]
    async fn test_upload_view_delete_scenario() {
        let dir = tempfile::tempdir().unwrap();
        let server = test_server(&dir).await;

        let response = server
            .post("/api/notes")
            .multipart(upload_form(Some("a@x.com"), Some("Calc Notes"), Some("BTech")))
            .await;
        response.assert_status(StatusCode::OK);
        let body: Value = response.json();
        assert_eq!(body["ok"], true);
        assert_eq!(body["note"]["size"], 10240);
        assert_eq!(body["note"]["views"], 0);
        let id = body["note"]["id"].as_str().unwrap().to_string();

        let response = server.post(&format!("/api/notes/{}/view", id)).await;
        response.assert_status(StatusCode::OK);
        let body: Value = response.json();
        assert_eq!(body["views"], 1);

        let response = server.delete(&format!("/api/notes/{}", id)).await;
        response.assert_status(StatusCode::OK);

        let response = server.get(&format!("/api/notes/{}", id)).await;
        response.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_upload_validation_statuses() {
        let dir = tempfile::tempdir().unwrap();
        let server = test_server(&dir).await;

        let response = server
            .post("/api/notes")
            .multipart(upload_form(None, Some("Calc Notes"), Some("BTech")))
            .await;
        response.assert_status(StatusCode::UNAUTHORIZED);

        let response = server
            .post("/api/notes")
            .multipart(upload_form(Some("a@x.com"), None, Some("BTech")))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["ok"], false);

        let response = server
            .post("/api/notes")
            .multipart(upload_form(Some("a@x.com"), Some("Calc Notes"), None))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);

        // every rejected upload compensated by deleting its binary
        assert_eq!(
            std::fs::read_dir(dir.path().join("uploads")).unwrap().count(),
            0
        );
    }

    #[tokio::test]
    async fn test_patch_ignores_non_whitelisted_fields() {
        let dir = tempfile::tempdir().unwrap();
        let server = test_server(&dir).await;

        let response = server
            .post("/api/notes")
            .multipart(upload_form(Some("a@x.com"), Some("Calc Notes"), Some("BTech")))
            .await;
        let id = response.json::<Value>()["note"]["id"]
            .as_str()
            .unwrap()
            .to_string();

        let response = server
            .patch(&format!("/api/notes/{}", id))
            .json(&serde_json::json!({"title": "Renamed", "course": "Hacked"}))
            .await;
        response.assert_status(StatusCode::OK);
        let body: Value = response.json();
        assert_eq!(body["note"]["title"], "Renamed");
        assert_eq!(body["note"]["course"], "BTech");
    }

    #[tokio::test]
    async fn test_list_returns_newest_first() {
        let dir = tempfile::tempdir().unwrap();
        let server = test_server(&dir).await;

        for title in ["First", "Second"] {
            let response = server
                .post("/api/notes")
                .multipart(upload_form(Some("a@x.com"), Some(title), Some("BTech")))
                .await;
            response.assert_status(StatusCode::OK);
            // distinct uploadedAt timestamps
            tokio::time::sleep(std::time::Duration::from_millis(5)).await;
        }

        let response = server.get("/api/notes").await;
        response.assert_status(StatusCode::OK);
        let body: Value = response.json();
        let notes = body.as_array().unwrap();
        assert_eq!(notes.len(), 2);
        assert_eq!(notes[0]["title"], "Second");
        assert_eq!(notes[1]["title"], "First");
    }

    #[tokio::test]
    async fn test_preview_plan_and_unlock() {
        let dir = tempfile::tempdir().unwrap();
        let server = test_server(&dir).await;

        let response = server
            .post("/api/notes")
            .multipart(upload_form(Some("a@x.com"), Some("Calc Notes"), Some("BTech")))
            .await;
        let note = response.json::<Value>()["note"].clone();
        let id = note["id"].as_str().unwrap();

        let response = server
            .get(&format!("/api/notes/{}/preview", id))
            .add_query_param("pages", 9)
            .await;
        response.assert_status(StatusCode::OK);
        let plan: Value = response.json();
        assert_eq!(plan["previewable"], true);
        assert_eq!(plan["kind"], "pdf");
        assert_eq!(plan["renderPages"], 2);
        assert_eq!(plan["gatePage"], 2);

        let response = server
            .post(&format!("/api/notes/{}/preview/unlock", id))
            .await;
        response.assert_status(StatusCode::OK);
        let body: Value = response.json();
        assert_eq!(body["views"], 1);
        assert_eq!(body["url"], note["url"]);

        let response = server.get("/api/notes/missing/preview").await;
        response.assert_status(StatusCode::NOT_FOUND);
    }
}
