use axum::{routing::post, Router};
use std::sync::Arc;

use crate::features::contact::handlers::submit_contact;
use crate::features::contact::services::ContactService;

/// Create routes for the contact feature
pub fn routes(contact_service: Arc<ContactService>) -> Router {
    Router::new()
        .route("/api/contact", post(submit_contact))
        .with_state(contact_service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::SmtpConfig;
    use crate::features::contact::services::Mailer;
    use crate::features::contact::store::ContactStore;
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::{json, Value};

    fn test_server(dir: &tempfile::TempDir) -> TestServer {
        let store = Arc::new(ContactStore::new(dir.path().join("contacts.json")));
        let mailer = Arc::new(
            Mailer::from_config(&SmtpConfig {
                host: None,
                port: 587,
                username: None,
                password: None,
                from_email: "no-reply@example.com".to_string(),
                to_email: None,
            })
            .unwrap(),
        );
        let service = Arc::new(ContactService::new(store, mailer));
        TestServer::new(routes(service)).unwrap()
    }

    #[tokio::test]
    async fn test_valid_submission_accepted() {
        let dir = tempfile::tempdir().unwrap();
        let server = test_server(&dir);

        let response = server
            .post("/api/contact")
            .json(&json!({
                "name": "Ada",
                "email": "ada@x.com",
                "category": "feedback",
                "message": "Great library!"
            }))
            .await;
        response.assert_status(StatusCode::OK);
        let body: Value = response.json();
        assert_eq!(body["ok"], true);
    }

    #[tokio::test]
    async fn test_missing_required_fields_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let server = test_server(&dir);

        let response = server
            .post("/api/contact")
            .json(&json!({"name": "Ada", "email": "ada@x.com", "message": ""}))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["ok"], false);
    }
}
