use std::sync::Arc;

use chrono::{SecondsFormat, Utc};
use uuid::Uuid;

use crate::core::error::Result;
use crate::features::contact::dtos::CreateContactDto;
use crate::features::contact::models::Contact;
use crate::features::contact::services::Mailer;
use crate::features::contact::store::ContactStore;

/// Service for contact submissions: persist first, then relay by email.
/// Relay failure never fails the submission; it is logged and dropped.
pub struct ContactService {
    store: Arc<ContactStore>,
    mailer: Arc<Mailer>,
}

impl ContactService {
    pub fn new(store: Arc<ContactStore>, mailer: Arc<Mailer>) -> Self {
        Self { store, mailer }
    }

    pub async fn submit(&self, dto: CreateContactDto) -> Result<Contact> {
        let now = Utc::now();
        let contact = Contact {
            id: format!(
                "{}-{}",
                now.timestamp_millis(),
                &Uuid::new_v4().simple().to_string()[..6]
            ),
            name: dto.name.trim().to_string(),
            email: dto.email.trim().to_string(),
            subject: dto.subject.filter(|s| !s.trim().is_empty()),
            category: dto.category.filter(|s| !s.trim().is_empty()),
            message: dto.message,
            created_at: now.to_rfc3339_opts(SecondsFormat::Millis, true),
        };

        self.store.append(contact.clone()).await?;

        // Best effort: the submission is already durable
        if let Err(e) = self.mailer.send_contact(&contact).await {
            tracing::warn!("Contact email send failed: {}", e);
        }

        Ok(contact)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::SmtpConfig;

    fn disabled_mailer() -> Arc<Mailer> {
        let config = SmtpConfig {
            host: None,
            port: 587,
            username: None,
            password: None,
            from_email: "no-reply@example.com".to_string(),
            to_email: None,
        };
        Arc::new(Mailer::from_config(&config).unwrap())
    }

    #[tokio::test]
    async fn test_submit_persists_even_without_relay() {
        let dir = tempfile::tempdir().unwrap();
        let store = Arc::new(ContactStore::new(dir.path().join("contacts.json")));
        let service = ContactService::new(Arc::clone(&store), disabled_mailer());

        let contact = service
            .submit(CreateContactDto {
                name: " Ada ".to_string(),
                email: "ada@x.com".to_string(),
                subject: Some("".to_string()),
                category: Some("feedback".to_string()),
                message: "Hello there".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(contact.name, "Ada");
        assert_eq!(contact.subject, None);
        assert_eq!(contact.category.as_deref(), Some("feedback"));

        let all = store.list().await;
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id, contact.id);
    }
}
