use std::path::PathBuf;

use tokio::fs;
use tokio::sync::Mutex;

use crate::core::error::{AppError, Result};
use crate::features::contact::models::Contact;

/// Append-only file store for contact submissions.
///
/// Same mechanics as the note store (single JSON array, atomic replace,
/// fail-open on a corrupt file) but the only mutation is `append`, so a
/// plain mutex serializes writers.
pub struct ContactStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl ContactStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    async fn read_all(&self) -> Vec<Contact> {
        let raw = match fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Vec::new(),
            Err(e) => {
                tracing::warn!("Failed to read contact store, treating as empty: {}", e);
                return Vec::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(contacts) => contacts,
            Err(e) => {
                tracing::warn!("Contact store is corrupt, treating as empty: {}", e);
                Vec::new()
            }
        }
    }

    pub async fn append(&self, contact: Contact) -> Result<()> {
        let _guard = self.lock.lock().await;
        let mut contacts = self.read_all().await;
        contacts.push(contact);

        let raw = serde_json::to_string_pretty(&contacts)
            .map_err(|e| AppError::Internal(format!("Failed to serialize contacts: {}", e)))?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, raw).await?;
        fs::rename(&tmp, &self.path).await?;
        Ok(())
    }

    #[allow(dead_code)]
    pub async fn list(&self) -> Vec<Contact> {
        let _guard = self.lock.lock().await;
        self.read_all().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str) -> Contact {
        Contact {
            id: id.to_string(),
            name: "Ada".to_string(),
            email: "ada@x.com".to_string(),
            subject: None,
            category: Some("feedback".to_string()),
            message: "Hello".to_string(),
            created_at: "2024-01-01T00:00:00.000Z".to_string(),
        }
    }

    #[tokio::test]
    async fn test_append_preserves_order() {
        let dir = tempfile::tempdir().unwrap();
        let store = ContactStore::new(dir.path().join("contacts.json"));

        store.append(entry("1")).await.unwrap();
        store.append(entry("2")).await.unwrap();

        let all = store.list().await;
        let ids: Vec<_> = all.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["1", "2"]);
    }

    #[tokio::test]
    async fn test_corrupt_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("contacts.json");
        std::fs::write(&path, "???").unwrap();

        let store = ContactStore::new(&path);
        assert!(store.list().await.is_empty());
        store.append(entry("1")).await.unwrap();
        assert_eq!(store.list().await.len(), 1);
    }
}
