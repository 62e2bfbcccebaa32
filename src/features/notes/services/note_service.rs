use std::sync::Arc;

use chrono::{SecondsFormat, Utc};

use crate::core::error::{AppError, Result};
use crate::features::notes::models::Note;
use crate::features::notes::store::NoteStore;
use crate::modules::storage::DiskStore;
use crate::shared::constants::UPLOADS_URL_PREFIX;

/// A multipart submission collected by the handler.
#[derive(Debug, Default)]
pub struct NoteUpload {
    pub file: Option<UploadedFile>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub subject: Option<String>,
    pub course: Option<String>,
    pub owner_email: Option<String>,
    pub owner_name: Option<String>,
}

#[derive(Debug)]
pub struct UploadedFile {
    pub data: Vec<u8>,
    pub original_name: String,
    pub content_type: String,
}

/// Service for note operations: the upload pipeline plus passthroughs to the
/// record store, with binary-payload lifecycle handling.
pub struct NoteService {
    store: Arc<NoteStore>,
    disk: Arc<DiskStore>,
}

impl NoteService {
    pub fn new(store: Arc<NoteStore>, disk: Arc<DiskStore>) -> Self {
        Self { store, disk }
    }

    /// Validate a submission and commit it.
    ///
    /// The binary is written to storage before the metadata is validated
    /// (it streams to disk during multipart parsing), so every failure path
    /// after that point compensates by deleting the stored binary. The
    /// validation order is part of the contract: missing file (400), then
    /// missing ownerEmail (401), then missing title (400), then missing
    /// course (400).
    pub async fn submit(&self, upload: NoteUpload) -> Result<Note> {
        let file = upload
            .file
            .ok_or_else(|| AppError::BadRequest("File is required".to_string()))?;

        let stored_name = DiskStore::generate_name(&file.original_name);
        let size = self.disk.save(&stored_name, &file.data).await?;

        // ownerEmail presence is the attribution proof; the actual identity
        // check is the external provider's job
        let owner_email = match clean(upload.owner_email) {
            Some(email) => email,
            None => {
                self.cleanup_binary(&stored_name).await;
                return Err(AppError::Unauthorized(
                    "Authentication required. Please login to upload notes.".to_string(),
                ));
            }
        };

        let title = match clean(upload.title) {
            Some(title) => title,
            None => {
                self.cleanup_binary(&stored_name).await;
                return Err(AppError::BadRequest("Title is required".to_string()));
            }
        };

        let course = match clean(upload.course) {
            Some(course) => course,
            None => {
                self.cleanup_binary(&stored_name).await;
                return Err(AppError::BadRequest("Course is required".to_string()));
            }
        };

        // id = filename stem, linking record and binary lifecycles 1:1
        let id = stored_name
            .split('.')
            .next()
            .unwrap_or(&stored_name)
            .to_string();

        let note = Note {
            id,
            title,
            description: clean(upload.description),
            url: format!("{}/{}", UPLOADS_URL_PREFIX, stored_name),
            filename: stored_name.clone(),
            original_name: file.original_name,
            size,
            mime_type: file.content_type,
            uploaded_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            owner_email: Some(owner_email),
            owner_name: clean(upload.owner_name),
            subject: clean(upload.subject),
            course: Some(course),
            views: 0,
        };

        if let Err(e) = self.store.insert(note.clone()).await {
            self.cleanup_binary(&stored_name).await;
            return Err(e);
        }

        tracing::info!(
            "Note uploaded: id={}, size={}, mime={}",
            note.id,
            note.size,
            note.mime_type
        );
        Ok(note)
    }

    pub async fn list(&self) -> Vec<Note> {
        self.store.list().await
    }

    pub async fn get(&self, id: &str) -> Result<Note> {
        self.store.get(id).await
    }

    pub async fn update(
        &self,
        id: &str,
        title: Option<String>,
        description: Option<String>,
    ) -> Result<Note> {
        self.store.update(id, title, description).await
    }

    pub async fn increment_view(&self, id: &str) -> Result<u64> {
        self.store.increment_view(id).await
    }

    /// Delete a record and its binary. Binary removal is best effort: the
    /// metadata is already gone by then and a leftover file only wastes
    /// disk, so the failure is logged rather than surfaced.
    pub async fn delete(&self, id: &str) -> Result<()> {
        let removed = self.store.delete(id).await?;
        self.cleanup_binary(&removed.filename).await;
        tracing::info!("Note deleted: id={}", id);
        Ok(())
    }

    async fn cleanup_binary(&self, stored_name: &str) {
        if let Err(e) = self.disk.delete(stored_name).await {
            tracing::warn!("Failed to remove binary '{}': {}", stored_name, e);
        }
    }
}

/// Trim a field, mapping empty or missing to absent
fn clean(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
