use std::path::PathBuf;

use tokio::fs;
use tokio::sync::RwLock;

use crate::core::error::{AppError, Result};
use crate::features::notes::models::Note;

/// File-backed store for note records.
///
/// The whole collection lives in one JSON file as an ordered array. Every
/// operation re-reads the file and mutations rewrite it atomically (temp
/// file + rename), so readers never observe a partial write. All mutating
/// operations take the write lock, serializing their read-modify-write
/// cycles; concurrent view increments therefore never lose updates.
/// Read-only operations share the read lock.
///
/// An unparseable store file is treated as an empty collection. That is a
/// deliberate fail-open policy carried over from the original system: the
/// store keeps serving (and the next write replaces the corrupt file), at
/// the cost of silent data loss on corruption.
pub struct NoteStore {
    path: PathBuf,
    lock: RwLock<()>,
}

impl NoteStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: RwLock::new(()),
        }
    }

    async fn read_all(&self) -> Vec<Note> {
        let raw = match fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Vec::new(),
            Err(e) => {
                tracing::warn!("Failed to read note store, treating as empty: {}", e);
                return Vec::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(notes) => notes,
            Err(e) => {
                tracing::warn!("Note store is corrupt, treating as empty: {}", e);
                Vec::new()
            }
        }
    }

    async fn write_all(&self, notes: &[Note]) -> Result<()> {
        let raw = serde_json::to_string_pretty(notes)
            .map_err(|e| AppError::Internal(format!("Failed to serialize notes: {}", e)))?;

        // Atomic replace: a crash mid-write leaves the old file intact
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, raw).await?;
        fs::rename(&tmp, &self.path).await?;
        Ok(())
    }

    /// All records, newest first. RFC-3339 timestamps compare correctly as
    /// strings, so ordering is a plain lexicographic sort.
    pub async fn list(&self) -> Vec<Note> {
        let _guard = self.lock.read().await;
        let mut notes = self.read_all().await;
        notes.sort_by(|a, b| b.uploaded_at.cmp(&a.uploaded_at));
        notes
    }

    pub async fn get(&self, id: &str) -> Result<Note> {
        let _guard = self.lock.read().await;
        self.read_all()
            .await
            .into_iter()
            .find(|n| n.id == id)
            .ok_or_else(|| AppError::NotFound("Note not found".to_string()))
    }

    /// Append a record. Ids are derived from generated filenames, so a
    /// duplicate means a caller bug; it is rejected rather than silently
    /// shadowing the existing record.
    pub async fn insert(&self, note: Note) -> Result<()> {
        let _guard = self.lock.write().await;
        let mut notes = self.read_all().await;
        if notes.iter().any(|n| n.id == note.id) {
            return Err(AppError::Conflict(format!(
                "Note with id '{}' already exists",
                note.id
            )));
        }
        notes.push(note);
        self.write_all(&notes).await
    }

    /// Update the mutable fields. Only `title` and `description` can change
    /// through this path; everything else is immutable after creation.
    pub async fn update(
        &self,
        id: &str,
        title: Option<String>,
        description: Option<String>,
    ) -> Result<Note> {
        let _guard = self.lock.write().await;
        let mut notes = self.read_all().await;
        let note = notes
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or_else(|| AppError::NotFound("Note not found".to_string()))?;

        if let Some(title) = title {
            note.title = title.trim().to_string();
        }
        if let Some(description) = description {
            note.description = Some(description.trim().to_string());
        }

        let updated = note.clone();
        self.write_all(&notes).await?;
        Ok(updated)
    }

    /// Increment the view counter, returning the new count.
    pub async fn increment_view(&self, id: &str) -> Result<u64> {
        let _guard = self.lock.write().await;
        let mut notes = self.read_all().await;
        let note = notes
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or_else(|| AppError::NotFound("Note not found".to_string()))?;

        note.views += 1;
        let views = note.views;
        self.write_all(&notes).await?;
        Ok(views)
    }

    /// Remove a record, returning it so the caller can clean up the binary.
    pub async fn delete(&self, id: &str) -> Result<Note> {
        let _guard = self.lock.write().await;
        let mut notes = self.read_all().await;
        let idx = notes
            .iter()
            .position(|n| n.id == id)
            .ok_or_else(|| AppError::NotFound("Note not found".to_string()))?;

        let removed = notes.remove(idx);
        self.write_all(&notes).await?;
        Ok(removed)
    }
}
