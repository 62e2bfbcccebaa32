use std::path::{Path, PathBuf};

use tokio::fs;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::shared::validation::STORED_NAME_REGEX;

/// Disk-backed store for uploaded binaries.
///
/// Binaries live flat under a single uploads directory and are addressed by
/// their generated filename. The same directory is mounted read-only on the
/// HTTP router as the static `/uploads` root, so stored names double as the
/// public URL path segment.
pub struct DiskStore {
    root: PathBuf,
}

impl DiskStore {
    /// Create the store, ensuring the uploads directory exists.
    pub async fn init(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root).await?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Generate a unique stored filename, preserving the original extension
    /// when it is a plain alphanumeric suffix.
    pub fn generate_name(original_name: &str) -> String {
        let id = Uuid::new_v4();
        let ext = Path::new(original_name)
            .extension()
            .and_then(|e| e.to_str())
            .filter(|e| !e.is_empty() && e.len() <= 16 && e.chars().all(|c| c.is_ascii_alphanumeric()));

        match ext {
            Some(ext) => format!("{}.{}", id, ext),
            None => id.to_string(),
        }
    }

    /// Absolute path of a stored binary. Rejects names that could escape the
    /// uploads directory.
    pub fn path_of(&self, stored_name: &str) -> Result<PathBuf> {
        if !STORED_NAME_REGEX.is_match(stored_name) {
            return Err(AppError::BadRequest(format!(
                "Invalid stored filename: {}",
                stored_name
            )));
        }
        Ok(self.root.join(stored_name))
    }

    /// Write a binary payload, returning its size in bytes.
    pub async fn save(&self, stored_name: &str, data: &[u8]) -> Result<u64> {
        let path = self.path_of(stored_name)?;
        fs::write(&path, data).await?;
        tracing::debug!("Binary written: {} ({} bytes)", stored_name, data.len());
        Ok(data.len() as u64)
    }

    /// Remove a stored binary. Missing files are an error so that callers can
    /// decide whether the failure matters (cleanup paths swallow it).
    pub async fn delete(&self, stored_name: &str) -> Result<()> {
        let path = self.path_of(stored_name)?;
        fs::remove_file(&path).await?;
        tracing::debug!("Binary removed: {}", stored_name);
        Ok(())
    }

    /// Whether a stored binary currently exists on disk.
    #[allow(dead_code)]
    pub async fn exists(&self, stored_name: &str) -> bool {
        match self.path_of(stored_name) {
            Ok(path) => fs::try_exists(&path).await.unwrap_or(false),
            Err(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_name_preserves_extension() {
        let name = DiskStore::generate_name("Calc Notes.pdf");
        assert!(name.ends_with(".pdf"));
        assert!(STORED_NAME_REGEX.is_match(&name));
    }

    #[test]
    fn test_generate_name_drops_odd_extension() {
        let name = DiskStore::generate_name("archive.tar gz");
        assert!(!name.contains('.'));
        assert!(STORED_NAME_REGEX.is_match(&name));

        let name = DiskStore::generate_name("noext");
        assert!(!name.contains('.'));
    }

    #[test]
    fn test_generate_name_unique() {
        let a = DiskStore::generate_name("a.pdf");
        let b = DiskStore::generate_name("a.pdf");
        assert_ne!(a, b);
    }

    #[tokio::test]
    async fn test_save_delete_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = DiskStore::init(dir.path()).await.unwrap();

        let name = DiskStore::generate_name("x.pdf");
        let size = store.save(&name, b"hello").await.unwrap();
        assert_eq!(size, 5);
        assert!(store.exists(&name).await);

        store.delete(&name).await.unwrap();
        assert!(!store.exists(&name).await);
        assert!(store.delete(&name).await.is_err());
    }

    #[tokio::test]
    async fn test_traversal_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let store = DiskStore::init(dir.path()).await.unwrap();

        assert!(store.path_of("../escape.pdf").is_err());
        assert!(store.save("sub/dir.pdf", b"x").await.is_err());
    }
}
