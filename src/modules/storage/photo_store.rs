use std::path::{Path, PathBuf};

use uuid::Uuid;

use crate::core::config::UploadConfig;
use crate::core::error::{AppError, Result};

/// Local-disk store for visit photos. Files are written under the configured
/// upload directory with a generated name and served back as `/uploads/{name}`.
pub struct PhotoStore {
    dir: PathBuf,
    max_photo_size: usize,
}

impl PhotoStore {
    pub fn new(config: UploadConfig) -> Self {
        Self {
            dir: PathBuf::from(config.dir),
            max_photo_size: config.max_photo_size,
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Create the upload directory if it does not exist yet
    pub async fn ensure_dir_exists(&self) -> Result<()> {
        tokio::fs::create_dir_all(&self.dir).await.map_err(|e| {
            AppError::Internal(format!(
                "Failed to create upload dir {}: {}",
                self.dir.display(),
                e
            ))
        })
    }

    /// Persist photo bytes and return the public `/uploads/...` path
    pub async fn save(&self, original_name: &str, bytes: &[u8]) -> Result<String> {
        if bytes.is_empty() {
            return Err(AppError::BadRequest("Photo is empty".to_string()));
        }
        if bytes.len() > self.max_photo_size {
            return Err(AppError::BadRequest(format!(
                "Photo exceeds maximum size of {} bytes",
                self.max_photo_size
            )));
        }

        let file_name = format!("{}{}", Uuid::new_v4(), extension_of(original_name));
        let path = self.dir.join(&file_name);

        tokio::fs::write(&path, bytes).await.map_err(|e| {
            tracing::error!("Failed to write photo {}: {}", path.display(), e);
            AppError::Internal("Failed to store photo".to_string())
        })?;

        Ok(format!("/uploads/{}", file_name))
    }
}

/// Original file extension including the dot, or empty when absent.
/// The stored name never reuses the client-provided stem.
fn extension_of(original_name: &str) -> String {
    Path::new(original_name)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| format!(".{}", e))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_is_preserved() {
        assert_eq!(extension_of("foto.jpg"), ".jpg");
        assert_eq!(extension_of("a.b.PNG"), ".PNG");
    }

    #[test]
    fn missing_extension_is_empty() {
        assert_eq!(extension_of("foto"), "");
        assert_eq!(extension_of(""), "");
    }
}
