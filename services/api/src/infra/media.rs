use std::path::PathBuf;

use anyhow::Context as _;
use uuid::Uuid;

use crate::domain::repository::MediaStore;
use crate::error::ApiError;

/// Filesystem-backed media store. Files land under
/// `<root>/<category>/<uuid>.<ext>` and are served back as
/// `<base_url>/<category>/<uuid>.<ext>`.
#[derive(Clone)]
pub struct LocalMediaStore {
    root: PathBuf,
    base_url: String,
}

impl LocalMediaStore {
    pub fn new(root: impl Into<PathBuf>, base_url: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            base_url: base_url.into(),
        }
    }

    /// Filesystem root, for wiring up static file serving.
    pub fn root(&self) -> &PathBuf {
        &self.root
    }
}

/// Lowercased extension of the uploaded filename, restricted to a safe
/// charset so client input never influences the stored path beyond it.
fn sanitized_extension(original_filename: &str) -> Option<String> {
    let ext = original_filename.rsplit_once('.')?.1.to_ascii_lowercase();
    if ext.is_empty() || ext.len() > 8 {
        return None;
    }
    ext.chars()
        .all(|c| c.is_ascii_alphanumeric())
        .then_some(ext)
}

impl MediaStore for LocalMediaStore {
    async fn store(
        &self,
        category: &str,
        original_filename: &str,
        bytes: &[u8],
    ) -> Result<String, ApiError> {
        let name = match sanitized_extension(original_filename) {
            Some(ext) => format!("{}.{ext}", Uuid::new_v4()),
            None => Uuid::new_v4().to_string(),
        };

        let dir = self.root.join(category);
        tokio::fs::create_dir_all(&dir)
            .await
            .context("create media directory")?;
        tokio::fs::write(dir.join(&name), bytes)
            .await
            .context("write media file")?;

        Ok(format!("{}/{category}/{name}", self.base_url))
    }
}
