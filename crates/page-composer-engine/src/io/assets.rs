//! Image upload boundary.
//!
//! The tree only ever stores the URL an upload returns. Batches are
//! uploaded concurrently; failures are dropped from the batch and reported
//! back, successes keep their input order. The resulting command is applied
//! against whatever tree is current when the batch completes, so an upload
//! that finishes late overwrites intervening edits to the same element.

use std::future::Future;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::task::JoinSet;

use crate::editing::{Cmd, ElementPath, ElementUpdate};

#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    #[error("upload of {name} rejected: {reason}")]
    Rejected { name: String, reason: String },
    #[error("upload of {name} failed: {source}")]
    Io {
        name: String,
        source: std::io::Error,
    },
    #[error("upload task aborted: {0}")]
    Aborted(String),
}

/// A binary file picked by the author
#[derive(Debug, Clone, PartialEq)]
pub struct Asset {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl Asset {
    pub fn new(name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            bytes: bytes.into(),
        }
    }

    fn extension(&self) -> Option<&str> {
        Path::new(&self.name).extension().and_then(|ext| ext.to_str())
    }
}

/// Storage that turns uploaded bytes into a URL
pub trait AssetAttachmentPort: Send + Sync + 'static {
    fn upload(&self, asset: Asset) -> impl Future<Output = Result<String, UploadError>> + Send;
}

/// Outcome of a batch upload
#[derive(Debug, Default)]
pub struct UploadBatch {
    /// URLs of successful uploads, in the order the assets were given
    pub urls: Vec<String>,
    pub failures: Vec<UploadError>,
}

impl UploadBatch {
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }

    /// Command appending the successful uploads to a gallery or carousel
    pub fn append_command(&self, element: ElementPath) -> Option<Cmd> {
        if self.urls.is_empty() {
            return None;
        }
        Some(Cmd::AppendImages {
            element,
            urls: self.urls.clone(),
        })
    }

    /// Command pointing an image element at the first successful upload
    pub fn image_command(&self, element: ElementPath) -> Option<Cmd> {
        self.urls.first().map(|url| Cmd::UpdateElement {
            element,
            update: ElementUpdate::Value(url.clone()),
        })
    }
}

/// Upload every asset concurrently and wait for all of them
pub async fn upload_batch<P: AssetAttachmentPort>(port: Arc<P>, assets: Vec<Asset>) -> UploadBatch {
    let mut tasks = JoinSet::new();
    for (index, asset) in assets.into_iter().enumerate() {
        let port = Arc::clone(&port);
        tasks.spawn(async move { (index, port.upload(asset).await) });
    }

    let mut finished = Vec::new();
    let mut batch = UploadBatch::default();
    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok(result) => finished.push(result),
            Err(e) => batch.failures.push(UploadError::Aborted(e.to_string())),
        }
    }

    finished.sort_by_key(|(index, _)| *index);
    for (_, result) in finished {
        match result {
            Ok(url) => batch.urls.push(url),
            Err(e) => {
                log::warn!("dropping failed upload: {e}");
                batch.failures.push(e);
            }
        }
    }
    batch
}

/// Stores uploads as files in a local directory and hands out `file://` URLs
#[derive(Debug, Clone)]
pub struct FsAssetStore {
    root: PathBuf,
}

impl FsAssetStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl AssetAttachmentPort for FsAssetStore {
    async fn upload(&self, asset: Asset) -> Result<String, UploadError> {
        if asset.bytes.is_empty() {
            return Err(UploadError::Rejected {
                name: asset.name,
                reason: "empty file".to_string(),
            });
        }

        let file_name = match asset.extension() {
            Some(ext) => format!("{}.{ext}", uuid::Uuid::new_v4()),
            None => uuid::Uuid::new_v4().to_string(),
        };
        let io_error = |source| UploadError::Io {
            name: asset.name.clone(),
            source,
        };

        tokio::fs::create_dir_all(&self.root).await.map_err(io_error)?;
        let path = self.root.join(file_name);
        tokio::fs::write(&path, &asset.bytes).await.map_err(io_error)?;
        let path = tokio::fs::canonicalize(&path).await.map_err(io_error)?;

        Ok(format!("file://{}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editing::ColumnPath;
    use std::time::Duration;
    use tempfile::TempDir;

    /// Port that fails for names starting with "bad" and finishes in
    /// reverse order of submission
    struct FlakyPort;

    impl AssetAttachmentPort for FlakyPort {
        async fn upload(&self, asset: Asset) -> Result<String, UploadError> {
            let delay = 30u64.saturating_sub(asset.bytes.len() as u64 * 10);
            tokio::time::sleep(Duration::from_millis(delay)).await;
            if asset.name.starts_with("bad") {
                return Err(UploadError::Rejected {
                    name: asset.name,
                    reason: "network".to_string(),
                });
            }
            Ok(format!("https://cdn.example/{}", asset.name))
        }
    }

    #[tokio::test]
    async fn test_batch_drops_failures_and_keeps_order() {
        let assets = vec![
            Asset::new("one.png", vec![1]),
            Asset::new("bad.png", vec![1, 2]),
            Asset::new("three.png", vec![1, 2, 3]),
        ];

        let batch = upload_batch(Arc::new(FlakyPort), assets).await;

        assert_eq!(
            batch.urls,
            vec![
                "https://cdn.example/one.png".to_string(),
                "https://cdn.example/three.png".to_string(),
            ]
        );
        assert_eq!(batch.failures.len(), 1);
        assert!(batch.has_failures());
    }

    #[tokio::test]
    async fn test_all_failed_batch_yields_no_command() {
        let batch = upload_batch(Arc::new(FlakyPort), vec![Asset::new("bad.gif", vec![0])]).await;

        let element = ColumnPath::top(0, 0).element(0);
        assert!(batch.append_command(element).is_none());
        assert!(batch.image_command(element).is_none());
    }

    #[tokio::test]
    async fn test_fs_store_writes_file_and_returns_url() {
        let dir = TempDir::new().unwrap();
        let store = FsAssetStore::new(dir.path().join("assets"));

        let url = store
            .upload(Asset::new("photo.jpg", b"jpeg bytes".to_vec()))
            .await
            .unwrap();

        assert!(url.starts_with("file://"));
        assert!(url.ends_with(".jpg"));
        let path = PathBuf::from(url.trim_start_matches("file://"));
        assert_eq!(std::fs::read(path).unwrap(), b"jpeg bytes");
    }

    #[tokio::test]
    async fn test_fs_store_rejects_empty_files() {
        let dir = TempDir::new().unwrap();
        let store = FsAssetStore::new(dir.path());

        let result = store.upload(Asset::new("empty.png", Vec::new())).await;

        assert!(matches!(result, Err(UploadError::Rejected { .. })));
    }
}
