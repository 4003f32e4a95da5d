// SPDX-FileCopyrightText: 2026 Visage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Image acquisition: download from a remote URL, republish locally.
//!
//! [`ImageStore`] implements [`ImageAcquirer`]: it streams a remote file
//! to a locally unique path under the images directory and returns the
//! URL at which the static file host serves it.

use std::path::PathBuf;
use std::time::Duration;

use async_trait::async_trait;
use futures::StreamExt;
use tokio::io::AsyncWriteExt;
use tracing::{debug, warn};
use visage_core::error::VisageError;
use visage_core::traits::ImageAcquirer;
use visage_core::types::{ImageRole, PublishedImage, UserId};

/// Per-request timeout for remote image downloads.
const DOWNLOAD_TIMEOUT: Duration = Duration::from_secs(60);

/// Downloads remote images into a served directory and hands out their
/// public URLs.
///
/// Filenames combine the user id, the image role, and an epoch-millisecond
/// timestamp, so concurrent acquisitions for different users or roles
/// never collide.
#[derive(Debug, Clone)]
pub struct ImageStore {
    client: reqwest::Client,
    dir: PathBuf,
    public_base: String,
}

impl ImageStore {
    /// Creates a store publishing files from `dir` under
    /// `<public_base>/images/<filename>`.
    pub fn new(dir: PathBuf, public_base: &str) -> Result<Self, VisageError> {
        let client = reqwest::Client::builder()
            .timeout(DOWNLOAD_TIMEOUT)
            .build()
            .map_err(|e| VisageError::Download {
                message: format!("failed to build HTTP client: {e}"),
                source: Some(Box::new(e)),
            })?;

        Ok(Self {
            client,
            dir,
            public_base: public_base.trim_end_matches('/').to_string(),
        })
    }

    /// Directory the store writes into (and the static host serves from).
    pub fn dir(&self) -> &PathBuf {
        &self.dir
    }

    /// Creates the images directory if it does not exist yet.
    pub async fn ensure_dir(&self) -> Result<(), VisageError> {
        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| VisageError::Download {
                message: format!("failed to create images dir {}: {e}", self.dir.display()),
                source: Some(Box::new(e)),
            })
    }

    fn filename(user: &UserId, role: ImageRole) -> String {
        let millis = chrono::Utc::now().timestamp_millis();
        format!("{user}-{role}-{millis}.jpg")
    }
}

#[async_trait]
impl ImageAcquirer for ImageStore {
    async fn acquire(
        &self,
        remote_url: &str,
        user: &UserId,
        role: ImageRole,
    ) -> Result<PublishedImage, VisageError> {
        let response = self
            .client
            .get(remote_url)
            .send()
            .await
            .map_err(|e| VisageError::Download {
                message: format!("failed to fetch remote image: {e}"),
                source: Some(Box::new(e)),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(VisageError::Download {
                message: format!("remote image fetch returned {status}"),
                source: None,
            });
        }

        let filename = Self::filename(user, role);
        let path = self.dir.join(&filename);

        let mut file = tokio::fs::File::create(&path)
            .await
            .map_err(|e| VisageError::Download {
                message: format!("failed to create {}: {e}", path.display()),
                source: Some(Box::new(e)),
            })?;

        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(|e| VisageError::Download {
                message: format!("download stream failed: {e}"),
                source: Some(Box::new(e)),
            })?;
            file.write_all(&chunk)
                .await
                .map_err(|e| VisageError::Download {
                    message: format!("failed to write {}: {e}", path.display()),
                    source: Some(Box::new(e)),
                })?;
        }

        // The URL must be servable the moment we return.
        file.flush().await.map_err(|e| VisageError::Download {
            message: format!("failed to flush {}: {e}", path.display()),
            source: Some(Box::new(e)),
        })?;

        let url = format!("{}/images/{filename}", self.public_base);
        debug!(
            user = %user,
            role = %role,
            path = %path.display(),
            "image acquired and published"
        );

        Ok(PublishedImage { url, path })
    }

    async fn remove(&self, image: &PublishedImage) {
        match tokio::fs::remove_file(&image.path).await {
            Ok(()) => debug!(path = %image.path.display(), "removed published image"),
            Err(e) => warn!(
                path = %image.path.display(),
                error = %e,
                "failed to remove published image"
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_store(dir: &std::path::Path) -> ImageStore {
        ImageStore::new(dir.to_path_buf(), "https://bot.example.com/").unwrap()
    }

    #[tokio::test]
    async fn acquire_writes_file_and_returns_public_url() {
        let server = MockServer::start().await;
        let bytes = b"\xff\xd8\xff\xe0fake-jpeg".to_vec();

        Mock::given(method("GET"))
            .and(path("/file/photo.jpg"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(bytes.clone()))
            .mount(&server)
            .await;

        let dir = tempfile::tempdir().unwrap();
        let store = test_store(dir.path());
        let user = UserId("42".into());

        let image = store
            .acquire(&format!("{}/file/photo.jpg", server.uri()), &user, ImageRole::Target)
            .await
            .unwrap();

        assert!(image.url.starts_with("https://bot.example.com/images/42-target-"));
        assert!(image.url.ends_with(".jpg"));
        let written = tokio::fs::read(&image.path).await.unwrap();
        assert_eq!(written, bytes);
    }

    #[tokio::test]
    async fn acquire_distinguishes_roles_in_filenames() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(b"img".to_vec()))
            .mount(&server)
            .await;

        let dir = tempfile::tempdir().unwrap();
        let store = test_store(dir.path());
        let user = UserId("7".into());

        let target = store
            .acquire(&server.uri(), &user, ImageRole::Target)
            .await
            .unwrap();
        let face = store
            .acquire(&server.uri(), &user, ImageRole::Face)
            .await
            .unwrap();

        assert_ne!(target.path, face.path);
        assert!(target.url.contains("-target-"));
        assert!(face.url.contains("-face-"));
    }

    #[tokio::test]
    async fn acquire_fails_on_remote_error_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let dir = tempfile::tempdir().unwrap();
        let store = test_store(dir.path());
        let err = store
            .acquire(&server.uri(), &UserId("1".into()), ImageRole::Face)
            .await
            .unwrap_err();

        assert!(matches!(err, VisageError::Download { .. }), "got: {err}");
    }

    #[tokio::test]
    async fn remove_deletes_backing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("1-target-0.jpg");
        tokio::fs::write(&path, b"img").await.unwrap();

        let store = test_store(dir.path());
        let image = PublishedImage {
            url: "https://bot.example.com/images/1-target-0.jpg".into(),
            path: path.clone(),
        };
        store.remove(&image).await;

        assert!(!path.exists());
    }

    #[tokio::test]
    async fn remove_is_best_effort_on_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = test_store(dir.path());
        let image = PublishedImage {
            url: "https://bot.example.com/images/gone.jpg".into(),
            path: dir.path().join("gone.jpg"),
        };
        // Must not panic or return an error.
        store.remove(&image).await;
    }

    #[tokio::test]
    async fn ensure_dir_creates_missing_directories() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("public/images");
        let store = ImageStore::new(nested.clone(), "https://bot.example.com").unwrap();
        store.ensure_dir().await.unwrap();
        assert!(nested.is_dir());
    }
}
