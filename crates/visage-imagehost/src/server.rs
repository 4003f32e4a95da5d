// SPDX-FileCopyrightText: 2026 Visage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Static file host built on axum.
//!
//! Serves the images directory read-only under `/images` so that the
//! remote swap service can fetch the republished files.

use std::path::PathBuf;

use axum::Router;
use tokio_util::sync::CancellationToken;
use tower_http::services::ServeDir;
use visage_core::error::VisageError;

/// Static host configuration (mirrors `ServerConfig` from visage-config).
#[derive(Debug, Clone)]
pub struct StaticHostConfig {
    /// Host address to bind.
    pub host: String,
    /// Port to bind.
    pub port: u16,
    /// Directory whose files are served under `/images`.
    pub images_dir: PathBuf,
}

/// Builds the router serving `GET /images/<filename>` from the images
/// directory.
pub fn router(images_dir: PathBuf) -> Router {
    Router::new().nest_service("/images", ServeDir::new(images_dir))
}

/// Binds and runs the static file host until `cancel` fires.
pub async fn start_server(
    config: &StaticHostConfig,
    cancel: CancellationToken,
) -> Result<(), VisageError> {
    let app = router(config.images_dir.clone());

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| VisageError::Internal(format!(
            "failed to bind static host to {addr}: {e}"
        )))?;

    tracing::info!(
        addr = addr.as_str(),
        dir = %config.images_dir.display(),
        "static image host listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(async move { cancel.cancelled().await })
        .await
        .map_err(|e| VisageError::Internal(format!("static host error: {e}")))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    #[tokio::test]
    async fn serves_published_file() {
        let dir = tempfile::tempdir().unwrap();
        let bytes = b"fake-jpeg-bytes";
        tokio::fs::write(dir.path().join("42-target-123.jpg"), bytes)
            .await
            .unwrap();

        let app = router(dir.path().to_path_buf());
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/images/42-target-123.jpg")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], bytes);
    }

    #[tokio::test]
    async fn unknown_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let app = router(dir.path().to_path_buf());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/images/missing.jpg")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn paths_outside_images_are_not_served() {
        let dir = tempfile::tempdir().unwrap();
        tokio::fs::write(dir.path().join("a.jpg"), b"x").await.unwrap();

        let app = router(dir.path().to_path_buf());
        let response = app
            .oneshot(Request::builder().uri("/a.jpg").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
