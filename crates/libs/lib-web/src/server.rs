//! # Server Setup
//!
//! Creates the axum router, applies middleware, and starts the HTTP server that hosts
//! the compiled site.

// region: --- Imports
use std::path::PathBuf;
use std::sync::Arc;

use axum::{middleware, routing::get, Router};
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::handlers::{health, serve_site};
use crate::middleware::{log_requests, stamp_req, RequestStamp};
// endregion: --- Imports

// region: --- SiteState
/// State shared by the handlers. Immutable once the server starts.
#[derive(Clone, Debug)]
pub struct SiteState {
    pub dist_dir: Arc<PathBuf>,
}

impl SiteState {
    pub fn new(dist_dir: impl Into<PathBuf>) -> Self {
        Self {
            dist_dir: Arc::new(dist_dir.into()),
        }
    }
}
// endregion: --- SiteState

// region: --- Server Setup
/// Initialize logging, bind, and serve until Ctrl+C.
pub async fn start_server(config: Config) -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.log_level))
        .with_target(true)
        .with_line_number(true)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to set tracing subscriber: {}", e))?;

    info!(" RIPAPAY SITE SERVER STARTING");
    info!(" Log level: {}", config.log_level);
    info!(" Serving from: {}", config.dist_dir.display());

    if !config.dist_dir.join("index.html").is_file() {
        tracing::warn!(
            "{} has no index.html yet; build the site with `trunk build` first",
            config.dist_dir.display()
        );
    }

    let app = create_router(SiteState::new(config.dist_dir.clone()));
    let listener = tokio::net::TcpListener::bind(config.bind_address).await?;

    info!(" SERVER READY: http://{}", config.bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!(" Server stopped");
    Ok(())
}

pub fn create_router(state: SiteState) -> Router {
    Router::new()
        .route("/healthz", get(health))
        .fallback(serve_site)
        .with_state(state)
        .layer(middleware::from_fn(log_requests))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                let request_id = request
                    .extensions()
                    .get::<RequestStamp>()
                    .map(|s| s.id.clone())
                    .unwrap_or_else(|| "unknown".to_string());
                tracing::info_span!(
                    "http_request",
                    request_id = %request_id,
                    method = %request.method(),
                    uri = %request.uri(),
                )
            }),
        )
        // outermost, so the span and the request log both see the stamp
        .layer(middleware::from_fn(stamp_req))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
    info!(" Shutdown signal received");
}
// endregion: --- Server Setup

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use axum::response::Response;
    use tower::ServiceExt;

    const INDEX_HTML: &str = "<!DOCTYPE html><html><body>ripapay</body></html>";

    fn dist_dir() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), INDEX_HTML).unwrap();
        std::fs::create_dir(dir.path().join("pkg")).unwrap();
        std::fs::write(dir.path().join("pkg").join("ripapay_web.js"), "export default 1;").unwrap();
        dir
    }

    async fn request(dir: &tempfile::TempDir, uri: &str) -> Response {
        create_router(SiteState::new(dir.path()))
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn body_string(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_root_serves_index() {
        let dir = dist_dir();
        let response = request(&dir, "/").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "text/html; charset=utf-8"
        );
        assert_eq!(body_string(response).await, INDEX_HTML);
    }

    #[tokio::test]
    async fn test_site_routes_get_app_shell() {
        let dir = dist_dir();
        for uri in ["/about", "/how-it-works", "/contact", "/business-registration", "/contact/"] {
            let response = request(&dir, uri).await;
            assert_eq!(response.status(), StatusCode::OK, "{uri}");
            assert_eq!(body_string(response).await, INDEX_HTML);
        }
    }

    #[tokio::test]
    async fn test_unknown_path_is_404_with_app_shell() {
        let dir = dist_dir();
        let response = request(&dir, "/pricing?plan=pro").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_string(response).await, INDEX_HTML);
    }

    #[tokio::test]
    async fn test_serves_files_with_content_type() {
        let dir = dist_dir();
        let response = request(&dir, "/pkg/ripapay_web.js").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "application/javascript");
        assert_eq!(body_string(response).await, "export default 1;");
    }

    #[tokio::test]
    async fn test_rejects_parent_segments() {
        let dir = dist_dir();
        let response = request(&dir, "/pkg/../../etc/passwd").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(body_string(response).await.contains("InvalidPath"));
    }

    #[tokio::test]
    async fn test_missing_index_is_server_error() {
        let dir = tempfile::tempdir().unwrap();
        let response = request(&dir, "/about").await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_health_and_request_id() {
        let dir = dist_dir();
        let response = request(&dir, "/healthz").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().contains_key("x-request-id"));
        assert_eq!(body_string(response).await, r#"{"status":"ok"}"#);
    }

    #[tokio::test]
    async fn test_request_id_is_propagated() {
        let dir = dist_dir();
        let response = create_router(SiteState::new(dir.path()))
            .oneshot(
                Request::builder()
                    .uri("/")
                    .header("x-request-id", "edge-42")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.headers()["x-request-id"], "edge-42");
    }
}
