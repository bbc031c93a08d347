//! Static site handler.
//!
//! A request path that names a file under the dist directory gets that file. Anything
//! else gets `index.html` so the client-side router can render the page: with 200 for
//! one of the site's routes and 404 otherwise (the router then shows its 404 page).

use std::path::{Component, Path, PathBuf};

use axum::{
    extract::State,
    http::{header, StatusCode, Uri},
    response::{IntoResponse, Response},
};
use shared::SiteRoute;
use tracing::debug;

use crate::error::{Error, Result};
use crate::server::SiteState;

const INDEX_FILE: &str = "index.html";

/// Serve a file from the dist directory, or the app shell.
pub async fn serve_site(State(state): State<SiteState>, uri: Uri) -> Result<Response> {
    let path = uri.path();
    let relative = relative_path(path)?;

    if !relative.as_os_str().is_empty() {
        let candidate = state.dist_dir.join(&relative);
        if tokio::fs::metadata(&candidate).await.is_ok_and(|meta| meta.is_file()) {
            let contents = tokio::fs::read(&candidate).await?;
            debug!(path = %path, bytes = contents.len(), "serving file");
            return Ok(file_response(StatusCode::OK, content_type(&candidate), contents));
        }
    }

    let status = match SiteRoute::from_path(path) {
        Some(route) => {
            debug!(path = %path, route = route.label(), "serving app shell");
            StatusCode::OK
        }
        None => {
            debug!(path = %path, "unknown path, serving app shell as 404");
            StatusCode::NOT_FOUND
        }
    };

    let index = tokio::fs::read(state.dist_dir.join(INDEX_FILE)).await?;
    Ok(file_response(status, "text/html; charset=utf-8", index))
}

/// Turn a request path into a path relative to the dist directory.
///
/// Only plain segments are allowed; `..` and similar are rejected.
fn relative_path(path: &str) -> Result<PathBuf> {
    let trimmed = path.trim_start_matches('/');
    let mut relative = PathBuf::new();

    for component in Path::new(trimmed).components() {
        match component {
            Component::Normal(segment) => relative.push(segment),
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                return Err(Error::InvalidPath(format!("'{}' is not a servable path", path)));
            }
        }
    }

    Ok(relative)
}

fn content_type(path: &Path) -> &'static str {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("html") => "text/html; charset=utf-8",
        Some("css") => "text/css",
        Some("js") => "application/javascript",
        Some("wasm") => "application/wasm",
        Some("json") => "application/json",
        Some("svg") => "image/svg+xml",
        Some("png") => "image/png",
        Some("ico") => "image/x-icon",
        _ => "application/octet-stream",
    }
}

fn file_response(status: StatusCode, content_type: &'static str, body: Vec<u8>) -> Response {
    (status, [(header::CONTENT_TYPE, content_type)], body).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_path() {
        assert_eq!(relative_path("/").unwrap(), PathBuf::new());
        assert_eq!(relative_path("/pkg/site_bg.wasm").unwrap(), PathBuf::from("pkg/site_bg.wasm"));
        assert_eq!(relative_path("/./style.css").unwrap(), PathBuf::from("style.css"));
        assert!(relative_path("/../etc/passwd").is_err());
        assert!(relative_path("/pkg/../../secret").is_err());
    }

    #[test]
    fn test_content_type() {
        assert_eq!(content_type(Path::new("ripapay_web_bg.wasm")), "application/wasm");
        assert_eq!(content_type(Path::new("style.css")), "text/css");
        assert_eq!(content_type(Path::new("LICENSE")), "application/octet-stream");
    }
}
