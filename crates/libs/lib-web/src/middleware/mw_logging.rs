//! # Request/Response Logging Middleware
//!
//! Logs method, path and request ID on the way in, and status and duration on the way
//! out. Client errors log at `warn`, server errors at `error`.

use axum::{extract::Request, middleware::Next, response::Response};
use tracing::{error, info, warn};

use super::mw_req_stamp::RequestStamp;

pub async fn log_requests(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let (request_id, received_at) = req
        .extensions()
        .get::<RequestStamp>()
        .map(|stamp| (stamp.id.clone(), stamp.received_at))
        .unwrap_or_else(|| ("unknown".to_string(), std::time::Instant::now()));

    let user_agent = req
        .headers()
        .get("user-agent")
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_string());

    info!(
        request_id = %request_id,
        method = %method,
        path = %path,
        user_agent = ?user_agent,
        "[REQUEST] {} {}",
        method,
        path
    );

    let response = next.run(req).await;

    let duration_ms = received_at.elapsed().as_millis();
    let status = response.status();

    if status.is_server_error() {
        error!(
            request_id = %request_id,
            status = status.as_u16(),
            duration_ms,
            "[RESPONSE] {} {} -> {} ({}ms) [SERVER ERROR]",
            method,
            path,
            status.as_u16(),
            duration_ms
        );
    } else if status.is_client_error() {
        warn!(
            request_id = %request_id,
            status = status.as_u16(),
            duration_ms,
            "[RESPONSE] {} {} -> {} ({}ms) [CLIENT ERROR]",
            method,
            path,
            status.as_u16(),
            duration_ms
        );
    } else {
        info!(
            request_id = %request_id,
            status = status.as_u16(),
            duration_ms,
            "[RESPONSE] {} {} -> {} ({}ms)",
            method,
            path,
            status.as_u16(),
            duration_ms
        );
    }

    response
}
