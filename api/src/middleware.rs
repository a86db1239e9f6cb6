use axum::{
    body::Body,
    http::{Method, Request},
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use tracing::info;

/// Logs method, path, response status, and latency for each request.
/// CORS preflight `OPTIONS` requests are skipped.
pub async fn log_request(req: Request<Body>, next: Next) -> Response {
    if req.method() == Method::OPTIONS {
        return next.run(req).await;
    }

    let method = req.method().clone();
    let path = req.uri().path().to_owned();
    let start = Instant::now();

    let response = next.run(req).await;

    info!(
        %method,
        %path,
        status = response.status().as_u16(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "handled request"
    );

    response
}
