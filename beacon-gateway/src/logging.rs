//! Request body logging middleware.
//!
//! Observes every inbound request: buffers the body, records it through the
//! process-wide `tracing` sink, then forwards the request unchanged to the
//! rest of the chain. Purely observational: it never blocks, rejects, or
//! rewrites a request, and handler failures propagate through it untouched.

use std::borrow::Cow;

use axum::{
    body::{Body, Bytes},
    extract::Request,
    middleware::Next,
    response::Response,
};
use tracing::{info, warn};
use uuid::Uuid;

/// Log the request body, then run the rest of the chain.
///
/// The body is fully buffered so the downstream handler can still consume
/// it; the buffered read is the only suspension point this stage adds. The
/// log event is emitted before the handler runs, and the handler's response
/// is returned to the caller as-is.
pub async fn log_request_body(request: Request, next: Next) -> Response {
    let request_id = Uuid::new_v4();
    let (parts, body) = request.into_parts();

    let bytes = match axum::body::to_bytes(body, usize::MAX).await {
        Ok(bytes) => bytes,
        Err(e) => {
            // Transport failure mid-read. Log a placeholder and forward an
            // empty body; the logger itself never fails a request.
            warn!(
                request_id = %request_id,
                method = %parts.method,
                uri = %parts.uri,
                error = %e,
                "request body could not be read"
            );
            Bytes::new()
        }
    };

    info!(
        request_id = %request_id,
        method = %parts.method,
        uri = %parts.uri,
        body = %decode_body(&bytes),
        "request body"
    );

    let request = Request::from_parts(parts, Body::from(bytes));
    next.run(request).await
}

/// Decode body bytes for the log line.
///
/// Non-UTF-8 bytes are replaced with U+FFFD rather than dropping the log
/// line or failing the request.
fn decode_body(bytes: &[u8]) -> Cow<'_, str> {
    String::from_utf8_lossy(bytes)
}
