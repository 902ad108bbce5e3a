//! Error types for the gateway crate.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Errors that can occur while wiring routes or handling gateway requests.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum GatewayError {
    /// An error propagated from the core route table.
    #[error("route table error: {0}")]
    Core(#[from] beacon_core::CoreError),

    /// The request envelope is malformed or contains invalid values.
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = match &self {
            GatewayError::Core(_) => StatusCode::INTERNAL_SERVER_ERROR,
            GatewayError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
        };
        (status, Json(json!({"error": self.to_string()}))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::response::IntoResponse;

    #[test]
    fn gateway_error_status_codes_map_correctly() {
        let bad_req = GatewayError::InvalidRequest("unsupported jsonrpc version".to_owned());
        let resp = bad_req.into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn gateway_error_core_variant_returns_500() {
        use beacon_core::CoreError;
        let core_err = CoreError::EmptyMethods { path: "/items".to_owned() };
        let gw_err = GatewayError::Core(core_err);
        let resp = gw_err.into_response();
        assert_eq!(
            resp.status(),
            StatusCode::INTERNAL_SERVER_ERROR,
            "Core errors must map to 500"
        );
    }

    #[test]
    fn gateway_error_display_includes_message() {
        let err = GatewayError::InvalidRequest("bad envelope".to_owned());
        let msg = err.to_string();
        assert!(msg.contains("bad envelope"), "Display must include the message");
    }
}
