//! Machine-callable mount: exposes the route table for automated callers.
//!
//! The mount takes a one-time snapshot of the route table and serves it
//! under [`MOUNT_PATH`]: a manifest, a tool listing, and a minimal JSON-RPC
//! entry point. The snapshot is never re-synchronized with the table, so
//! the mount must be attached only after every application route has been
//! registered.

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use beacon_core::{ApiSurface, RouteTable, SurfaceInfo, ToolDescriptor};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::GatewayError;

/// Base path the machine-callable surface is served under.
pub const MOUNT_PATH: &str = "/mcp";

type Surface = Arc<ApiSurface>;

/// JSON-RPC 2.0 request envelope accepted by `POST /mcp`.
#[derive(Debug, Deserialize)]
pub struct RpcRequest {
    pub jsonrpc: String,
    #[serde(default)]
    pub id: Value,
    pub method: String,
}

/// Snapshot the current route table and build the mount's router.
///
/// The surface is built first, from the table exactly as it stands; the
/// mount's own endpoints are then registered into the live table so the
/// introspection endpoint reports them, without appearing on the snapshot.
///
/// # Errors
/// Returns [`GatewayError::Core`] if registering the mount's own routes
/// fails (a wiring bug, surfaced at bootstrap).
pub fn mount(
    table: &mut RouteTable,
    info: SurfaceInfo,
) -> Result<(Router, Surface), GatewayError> {
    let surface = Arc::new(ApiSurface::from_table(info, table));

    table.register(MOUNT_PATH, &["GET", "POST"], "mcp")?;
    table.register("/mcp/tools", &["GET"], "mcp_list_tools")?;

    let router = Router::new()
        .route(MOUNT_PATH, get(manifest).post(rpc))
        .route("/mcp/tools", get(list_tools))
        .with_state(Arc::clone(&surface));

    Ok((router, surface))
}

/// `GET /mcp` — surface manifest.
async fn manifest(State(surface): State<Surface>) -> Json<Value> {
    Json(json!({
        "name": surface.info.name,
        "description": surface.info.description,
        "version": surface.info.version,
        "base_url": surface.info.base_url,
        "generated_at": surface.generated_at,
        "tool_count": surface.tools.len(),
    }))
}

/// `GET /mcp/tools` — tool descriptors, in route registration order.
async fn list_tools(State(surface): State<Surface>) -> Json<Vec<ToolDescriptor>> {
    Json(surface.tools.clone())
}

/// `POST /mcp` — JSON-RPC 2.0 entry point.
///
/// Supports `initialize` and `tools/list`. Unknown methods get a JSON-RPC
/// method-not-found error object rather than an HTTP error.
///
/// # Errors
/// Returns [`GatewayError::InvalidRequest`] if the envelope does not carry
/// `"jsonrpc": "2.0"`.
async fn rpc(
    State(surface): State<Surface>,
    Json(req): Json<RpcRequest>,
) -> Result<Json<Value>, GatewayError> {
    if req.jsonrpc != "2.0" {
        return Err(GatewayError::InvalidRequest(format!(
            "unsupported jsonrpc version '{}'",
            req.jsonrpc
        )));
    }

    let result = match req.method.as_str() {
        "initialize" => json!({
            "serverInfo": {
                "name": surface.info.name,
                "version": surface.info.version,
            },
            "instructions": surface.info.description,
        }),
        "tools/list" => json!({ "tools": surface.tools }),
        other => {
            return Ok(Json(json!({
                "jsonrpc": "2.0",
                "id": req.id,
                "error": { "code": -32601, "message": format!("method not found: {other}") },
            })))
        }
    };

    Ok(Json(json!({ "jsonrpc": "2.0", "id": req.id, "result": result })))
}
