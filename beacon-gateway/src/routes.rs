//! Axum route handlers and application assembly for the Beacon demo API.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use beacon_core::{Route, RouteTable, SurfaceInfo};
use serde::Serialize;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{error::GatewayError, logging, mcp};

// ── Shared state ─────────────────────────────────────────────────────────────

/// Immutable per-request state: the frozen route table snapshot.
#[derive(Clone)]
pub struct AppState {
    routes: Arc<[Route]>,
}

// ── Response types ────────────────────────────────────────────────────────────

/// Record returned by `GET /items/{item_id}`.
#[derive(Debug, Serialize)]
pub struct ItemResponse {
    pub item_id: i64,
    pub name: String,
}

impl ItemResponse {
    /// Compute the synthetic item record for `item_id`.
    #[must_use]
    pub fn new(item_id: i64) -> Self {
        Self { item_id, name: format!("Item {item_id}") }
    }
}

/// One entry of the `GET /routes` listing.
#[derive(Debug, Serialize)]
pub struct RouteInfo {
    pub path: String,
    pub methods: Vec<String>,
}

impl From<&Route> for RouteInfo {
    fn from(route: &Route) -> Self {
        Self { path: route.path.clone(), methods: route.methods.clone() }
    }
}

// ── Router ────────────────────────────────────────────────────────────────────

/// Default metadata for the machine-callable mount.
#[must_use]
pub fn default_surface_info() -> SurfaceInfo {
    SurfaceInfo::new(
        "My API MCP",
        "MCP server for my API",
        "1.0.0",
        "http://localhost:8000",
    )
}

/// Build the application router.
///
/// Registration order is the one real invariant here: every application
/// route enters the table first, the machine-callable mount snapshots the
/// table, and only then does the table freeze into the state served by
/// `/routes`.
///
/// # Errors
/// Returns [`GatewayError::Core`] if a route registration fails.
pub fn build_app(info: SurfaceInfo) -> Result<Router, GatewayError> {
    let mut table = RouteTable::new();
    table.register("/items/{item_id}", &["GET"], "get_item")?;
    table.register("/routes", &["GET"], "get_routes")?;

    // Mount after all application routes; the mount registers its own
    // endpoints into the table, so /routes reports them too.
    let (mcp_router, _surface) = mcp::mount(&mut table, info)?;

    let state = AppState { routes: table.routes().into() };

    Ok(Router::new()
        .route("/items/{item_id}", get(get_item))
        .route("/routes", get(get_routes))
        .with_state(state)
        .merge(mcp_router)
        .layer(axum::middleware::from_fn(logging::log_request_body))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()))
}

// ── Handlers ──────────────────────────────────────────────────────────────────

/// `GET /items/{item_id}` — synthetic item lookup.
///
/// A non-integer `item_id` is rejected by the path extractor with a client
/// error before this handler runs.
pub async fn get_item(Path(item_id): Path<i64>) -> Json<ItemResponse> {
    Json(ItemResponse::new(item_id))
}

/// `GET /routes` — report the application's own registered routes.
pub async fn get_routes(State(state): State<AppState>) -> Json<Vec<RouteInfo>> {
    Json(state.routes.iter().map(RouteInfo::from).collect())
}
