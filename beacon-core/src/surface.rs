use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::route::RouteTable;

/// Metadata describing a machine-callable mount.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[non_exhaustive]
pub struct SurfaceInfo {
    /// Human-readable name of the surface, e.g. `"My API MCP"`.
    pub name: String,
    /// Short description of what the surface exposes.
    pub description: String,
    /// Version string of the underlying API.
    pub version: String,
    /// Base URL clients use to reach the API, e.g. `http://localhost:8000`.
    pub base_url: String,
}

impl SurfaceInfo {
    /// Create surface metadata.
    #[must_use]
    pub fn new(name: &str, description: &str, version: &str, base_url: &str) -> Self {
        Self {
            name: name.to_owned(),
            description: description.to_owned(),
            version: version.to_owned(),
            base_url: base_url.to_owned(),
        }
    }
}

/// One callable operation on the machine-callable surface.
///
/// Derived from a (route, method) pair; `name` comes from the route's
/// operation id, suffixed with the lower-case method when a route allows
/// more than one verb.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct ToolDescriptor {
    /// Stable tool name, e.g. `"get_item"`.
    pub name: String,
    /// What calling the tool does.
    pub description: String,
    /// HTTP verb to use, upper-case.
    pub method: String,
    /// Path pattern to call, e.g. `/items/{item_id}`.
    pub path: String,
}

/// A snapshot of the route table exposed for automated consumption.
///
/// Built exactly once, at mount time, from the routes registered so far.
/// There is no later synchronization: routes registered after the snapshot
/// is taken do not appear on the surface.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[non_exhaustive]
pub struct ApiSurface {
    /// Mount metadata.
    pub info: SurfaceInfo,
    /// When the snapshot was taken.
    pub generated_at: DateTime<Utc>,
    /// Callable tools, in route registration order.
    pub tools: Vec<ToolDescriptor>,
}

impl ApiSurface {
    /// Build the surface from the routes currently in `table`.
    ///
    /// This is the one-time snapshot step: callers must invoke it only after
    /// every application route has been registered.
    #[must_use]
    pub fn from_table(info: SurfaceInfo, table: &RouteTable) -> Self {
        let mut tools = Vec::new();
        for route in table.routes() {
            let multi_method = route.methods.len() > 1;
            for method in &route.methods {
                let name = if multi_method {
                    format!("{}_{}", route.operation_id, method.to_ascii_lowercase())
                } else {
                    route.operation_id.clone()
                };
                tools.push(ToolDescriptor {
                    description: format!("{method} {}", route.path),
                    name,
                    method: method.clone(),
                    path: route.path.clone(),
                });
            }
        }
        Self { info, generated_at: Utc::now(), tools }
    }

    /// Return `true` if the surface carries a tool for `path`.
    #[must_use]
    pub fn covers_path(&self, path: &str) -> bool {
        self.tools.iter().any(|t| t.path == path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info() -> SurfaceInfo {
        SurfaceInfo::new("My API MCP", "MCP surface for the demo API", "1.0.0", "http://localhost:8000")
    }

    fn table_with_app_routes() -> RouteTable {
        let mut table = RouteTable::new();
        table.register("/items/{item_id}", &["GET"], "get_item").expect("valid route");
        table.register("/routes", &["GET"], "get_routes").expect("valid route");
        table
    }

    #[test]
    fn snapshot_covers_every_registered_route() {
        let table = table_with_app_routes();
        let surface = ApiSurface::from_table(info(), &table);

        assert_eq!(surface.tools.len(), 2);
        assert!(surface.covers_path("/items/{item_id}"));
        assert!(surface.covers_path("/routes"));
    }

    #[test]
    fn tool_names_come_from_operation_ids() {
        let table = table_with_app_routes();
        let surface = ApiSurface::from_table(info(), &table);

        let names: Vec<&str> = surface.tools.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["get_item", "get_routes"]);
    }

    #[test]
    fn multi_method_route_yields_one_tool_per_method() {
        let mut table = table_with_app_routes();
        table.register("/mcp", &["GET", "POST"], "mcp").expect("valid route");
        let surface = ApiSurface::from_table(info(), &table);

        let mcp_tools: Vec<&ToolDescriptor> =
            surface.tools.iter().filter(|t| t.path == "/mcp").collect();
        assert_eq!(mcp_tools.len(), 2);
        assert_eq!(mcp_tools[0].name, "mcp_get");
        assert_eq!(mcp_tools[1].name, "mcp_post");
    }

    #[test]
    fn snapshot_ignores_routes_registered_afterwards() {
        let mut table = table_with_app_routes();
        let surface = ApiSurface::from_table(info(), &table);

        table.register("/late", &["GET"], "late").expect("valid route");
        assert!(!surface.covers_path("/late"), "snapshot must not track later registrations");
        assert!(table.contains("/late"));
    }

    #[test]
    fn surface_serialises_with_info_and_tools() {
        let surface = ApiSurface::from_table(info(), &table_with_app_routes());
        let json = serde_json::to_value(&surface).expect("surface serialises");

        assert_eq!(json["info"]["name"], "My API MCP");
        assert_eq!(json["tools"][0]["name"], "get_item");
        assert_eq!(json["tools"][0]["method"], "GET");
        assert!(json["generated_at"].is_string(), "timestamp must serialise");
    }
}
