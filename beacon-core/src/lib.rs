//! Core types for the Beacon demo API.
//!
//! Defines the route table the application registers its handlers into and
//! the machine-callable surface snapshot generated from it at mount time.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod error;
pub mod route;
pub mod surface;

pub use error::CoreError;
pub use route::{Route, RouteTable};
pub use surface::{ApiSurface, SurfaceInfo, ToolDescriptor};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn route_table_roundtrip_through_surface() {
        let mut table = RouteTable::new();
        table.register("/items/{item_id}", &["GET"], "get_item").expect("valid route");
        table.register("/routes", &["GET"], "get_routes").expect("valid route");

        let info = SurfaceInfo::new("demo", "demo surface", "1.0.0", "http://localhost:8000");
        let surface = ApiSurface::from_table(info, &table);

        for route in table.routes() {
            assert!(
                surface.covers_path(&route.path),
                "surface must cover registered path {}",
                route.path
            );
        }
    }

    #[test]
    fn core_error_display_includes_path() {
        let err = CoreError::InvalidRoutePath {
            path: "items".to_owned(),
            reason: "must be non-empty and start with '/'".to_owned(),
        };
        assert!(err.to_string().contains("items"), "Display must include the path");

        let err = CoreError::EmptyMethods { path: "/items".to_owned() };
        assert!(err.to_string().contains("/items"));
    }
}
