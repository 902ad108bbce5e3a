use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// A registered (path pattern, allowed methods) pair in the application.
///
/// `path` may contain parameters in `{name}` form, e.g. `/items/{item_id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct Route {
    /// Path pattern, e.g. `/items/{item_id}`.
    pub path: String,
    /// Allowed HTTP verbs, upper-case, in registration order.
    pub methods: Vec<String>,
    /// Stable name for this route on the machine-callable surface.
    pub operation_id: String,
}

#[derive(Debug, Clone)]
struct RouteEntry {
    methods: Vec<String>,
    operation_id: String,
}

/// Ordered registry of the application's routes.
///
/// Built during bootstrap and read-only afterwards: the table is frozen into
/// an immutable snapshot before the server starts accepting requests, so the
/// set reported by the introspection endpoint always equals the set
/// registered at startup.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    entries: IndexMap<String, RouteEntry>,
}

impl RouteTable {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a route.
    ///
    /// Registering a path that already exists merges the new methods into the
    /// existing entry (duplicates ignored) and keeps the first registration's
    /// position and operation id.
    ///
    /// # Errors
    /// Returns [`CoreError::InvalidRoutePath`] if `path` is empty or does not
    /// start with `/`, or [`CoreError::EmptyMethods`] if `methods` is empty.
    pub fn register(
        &mut self,
        path: &str,
        methods: &[&str],
        operation_id: &str,
    ) -> Result<(), CoreError> {
        if path.is_empty() || !path.starts_with('/') {
            return Err(CoreError::InvalidRoutePath {
                path: path.to_owned(),
                reason: "must be non-empty and start with '/'".to_owned(),
            });
        }
        if methods.is_empty() {
            return Err(CoreError::EmptyMethods { path: path.to_owned() });
        }

        let entry = self
            .entries
            .entry(path.to_owned())
            .or_insert_with(|| RouteEntry {
                methods: Vec::new(),
                operation_id: operation_id.to_owned(),
            });
        for method in methods {
            let canonical = method.to_ascii_uppercase();
            if !entry.methods.contains(&canonical) {
                entry.methods.push(canonical);
            }
        }
        Ok(())
    }

    /// Snapshot of all routes in registration order.
    #[must_use]
    pub fn routes(&self) -> Vec<Route> {
        self.entries
            .iter()
            .map(|(path, entry)| Route {
                path: path.clone(),
                methods: entry.methods.clone(),
                operation_id: entry.operation_id.clone(),
            })
            .collect()
    }

    /// Return `true` if `path` is registered.
    #[must_use]
    pub fn contains(&self, path: &str) -> bool {
        self.entries.contains_key(path)
    }

    /// Number of registered paths.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Return `true` if no routes are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
