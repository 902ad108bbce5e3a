/// Errors produced by the `beacon-core` crate.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum CoreError {
    /// A route path failed validation at registration time.
    #[error("invalid route path '{path}': {reason}")]
    InvalidRoutePath { path: String, reason: String },

    /// A route was registered without any HTTP methods.
    #[error("route '{path}' registered with no methods")]
    EmptyMethods { path: String },
}
