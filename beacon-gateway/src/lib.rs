//! HTTP gateway for the Beacon demo API.
//!
//! Exposes the item lookup and route introspection endpoints, logs every
//! request body through the process-wide tracing sink, and mounts a
//! machine-callable surface generated from the route table at startup.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod error;
pub mod logging;
pub mod mcp;
pub mod routes;
