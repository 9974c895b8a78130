//! ## Crate layout
//! - `constrained`: the validated/raw value contract used by record builders.
//! - `operation`: operation shapes, handlers and the upgrade into request services.
//! - `plugin`: the modifier applied to every upgraded operation.
//! - `routing`: boxed routes, the router contract and the routing service.
//! - `protocol`: protocol markers and their router assembly policies.
//! - `request` / `response` / `rejection`: the glue an upgrade needs at the edges.
//! - `runtime_error`: framework failures, rendered alike for every protocol.
//!
//! Generated code only refers to this crate through absolute paths, so the
//! `http` and `tower` crates are re-exported for it.

pub mod body;
pub mod constrained;
pub mod operation;
pub mod plugin;
pub mod protocol;
pub mod rejection;
pub mod request;
pub mod response;
pub mod routing;
pub mod runtime_error;
pub mod shape_id;

pub use http;
pub use tower;

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
