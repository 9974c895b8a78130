//! Protocol markers and their router assembly policies.
//!
//! Both routers are built from the upgraded operation routes in slot
//! order; they differ only in how a request names its operation.

pub mod aws_json;
pub mod rpc_v2;
