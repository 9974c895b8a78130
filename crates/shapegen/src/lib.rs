//! ## Crate layout
//! - `build`: record and service builder synthesis, plus the `build!` macro
//!   for build scripts.
//! - `config`: `shapegen.toml` codegen configuration.
//! - `model`: the shape model, its JSON loader and validation.
//! - `runtime`: the contract generated code compiles against.
//! - `utils`: the naming policy shared by the model and the synthesizers.
//!
//! Generated code refers to the runtime as `::shapegen::runtime` unless the
//! config says otherwise.

pub use shapegen_build as build;
pub use shapegen_config_build as config;
pub use shapegen_model as model;
pub use shapegen_runtime as runtime;
pub use shapegen_utils as utils;

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//
// Macros
//

pub use shapegen_build::build;

///
/// Prelude
/// what hand-written glue around generated code usually needs
///

pub mod prelude {
    pub use crate::runtime::{
        body::BoxBody,
        constrained::{Constrained, MaybeConstrained},
        operation::{NotSet, OperationShape, OperationShapeExt as _},
        plugin::{IdentityPlugin, LayerPlugin, Plugin},
        protocol::{aws_json::AwsJson1_0, rpc_v2::RpcV2},
        rejection::RequestRejection,
        request::{Extension, FromParts, FromRequest},
        response::IntoResponse,
        routing::{Route, RoutingService},
    };
}
