pub mod build;
pub mod error;
pub mod node;
pub mod types;
pub mod validate;

/// Maximum length for shape and member names.
pub const MAX_NAME_LEN: usize = 64;

use crate::build::LoadError;
use thiserror::Error as ThisError;

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        err,
        error::ErrorTree,
        node::*,
        types::{Primitive, Protocol, Target},
    };
    pub use serde::{Deserialize, Serialize};
}

///
/// Error
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    LoadError(#[from] LoadError),

    #[error("model validation failed:\n{0}")]
    Validation(error::ErrorTree),
}
