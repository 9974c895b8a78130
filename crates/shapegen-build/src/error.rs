use shapegen_config_build::ConfigError;
use thiserror::Error as ThisError;

///
/// CodegenError
///
/// Raised before any code is emitted when the model would produce
/// colliding identifiers, or when emission itself fails.
///

#[derive(Debug, ThisError)]
pub enum CodegenError {
    #[error(transparent)]
    Model(#[from] shapegen_model::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("structure `{structure}`: members `{first}` and `{second}` both map to failure case `{case}`")]
    CaseCollision {
        structure: String,
        case: String,
        first: String,
        second: String,
    },

    #[error("structure `{structure}`: members `{first}` and `{second}` both map to builder method `{method}`")]
    MethodCollision {
        structure: String,
        method: String,
        first: String,
        second: String,
    },

    #[error("structures `{first}` and `{second}` both map to builder module `{module}`")]
    ModuleCollision {
        module: String,
        first: String,
        second: String,
    },

    #[error("service `{service}`: operations `{first}` and `{second}` both map to setter `{setter}`")]
    SetterCollision {
        service: String,
        setter: String,
        first: String,
        second: String,
    },

    #[error("service `{service}`: operation `{operation}` maps to type `{ty}`, which the builder uses as a generic parameter")]
    ReservedType {
        service: String,
        operation: String,
        ty: String,
    },

    #[error("`{first}` and `{second}` both map to type `{ty}`")]
    TypeCollision {
        ty: String,
        first: String,
        second: String,
    },

    #[error("`{shape}`: invalid type path `{path}`")]
    InvalidPath { shape: String, path: String },

    #[error("unknown shape `{0}`")]
    UnknownShape(String),

    #[error("generated code does not parse: {0}")]
    Syntax(String),
}
