use crate::{Error, node::Model, validate::validate_model};
use std::{fs, path::Path};
use thiserror::Error as ThisError;

///
/// LoadError
///

#[derive(Debug, ThisError)]
pub enum LoadError {
    #[error("failed to read model '{path}': {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to parse model: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Load, resolve and validate a JSON model file.
pub fn load_model(path: impl AsRef<Path>) -> Result<Model, Error> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.display().to_string(),
        source,
    })?;

    tracing::debug!(path = %path.display(), "loading model");

    model_from_str(&text)
}

/// Parse, resolve and validate a JSON model.
pub fn model_from_str(json: &str) -> Result<Model, Error> {
    let model: Model = serde_json::from_str(json).map_err(LoadError::from)?;

    prepare(model)
}

/// Resolve derived member flags and validate an in-memory model.
pub fn prepare(mut model: Model) -> Result<Model, Error> {
    model.resolve_constraints();
    validate_model(&model).map_err(Error::Validation)?;

    tracing::debug!(
        structures = model.structures.len(),
        operations = model.operations.len(),
        services = model.services.len(),
        "model validated"
    );

    Ok(model)
}
