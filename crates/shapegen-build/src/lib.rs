//! Synthesis of validating record builders and typestate service builders
//! from a shape model.
//!
//! Each shape is emitted independently (on the rayon pool when enabled)
//! and the fragments are joined in model order, so the output for a given
//! model and config is byte-stable.

mod check;
mod error;
mod macros;
mod operation;
mod record;
mod router;
mod service;
mod types;

pub use error::CodegenError;

use rayon::prelude::*;
use shapegen_config_build::CodegenConfig;
use shapegen_model::{build::load_model, node::*};
use std::path::Path;

/// Banner placed above every generated file.
pub const GENERATED_HEADER: &str = "// @generated by shapegen. Do not edit.\n";

/// Generate the Rust source for a prepared model.
pub fn generate(model: &Model, config: &CodegenConfig) -> Result<String, CodegenError> {
    Codegen::new(model, config).generate()
}

/// Load a model and an optional config file, then generate.
///
/// A config path that does not exist yields the default config.
pub fn generate_from_paths(
    model_path: impl AsRef<Path>,
    config_path: impl AsRef<Path>,
) -> Result<String, CodegenError> {
    let model = load_model(model_path)?;
    let config = shapegen_config_build::load(config_path)?;

    generate(&model, &config)
}

///
/// Shape
/// one independently synthesized unit of output
///

#[derive(Clone, Copy, Debug)]
pub enum Shape<'a> {
    List(&'a List),
    Structure(&'a Structure),
    Operation(&'a Operation),
    Service(&'a Service),
}

impl Shape<'_> {
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::List(_) => "list",
            Self::Structure(_) => "structure",
            Self::Operation(_) => "operation",
            Self::Service(_) => "service",
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::List(s) => &s.name,
            Self::Structure(s) => &s.name,
            Self::Operation(s) => &s.name,
            Self::Service(s) => &s.name,
        }
    }
}

///
/// Codegen
///

pub struct Codegen<'a> {
    pub(crate) model: &'a Model,
    pub(crate) config: &'a CodegenConfig,
}

impl<'a> Codegen<'a> {
    #[must_use]
    pub const fn new(model: &'a Model, config: &'a CodegenConfig) -> Self {
        Self { model, config }
    }

    /// Shapes to emit, in output order.
    #[must_use]
    pub fn shapes(&self) -> Vec<Shape<'a>> {
        let mut shapes = Vec::new();

        if self.config.records {
            shapes.extend(self.model.lists.iter().map(Shape::List));
            shapes.extend(self.model.structures.iter().map(Shape::Structure));
        }
        if self.config.services {
            shapes.extend(self.model.operations.iter().map(Shape::Operation));
            shapes.extend(self.model.services.iter().map(Shape::Service));
        }

        shapes
    }

    /// Reject models whose shapes would map to colliding identifiers.
    pub fn check(&self) -> Result<(), CodegenError> {
        check::check(self)
    }

    /// Run the collision checks, then emit every shape.
    pub fn generate(&self) -> Result<String, CodegenError> {
        self.check()?;

        let shapes = self.shapes();
        let fragments: Vec<String> = if self.config.parallel {
            shapes
                .par_iter()
                .map(|shape| self.emit(*shape))
                .collect::<Result<_, _>>()?
        } else {
            shapes
                .iter()
                .map(|shape| self.emit(*shape))
                .collect::<Result<_, _>>()?
        };

        let source = fragments.join("\n");
        let source = if self.config.pretty {
            let file = syn::parse_file(&source).map_err(|e| CodegenError::Syntax(e.to_string()))?;
            prettyplease::unparse(&file)
        } else {
            source
        };

        tracing::info!(
            namespace = %self.model.namespace,
            shapes = shapes.len(),
            bytes = source.len(),
            "generated shapes"
        );

        Ok(format!("{GENERATED_HEADER}{source}"))
    }

    // token streams are not Send, so each worker renders its own to text
    fn emit(&self, shape: Shape<'_>) -> Result<String, CodegenError> {
        let emitter = types::Emitter::new(self.model, self.config)?;

        let tokens = match shape {
            Shape::List(list) => emitter.list(list)?,
            Shape::Structure(structure) => record::generate(&emitter, structure)?,
            Shape::Operation(op) => operation::generate(&emitter, op)?,
            Shape::Service(service) => service::generate(&emitter, service)?,
        };
        tracing::debug!(kind = shape.kind(), name = shape.name(), "synthesized shape");

        Ok(tokens.to_string())
    }
}
