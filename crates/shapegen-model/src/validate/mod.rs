//! Model validation orchestration.

pub mod names;
pub mod reference;

use crate::{error::ErrorTree, node::Model};

/// Run full model validation in a staged, deterministic order.
pub fn validate_model(model: &Model) -> Result<(), ErrorTree> {
    let mut errors = ErrorTree::new();

    // Phase 1: names (identity + uniqueness).
    names::validate_names(model, &mut errors);

    // Phase 2: references between shapes.
    reference::validate_references(model, &mut errors);

    errors.result()
}
