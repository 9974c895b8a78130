//! Naming policy shared by the shape model and the synthesizers.
//!
//! Everything here is pure and deterministic: the same model name always
//! maps to the same emitted identifier.

pub mod case;
pub mod ident;
pub mod reserved;
