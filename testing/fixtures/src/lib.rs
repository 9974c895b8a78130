//! Generated code for the widgets fixture model, plus the hand-written
//! constraint types, decoders and protocol glue it relies on.
//!
//! A service builder exposes `build` once every operation slot is set:
//!
//! ```
//! use shapegen_testing_fixtures::*;
//!
//! async fn get_widget(input: GetWidgetInput) -> Result<GetWidgetOutput, GetWidgetError> {
//!     Err(WidgetNotFound { id: input.id }.into())
//! }
//!
//! async fn put_widget(_input: PutWidgetInput) -> Result<(), std::convert::Infallible> {
//!     Ok(())
//! }
//!
//! let _service = WidgetService::builder()
//!     .get_widget(get_widget)
//!     .put_widget(put_widget)
//!     .build::<String, (), ()>();
//! ```
//!
//! With a slot left unset there is no `build` to call; `tests/ui` pins
//! the diagnostic.

pub mod constraints;
pub mod decode;
mod protocol;

#[allow(clippy::all, clippy::pedantic, clippy::nursery)]
mod generated {
    include!(concat!(env!("OUT_DIR"), "/shapes.rs"));
}

pub use generated::*;
