//! Operations and their upgrade into uniform request services.
//!
//! A service builder slot holds either [`NotSet`] or an [`Operation`].
//! Only the latter implements [`Upgradable`], which is what makes a
//! builder with an empty slot impossible to `build`.

mod handler;
mod shape;
mod upgrade;

pub use handler::{Handler, IntoService};
pub use shape::{OperationShape, OperationShapeExt};
pub use upgrade::{Upgradable, Upgrade};

///
/// NotSet
/// marker held by a service builder slot before a handler is attached
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct NotSet;

///
/// Operation
/// an inner service registered for one operation slot
///

#[derive(Clone, Debug)]
pub struct Operation<S> {
    inner: S,
}

impl<S> Operation<S> {
    #[must_use]
    pub const fn new(inner: S) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> S {
        self.inner
    }

    /// Transform the inner service, e.g. to wrap it in an
    /// operation-specific layer before registration.
    pub fn map<S2>(self, f: impl FnOnce(S) -> S2) -> Operation<S2> {
        Operation::new(f(self.inner))
    }
}
