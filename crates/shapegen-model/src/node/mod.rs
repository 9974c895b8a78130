mod constrained;
mod list;
mod model;
mod operation;
mod resource;
mod service;
mod structure;

pub use constrained::*;
pub use list::*;
pub use model::*;
pub use operation::*;
pub use resource::*;
pub use service::*;
pub use structure::*;
