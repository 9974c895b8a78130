use crate::{
    operation::{Handler, IntoService, Operation},
    shape_id::ShapeId,
};
use tower::Service;

///
/// OperationShape
/// static description of one modelled operation
///

pub trait OperationShape {
    const ID: ShapeId;

    type Input;
    type Output;
    type Error;
}

///
/// OperationShapeExt
/// constructors turning handlers and services into [`Operation`]s
///

pub trait OperationShapeExt: OperationShape + Sized {
    fn from_handler<H, Exts>(handler: H) -> Operation<IntoService<Self, H>>
    where
        H: Handler<Self, Exts>,
    {
        Operation::new(IntoService::new(handler))
    }

    fn from_service<S, Exts>(service: S) -> Operation<S>
    where
        S: Service<(Self::Input, Exts), Response = Self::Output, Error = Self::Error>,
    {
        Operation::new(service)
    }
}

impl<Op: OperationShape> OperationShapeExt for Op {}
