use crate::operation::OperationShape;
use std::{
    fmt,
    future::Future,
    marker::PhantomData,
    task::{Context, Poll},
};
use tower::Service;

///
/// Handler
///
/// An async function over an operation's input plus an extension context.
/// Implemented for closures and fns taking zero, one or two extensions.
///

pub trait Handler<Op, Exts>
where
    Op: OperationShape,
{
    type Future: Future<Output = Result<Op::Output, Op::Error>>;

    fn call(&mut self, input: Op::Input, exts: Exts) -> Self::Future;
}

impl<Op, F, Fut> Handler<Op, ()> for F
where
    Op: OperationShape,
    F: FnMut(Op::Input) -> Fut,
    Fut: Future<Output = Result<Op::Output, Op::Error>>,
{
    type Future = Fut;

    fn call(&mut self, input: Op::Input, _exts: ()) -> Self::Future {
        (self)(input)
    }
}

impl<Op, F, Fut, E1> Handler<Op, (E1,)> for F
where
    Op: OperationShape,
    F: FnMut(Op::Input, E1) -> Fut,
    Fut: Future<Output = Result<Op::Output, Op::Error>>,
{
    type Future = Fut;

    fn call(&mut self, input: Op::Input, (e1,): (E1,)) -> Self::Future {
        (self)(input, e1)
    }
}

impl<Op, F, Fut, E1, E2> Handler<Op, (E1, E2)> for F
where
    Op: OperationShape,
    F: FnMut(Op::Input, E1, E2) -> Fut,
    Fut: Future<Output = Result<Op::Output, Op::Error>>,
{
    type Future = Fut;

    fn call(&mut self, input: Op::Input, (e1, e2): (E1, E2)) -> Self::Future {
        (self)(input, e1, e2)
    }
}

///
/// IntoService
/// adapts a [`Handler`] into a service over `(input, extensions)`
///

pub struct IntoService<Op, H> {
    handler: H,
    _operation: PhantomData<fn() -> Op>,
}

impl<Op, H> IntoService<Op, H> {
    pub(crate) const fn new(handler: H) -> Self {
        Self {
            handler,
            _operation: PhantomData,
        }
    }
}

impl<Op, H: Clone> Clone for IntoService<Op, H> {
    fn clone(&self) -> Self {
        Self::new(self.handler.clone())
    }
}

impl<Op, H> fmt::Debug for IntoService<Op, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntoService").finish_non_exhaustive()
    }
}

impl<Op, Exts, H> Service<(Op::Input, Exts)> for IntoService<Op, H>
where
    Op: OperationShape,
    H: Handler<Op, Exts>,
{
    type Response = Op::Output;
    type Error = Op::Error;
    type Future = H::Future;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, (input, exts): (Op::Input, Exts)) -> Self::Future {
        self.handler.call(input, exts)
    }
}
