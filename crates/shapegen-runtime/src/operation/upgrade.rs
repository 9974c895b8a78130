use crate::{
    body::BoxBody,
    operation::{Operation, OperationShape},
    plugin::Plugin,
    request::{FromParts, FromRequest},
    response::IntoResponse,
};
use futures_util::future::BoxFuture;
use http::{Request, Response};
use std::{
    convert::Infallible,
    fmt,
    marker::PhantomData,
    task::{Context, Poll},
};
use tower::{Service, ServiceExt};

///
/// Upgrade
///
/// Turns a service over `(input, extensions)` into a service over HTTP
/// requests for protocol `P`. Extraction failures and operation errors
/// are both rendered as responses, so the upgraded service never fails.
///

pub struct Upgrade<P, Op, Exts, S> {
    inner: S,
    _marker: PhantomData<fn() -> (P, Op, Exts)>,
}

impl<P, Op, Exts, S> Upgrade<P, Op, Exts, S> {
    pub const fn new(inner: S) -> Self {
        Self {
            inner,
            _marker: PhantomData,
        }
    }
}

impl<P, Op, Exts, S: Clone> Clone for Upgrade<P, Op, Exts, S> {
    fn clone(&self) -> Self {
        Self::new(self.inner.clone())
    }
}

impl<P, Op, Exts, S> fmt::Debug for Upgrade<P, Op, Exts, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Upgrade")
            .field("operation", &std::any::type_name::<Op>())
            .finish_non_exhaustive()
    }
}

impl<P, Op, Exts, S, B> Service<Request<B>> for Upgrade<P, Op, Exts, S>
where
    P: 'static,
    Op: OperationShape + 'static,
    Op::Input: FromRequest<P, B> + Send + 'static,
    Op::Output: IntoResponse<P>,
    Op::Error: IntoResponse<P>,
    Exts: FromParts<P> + Send + 'static,
    S: Service<(Op::Input, Exts), Response = Op::Output, Error = Op::Error>
        + Clone
        + Send
        + 'static,
    S::Future: Send + 'static,
    B: 'static,
{
    type Response = Response<BoxBody>;
    type Error = Infallible;
    type Future = BoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        // readiness of the inner service is awaited per call by `oneshot`
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, request: Request<B>) -> Self::Future {
        let (mut parts, body) = request.into_parts();

        let exts = match Exts::from_parts(&mut parts) {
            Ok(exts) => exts,
            Err(rejection) => {
                tracing::debug!(operation = %Op::ID, "extension extraction rejected");
                let response = <Exts::Rejection as IntoResponse<P>>::into_response(rejection);
                return Box::pin(async move { Ok(response) });
            }
        };

        let input = match Op::Input::from_request(Request::from_parts(parts, body)) {
            Ok(input) => input,
            Err(rejection) => {
                tracing::debug!(operation = %Op::ID, "input extraction rejected");
                let response = <<Op::Input as FromRequest<P, B>>::Rejection as IntoResponse<P>>::into_response(rejection);
                return Box::pin(async move { Ok(response) });
            }
        };

        let inner = self.inner.clone();
        Box::pin(async move {
            let response = match inner.oneshot((input, exts)).await {
                Ok(output) => <Op::Output as IntoResponse<P>>::into_response(output),
                Err(error) => <Op::Error as IntoResponse<P>>::into_response(error),
            };

            Ok(response)
        })
    }
}

///
/// Upgradable
///
/// The capability a service builder slot must have before `build` is
/// callable. Implemented for [`Operation`] only; `NotSet` never upgrades.
///

#[diagnostic::on_unimplemented(
    message = "the `{Op}` operation slot is not set",
    label = "`{Self}` cannot be upgraded into a route",
    note = "give every operation slot a handler or operation before calling `build`"
)]
pub trait Upgradable<P, Op, Exts, B, Pl> {
    type Service: Service<Request<B>, Response = Response<BoxBody>, Error = Infallible, Future: Send + 'static>
        + Clone
        + Send
        + 'static;

    fn upgrade(self, plugin: &Pl) -> Self::Service;
}

impl<P, Op, Exts, B, Pl, S> Upgradable<P, Op, Exts, B, Pl> for Operation<S>
where
    Op: OperationShape,
    Pl: Plugin<P, Op, Upgrade<P, Op, Exts, S>>,
    Pl::Output: Service<Request<B>, Response = Response<BoxBody>, Error = Infallible>
        + Clone
        + Send
        + 'static,
    <Pl::Output as Service<Request<B>>>::Future: Send + 'static,
{
    type Service = Pl::Output;

    fn upgrade(self, plugin: &Pl) -> Self::Service {
        plugin.apply(Upgrade::new(self.into_inner()))
    }
}
