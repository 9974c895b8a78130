//! Boxed routes, the router contract and the service that dispatches
//! through a router.

mod into_make_service;
mod route;

pub use into_make_service::IntoMakeService;
pub use route::Route;

use crate::{body::BoxBody, response::IntoResponse};
use futures_util::future::{Either, Ready, ready};
use http::{Request, Response};
use std::{
    fmt::{self, Display},
    marker::PhantomData,
    task::{Context, Poll},
};
use tower::{Service, ServiceExt, util::Oneshot};

///
/// Router
///
/// Protocol-specific lookup from a request to the service registered for
/// its operation.
///

pub trait Router<B> {
    type Service;
    type Error;

    fn match_route(&self, request: &Request<B>) -> Result<Self::Service, Self::Error>;
}

///
/// RoutingService
///
/// Dispatches each request through a [`Router`]. Routing failures are
/// rendered as protocol `P` responses.
///

pub struct RoutingService<R, P> {
    router: R,
    _protocol: PhantomData<fn() -> P>,
}

impl<R, P> RoutingService<R, P> {
    pub const fn new(router: R) -> Self {
        Self {
            router,
            _protocol: PhantomData,
        }
    }

    pub const fn router(&self) -> &R {
        &self.router
    }

    /// Replace the router, e.g. to wrap every route in a layer.
    pub fn map<R2>(self, f: impl FnOnce(R) -> R2) -> RoutingService<R2, P> {
        RoutingService::new(f(self.router))
    }
}

impl<R: Clone, P> Clone for RoutingService<R, P> {
    fn clone(&self) -> Self {
        Self::new(self.router.clone())
    }
}

impl<R: fmt::Debug, P> fmt::Debug for RoutingService<R, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RoutingService")
            .field("router", &self.router)
            .finish()
    }
}

impl<R, P, B> Service<Request<B>> for RoutingService<R, P>
where
    R: Router<B>,
    R::Service: Service<Request<B>, Response = Response<BoxBody>> + Clone,
    R::Error: IntoResponse<P> + Display,
{
    type Response = Response<BoxBody>;
    type Error = <R::Service as Service<Request<B>>>::Error;
    type Future = Either<
        Oneshot<R::Service, Request<B>>,
        Ready<Result<Self::Response, Self::Error>>,
    >;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, request: Request<B>) -> Self::Future {
        match self.router.match_route(&request) {
            Ok(service) => {
                tracing::debug!(method = %request.method(), uri = %request.uri(), "route matched");
                Either::Left(service.oneshot(request))
            }
            Err(error) => {
                tracing::debug!(method = %request.method(), uri = %request.uri(), %error, "no route");
                Either::Right(ready(Ok(
                    <R::Error as IntoResponse<P>>::into_response(error),
                )))
            }
        }
    }
}
