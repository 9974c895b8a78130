use crate::body::BoxBody;
use http::{Request, Response};
use std::{
    convert::Infallible,
    fmt,
    task::{Context, Poll},
};
use tower::{Service, util::BoxCloneService};

type Inner<B> = BoxCloneService<Request<B>, Response<BoxBody>, Infallible>;

///
/// Route
/// a type-erased, cloneable service for one operation
///

pub struct Route<B = BoxBody> {
    service: Inner<B>,
}

impl<B> Route<B> {
    pub fn new<S>(service: S) -> Self
    where
        S: Service<Request<B>, Response = Response<BoxBody>, Error = Infallible>
            + Clone
            + Send
            + 'static,
        S::Future: Send + 'static,
    {
        Self {
            service: BoxCloneService::new(service),
        }
    }
}

impl<B> Clone for Route<B> {
    fn clone(&self) -> Self {
        Self {
            service: self.service.clone(),
        }
    }
}

impl<B> fmt::Debug for Route<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Route").finish_non_exhaustive()
    }
}

impl<B> Service<Request<B>> for Route<B> {
    type Response = Response<BoxBody>;
    type Error = Infallible;
    type Future = <Inner<B> as Service<Request<B>>>::Future;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&mut self, request: Request<B>) -> Self::Future {
        self.service.call(request)
    }
}
