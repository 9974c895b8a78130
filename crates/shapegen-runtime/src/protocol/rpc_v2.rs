use crate::{
    body::BoxBody,
    response::{IntoResponse, status_response},
    routing::Router,
    shape_id::ShapeId,
};
use http::{Method, Request, Response, StatusCode};
use thiserror::Error as ThisError;
use tower::Layer;

///
/// RpcV2
/// protocol marker: `POST /service/{Service}/operation/{Operation}`
///

#[derive(Clone, Copy, Debug, Default)]
pub struct RpcV2;

///
/// RpcV2RoutingError
///

#[derive(Debug, Eq, PartialEq, ThisError)]
pub enum RpcV2RoutingError {
    #[error("no operation is routed at `{0}`")]
    NotFound(String),

    #[error("method `{0}` is not allowed, operations are invoked with POST")]
    MethodNotAllowed(Method),
}

impl IntoResponse<RpcV2> for RpcV2RoutingError {
    fn into_response(self) -> Response<BoxBody> {
        let status = match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
        };

        status_response(status, self.to_string())
    }
}

///
/// RpcV2Router
///

#[derive(Clone, Debug)]
pub struct RpcV2Router<S> {
    service: &'static str,
    routes: Vec<(ShapeId, S)>,
}

impl<S> RpcV2Router<S> {
    /// Assemble the router from routes given in slot order.
    pub fn new(service: &'static str, routes: impl IntoIterator<Item = (ShapeId, S)>) -> Self {
        Self {
            service,
            routes: routes.into_iter().collect(),
        }
    }

    #[must_use]
    pub const fn service(&self) -> &'static str {
        self.service
    }

    /// Operation ids in the order they were assembled.
    pub fn operations(&self) -> impl Iterator<Item = ShapeId> + '_ {
        self.routes.iter().map(|(id, _)| *id)
    }

    /// Request path an operation is served at.
    #[must_use]
    pub fn path_for(&self, operation: ShapeId) -> String {
        format!("/service/{}/operation/{}", self.service, operation.name())
    }

    /// Wrap every route in `layer`.
    pub fn layer<L: Layer<S>>(self, layer: &L) -> RpcV2Router<L::Service> {
        RpcV2Router {
            service: self.service,
            routes: self
                .routes
                .into_iter()
                .map(|(id, route)| (id, layer.layer(route)))
                .collect(),
        }
    }

    fn find(&self, path: &str) -> Option<&S> {
        let operation = path
            .strip_prefix("/service/")
            .and_then(|rest| rest.split_once("/operation/"))
            .filter(|(service, _)| *service == self.service)
            .map(|(_, operation)| operation)?;

        self.routes
            .iter()
            .find(|(id, _)| id.name() == operation)
            .map(|(_, route)| route)
    }
}

impl<S: Clone, B> Router<B> for RpcV2Router<S> {
    type Service = S;
    type Error = RpcV2RoutingError;

    fn match_route(&self, request: &Request<B>) -> Result<S, Self::Error> {
        let path = request.uri().path();
        let route = self
            .find(path)
            .ok_or_else(|| RpcV2RoutingError::NotFound(path.to_string()))?;

        if request.method() != Method::POST {
            return Err(RpcV2RoutingError::MethodNotAllowed(request.method().clone()));
        }

        Ok(route.clone())
    }
}
