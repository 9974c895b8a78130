use crate::{
    body::BoxBody,
    response::{IntoResponse, status_response},
    routing::Router,
    shape_id::ShapeId,
};
use http::{Method, Request, Response, StatusCode};
use thiserror::Error as ThisError;
use tower::Layer;

/// Header naming the invoked operation as `{Service}.{Operation}`.
pub const TARGET_HEADER: &str = "x-amz-target";

///
/// AwsJson1_0
/// protocol marker: `POST /` with the operation in `x-amz-target`
///

#[allow(non_camel_case_types)]
#[derive(Clone, Copy, Debug, Default)]
pub struct AwsJson1_0;

///
/// AwsJsonRoutingError
///

#[derive(Debug, Eq, PartialEq, ThisError)]
pub enum AwsJsonRoutingError {
    #[error("no operation is routed at `{0}`")]
    NotFound(String),

    #[error("unknown operation target `{0}`")]
    UnknownTarget(String),

    #[error("method `{0}` is not allowed, operations are invoked with POST")]
    MethodNotAllowed(Method),

    #[error("missing `x-amz-target` header")]
    MissingTarget,

    #[error("`x-amz-target` header is not valid text")]
    InvalidTarget,
}

impl AwsJsonRoutingError {
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) | Self::UnknownTarget(_) => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            Self::MissingTarget | Self::InvalidTarget => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse<AwsJson1_0> for AwsJsonRoutingError {
    fn into_response(self) -> Response<BoxBody> {
        status_response(self.status(), self.to_string())
    }
}

///
/// AwsJsonRouter
///

#[derive(Clone, Debug)]
pub struct AwsJsonRouter<S> {
    service: &'static str,
    routes: Vec<(String, ShapeId, S)>,
}

impl<S> AwsJsonRouter<S> {
    /// Assemble the router from routes given in slot order.
    pub fn new(service: &'static str, routes: impl IntoIterator<Item = (ShapeId, S)>) -> Self {
        let routes = routes
            .into_iter()
            .map(|(id, route)| (format!("{service}.{}", id.name()), id, route))
            .collect();

        Self { service, routes }
    }

    #[must_use]
    pub const fn service(&self) -> &'static str {
        self.service
    }

    /// Operation ids in the order they were assembled.
    pub fn operations(&self) -> impl Iterator<Item = ShapeId> + '_ {
        self.routes.iter().map(|(_, id, _)| *id)
    }

    /// Wrap every route in `layer`.
    pub fn layer<L: Layer<S>>(self, layer: &L) -> AwsJsonRouter<L::Service> {
        AwsJsonRouter {
            service: self.service,
            routes: self
                .routes
                .into_iter()
                .map(|(target, id, route)| (target, id, layer.layer(route)))
                .collect(),
        }
    }
}

impl<S: Clone, B> Router<B> for AwsJsonRouter<S> {
    type Service = S;
    type Error = AwsJsonRoutingError;

    fn match_route(&self, request: &Request<B>) -> Result<S, Self::Error> {
        let path = request.uri().path();
        if path != "/" {
            return Err(AwsJsonRoutingError::NotFound(path.to_string()));
        }
        if request.method() != Method::POST {
            return Err(AwsJsonRoutingError::MethodNotAllowed(request.method().clone()));
        }

        let target = request
            .headers()
            .get(TARGET_HEADER)
            .ok_or(AwsJsonRoutingError::MissingTarget)?
            .to_str()
            .map_err(|_| AwsJsonRoutingError::InvalidTarget)?;

        self.routes
            .iter()
            .find(|(t, _, _)| t == target)
            .map(|(_, _, route)| route.clone())
            .ok_or_else(|| AwsJsonRoutingError::UnknownTarget(target.to_string()))
    }
}
