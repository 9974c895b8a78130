use crate::body::{self, BoxBody};
use http::{Response, StatusCode};
use std::convert::Infallible;

///
/// IntoResponse
/// protocol-specific conversion of a value into an HTTP response
///

pub trait IntoResponse<Protocol> {
    fn into_response(self) -> Response<BoxBody>;
}

impl<P> IntoResponse<P> for Response<BoxBody> {
    fn into_response(self) -> Response<BoxBody> {
        self
    }
}

impl<P> IntoResponse<P> for () {
    fn into_response(self) -> Response<BoxBody> {
        Response::new(body::empty())
    }
}

impl<P> IntoResponse<P> for Infallible {
    fn into_response(self) -> Response<BoxBody> {
        match self {}
    }
}

/// Plain-text response with the given status.
#[must_use]
pub fn status_response(status: StatusCode, message: impl Into<String>) -> Response<BoxBody> {
    let mut response = Response::new(body::from_text(message));
    *response.status_mut() = status;

    response
}
