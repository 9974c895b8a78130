//! Framework failures: anything that goes wrong around an operation
//! rather than inside it.

use crate::{
    body::BoxBody,
    rejection::RequestRejection,
    response::{IntoResponse, status_response},
};
use http::{HeaderValue, Response, StatusCode};
use thiserror::Error as ThisError;

/// Header naming the framework failure a response was rendered from.
pub const ERROR_TYPE_HEADER: &str = "x-error-type";

///
/// RuntimeError
///
/// Rendered the same way for every protocol. Operation errors never pass
/// through here; they have their own `IntoResponse`.
///

#[derive(Debug, Eq, PartialEq, ThisError)]
pub enum RuntimeError {
    #[error("{0}")]
    Serialization(String),

    #[error("{0}")]
    InternalFailure(String),
}

impl RuntimeError {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Serialization(_) => "SerializationException",
            Self::InternalFailure(_) => "InternalFailureException",
        }
    }

    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Serialization(_) => StatusCode::BAD_REQUEST,
            Self::InternalFailure(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<RequestRejection> for RuntimeError {
    fn from(rejection: RequestRejection) -> Self {
        let message = rejection.to_string();

        match rejection {
            // a missing extension is a server wiring bug, not a client error
            RequestRejection::MissingExtension(_) => Self::InternalFailure(message),
            RequestRejection::Deserialize(_) => Self::Serialization(message),
        }
    }
}

impl<P> IntoResponse<P> for RuntimeError {
    fn into_response(self) -> Response<BoxBody> {
        let name = self.name();
        let mut response = status_response(self.status(), self.to_string());
        response
            .headers_mut()
            .insert(ERROR_TYPE_HEADER, HeaderValue::from_static(name));

        response
    }
}
