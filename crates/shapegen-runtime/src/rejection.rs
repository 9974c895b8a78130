use crate::{body::BoxBody, response::IntoResponse, runtime_error::RuntimeError};
use http::Response;
use thiserror::Error as ThisError;

///
/// RequestRejection
/// raised while extracting an operation's input or extensions
///

#[derive(Debug, ThisError)]
pub enum RequestRejection {
    #[error("missing request extension `{0}`")]
    MissingExtension(&'static str),

    #[error("failed to deserialize request: {0}")]
    Deserialize(String),
}

impl<P> IntoResponse<P> for RequestRejection {
    fn into_response(self) -> Response<BoxBody> {
        <RuntimeError as IntoResponse<P>>::into_response(self.into())
    }
}
