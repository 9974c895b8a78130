//! Plain-text rpc_v2 bindings for the widget operations.
//!
//! `GetWidget` takes the id as the whole body; `PutWidget` takes `id=name`.

use crate::{GetWidgetError, GetWidgetInput, GetWidgetOutput, PutWidgetInput};
use shapegen::runtime::{
    body::BoxBody,
    http::{Request, Response, StatusCode},
    protocol::rpc_v2::RpcV2,
    rejection::RequestRejection,
    request::FromRequest,
    response::{IntoResponse, status_response},
};

fn rejection(err: impl std::error::Error) -> RequestRejection {
    RequestRejection::Deserialize(err.to_string())
}

fn non_empty(s: &str) -> Option<String> {
    (!s.is_empty()).then(|| s.to_string())
}

impl FromRequest<RpcV2, String> for GetWidgetInput {
    type Rejection = RequestRejection;

    fn from_request(request: Request<String>) -> Result<Self, Self::Rejection> {
        let mut builder = Self::builder();
        if let Some(id) = non_empty(request.body()) {
            builder = builder.id(id);
        }

        builder.build().map_err(rejection)
    }
}

impl FromRequest<RpcV2, String> for PutWidgetInput {
    type Rejection = RequestRejection;

    fn from_request(request: Request<String>) -> Result<Self, Self::Rejection> {
        let body = request.into_body();
        let (id, name) = body.split_once('=').unwrap_or((body.as_str(), ""));

        let mut builder = Self::builder();
        if let Some(id) = non_empty(id) {
            builder = builder.id(id);
        }
        if let Some(name) = non_empty(name) {
            builder = builder.name(name);
        }

        builder.build().map_err(rejection)
    }
}

impl IntoResponse<RpcV2> for GetWidgetOutput {
    fn into_response(self) -> Response<BoxBody> {
        status_response(StatusCode::OK, self.name)
    }
}

impl IntoResponse<RpcV2> for GetWidgetError {
    fn into_response(self) -> Response<BoxBody> {
        match self {
            Self::WidgetNotFound(e) => {
                status_response(StatusCode::NOT_FOUND, format!("no widget with id {}", e.id))
            }
        }
    }
}
