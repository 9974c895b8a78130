use crate::{body::BoxBody, rejection::RequestRejection, response::IntoResponse};
use http::{Request, Response, request::Parts};
use std::convert::Infallible;

///
/// FromRequest
/// protocol-specific extraction of an operation input from a request
///

pub trait FromRequest<Protocol, B>: Sized {
    type Rejection: IntoResponse<Protocol>;

    fn from_request(request: Request<B>) -> Result<Self, Self::Rejection>;
}

impl<P, B> FromRequest<P, B> for () {
    type Rejection = Infallible;

    fn from_request(_request: Request<B>) -> Result<Self, Self::Rejection> {
        Ok(())
    }
}

///
/// FromParts
/// extraction of handler extensions from the request head
///

pub trait FromParts<Protocol>: Sized {
    type Rejection: IntoResponse<Protocol>;

    fn from_parts(parts: &mut Parts) -> Result<Self, Self::Rejection>;
}

impl<P> FromParts<P> for () {
    type Rejection = Infallible;

    fn from_parts(_parts: &mut Parts) -> Result<Self, Self::Rejection> {
        Ok(())
    }
}

impl<P, T1> FromParts<P> for (T1,)
where
    T1: FromParts<P>,
{
    type Rejection = T1::Rejection;

    fn from_parts(parts: &mut Parts) -> Result<Self, Self::Rejection> {
        Ok((T1::from_parts(parts)?,))
    }
}

impl<P, T1, T2> FromParts<P> for (T1, T2)
where
    T1: FromParts<P>,
    T2: FromParts<P>,
{
    type Rejection = Response<BoxBody>;

    fn from_parts(parts: &mut Parts) -> Result<Self, Self::Rejection> {
        let t1 = T1::from_parts(parts).map_err(IntoResponse::<P>::into_response)?;
        let t2 = T2::from_parts(parts).map_err(IntoResponse::<P>::into_response)?;

        Ok((t1, t2))
    }
}

///
/// Extension
/// handler argument cloned out of the request extensions
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Extension<T>(pub T);

impl<P, T> FromParts<P> for Extension<T>
where
    T: Clone + Send + Sync + 'static,
{
    type Rejection = RequestRejection;

    fn from_parts(parts: &mut Parts) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<T>()
            .cloned()
            .map(Extension)
            .ok_or(RequestRejection::MissingExtension(std::any::type_name::<T>()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime_error::RuntimeError;

    struct Proto;

    #[derive(Clone, Debug, PartialEq)]
    struct Tenant(&'static str);

    fn parts_with_tenant() -> Parts {
        let mut request = Request::new(());
        request.extensions_mut().insert(Tenant("acme"));

        request.into_parts().0
    }

    #[test]
    fn extension_is_cloned_out() {
        let mut parts = parts_with_tenant();
        let ext = <Extension<Tenant> as FromParts<Proto>>::from_parts(&mut parts).unwrap();

        assert_eq!(ext, Extension(Tenant("acme")));
    }

    #[test]
    fn missing_extension_is_a_server_error() {
        let mut parts = Request::new(()).into_parts().0;
        let err = <Extension<Tenant> as FromParts<Proto>>::from_parts(&mut parts).unwrap_err();

        assert_eq!(
            RuntimeError::from(err).status(),
            http::StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn tuples_extract_in_order() {
        let mut parts = parts_with_tenant();
        let (a, b) =
            <(Extension<Tenant>, Extension<Tenant>) as FromParts<Proto>>::from_parts(&mut parts)
                .unwrap();

        assert_eq!(a, b);
    }
}
