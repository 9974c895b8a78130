use shapegen::prelude::*;
use shapegen::runtime::{
    http::{HeaderValue, Method, Request, Response, StatusCode},
    protocol::aws_json::TARGET_HEADER,
    runtime_error::ERROR_TYPE_HEADER,
    tower::{Layer, Service, ServiceExt, service_fn, util::MapResponseLayer},
};
use shapegen_testing_fixtures::*;
use std::{
    collections::HashMap,
    convert::Infallible,
    sync::{Arc, Mutex},
};

type Store = Arc<Mutex<HashMap<String, String>>>;
type StoreExt = (Extension<Store>,);

async fn get_widget(
    input: GetWidgetInput,
    Extension(store): Extension<Store>,
) -> Result<GetWidgetOutput, GetWidgetError> {
    let name = store.lock().unwrap().get(&input.id).cloned();

    match name {
        Some(name) => Ok(GetWidgetOutput { name }),
        None => Err(WidgetNotFound { id: input.id }.into()),
    }
}

async fn put_widget(
    input: PutWidgetInput,
    Extension(store): Extension<Store>,
) -> Result<(), Infallible> {
    store.lock().unwrap().insert(input.id, input.name);

    Ok(())
}

async fn always_missing(input: GetWidgetInput) -> Result<GetWidgetOutput, GetWidgetError> {
    Err(WidgetNotFound { id: input.id }.into())
}

async fn ping(_input: ()) -> Result<(), Infallible> {
    Ok(())
}

fn tag(mut response: Response<BoxBody>) -> Response<BoxBody> {
    response
        .headers_mut()
        .insert("x-tag", HeaderValue::from_static("tagged"));

    response
}

fn shout(output: GetWidgetOutput) -> GetWidgetOutput {
    GetWidgetOutput {
        name: output.name.to_uppercase(),
    }
}

fn same_type<T>(_: &T, _: &T) {}

fn rpc(op: &str, body: &str, store: Option<&Store>) -> Request<String> {
    let mut request = Request::builder()
        .method(Method::POST)
        .uri(format!("/service/WidgetService/operation/{op}"))
        .body(body.to_string())
        .unwrap();
    if let Some(store) = store {
        request.extensions_mut().insert(store.clone());
    }

    request
}

async fn send<S>(service: S, request: Request<String>) -> (StatusCode, String)
where
    S: Service<Request<String>, Response = Response<BoxBody>, Error = Infallible>,
{
    let response = service.oneshot(request).await.unwrap();
    let status = response.status();
    let body = String::from_utf8(response.into_body().to_vec()).unwrap();

    (status, body)
}

#[tokio::test]
async fn put_then_get_through_the_router() {
    let store = Store::default();
    let service = WidgetService::builder()
        .get_widget(get_widget)
        .put_widget(put_widget)
        .build::<String, StoreExt, StoreExt>();

    let (status, _) = send(service.clone(), rpc("PutWidget", "w1=gear", Some(&store))).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(service.clone(), rpc("GetWidget", "w1", Some(&store))).await;
    assert_eq!((status, body.as_str()), (StatusCode::OK, "gear"));

    let (status, body) = send(service, rpc("GetWidget", "nope", Some(&store))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, "no widget with id nope");
}

#[tokio::test]
async fn rejections_become_responses() {
    let store = Store::default();
    let service = WidgetService::builder()
        .get_widget(get_widget)
        .put_widget(put_widget)
        .build::<String, StoreExt, StoreExt>();

    let (status, body) = send(service.clone(), rpc("GetWidget", "", Some(&store))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.contains("`id` was not specified"));

    let response = service
        .clone()
        .oneshot(rpc("GetWidget", "", Some(&store)))
        .await
        .unwrap();
    assert_eq!(response.headers()[ERROR_TYPE_HEADER], "SerializationException");

    let (status, _) = send(service.clone(), rpc("GetWidget", "w1", None)).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

    let (status, _) = send(service, rpc("DeleteWidget", "w1", Some(&store))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[test]
fn routes_are_assembled_in_slot_order() {
    let service = WidgetService::builder()
        .put_widget(put_widget)
        .get_widget(get_widget)
        .build::<String, StoreExt, StoreExt>();

    let inner = service.into_inner();
    let operations: Vec<_> = inner.router().operations().collect();

    assert_eq!(operations, vec![GetWidget::ID, PutWidget::ID]);
    assert_eq!(GetWidget::ID.absolute(), "example.widgets#GetWidget");
}

#[test]
fn setters_only_touch_their_own_slot() {
    let a = WidgetService::builder()
        .get_widget(get_widget)
        .put_widget(put_widget);
    let b = WidgetService::builder()
        .put_widget(put_widget)
        .get_widget(get_widget);

    same_type(&a, &b);
}

#[tokio::test]
async fn last_setter_call_wins() {
    let store = Store::default();
    store.lock().unwrap().insert("w1".into(), "gear".into());

    let service = WidgetService::builder()
        .get_widget(always_missing)
        .put_widget(put_widget)
        .get_widget(get_widget)
        .build::<String, StoreExt, StoreExt>();

    let (status, body) = send(service, rpc("GetWidget", "w1", Some(&store))).await;
    assert_eq!((status, body.as_str()), (StatusCode::OK, "gear"));
}

#[tokio::test]
async fn operation_setter_accepts_prebuilt_operations() {
    let store = Store::default();
    let service = WidgetService::builder()
        .get_widget_operation(GetWidget::from_handler(always_missing))
        .put_widget_operation(PutWidget::from_handler(put_widget))
        .build::<String, (), StoreExt>();

    let (status, _) = send(service, rpc("GetWidget", "w1", Some(&store))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn operations_from_services_and_mapped_handlers() {
    let store = Store::default();
    let put = PutWidget::from_service(service_fn(
        |(input, (Extension(store),)): (PutWidgetInput, StoreExt)| async move {
            store.lock().unwrap().insert(input.id, input.name);
            Ok::<_, Infallible>(())
        },
    ));
    let get = GetWidget::from_handler(get_widget)
        .map(|svc| MapResponseLayer::new(shout).layer(svc));

    let service = WidgetService::builder()
        .put_widget_operation(put)
        .get_widget_operation(get)
        .build::<String, StoreExt, StoreExt>();

    let (status, _) = send(service.clone(), rpc("PutWidget", "w1=gear", Some(&store))).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(service, rpc("GetWidget", "w1", Some(&store))).await;
    assert_eq!((status, body.as_str()), (StatusCode::OK, "GEAR"));
}

#[tokio::test]
async fn plugins_wrap_each_operation() {
    let store = Store::default();
    let service = WidgetService::builder_with_plugin(LayerPlugin(MapResponseLayer::new(tag)))
        .get_widget(get_widget)
        .put_widget(put_widget)
        .build::<String, StoreExt, StoreExt>();

    let response = service
        .clone()
        .oneshot(rpc("PutWidget", "w1=gear", Some(&store)))
        .await
        .unwrap();
    assert_eq!(response.headers()["x-tag"], "tagged");

    // routing failures never reach an operation
    let response = service
        .oneshot(rpc("Nope", "", Some(&store)))
        .await
        .unwrap();
    assert!(response.headers().get("x-tag").is_none());
}

#[tokio::test]
async fn layers_wrap_the_whole_service() {
    let service = WidgetService::builder()
        .get_widget(get_widget)
        .put_widget(put_widget)
        .build::<String, StoreExt, StoreExt>()
        .layer(&MapResponseLayer::new(tag));

    let response = service.oneshot(rpc("Nope", "", None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(response.headers()["x-tag"], "tagged");
}

#[tokio::test]
async fn router_layers_wrap_each_route() {
    let store = Store::default();
    let service = WidgetService::builder()
        .get_widget(get_widget)
        .put_widget(put_widget)
        .build::<String, StoreExt, StoreExt>()
        .into_inner()
        .map(|router| router.layer(&MapResponseLayer::new(tag)));

    let response = service
        .clone()
        .oneshot(rpc("PutWidget", "w1=gear", Some(&store)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()["x-tag"], "tagged");

    // the layer sits behind routing, so misses are untouched
    let response = service.oneshot(rpc("Nope", "", None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(response.headers().get("x-tag").is_none());
}

#[tokio::test]
async fn make_service_hands_out_clones() {
    let store = Store::default();
    let make = WidgetService::builder()
        .get_widget(get_widget)
        .put_widget(put_widget)
        .build::<String, StoreExt, StoreExt>()
        .into_make_service();

    let service = make.oneshot(()).await.unwrap();
    let (status, _) = send(service, rpc("PutWidget", "w1=gear", Some(&store))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(store.lock().unwrap().get("w1").map(String::as_str), Some("gear"));
}

#[tokio::test]
async fn aws_json_services_route_by_target() {
    let service = PingService::builder().ping(ping).build::<String, ()>();

    let request = |target: Option<&'static str>| {
        let mut builder = Request::builder().method(Method::POST).uri("/");
        if let Some(target) = target {
            builder = builder.header(TARGET_HEADER, target);
        }
        builder.body(String::new()).unwrap()
    };

    let (status, body) = send(service.clone(), request(Some("PingService.Ping"))).await;
    assert_eq!((status, body.as_str()), (StatusCode::OK, ""));

    let (status, _) = send(service.clone(), request(None)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(service, request(Some("PingService.Pong"))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn aws_json_router_layers_wrap_each_route() {
    let service = PingService::builder()
        .ping(ping)
        .build::<String, ()>()
        .into_inner()
        .map(|router| router.layer(&MapResponseLayer::new(tag)));

    let request = Request::builder()
        .method(Method::POST)
        .uri("/")
        .header(TARGET_HEADER, "PingService.Ping")
        .body(String::new())
        .unwrap();
    let response = service.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()["x-tag"], "tagged");
}
