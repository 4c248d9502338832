#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Request, Response, StatusCode},
    Router,
};
use contacts::{app, AppOptions, AppState, ContactStore, MemoryStore};
use std::sync::Arc;
use tower::ServiceExt;

pub fn test_app(store: MemoryStore) -> (Router, Arc<MemoryStore>) {
    let store = Arc::new(store);
    let dyn_store: Arc<dyn ContactStore> = store.clone();
    (app_with(dyn_store, AppOptions::default()), store)
}

pub fn app_with(store: Arc<dyn ContactStore>, options: AppOptions) -> Router {
    app(AppState::new(store), options)
}

pub async fn send(app: &Router, req: Request<Body>) -> Response<Body> {
    app.clone().oneshot(req).await.unwrap()
}

pub async fn get(app: &Router, uri: &str) -> Response<Body> {
    send(app, Request::builder().uri(uri).body(Body::empty()).unwrap()).await
}

pub async fn post_form(app: &Router, uri: &str, form: &str) -> Response<Body> {
    let req = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(form.to_string()))
        .unwrap();
    send(app, req).await
}

pub async fn json_request(app: &Router, method: &str, uri: &str, body: Option<serde_json::Value>) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(v) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(v.to_string())
        }
        None => Body::empty(),
    };
    send(app, builder.body(body).unwrap()).await
}

pub async fn body_string(resp: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(resp: Response<Body>) -> serde_json::Value {
    serde_json::from_str(&body_string(resp).await).unwrap()
}

pub fn location(resp: &Response<Body>) -> &str {
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    resp.headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .unwrap()
}
