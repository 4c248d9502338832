//! Router assembly.

pub mod api;
pub mod common;
pub mod pages;

pub use api::api_routes;
pub use common::common_routes;
pub use pages::page_routes;

use crate::config::DEFAULT_MAX_BODY_BYTES;
use crate::handlers::pages::not_found;
use crate::state::AppState;
use crate::views;
use axum::{
    body::Body,
    http::{header, Request},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    Router,
};
use std::time::Instant;
use tower_http::limit::RequestBodyLimitLayer;

/// Options for [`app`] that come from configuration.
#[derive(Clone, Copy, Debug)]
pub struct AppOptions {
    pub max_body_bytes: usize,
}

impl Default for AppOptions {
    fn default() -> Self {
        AppOptions {
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

/// One `info` line per request.
async fn access_log(req: Request<Body>, next: Next) -> Response {
    let started = Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let resp = next.run(req).await;
    tracing::info!(
        method = %method,
        path = %path,
        status = resp.status().as_u16(),
        latency_ms = started.elapsed().as_millis() as u64,
        "request"
    );
    resp
}

/// Error responses on page routes that nothing rendered as a page (body limit, method not
/// allowed) get the error page. JSON responses and everything under /api pass through.
async fn html_errors(req: Request<Body>, next: Next) -> Response {
    let api = req.uri().path().starts_with("/api/");
    let resp = next.run(req).await;
    let status = resp.status();
    if api || !(status.is_client_error() || status.is_server_error()) {
        return resp;
    }
    let rendered = resp
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.starts_with("text/html") || ct.starts_with("application/json"));
    if rendered {
        return resp;
    }
    (status, views::error_page(status)).into_response()
}

/// Full application: pages, /api/v1, operational routes, 404 fallback, body limit, access log.
pub fn app(state: AppState, options: AppOptions) -> Router {
    Router::new()
        .merge(page_routes(state.clone()))
        .merge(common_routes(state.clone()))
        .nest("/api/v1", api_routes(state))
        .fallback(not_found)
        .layer(RequestBodyLimitLayer::new(options.max_body_bytes))
        .layer(middleware::from_fn(html_errors))
        .layer(middleware::from_fn(access_log))
}
