//! Operational routes: liveness, readiness (store ping), version.

use crate::state::AppState;
use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;

#[derive(Serialize)]
struct Status {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    store: Option<StoreStatus>,
}

#[derive(Serialize)]
struct StoreStatus {
    kind: &'static str,
    reachable: bool,
}

async fn health() -> Json<Status> {
    Json(Status {
        status: "ok",
        store: None,
    })
}

async fn ready(State(state): State<AppState>) -> (StatusCode, Json<Status>) {
    let kind = state.contacts.store_kind();
    match state.contacts.ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(Status {
                status: "ok",
                store: Some(StoreStatus { kind, reachable: true }),
            }),
        ),
        Err(e) => {
            tracing::warn!(error = %e, store = kind, "readiness check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(Status {
                    status: "degraded",
                    store: Some(StoreStatus { kind, reachable: false }),
                }),
            )
        }
    }
}

async fn version(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "store": state.contacts.store_kind(),
    }))
}

pub fn common_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/ready", get(ready))
        .route("/version", get(version))
        .with_state(state)
}
