//! JSON API route table, nested under /api/v1.

use crate::handlers::api::{create, delete as delete_handler, list, not_found, read, update};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/contacts", get(list).post(create))
        .route(
            "/contacts/:id",
            get(read).patch(update).delete(delete_handler),
        )
        .fallback(not_found)
        .with_state(state)
}
