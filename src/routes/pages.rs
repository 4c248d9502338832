//! HTML route table.

use crate::handlers::pages::{about, create, destroy, edit, favorite, index, show, update};
use crate::state::AppState;
use axum::{routing::get, routing::post, Router};

pub fn page_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(index).post(create))
        .route("/about", get(about))
        .route("/contacts/:id", get(show).post(favorite))
        .route("/contacts/:id/edit", get(edit).post(update))
        .route("/contacts/:id/destroy", post(destroy))
        .with_state(state)
}
