//! JSON envelope for the API routes: `{"data": ...}` for one record,
//! `{"data": [...], "meta": {"count": n, "query": q}}` for lists.

use axum::{http::StatusCode, Json};
use serde::Serialize;

#[derive(Serialize)]
pub struct One<T> {
    pub data: T,
}

#[derive(Serialize)]
pub struct Many<T> {
    pub data: Vec<T>,
    pub meta: ListMeta,
}

#[derive(Serialize)]
pub struct ListMeta {
    pub count: u64,
    /// Search that produced the list, when one was applied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
}

pub fn one<T: Serialize>(status: StatusCode, data: T) -> (StatusCode, Json<One<T>>) {
    (status, Json(One { data }))
}

pub fn many<T: Serialize>(data: Vec<T>, query: Option<String>) -> (StatusCode, Json<Many<T>>) {
    let count = data.len() as u64;
    (
        StatusCode::OK,
        Json(Many {
            data,
            meta: ListMeta { count, query },
        }),
    )
}
