//! JSON API over the same contact operations: /api/v1/contacts[/:id].

use crate::error::{ApiError, AppError};
use crate::extractors::ContactId;
use crate::handlers::pages::SearchParams;
use crate::model::ContactMutation;
use crate::response;
use crate::state::AppState;
use axum::{
    body::Bytes,
    extract::{
        rejection::{BytesRejection, JsonRejection, QueryRejection},
        Query, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};

fn parse_body(bytes: &[u8]) -> Result<ContactMutation, AppError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(ContactMutation::default());
    }
    serde_json::from_slice(bytes).map_err(|e| AppError::BadRequest(format!("invalid JSON body: {}", e)))
}

pub async fn list(
    State(state): State<AppState>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Query(params) = params.map_err(AppError::from)?;
    let query = params.q.as_deref().map(str::trim).filter(|q| !q.is_empty());
    let contacts = state.contacts.list_contacts(query).await?;
    Ok(response::many(contacts, query.map(str::to_string)))
}

/// Empty body creates an empty contact; otherwise the body is a mutation applied on creation.
pub async fn create(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let body = body.map_err(AppError::from)?;
    let mutation = parse_body(&body)?;
    let contact = state.contacts.create_contact(mutation).await?;
    Ok(response::one(StatusCode::CREATED, contact))
}

pub async fn read(
    State(state): State<AppState>,
    id: Result<ContactId, AppError>,
) -> Result<impl IntoResponse, ApiError> {
    let id = id?;
    let contact = state.contacts.get_contact(id.as_str()).await?;
    Ok(response::one(StatusCode::OK, contact))
}

pub async fn update(
    State(state): State<AppState>,
    id: Result<ContactId, AppError>,
    body: Result<Json<ContactMutation>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let id = id?;
    let Json(mutation) = body.map_err(AppError::from)?;
    if mutation.is_empty() {
        return Err(AppError::BadRequest("body must set at least one field".into()).into());
    }
    let contact = state.contacts.update_contact(id.as_str(), mutation).await?;
    Ok(response::one(StatusCode::OK, contact))
}

/// Unmatched paths under /api/v1.
pub async fn not_found() -> ApiError {
    ApiError(AppError::NotFound("route".into()))
}

pub async fn delete(
    State(state): State<AppState>,
    id: Result<ContactId, AppError>,
) -> Result<impl IntoResponse, ApiError> {
    let id = id?;
    state.contacts.delete_contact(id.as_str()).await?;
    Ok(StatusCode::NO_CONTENT)
}
