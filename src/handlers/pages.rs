//! HTML page handlers. GET handlers are the loaders; POST handlers are the form actions and
//! always answer with a 303 redirect on success.

use crate::error::AppError;
use crate::extractors::ContactId;
use crate::model::{Contact, ContactMutation};
use crate::state::AppState;
use crate::views::{self, EditForm, Sidebar};
use axum::{
    extract::{
        rejection::{FormRejection, QueryRejection},
        Query, State,
    },
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: Option<String>,
}

impl SearchParams {
    fn query(&self) -> Option<&str> {
        self.q.as_deref().map(str::trim).filter(|q| !q.is_empty())
    }
}

#[derive(Debug, Deserialize)]
pub struct FavoriteForm {
    #[serde(default)]
    pub favorite: String,
}

fn detail_path(id: &ContactId) -> String {
    format!("/contacts/{}", views::url_encode(id.as_str()))
}

async fn sidebar_contacts(state: &AppState, params: &SearchParams) -> Result<Vec<Contact>, AppError> {
    state.contacts.list_contacts(params.query()).await
}

/// GET /
pub async fn index(
    State(state): State<AppState>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Html<String>, AppError> {
    let Query(params) = params?;
    let contacts = sidebar_contacts(&state, &params).await?;
    Ok(views::index_page(&Sidebar {
        contacts: &contacts,
        query: params.query(),
        active_id: None,
    }))
}

/// POST / — new empty contact, then straight to its edit form.
pub async fn create(State(state): State<AppState>) -> Result<Redirect, AppError> {
    let contact = state.contacts.create_empty_contact().await?;
    Ok(Redirect::to(&format!("/contacts/{}/edit", views::url_encode(&contact.id))))
}

/// GET /contacts/:id
pub async fn show(
    State(state): State<AppState>,
    id: ContactId,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Html<String>, AppError> {
    let Query(params) = params?;
    let contact = state.contacts.get_contact(id.as_str()).await?;
    let contacts = sidebar_contacts(&state, &params).await?;
    Ok(views::contact_page(
        &Sidebar {
            contacts: &contacts,
            query: params.query(),
            active_id: Some(id.as_str()),
        },
        &contact,
    ))
}

/// POST /contacts/:id — favorite toggle. `favorite=true` sets the flag, anything else clears it.
pub async fn favorite(
    State(state): State<AppState>,
    id: ContactId,
    form: Result<Form<FavoriteForm>, FormRejection>,
) -> Result<Redirect, AppError> {
    let Form(form) = form?;
    state
        .contacts
        .set_favorite(id.as_str(), form.favorite == "true")
        .await?;
    Ok(Redirect::to(&detail_path(&id)))
}

/// GET /contacts/:id/edit
pub async fn edit(
    State(state): State<AppState>,
    id: ContactId,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Html<String>, AppError> {
    let Query(params) = params?;
    let contact = state.contacts.get_contact(id.as_str()).await?;
    let contacts = sidebar_contacts(&state, &params).await?;
    Ok(views::edit_page(
        &Sidebar {
            contacts: &contacts,
            query: params.query(),
            active_id: Some(id.as_str()),
        },
        &EditForm::from_contact(&contact),
    ))
}

/// POST /contacts/:id/edit — fields missing from the form are left as they are.
pub async fn update(
    State(state): State<AppState>,
    id: ContactId,
    mutation: Result<Form<ContactMutation>, FormRejection>,
) -> Result<Response, AppError> {
    let Form(mutation) = mutation?;
    match state.contacts.update_contact(id.as_str(), mutation.clone()).await {
        Ok(_) => Ok(Redirect::to(&detail_path(&id)).into_response()),
        Err(AppError::Validation(message)) => {
            let contact = state.contacts.get_contact(id.as_str()).await?;
            let contacts = sidebar_contacts(&state, &SearchParams::default()).await?;
            let page = views::edit_page(
                &Sidebar {
                    contacts: &contacts,
                    query: None,
                    active_id: Some(id.as_str()),
                },
                &EditForm::rejected(&contact, &mutation, message),
            );
            Ok((StatusCode::UNPROCESSABLE_ENTITY, page).into_response())
        }
        Err(e) => Err(e),
    }
}

/// POST /contacts/:id/destroy
pub async fn destroy(State(state): State<AppState>, id: ContactId) -> Result<Redirect, AppError> {
    state.contacts.delete_contact(id.as_str()).await?;
    Ok(Redirect::to("/"))
}

/// GET /about
pub async fn about() -> Html<String> {
    views::about_page()
}

/// Fallback for unmatched paths.
pub async fn not_found() -> AppError {
    AppError::NotFound("page".into())
}
