//! Contact endpoints

use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    routing::{delete, get},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::db::repos::{Contact, ContactRepo};
use crate::http::error::ApiError;
use crate::http::extractors::{ContactId, ValidJson};
use crate::http::server::AppState;
use crate::models::{NewContact, Pagination, PaginationParams};

/// Create contact request.
///
/// Missing fields decode as empty strings and then fail validation.
#[derive(Debug, Deserialize)]
pub struct CreateContactRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
}

/// Contact response
#[derive(Debug, Serialize)]
pub struct ContactResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl From<Contact> for ContactResponse {
    fn from(c: Contact) -> Self {
        Self {
            id: c.id,
            name: c.name,
            email: c.email,
            phone: c.phone,
        }
    }
}

/// Contact page response
#[derive(Debug, Serialize)]
pub struct ContactListResponse {
    pub contacts: Vec<ContactResponse>,
    pub total: i64,
}

/// GET /contacts - list contacts with pagination
async fn list_contacts(
    State(state): State<Arc<AppState>>,
    params: Result<Query<PaginationParams>, QueryRejection>,
) -> Result<Json<ContactListResponse>, ApiError> {
    // Unparseable query strings fall back to the defaults
    let params = params.map(|Query(p)| p).unwrap_or_default();
    let page = Pagination::from(params);
    let result = ContactRepo::new(&state.pool).list(page).await?;

    Ok(Json(ContactListResponse {
        contacts: result.items.into_iter().map(ContactResponse::from).collect(),
        total: result.total,
    }))
}

/// POST /contacts - create a new contact
async fn create_contact(
    State(state): State<Arc<AppState>>,
    ValidJson(req): ValidJson<CreateContactRequest>,
) -> Result<(StatusCode, Json<ContactResponse>), ApiError> {
    let contact = NewContact::new(&req.name, &req.email, &req.phone)?;
    let created = ContactRepo::new(&state.pool).create(contact).await?;

    Ok((StatusCode::CREATED, Json(ContactResponse::from(created))))
}

/// DELETE /contacts/{id} - remove a contact
async fn delete_contact(
    State(state): State<Arc<AppState>>,
    ContactId(id): ContactId,
) -> Result<StatusCode, ApiError> {
    ContactRepo::new(&state.pool).delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Contact routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/contacts", get(list_contacts).post(create_contact))
        .route("/contacts/{id}", delete(delete_contact))
}
