// src/presentation/http/controllers/contact.rs
use crate::application::commands::contact::SubmitContactCommand;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, http::StatusCode};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[utoipa::path(
    post,
    path = "/api/v1/contact",
    request_body = ContactRequest,
    responses(
        (status = 202, description = "Message accepted."),
        (status = 400, description = "Missing field or malformed email.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Contact"
)]
pub async fn submit_contact(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<ContactRequest>,
) -> HttpResult<StatusCode> {
    state
        .services
        .contact
        .submit_contact(SubmitContactCommand {
            name: payload.name,
            email: payload.email,
            message: payload.message,
        })
        .await
        .into_http()?;
    Ok(StatusCode::ACCEPTED)
}
