// src/presentation/http/controllers/auth.rs
use crate::application::{
    commands::auth::SignInCommand,
    dto::{AdminProfileDto, SessionDto},
    error::ApplicationError,
};
use crate::presentation::http::error::{HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::BearerToken;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, http::StatusCode};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

#[utoipa::path(
    post,
    path = "/api/v1/auth/sign-in",
    request_body = SignInRequest,
    responses(
        (status = 200, description = "Session issued.", body = SessionDto),
        (status = 401, description = "Wrong email or password.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(()),
    tag = "Auth"
)]
pub async fn sign_in(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<SignInRequest>,
) -> HttpResult<Json<SessionDto>> {
    state
        .services
        .auth
        .sign_in(SignInCommand {
            email: payload.email,
            password: payload.password,
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/auth/sign-out",
    responses(
        (status = 204, description = "Session revoked."),
        (status = 401, description = "No bearer token.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Auth"
)]
pub async fn sign_out(
    Extension(state): Extension<HttpState>,
    BearerToken(token): BearerToken,
) -> HttpResult<StatusCode> {
    state.services.auth.sign_out(&token).await.into_http()?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/v1/auth/me",
    responses(
        (status = 200, description = "The signed-in administrator.", body = AdminProfileDto),
        (status = 401, description = "No live session.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Auth"
)]
pub async fn current_user(
    Extension(state): Extension<HttpState>,
    BearerToken(token): BearerToken,
) -> HttpResult<Json<AdminProfileDto>> {
    state
        .services
        .auth
        .current_user(&token)
        .await
        .into_http()?
        .map(Json)
        .ok_or_else(|| {
            HttpError::from_error(ApplicationError::unauthorized("session expired or invalid"))
        })
}
