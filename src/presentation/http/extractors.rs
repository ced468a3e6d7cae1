// src/presentation/http/extractors.rs
use crate::{
    application::{dto::AuthenticatedAdmin, error::ApplicationError},
    presentation::http::state::HttpState,
};
use axum::{extract::FromRequestParts, http::request::Parts};
use headers::{Authorization, HeaderMapExt, authorization::Bearer};

use super::error::HttpError;

/// Raw bearer token, required.
#[derive(Debug, Clone)]
pub struct BearerToken(pub String);

/// Signed-in administrator; rejects with 401 otherwise.
#[derive(Debug, Clone)]
pub struct Authenticated(pub AuthenticatedAdmin);

/// Signed-in administrator when a live session is presented. Missing, expired
/// or unknown tokens all yield `None`.
#[derive(Debug, Clone)]
pub struct MaybeAuthenticated(pub Option<AuthenticatedAdmin>);

fn app_state(parts: &Parts) -> Result<HttpState, HttpError> {
    parts.extensions.get::<HttpState>().cloned().ok_or_else(|| {
        HttpError::from_error(ApplicationError::infrastructure(
            "application state missing",
        ))
    })
}

fn bearer(parts: &Parts) -> Option<String> {
    parts
        .headers
        .typed_get::<Authorization<Bearer>>()
        .map(|header| header.token().to_string())
}

impl<S> FromRequestParts<S> for BearerToken
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        bearer(parts).map(Self).ok_or_else(|| {
            HttpError::from_error(ApplicationError::unauthorized(
                "missing Authorization header",
            ))
        })
    }
}

impl<S> FromRequestParts<S> for Authenticated
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = app_state(parts)?;
        let BearerToken(token) = BearerToken::from_request_parts(parts, state).await?;
        let admin = app_state
            .services
            .authenticate(&token)
            .await
            .map_err(HttpError::from_error)?;
        Ok(Self(admin))
    }
}

impl<S> FromRequestParts<S> for MaybeAuthenticated
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let app_state = app_state(parts)?;
        let Some(token) = bearer(parts) else {
            return Ok(Self(None));
        };
        Ok(Self(app_state.services.authenticate(&token).await.ok()))
    }
}
