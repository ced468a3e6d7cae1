// src/presentation/http/controllers/admin.rs
use crate::application::{
    commands::{
        posts::{CreatePostCommand, DeletePostCommand, UpdatePostCommand},
        settings::SaveDomainSettingsCommand,
    },
    dto::{DashboardStatsDto, DomainSettingsDto, PostDto},
};
use crate::domain::post::Tags;
use crate::presentation::http::error::{HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path, http::StatusCode};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Tags as a JSON list or as the editor's comma separated string.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum TagsInput {
    List(Vec<String>),
    Joined(String),
}

impl Default for TagsInput {
    fn default() -> Self {
        Self::List(Vec::new())
    }
}

impl From<TagsInput> for Vec<String> {
    fn from(input: TagsInput) -> Self {
        match input {
            TagsInput::List(tags) => tags,
            TagsInput::Joined(raw) => Tags::parse(&raw).into_inner(),
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequest {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub featured_image: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub tags: TagsInput,
    #[serde(default)]
    pub is_published: bool,
    #[serde(default)]
    pub is_trending: bool,
}

/// Absent fields are left untouched; an empty `excerpt` or `featuredImage`
/// clears the stored value.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdatePostRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub excerpt: Option<String>,
    pub category: Option<String>,
    pub featured_image: Option<String>,
    pub author: Option<String>,
    pub tags: Option<TagsInput>,
    pub is_published: Option<bool>,
    pub is_trending: Option<bool>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DomainSettingsRequest {
    pub custom_domain: String,
    #[serde(default)]
    pub is_configured: bool,
    #[serde(default)]
    pub dns_provider: String,
    /// `pending`, `active` or `expired`.
    #[serde(default = "default_ssl_status")]
    pub ssl_status: String,
    #[serde(default, with = "crate::application::dto::serde_time::option")]
    pub last_verified: Option<DateTime<Utc>>,
}

fn default_ssl_status() -> String {
    "pending".into()
}

#[utoipa::path(
    get,
    path = "/api/v1/admin/posts",
    responses(
        (status = 200, description = "Every post including drafts, newest first.", body = [PostDto]),
        (status = 401, description = "No live session.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Admin"
)]
pub async fn list_all_posts(
    Extension(state): Extension<HttpState>,
    Authenticated(_admin): Authenticated,
) -> Json<Vec<PostDto>> {
    Json(state.services.post_queries.list_posts().await)
}

#[utoipa::path(
    post,
    path = "/api/v1/admin/posts",
    request_body = CreatePostRequest,
    responses(
        (status = 201, description = "Post created.", body = PostDto),
        (status = 400, description = "Invalid fields.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "Another post already uses the derived slug.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Admin"
)]
pub async fn create_post(
    Extension(state): Extension<HttpState>,
    Authenticated(admin): Authenticated,
    Json(payload): Json<CreatePostRequest>,
) -> HttpResult<(StatusCode, Json<PostDto>)> {
    let command = CreatePostCommand {
        title: payload.title,
        content: payload.content,
        excerpt: payload.excerpt,
        category: payload.category,
        featured_image: payload.featured_image,
        author: payload.author,
        tags: payload.tags.into(),
        is_published: payload.is_published,
        is_trending: payload.is_trending,
    };
    let post = state
        .services
        .post_commands
        .create_post(command)
        .await
        .into_http()?;
    tracing::debug!(admin_id = %admin.id, post_id = %post.id, "post created over http");
    Ok((StatusCode::CREATED, Json(post)))
}

#[utoipa::path(
    get,
    path = "/api/v1/admin/posts/{id}",
    params(("id" = String, Path, description = "Post id")),
    responses(
        (status = 200, description = "The post, published or not.", body = PostDto),
        (status = 404, description = "Unknown post.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Admin"
)]
pub async fn get_post(
    Extension(state): Extension<HttpState>,
    Authenticated(_admin): Authenticated,
    Path(id): Path<String>,
) -> HttpResult<Json<PostDto>> {
    state
        .services
        .post_queries
        .get_post_by_id(&id)
        .await
        .map(Json)
        .ok_or_else(|| HttpError::not_found(format!("post {id} not found")))
}

#[utoipa::path(
    put,
    path = "/api/v1/admin/posts/{id}",
    params(("id" = String, Path, description = "Post id")),
    request_body = UpdatePostRequest,
    responses(
        (status = 200, description = "Updated post.", body = PostDto),
        (status = 404, description = "Unknown post.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "Another post already uses the derived slug.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Admin"
)]
pub async fn update_post(
    Extension(state): Extension<HttpState>,
    Authenticated(_admin): Authenticated,
    Path(id): Path<String>,
    Json(payload): Json<UpdatePostRequest>,
) -> HttpResult<Json<PostDto>> {
    let command = UpdatePostCommand {
        id,
        title: payload.title,
        content: payload.content,
        excerpt: payload.excerpt,
        category: payload.category,
        featured_image: payload.featured_image,
        author: payload.author,
        tags: payload.tags.map(Into::into),
        is_published: payload.is_published,
        is_trending: payload.is_trending,
    };
    state
        .services
        .post_commands
        .update_post(command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/admin/posts/{id}",
    params(("id" = String, Path, description = "Post id")),
    responses((status = 204, description = "Post removed, or it never existed.")),
    tag = "Admin"
)]
pub async fn delete_post(
    Extension(state): Extension<HttpState>,
    Authenticated(_admin): Authenticated,
    Path(id): Path<String>,
) -> HttpResult<StatusCode> {
    state
        .services
        .post_commands
        .delete_post(DeletePostCommand { id })
        .await
        .into_http()?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/v1/admin/stats",
    responses((status = 200, description = "Post counts for the dashboard.", body = DashboardStatsDto)),
    tag = "Admin"
)]
pub async fn dashboard_stats(
    Extension(state): Extension<HttpState>,
    Authenticated(_admin): Authenticated,
) -> Json<DashboardStatsDto> {
    Json(state.services.post_queries.dashboard_stats().await)
}

#[utoipa::path(
    get,
    path = "/api/v1/admin/domain",
    responses((status = 200, description = "Domain settings, created with defaults on first read.", body = DomainSettingsDto)),
    tag = "Admin"
)]
pub async fn get_domain_settings(
    Extension(state): Extension<HttpState>,
    Authenticated(_admin): Authenticated,
) -> Json<DomainSettingsDto> {
    Json(state.services.settings.get_domain_settings().await)
}

#[utoipa::path(
    put,
    path = "/api/v1/admin/domain",
    request_body = DomainSettingsRequest,
    responses(
        (status = 200, description = "Saved settings.", body = DomainSettingsDto),
        (status = 400, description = "Invalid domain or SSL status.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Admin"
)]
pub async fn save_domain_settings(
    Extension(state): Extension<HttpState>,
    Authenticated(_admin): Authenticated,
    Json(payload): Json<DomainSettingsRequest>,
) -> HttpResult<Json<DomainSettingsDto>> {
    state
        .services
        .settings
        .save_domain_settings(SaveDomainSettingsCommand {
            custom_domain: payload.custom_domain,
            is_configured: payload.is_configured,
            dns_provider: payload.dns_provider,
            ssl_status: payload.ssl_status,
            last_verified: payload.last_verified,
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/admin/domain/verify",
    responses((status = 200, description = "Settings marked configured with active SSL.", body = DomainSettingsDto)),
    tag = "Admin"
)]
pub async fn verify_domain(
    Extension(state): Extension<HttpState>,
    Authenticated(_admin): Authenticated,
) -> HttpResult<Json<DomainSettingsDto>> {
    state
        .services
        .settings
        .verify_domain()
        .await
        .into_http()
        .map(Json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_accept_list_or_joined_form() {
        let list: UpdatePostRequest = serde_json::from_str(r#"{"tags": ["a", "b"]}"#).unwrap();
        let joined: UpdatePostRequest =
            serde_json::from_str(r#"{"tags": " kenya, ,schools "}"#).unwrap();
        assert_eq!(list.tags.map(Vec::from), Some(vec!["a".to_string(), "b".to_string()]));
        assert_eq!(
            joined.tags.map(Vec::from),
            Some(vec!["kenya".to_string(), "schools".to_string()])
        );

        let empty: UpdatePostRequest = serde_json::from_str("{}").unwrap();
        assert!(empty.tags.is_none() && empty.title.is_none());
    }

    #[test]
    fn request_schemas_render_with_defaults() {
        use utoipa::PartialSchema;
        let update = serde_json::to_value(UpdatePostRequest::schema()).unwrap();
        assert!(update["properties"]["tags"].is_object());
        let create = serde_json::to_value(CreatePostRequest::schema()).unwrap();
        assert!(create["properties"]["featuredImage"].is_object());
    }
}
