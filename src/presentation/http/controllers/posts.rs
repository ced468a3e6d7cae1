// src/presentation/http/controllers/posts.rs
use crate::application::dto::PostDto;
use crate::domain::post::Category;
use crate::presentation::http::error::{HttpError, HttpResult};
use crate::presentation::http::extractors::MaybeAuthenticated;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
};
use serde::Deserialize;
use utoipa::IntoParams;

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct PostListParams {
    /// Case-insensitive search over title, content and category.
    pub q: Option<String>,
    /// Category display name or slug.
    pub category: Option<String>,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct LimitParams {
    /// Omit for the endpoint's default.
    pub limit: Option<u32>,
}

pub(crate) fn parse_category(raw: &str) -> HttpResult<Category> {
    raw.parse::<Category>()
        .map_err(|_| HttpError::not_found(format!("unknown category: {}", raw.trim())))
}

#[utoipa::path(
    get,
    path = "/api/v1/posts",
    params(PostListParams),
    responses(
        (status = 200, description = "Published posts, newest first.", body = [PostDto]),
        (status = 404, description = "Unknown category.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Posts"
)]
pub async fn list_posts(
    Extension(state): Extension<HttpState>,
    Query(params): Query<PostListParams>,
) -> HttpResult<Json<Vec<PostDto>>> {
    let queries = &state.services.post_queries;
    if let Some(query) = params.q.as_deref().filter(|q| !q.trim().is_empty()) {
        return Ok(Json(queries.search_posts(query).await));
    }
    if let Some(raw) = params.category.as_deref() {
        let category = parse_category(raw)?;
        return Ok(Json(queries.list_posts_by_category(category).await));
    }
    Ok(Json(queries.list_published_posts().await))
}

#[utoipa::path(
    get,
    path = "/api/v1/posts/trending",
    params(LimitParams),
    responses((status = 200, description = "Published trending posts.", body = [PostDto])),
    tag = "Posts"
)]
pub async fn list_trending_posts(
    Extension(state): Extension<HttpState>,
    Query(params): Query<LimitParams>,
) -> Json<Vec<PostDto>> {
    Json(
        state
            .services
            .post_queries
            .list_trending_posts(params.limit.unwrap_or_default())
            .await,
    )
}

#[utoipa::path(
    get,
    path = "/api/v1/posts/by-slug/{slug}",
    params(("slug" = String, Path, description = "Post slug")),
    responses(
        (status = 200, description = "The post.", body = PostDto),
        (status = 404, description = "No such post, or a draft requested without a session.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Posts"
)]
pub async fn get_post_by_slug(
    Extension(state): Extension<HttpState>,
    MaybeAuthenticated(admin): MaybeAuthenticated,
    Path(slug): Path<String>,
) -> HttpResult<Json<PostDto>> {
    let post = state
        .services
        .post_queries
        .get_post_by_slug(&slug)
        .await
        .filter(|post| post.is_published || admin.is_some())
        .ok_or_else(|| HttpError::not_found(format!("post {slug} not found")))?;
    Ok(Json(post))
}

#[utoipa::path(
    get,
    path = "/api/v1/posts/by-slug/{slug}/related",
    params(("slug" = String, Path, description = "Post slug"), LimitParams),
    responses((status = 200, description = "Published posts in the same category.", body = [PostDto])),
    tag = "Posts"
)]
pub async fn list_related_posts(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
    Query(params): Query<LimitParams>,
) -> Json<Vec<PostDto>> {
    Json(
        state
            .services
            .post_queries
            .list_related_posts(&slug, params.limit.unwrap_or_default())
            .await,
    )
}

#[utoipa::path(
    get,
    path = "/api/v1/categories/{category}/posts",
    params(("category" = String, Path, description = "Category display name or slug")),
    responses(
        (status = 200, description = "Published posts in the category.", body = [PostDto]),
        (status = 404, description = "Unknown category.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Posts"
)]
pub async fn list_category_posts(
    Extension(state): Extension<HttpState>,
    Path(category): Path<String>,
) -> HttpResult<Json<Vec<PostDto>>> {
    let category = parse_category(&category)?;
    Ok(Json(
        state
            .services
            .post_queries
            .list_posts_by_category(category)
            .await,
    ))
}
