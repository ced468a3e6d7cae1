// src/presentation/http/controllers/comments.rs
use crate::application::{
    commands::comments::{AddCommentCommand, VoteCommentCommand},
    dto::CommentDto,
    error::ApplicationError,
};
use crate::domain::comment::VoteKind;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path, http::StatusCode};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct AddCommentRequest {
    pub author: String,
    pub content: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct VoteRequest {
    /// `like` or `dislike`.
    pub kind: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CommentCountResponse {
    pub count: u64,
}

#[utoipa::path(
    get,
    path = "/api/v1/posts/{id}/comments",
    params(("id" = String, Path, description = "Post id")),
    responses((status = 200, description = "Comments, oldest first.", body = [CommentDto])),
    tag = "Comments"
)]
pub async fn list_comments(
    Extension(state): Extension<HttpState>,
    Path(post_id): Path<String>,
) -> Json<Vec<CommentDto>> {
    Json(state.services.comment_queries.list_comments(&post_id).await)
}

#[utoipa::path(
    get,
    path = "/api/v1/posts/{id}/comments/count",
    params(("id" = String, Path, description = "Post id")),
    responses((status = 200, description = "Number of comments.", body = CommentCountResponse)),
    tag = "Comments"
)]
pub async fn count_comments(
    Extension(state): Extension<HttpState>,
    Path(post_id): Path<String>,
) -> Json<CommentCountResponse> {
    Json(CommentCountResponse {
        count: state.services.comment_queries.count_comments(&post_id).await,
    })
}

#[utoipa::path(
    post,
    path = "/api/v1/posts/{id}/comments",
    params(("id" = String, Path, description = "Post id")),
    request_body = AddCommentRequest,
    responses(
        (status = 201, description = "Comment stored.", body = CommentDto),
        (status = 400, description = "Blank author or content.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Unknown post.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Comments"
)]
pub async fn add_comment(
    Extension(state): Extension<HttpState>,
    Path(post_id): Path<String>,
    Json(payload): Json<AddCommentRequest>,
) -> HttpResult<(StatusCode, Json<CommentDto>)> {
    let comment = state
        .services
        .comment_commands
        .add_comment(AddCommentCommand {
            post_id,
            author: payload.author,
            content: payload.content,
        })
        .await
        .into_http()?;
    Ok((StatusCode::CREATED, Json(comment)))
}

#[utoipa::path(
    post,
    path = "/api/v1/posts/{id}/comments/{comment_id}/votes",
    params(
        ("id" = String, Path, description = "Post id"),
        ("comment_id" = String, Path, description = "Comment id")
    ),
    request_body = VoteRequest,
    responses(
        (status = 200, description = "Updated counters.", body = CommentDto),
        (status = 400, description = "Unknown vote kind.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Unknown comment.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Comments"
)]
pub async fn vote_comment(
    Extension(state): Extension<HttpState>,
    Path((post_id, comment_id)): Path<(String, String)>,
    Json(payload): Json<VoteRequest>,
) -> HttpResult<Json<CommentDto>> {
    let kind = payload
        .kind
        .parse::<VoteKind>()
        .map_err(ApplicationError::from)
        .into_http()?;
    state
        .services
        .comment_commands
        .vote_comment(VoteCommentCommand {
            post_id,
            comment_id,
            kind,
        })
        .await
        .into_http()
        .map(Json)
}
