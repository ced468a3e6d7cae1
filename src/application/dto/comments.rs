use crate::domain::comment::Comment;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::serde_time;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CommentDto {
    pub id: String,
    pub post_id: String,
    pub author: String,
    pub content: String,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    pub likes: u32,
    pub dislikes: u32,
}

impl From<Comment> for CommentDto {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id.into(),
            post_id: comment.post_id.into(),
            author: comment.author.into_inner(),
            content: comment.content.into_inner(),
            created_at: comment.created_at,
            likes: comment.likes,
            dislikes: comment.dislikes,
        }
    }
}
