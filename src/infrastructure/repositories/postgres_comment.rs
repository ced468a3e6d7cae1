// src/infrastructure/repositories/postgres_comment.rs
use super::{counter, map_sqlx};
use crate::domain::comment::{
    Comment, CommentAuthor, CommentBody, CommentId, CommentRepository, NewComment, VoteKind,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::post::PostId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresCommentRepository {
    pool: PgPool,
}

impl PostgresCommentRepository {
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CommentRow {
    id: String,
    post_id: String,
    author: String,
    content: String,
    created_at: DateTime<Utc>,
    likes: i32,
    dislikes: i32,
}

impl TryFrom<CommentRow> for Comment {
    type Error = DomainError;

    fn try_from(row: CommentRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: CommentId::new(row.id)?,
            post_id: PostId::new(row.post_id)?,
            author: CommentAuthor::new(row.author)?,
            content: CommentBody::new(row.content)?,
            created_at: row.created_at,
            likes: counter(row.likes)?,
            dislikes: counter(row.dislikes)?,
        })
    }
}

const LIST_FOR_POST_SQL: &str = "SELECT id, post_id, author, content, created_at, likes, dislikes
     FROM comments WHERE post_id = $1
     ORDER BY created_at ASC, seq ASC";

/// Rows that no longer pass validation are logged and left out.
fn comments_from_rows(rows: Vec<CommentRow>) -> Vec<Comment> {
    rows.into_iter()
        .filter_map(|row| {
            let row_id = row.id.clone();
            Comment::try_from(row)
                .map_err(|err| {
                    tracing::warn!(error = %err, comment_id = %row_id, "skipping unreadable comment row");
                })
                .ok()
        })
        .collect()
}

#[async_trait]
impl CommentRepository for PostgresCommentRepository {
    async fn list_for_post(&self, post_id: &PostId) -> DomainResult<Vec<Comment>> {
        let rows = sqlx::query_as::<_, CommentRow>(LIST_FOR_POST_SQL)
            .bind(post_id.as_str())
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Ok(comments_from_rows(rows))
    }

    async fn count_for_post(&self, post_id: &PostId) -> DomainResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM comments WHERE post_id = $1")
            .bind(post_id.as_str())
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(u64::try_from(count).unwrap_or_default())
    }

    async fn insert(&self, comment: NewComment) -> DomainResult<Comment> {
        let NewComment {
            post_id,
            author,
            content,
            created_at,
        } = comment;

        let row = sqlx::query_as::<_, CommentRow>(
            "INSERT INTO comments (post_id, author, content, created_at, likes, dislikes)
             VALUES ($1, $2, $3, $4, 0, 0)
             RETURNING id, post_id, author, content, created_at, likes, dislikes",
        )
        .bind(String::from(post_id))
        .bind(author.into_inner())
        .bind(content.into_inner())
        .bind(created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Comment::try_from(row)
    }

    async fn increment_vote(
        &self,
        post_id: &PostId,
        comment_id: &CommentId,
        kind: VoteKind,
    ) -> DomainResult<Option<Comment>> {
        let sql = match kind {
            VoteKind::Like => {
                "UPDATE comments SET likes = likes + 1 WHERE id = $1 AND post_id = $2
                 RETURNING id, post_id, author, content, created_at, likes, dislikes"
            }
            VoteKind::Dislike => {
                "UPDATE comments SET dislikes = dislikes + 1 WHERE id = $1 AND post_id = $2
                 RETURNING id, post_id, author, content, created_at, likes, dislikes"
            }
        };

        let row = sqlx::query_as::<_, CommentRow>(sql)
            .bind(comment_id.as_str())
            .bind(post_id.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Comment::try_from).transpose()
    }
}
