// src/application/commands/comments.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::CommentDto,
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
    },
    domain::{
        comment::{CommentAuthor, CommentBody, CommentId, CommentRepository, NewComment, VoteKind},
        post::{PostId, PostReadRepository},
    },
};

pub struct AddCommentCommand {
    pub post_id: String,
    pub author: String,
    pub content: String,
}

pub struct VoteCommentCommand {
    pub post_id: String,
    pub comment_id: String,
    pub kind: VoteKind,
}

pub struct CommentCommandService {
    comments: Arc<dyn CommentRepository>,
    posts: Arc<dyn PostReadRepository>,
    clock: Arc<dyn Clock>,
}

impl CommentCommandService {
    pub fn new(
        comments: Arc<dyn CommentRepository>,
        posts: Arc<dyn PostReadRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            comments,
            posts,
            clock,
        }
    }

    pub async fn add_comment(&self, command: AddCommentCommand) -> ApplicationResult<CommentDto> {
        let author = CommentAuthor::new(command.author)?;
        let content = CommentBody::new(command.content)?;
        let post_id = PostId::new(command.post_id)?;

        if self.posts.find_by_id(&post_id).await?.is_none() {
            return Err(ApplicationError::not_found(format!("post {post_id} not found")));
        }

        let comment = self
            .comments
            .insert(NewComment {
                post_id,
                author,
                content,
                created_at: self.clock.now(),
            })
            .await?;

        tracing::info!(post_id = %comment.post_id, comment_id = %comment.id, "comment added");
        Ok(comment.into())
    }

    /// Adds exactly one like or dislike. The increment happens in the store,
    /// so concurrent voters never overwrite each other.
    pub async fn vote_comment(&self, command: VoteCommentCommand) -> ApplicationResult<CommentDto> {
        let post_id = PostId::new(command.post_id)?;
        let comment_id = CommentId::new(command.comment_id)?;

        let comment = self
            .comments
            .increment_vote(&post_id, &comment_id, command.kind)
            .await?
            .ok_or_else(|| {
                ApplicationError::not_found(format!(
                    "comment {comment_id} not found on post {post_id}"
                ))
            })?;

        tracing::debug!(
            comment_id = %comment.id,
            kind = command.kind.as_str(),
            likes = comment.likes,
            dislikes = comment.dislikes,
            "comment vote recorded"
        );
        Ok(comment.into())
    }
}
