// src/domain/comment/entity.rs
use crate::domain::comment::value_objects::{CommentAuthor, CommentBody, CommentId, VoteKind};
use crate::domain::post::PostId;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Comment {
    pub id: CommentId,
    pub post_id: PostId,
    pub author: CommentAuthor,
    pub content: CommentBody,
    pub created_at: DateTime<Utc>,
    pub likes: u32,
    pub dislikes: u32,
}

impl Comment {
    /// Counters only move up.
    pub const fn record_vote(&mut self, kind: VoteKind) {
        match kind {
            VoteKind::Like => self.likes = self.likes.saturating_add(1),
            VoteKind::Dislike => self.dislikes = self.dislikes.saturating_add(1),
        }
    }
}

#[derive(Debug, Clone)]
pub struct NewComment {
    pub post_id: PostId,
    pub author: CommentAuthor,
    pub content: CommentBody,
    pub created_at: DateTime<Utc>,
}
