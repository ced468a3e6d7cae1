// src/application/queries/comments.rs
use std::sync::Arc;

use crate::{
    application::dto::CommentDto,
    domain::{comment::CommentRepository, post::PostId},
};

pub struct CommentQueryService {
    repo: Arc<dyn CommentRepository>,
}

impl CommentQueryService {
    pub fn new(repo: Arc<dyn CommentRepository>) -> Self {
        Self { repo }
    }

    /// Oldest first; empty on unknown posts and store failures.
    pub async fn list_comments(&self, post_id: &str) -> Vec<CommentDto> {
        let Ok(post_id) = PostId::new(post_id) else {
            return Vec::new();
        };
        match self.repo.list_for_post(&post_id).await {
            Ok(comments) => comments.into_iter().map(Into::into).collect(),
            Err(err) => {
                tracing::warn!(error = %err, post_id = %post_id, "comment listing failed");
                Vec::new()
            }
        }
    }

    pub async fn count_comments(&self, post_id: &str) -> u64 {
        let Ok(post_id) = PostId::new(post_id) else {
            return 0;
        };
        match self.repo.count_for_post(&post_id).await {
            Ok(count) => count,
            Err(err) => {
                tracing::warn!(error = %err, post_id = %post_id, "comment count failed");
                0
            }
        }
    }
}
