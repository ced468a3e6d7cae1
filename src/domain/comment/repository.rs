use crate::domain::comment::entity::{Comment, NewComment};
use crate::domain::comment::value_objects::{CommentId, VoteKind};
use crate::domain::errors::DomainResult;
use crate::domain::post::PostId;
use async_trait::async_trait;

#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Oldest first.
    async fn list_for_post(&self, post_id: &PostId) -> DomainResult<Vec<Comment>>;
    async fn count_for_post(&self, post_id: &PostId) -> DomainResult<u64>;
    async fn insert(&self, comment: NewComment) -> DomainResult<Comment>;
    /// Single atomic increment in the store. `None` when the comment does not
    /// belong to the post.
    async fn increment_vote(
        &self,
        post_id: &PostId,
        comment_id: &CommentId,
        kind: VoteKind,
    ) -> DomainResult<Option<Comment>>;
}
