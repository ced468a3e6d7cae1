use crate::domain::errors::DomainResult;
use crate::domain::post::entity::{NewPost, Post, PostUpdate};
use crate::domain::post::specifications::PostFilter;
use crate::domain::post::value_objects::{PostId, PostSlug};
use async_trait::async_trait;

#[async_trait]
pub trait PostWriteRepository: Send + Sync {
    /// Store a new post; the store assigns the id.
    async fn insert(&self, post: NewPost) -> DomainResult<Post>;
    async fn update(&self, update: PostUpdate) -> DomainResult<Post>;
    /// Returns whether a row was removed.
    async fn delete(&self, id: &PostId) -> DomainResult<bool>;
}

#[async_trait]
pub trait PostReadRepository: Send + Sync {
    async fn find_by_id(&self, id: &PostId) -> DomainResult<Option<Post>>;
    async fn find_by_slug(&self, slug: &PostSlug) -> DomainResult<Option<Post>>;
    async fn list(&self, filter: &PostFilter) -> DomainResult<Vec<Post>>;
}
