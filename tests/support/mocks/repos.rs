// tests/support/mocks/repos.rs
use async_trait::async_trait;
use nikwetu_core::application::services::Repositories;
use nikwetu_core::domain::{
    admin::{AdminEmail, AdminUser, AdminUserRepository, NewAdminUser},
    comment::{Comment, CommentId, CommentRepository, NewComment, VoteKind},
    contact::{ContactMessage, ContactMessageRepository, NewContactMessage},
    errors::{DomainError, DomainResult},
    post::{
        NewPost, Post, PostFilter, PostId, PostReadRepository, PostSlug, PostUpdate,
        PostWriteRepository,
    },
    settings::{DomainSettings, DomainSettingsRepository},
};
use std::sync::Arc;

/// Every call fails as if the database were unreachable.
#[derive(Clone, Default)]
pub struct FailingStore;

fn unreachable_store<T>() -> DomainResult<T> {
    Err(DomainError::Persistence("connection refused".into()))
}

impl FailingStore {
    pub fn repositories() -> Repositories {
        let store = Arc::new(Self);
        Repositories {
            post_write: store.clone(),
            post_read: store.clone(),
            comments: store.clone(),
            settings: store.clone(),
            contact: store.clone(),
            admins: store,
        }
    }
}

#[async_trait]
impl PostWriteRepository for FailingStore {
    async fn insert(&self, _post: NewPost) -> DomainResult<Post> {
        unreachable_store()
    }

    async fn update(&self, _update: PostUpdate) -> DomainResult<Post> {
        unreachable_store()
    }

    async fn delete(&self, _id: &PostId) -> DomainResult<bool> {
        unreachable_store()
    }
}

#[async_trait]
impl PostReadRepository for FailingStore {
    async fn find_by_id(&self, _id: &PostId) -> DomainResult<Option<Post>> {
        unreachable_store()
    }

    async fn find_by_slug(&self, _slug: &PostSlug) -> DomainResult<Option<Post>> {
        unreachable_store()
    }

    async fn list(&self, _filter: &PostFilter) -> DomainResult<Vec<Post>> {
        unreachable_store()
    }
}

#[async_trait]
impl CommentRepository for FailingStore {
    async fn list_for_post(&self, _post_id: &PostId) -> DomainResult<Vec<Comment>> {
        unreachable_store()
    }

    async fn count_for_post(&self, _post_id: &PostId) -> DomainResult<u64> {
        unreachable_store()
    }

    async fn insert(&self, _comment: NewComment) -> DomainResult<Comment> {
        unreachable_store()
    }

    async fn increment_vote(
        &self,
        _post_id: &PostId,
        _comment_id: &CommentId,
        _kind: VoteKind,
    ) -> DomainResult<Option<Comment>> {
        unreachable_store()
    }
}

#[async_trait]
impl DomainSettingsRepository for FailingStore {
    async fn find(&self) -> DomainResult<Option<DomainSettings>> {
        unreachable_store()
    }

    async fn insert_if_absent(&self, _defaults: DomainSettings) -> DomainResult<DomainSettings> {
        unreachable_store()
    }

    async fn upsert(&self, _settings: DomainSettings) -> DomainResult<DomainSettings> {
        unreachable_store()
    }
}

#[async_trait]
impl ContactMessageRepository for FailingStore {
    async fn insert(&self, _message: NewContactMessage) -> DomainResult<ContactMessage> {
        unreachable_store()
    }
}

#[async_trait]
impl AdminUserRepository for FailingStore {
    async fn find_by_email(&self, _email: &AdminEmail) -> DomainResult<Option<AdminUser>> {
        unreachable_store()
    }

    async fn insert(&self, _user: NewAdminUser) -> DomainResult<AdminUser> {
        unreachable_store()
    }
}
