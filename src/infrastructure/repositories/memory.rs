// src/infrastructure/repositories/memory.rs
use crate::application::services::Repositories;
use crate::domain::admin::{AdminEmail, AdminId, AdminUser, AdminUserRepository, NewAdminUser};
use crate::domain::comment::{Comment, CommentId, CommentRepository, NewComment, VoteKind};
use crate::domain::contact::{ContactMessage, ContactMessageRepository, NewContactMessage};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::post::{
    NewPost, Post, PostFilter, PostId, PostReadRepository, PostSlug, PostUpdate,
    PostWriteRepository, newest_first,
};
use crate::domain::settings::{DomainSettings, DomainSettingsRepository};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Default)]
struct Tables {
    posts: Vec<Post>,
    comments: Vec<Comment>,
    settings: Option<DomainSettings>,
    contact_messages: Vec<ContactMessage>,
    admins: Vec<AdminUser>,
}

impl Tables {
    fn slug_taken(&self, slug: &PostSlug, except: Option<&PostId>) -> bool {
        self.posts
            .iter()
            .any(|post| post.slug == *slug && Some(&post.id) != except)
    }
}

/// Process-local store backing every repository trait. Used for development
/// runs without PostgreSQL and by the integration tests.
#[derive(Default)]
pub struct InMemoryStore {
    tables: RwLock<Tables>,
}

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hands out the same store behind every repository seam.
    pub fn repositories(self: &Arc<Self>) -> Repositories {
        Repositories {
            post_write: Arc::clone(self) as Arc<dyn PostWriteRepository>,
            post_read: Arc::clone(self) as Arc<dyn PostReadRepository>,
            comments: Arc::clone(self) as Arc<dyn CommentRepository>,
            settings: Arc::clone(self) as Arc<dyn DomainSettingsRepository>,
            contact: Arc::clone(self) as Arc<dyn ContactMessageRepository>,
            admins: Arc::clone(self) as Arc<dyn AdminUserRepository>,
        }
    }

    pub async fn contact_messages(&self) -> Vec<ContactMessage> {
        self.tables.read().await.contact_messages.clone()
    }
}

#[async_trait]
impl PostWriteRepository for InMemoryStore {
    async fn insert(&self, post: NewPost) -> DomainResult<Post> {
        let mut tables = self.tables.write().await;
        if tables.slug_taken(&post.slug, None) {
            return Err(DomainError::Conflict("slug already exists".into()));
        }
        let stored = Post {
            id: PostId::new(new_id())?,
            title: post.title,
            slug: post.slug,
            content: post.content,
            excerpt: post.excerpt,
            category: post.category,
            featured_image: post.featured_image,
            author: post.author,
            published_at: post.published_at,
            is_published: post.is_published,
            is_trending: post.is_trending,
            tags: post.tags,
        };
        tables.posts.push(stored.clone());
        Ok(stored)
    }

    async fn update(&self, update: PostUpdate) -> DomainResult<Post> {
        let mut tables = self.tables.write().await;
        if let Some(slug) = &update.slug
            && tables.slug_taken(slug, Some(&update.id))
        {
            return Err(DomainError::Conflict("slug already exists".into()));
        }
        let post = tables
            .posts
            .iter_mut()
            .find(|post| post.id == update.id)
            .ok_or_else(|| DomainError::NotFound(format!("post {} not found", update.id)))?;
        update.apply_to(post);
        Ok(post.clone())
    }

    async fn delete(&self, id: &PostId) -> DomainResult<bool> {
        let mut tables = self.tables.write().await;
        let before = tables.posts.len();
        tables.posts.retain(|post| post.id != *id);
        let removed = tables.posts.len() != before;
        if removed {
            tables.comments.retain(|comment| comment.post_id != *id);
        }
        Ok(removed)
    }
}

#[async_trait]
impl PostReadRepository for InMemoryStore {
    async fn find_by_id(&self, id: &PostId) -> DomainResult<Option<Post>> {
        let tables = self.tables.read().await;
        Ok(tables.posts.iter().find(|post| post.id == *id).cloned())
    }

    async fn find_by_slug(&self, slug: &PostSlug) -> DomainResult<Option<Post>> {
        let tables = self.tables.read().await;
        Ok(tables.posts.iter().find(|post| post.slug == *slug).cloned())
    }

    async fn list(&self, filter: &PostFilter) -> DomainResult<Vec<Post>> {
        let tables = self.tables.read().await;
        let mut posts: Vec<Post> = tables
            .posts
            .iter()
            .filter(|post| filter.matches(post))
            .cloned()
            .collect();
        posts.sort_by(newest_first);
        if let Some(limit) = filter.limit {
            posts.truncate(usize::try_from(limit).unwrap_or(usize::MAX));
        }
        Ok(posts)
    }
}

#[async_trait]
impl CommentRepository for InMemoryStore {
    async fn list_for_post(&self, post_id: &PostId) -> DomainResult<Vec<Comment>> {
        let tables = self.tables.read().await;
        let mut comments: Vec<Comment> = tables
            .comments
            .iter()
            .filter(|comment| comment.post_id == *post_id)
            .cloned()
            .collect();
        comments.sort_by_key(|comment| comment.created_at);
        Ok(comments)
    }

    async fn count_for_post(&self, post_id: &PostId) -> DomainResult<u64> {
        let tables = self.tables.read().await;
        let count = tables
            .comments
            .iter()
            .filter(|comment| comment.post_id == *post_id)
            .count();
        Ok(u64::try_from(count).unwrap_or(u64::MAX))
    }

    async fn insert(&self, comment: NewComment) -> DomainResult<Comment> {
        let mut tables = self.tables.write().await;
        if !tables.posts.iter().any(|post| post.id == comment.post_id) {
            return Err(DomainError::NotFound("post not found".into()));
        }
        let stored = Comment {
            id: CommentId::new(new_id())?,
            post_id: comment.post_id,
            author: comment.author,
            content: comment.content,
            created_at: comment.created_at,
            likes: 0,
            dislikes: 0,
        };
        tables.comments.push(stored.clone());
        Ok(stored)
    }

    async fn increment_vote(
        &self,
        post_id: &PostId,
        comment_id: &CommentId,
        kind: VoteKind,
    ) -> DomainResult<Option<Comment>> {
        let mut tables = self.tables.write().await;
        Ok(tables
            .comments
            .iter_mut()
            .find(|comment| comment.id == *comment_id && comment.post_id == *post_id)
            .map(|comment| {
                comment.record_vote(kind);
                comment.clone()
            }))
    }
}

#[async_trait]
impl DomainSettingsRepository for InMemoryStore {
    async fn find(&self) -> DomainResult<Option<DomainSettings>> {
        Ok(self.tables.read().await.settings.clone())
    }

    async fn insert_if_absent(&self, defaults: DomainSettings) -> DomainResult<DomainSettings> {
        let mut tables = self.tables.write().await;
        Ok(tables.settings.get_or_insert(defaults).clone())
    }

    async fn upsert(&self, settings: DomainSettings) -> DomainResult<DomainSettings> {
        let mut tables = self.tables.write().await;
        tables.settings = Some(settings.clone());
        Ok(settings)
    }
}

#[async_trait]
impl ContactMessageRepository for InMemoryStore {
    async fn insert(&self, message: NewContactMessage) -> DomainResult<ContactMessage> {
        let stored = ContactMessage {
            id: new_id(),
            name: message.name,
            email: message.email,
            message: message.message,
            created_at: message.created_at,
        };
        self.tables
            .write()
            .await
            .contact_messages
            .push(stored.clone());
        Ok(stored)
    }
}

#[async_trait]
impl AdminUserRepository for InMemoryStore {
    async fn find_by_email(&self, email: &AdminEmail) -> DomainResult<Option<AdminUser>> {
        let tables = self.tables.read().await;
        Ok(tables.admins.iter().find(|admin| admin.email == *email).cloned())
    }

    async fn insert(&self, user: NewAdminUser) -> DomainResult<AdminUser> {
        let mut tables = self.tables.write().await;
        if tables.admins.iter().any(|admin| admin.email == user.email) {
            return Err(DomainError::Conflict("email already registered".into()));
        }
        let stored = AdminUser {
            id: AdminId::new(new_id())?,
            email: user.email,
            display_name: user.display_name,
            password_hash: user.password_hash,
            created_at: user.created_at,
        };
        tables.admins.push(stored.clone());
        Ok(stored)
    }
}
