// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        ApplicationResult,
        commands::{
            auth::AuthService, comments::CommentCommandService, contact::ContactCommandService,
            posts::PostCommandService, settings::DomainSettingsService,
        },
        dto::AuthenticatedAdmin,
        ports::{
            security::{PasswordHasher, SessionStore},
            time::Clock,
            util::SlugGenerator,
        },
        queries::{comments::CommentQueryService, posts::PostQueryService},
    },
    domain::{
        admin::AdminUserRepository,
        comment::CommentRepository,
        contact::ContactMessageRepository,
        post::{PostReadRepository, PostWriteRepository, services::PostSlugService},
        settings::DomainSettingsRepository,
    },
};

/// Store-facing dependencies, grouped so that a single backend can hand out
/// every repository at once.
pub struct Repositories {
    pub post_write: Arc<dyn PostWriteRepository>,
    pub post_read: Arc<dyn PostReadRepository>,
    pub comments: Arc<dyn CommentRepository>,
    pub settings: Arc<dyn DomainSettingsRepository>,
    pub contact: Arc<dyn ContactMessageRepository>,
    pub admins: Arc<dyn AdminUserRepository>,
}

pub struct ApplicationServices {
    pub post_commands: Arc<PostCommandService>,
    pub post_queries: Arc<PostQueryService>,
    pub comment_commands: Arc<CommentCommandService>,
    pub comment_queries: Arc<CommentQueryService>,
    pub settings: Arc<DomainSettingsService>,
    pub contact: Arc<ContactCommandService>,
    pub auth: Arc<AuthService>,
}

impl ApplicationServices {
    pub fn new(
        repositories: Repositories,
        password_hasher: Arc<dyn PasswordHasher>,
        sessions: Arc<dyn SessionStore>,
        clock: Arc<dyn Clock>,
        slugger: Arc<dyn SlugGenerator>,
    ) -> Self {
        let Repositories {
            post_write,
            post_read,
            comments,
            settings,
            contact,
            admins,
        } = repositories;

        let slug_service = Arc::new(PostSlugService::new(Arc::clone(&post_read), slugger));

        let post_commands = Arc::new(PostCommandService::new(
            post_write,
            Arc::clone(&post_read),
            slug_service,
            Arc::clone(&clock),
        ));
        let post_queries = Arc::new(PostQueryService::new(Arc::clone(&post_read)));

        let comment_commands = Arc::new(CommentCommandService::new(
            Arc::clone(&comments),
            post_read,
            Arc::clone(&clock),
        ));
        let comment_queries = Arc::new(CommentQueryService::new(comments));

        let settings = Arc::new(DomainSettingsService::new(settings, Arc::clone(&clock)));
        let contact = Arc::new(ContactCommandService::new(contact, Arc::clone(&clock)));
        let auth = Arc::new(AuthService::new(admins, password_hasher, sessions, clock));

        Self {
            post_commands,
            post_queries,
            comment_commands,
            comment_queries,
            settings,
            contact,
            auth,
        }
    }

    /// Resolve a bearer token to the signed-in administrator.
    pub async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedAdmin> {
        self.auth.authenticate(token).await
    }
}
