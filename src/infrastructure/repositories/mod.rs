// src/infrastructure/repositories/mod.rs
mod error;
mod memory;
mod postgres_admin;
mod postgres_comment;
mod postgres_contact;
mod postgres_post;
mod postgres_settings;

pub use error::{counter, map_sqlx};
pub use memory::InMemoryStore;
pub use postgres_admin::PostgresAdminUserRepository;
pub use postgres_comment::PostgresCommentRepository;
pub use postgres_contact::PostgresContactMessageRepository;
pub use postgres_post::{PostgresPostReadRepository, PostgresPostWriteRepository};
pub use postgres_settings::PostgresDomainSettingsRepository;

use crate::application::services::Repositories;
use sqlx::PgPool;
use std::sync::Arc;

/// PostgreSQL implementations of every repository, sharing one pool.
pub fn postgres_repositories(pool: &PgPool) -> Repositories {
    Repositories {
        post_write: Arc::new(PostgresPostWriteRepository::new(pool.clone())),
        post_read: Arc::new(PostgresPostReadRepository::new(pool.clone())),
        comments: Arc::new(PostgresCommentRepository::new(pool.clone())),
        settings: Arc::new(PostgresDomainSettingsRepository::new(pool.clone())),
        contact: Arc::new(PostgresContactMessageRepository::new(pool.clone())),
        admins: Arc::new(PostgresAdminUserRepository::new(pool.clone())),
    }
}
