// src/application/ports/security.rs
use crate::application::{
    ApplicationResult,
    dto::{AuthenticatedAdmin, IssuedSession},
};
use async_trait::async_trait;

#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash(&self, password: &str) -> ApplicationResult<String>;
    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()>;
}

#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn create(&self, admin: AuthenticatedAdmin) -> ApplicationResult<IssuedSession>;
    /// Expired or unknown tokens resolve to `None`.
    async fn resolve(&self, token: &str) -> ApplicationResult<Option<AuthenticatedAdmin>>;
    async fn revoke(&self, token: &str) -> ApplicationResult<()>;
}
