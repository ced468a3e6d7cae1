// src/domain/admin.rs
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AdminId(String);

impl AdminId {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("admin id cannot be empty".into()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Lowercased sign-in address.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AdminEmail(String);

impl AdminEmail {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value: String = value.into();
        let value = value.trim().to_lowercase();
        match value.split_once('@') {
            Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(Self(value)),
            _ => Err(DomainError::Validation("invalid email address".into())),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AdminEmail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone)]
pub struct AdminUser {
    pub id: AdminId,
    pub email: AdminEmail,
    pub display_name: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewAdminUser {
    pub email: AdminEmail,
    pub display_name: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

#[async_trait]
pub trait AdminUserRepository: Send + Sync {
    async fn find_by_email(&self, email: &AdminEmail) -> DomainResult<Option<AdminUser>>;
    async fn insert(&self, user: NewAdminUser) -> DomainResult<AdminUser>;
}
