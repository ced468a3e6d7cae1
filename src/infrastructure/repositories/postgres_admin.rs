// src/infrastructure/repositories/postgres_admin.rs
use super::map_sqlx;
use crate::domain::admin::{AdminEmail, AdminId, AdminUser, AdminUserRepository, NewAdminUser};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresAdminUserRepository {
    pool: PgPool,
}

impl PostgresAdminUserRepository {
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct AdminRow {
    id: String,
    email: String,
    display_name: String,
    password_hash: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<AdminRow> for AdminUser {
    type Error = DomainError;

    fn try_from(row: AdminRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: AdminId::new(row.id)?,
            email: AdminEmail::new(row.email)?,
            display_name: row.display_name,
            password_hash: row.password_hash,
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl AdminUserRepository for PostgresAdminUserRepository {
    async fn find_by_email(&self, email: &AdminEmail) -> DomainResult<Option<AdminUser>> {
        let row = sqlx::query_as::<_, AdminRow>(
            "SELECT id, email, display_name, password_hash, created_at
             FROM admin_users WHERE email = $1",
        )
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(AdminUser::try_from).transpose()
    }

    async fn insert(&self, user: NewAdminUser) -> DomainResult<AdminUser> {
        let row = sqlx::query_as::<_, AdminRow>(
            "INSERT INTO admin_users (email, display_name, password_hash, created_at)
             VALUES ($1, $2, $3, $4)
             RETURNING id, email, display_name, password_hash, created_at",
        )
        .bind(user.email.as_str())
        .bind(user.display_name)
        .bind(user.password_hash)
        .bind(user.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        AdminUser::try_from(row)
    }
}
