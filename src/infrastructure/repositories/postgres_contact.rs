// src/infrastructure/repositories/postgres_contact.rs
use super::map_sqlx;
use crate::domain::contact::{ContactMessage, ContactMessageRepository, NewContactMessage};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresContactMessageRepository {
    pool: PgPool,
}

impl PostgresContactMessageRepository {
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ContactRow {
    id: String,
    name: String,
    email: String,
    message: String,
    created_at: DateTime<Utc>,
}

impl From<ContactRow> for ContactMessage {
    fn from(row: ContactRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            email: row.email,
            message: row.message,
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl ContactMessageRepository for PostgresContactMessageRepository {
    async fn insert(&self, message: NewContactMessage) -> DomainResult<ContactMessage> {
        let row = sqlx::query_as::<_, ContactRow>(
            "INSERT INTO contact_messages (name, email, message, created_at)
             VALUES ($1, $2, $3, $4)
             RETURNING id, name, email, message, created_at",
        )
        .bind(message.name)
        .bind(message.email)
        .bind(message.message)
        .bind(message.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(row.into())
    }
}
