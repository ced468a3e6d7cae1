// src/domain/contact.rs
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct ContactMessage {
    pub id: String,
    pub name: String,
    pub email: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl NewContactMessage {
    pub fn new(
        name: &str,
        email: &str,
        message: &str,
        created_at: DateTime<Utc>,
    ) -> DomainResult<Self> {
        let name = required("name", name)?;
        let email = required("email", email)?;
        let message = required("message", message)?;

        match email.split_once('@') {
            Some((local, domain)) if !local.is_empty() && domain.contains('.') => {}
            _ => {
                return Err(DomainError::Validation(format!(
                    "invalid email address: {email}"
                )));
            }
        }

        Ok(Self {
            name,
            email,
            message,
            created_at,
        })
    }
}

fn required(field: &str, value: &str) -> DomainResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DomainError::Validation(format!("{field} cannot be empty")));
    }
    Ok(trimmed.to_string())
}

/// Write-only: messages are read out of band.
#[async_trait]
pub trait ContactMessageRepository: Send + Sync {
    async fn insert(&self, message: NewContactMessage) -> DomainResult<ContactMessage>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_fields_are_required() {
        let now = Utc::now();
        assert!(NewContactMessage::new("", "a@b.co", "hi", now).is_err());
        assert!(NewContactMessage::new("Amina", " ", "hi", now).is_err());
        assert!(NewContactMessage::new("Amina", "a@b.co", "  ", now).is_err());
        assert!(NewContactMessage::new("Amina", "a@b.co", "hi", now).is_ok());
    }

    #[test]
    fn email_needs_local_part_and_domain() {
        let now = Utc::now();
        assert!(NewContactMessage::new("Amina", "amina", "hi", now).is_err());
        assert!(NewContactMessage::new("Amina", "@news.co", "hi", now).is_err());
        assert!(NewContactMessage::new("Amina", "amina@localhost", "hi", now).is_err());
    }
}
