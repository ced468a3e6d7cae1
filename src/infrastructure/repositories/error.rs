use crate::domain::errors::DomainError;

const CNT_POST_SLUG: &str = "posts_slug_key";
const CNT_COMMENT_POST: &str = "comments_post_id_fkey";
const CNT_ADMIN_EMAIL: &str = "admin_users_email_key";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_POST_SLUG => DomainError::Conflict("slug already exists".into()),
                    CNT_ADMIN_EMAIL => DomainError::Conflict("email already registered".into()),
                    CNT_COMMENT_POST => DomainError::NotFound("post not found".into()),
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::Conflict("unique constraint violated".into());
                    }
                    "23503" => {
                        return DomainError::NotFound("referenced record not found".into());
                    }
                    "23514" => {
                        return DomainError::Validation("check constraint violated".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}

/// Counters are stored as `INTEGER`; negative values never pass the check
/// constraint, so a failed conversion means a corrupted row.
pub fn counter(value: i32) -> Result<u32, DomainError> {
    u32::try_from(value)
        .map_err(|_| DomainError::Persistence(format!("negative counter in store: {value}")))
}
