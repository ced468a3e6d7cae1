use crate::domain::admin::AdminUser;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::serde_time;

/// Admin identity attached to a live session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedAdmin {
    pub id: String,
    pub email: String,
    pub display_name: String,
}

impl From<&AdminUser> for AuthenticatedAdmin {
    fn from(user: &AdminUser) -> Self {
        Self {
            id: user.id.as_str().to_string(),
            email: user.email.as_str().to_string(),
            display_name: user.display_name.clone(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct IssuedSession {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdminProfileDto {
    pub id: String,
    pub email: String,
    pub display_name: String,
}

impl From<AuthenticatedAdmin> for AdminProfileDto {
    fn from(admin: AuthenticatedAdmin) -> Self {
        Self {
            id: admin.id,
            email: admin.email,
            display_name: admin.display_name,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SessionDto {
    pub token: String,
    #[serde(with = "serde_time")]
    pub expires_at: DateTime<Utc>,
    pub user: AdminProfileDto,
}
