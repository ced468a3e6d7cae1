use crate::domain::settings::DomainSettings;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::serde_time;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DomainSettingsDto {
    pub custom_domain: String,
    pub is_configured: bool,
    pub dns_provider: String,
    /// One of `pending`, `active`, `expired`.
    pub ssl_status: String,
    #[serde(with = "serde_time")]
    pub last_verified: DateTime<Utc>,
}

impl From<DomainSettings> for DomainSettingsDto {
    fn from(settings: DomainSettings) -> Self {
        Self {
            custom_domain: settings.custom_domain,
            is_configured: settings.is_configured,
            dns_provider: settings.dns_provider,
            ssl_status: settings.ssl_status.as_str().to_string(),
            last_verified: settings.last_verified,
        }
    }
}
