// src/infrastructure/repositories/postgres_settings.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::settings::{DomainSettings, DomainSettingsRepository};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

const SETTINGS_COLUMNS: &str = "custom_domain, is_configured, dns_provider, ssl_status, last_verified";

/// Single-row table; the `id = 1` check constraint keeps it that way.
#[derive(Clone)]
pub struct PostgresDomainSettingsRepository {
    pool: PgPool,
}

impl PostgresDomainSettingsRepository {
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct SettingsRow {
    custom_domain: String,
    is_configured: bool,
    dns_provider: String,
    ssl_status: String,
    last_verified: DateTime<Utc>,
}

impl TryFrom<SettingsRow> for DomainSettings {
    type Error = DomainError;

    fn try_from(row: SettingsRow) -> Result<Self, Self::Error> {
        Self::new(
            row.custom_domain,
            row.is_configured,
            row.dns_provider,
            row.ssl_status.parse()?,
            row.last_verified,
        )
    }
}

#[async_trait]
impl DomainSettingsRepository for PostgresDomainSettingsRepository {
    async fn find(&self) -> DomainResult<Option<DomainSettings>> {
        let row = sqlx::query_as::<_, SettingsRow>(&format!(
            "SELECT {SETTINGS_COLUMNS} FROM domain_settings WHERE id = 1"
        ))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(DomainSettings::try_from).transpose()
    }

    async fn insert_if_absent(&self, defaults: DomainSettings) -> DomainResult<DomainSettings> {
        sqlx::query(
            "INSERT INTO domain_settings (id, custom_domain, is_configured, dns_provider, ssl_status, last_verified)
             VALUES (1, $1, $2, $3, $4, $5)
             ON CONFLICT (id) DO NOTHING",
        )
        .bind(&defaults.custom_domain)
        .bind(defaults.is_configured)
        .bind(&defaults.dns_provider)
        .bind(defaults.ssl_status.as_str())
        .bind(defaults.last_verified)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;

        self.find()
            .await?
            .ok_or_else(|| DomainError::Persistence("domain settings row missing after insert".into()))
    }

    async fn upsert(&self, settings: DomainSettings) -> DomainResult<DomainSettings> {
        let row = sqlx::query_as::<_, SettingsRow>(&format!(
            "INSERT INTO domain_settings (id, custom_domain, is_configured, dns_provider, ssl_status, last_verified)
             VALUES (1, $1, $2, $3, $4, $5)
             ON CONFLICT (id) DO UPDATE SET
                 custom_domain = EXCLUDED.custom_domain,
                 is_configured = EXCLUDED.is_configured,
                 dns_provider = EXCLUDED.dns_provider,
                 ssl_status = EXCLUDED.ssl_status,
                 last_verified = EXCLUDED.last_verified
             RETURNING {SETTINGS_COLUMNS}"
        ))
        .bind(settings.custom_domain)
        .bind(settings.is_configured)
        .bind(settings.dns_provider)
        .bind(settings.ssl_status.as_str())
        .bind(settings.last_verified)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        DomainSettings::try_from(row)
    }
}
