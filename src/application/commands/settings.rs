// src/application/commands/settings.rs
use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::{
    application::{dto::DomainSettingsDto, error::ApplicationResult, ports::time::Clock},
    domain::settings::{DomainSettings, DomainSettingsRepository, SslStatus},
};

pub struct SaveDomainSettingsCommand {
    pub custom_domain: String,
    pub is_configured: bool,
    pub dns_provider: String,
    pub ssl_status: String,
    /// Defaults to now.
    pub last_verified: Option<DateTime<Utc>>,
}

/// Get-or-create and upsert for the deployment's singleton domain record.
pub struct DomainSettingsService {
    repo: Arc<dyn DomainSettingsRepository>,
    clock: Arc<dyn Clock>,
}

impl DomainSettingsService {
    pub fn new(repo: Arc<dyn DomainSettingsRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repo, clock }
    }

    /// Never fails: a store error yields unsaved defaults and a warning.
    pub async fn get_domain_settings(&self) -> DomainSettingsDto {
        match self.load_or_create().await {
            Ok(settings) => settings.into(),
            Err(err) => {
                tracing::warn!(error = %err, "domain settings unavailable, serving defaults");
                DomainSettings::default_at(self.clock.now()).into()
            }
        }
    }

    pub async fn save_domain_settings(
        &self,
        command: SaveDomainSettingsCommand,
    ) -> ApplicationResult<DomainSettingsDto> {
        let settings = DomainSettings::new(
            command.custom_domain,
            command.is_configured,
            command.dns_provider,
            command.ssl_status.parse::<SslStatus>()?,
            command.last_verified.unwrap_or_else(|| self.clock.now()),
        )?;
        let saved = self.repo.upsert(settings).await?;
        tracing::info!(domain = %saved.custom_domain, ssl = %saved.ssl_status, "domain settings saved");
        Ok(saved.into())
    }

    pub async fn verify_domain(&self) -> ApplicationResult<DomainSettingsDto> {
        let mut settings = self.load_or_create().await?;
        settings.mark_verified(self.clock.now());
        let saved = self.repo.upsert(settings).await?;
        tracing::info!(domain = %saved.custom_domain, "domain verified");
        Ok(saved.into())
    }

    async fn load_or_create(&self) -> ApplicationResult<DomainSettings> {
        if let Some(existing) = self.repo.find().await? {
            return Ok(existing);
        }
        let created = self
            .repo
            .insert_if_absent(DomainSettings::default_at(self.clock.now()))
            .await?;
        tracing::info!("domain settings initialised with defaults");
        Ok(created)
    }
}
