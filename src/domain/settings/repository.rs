use crate::domain::errors::DomainResult;
use crate::domain::settings::entity::DomainSettings;
use async_trait::async_trait;

#[async_trait]
pub trait DomainSettingsRepository: Send + Sync {
    async fn find(&self) -> DomainResult<Option<DomainSettings>>;
    /// Insert `defaults` only when no row exists; returns the stored row either way.
    async fn insert_if_absent(&self, defaults: DomainSettings) -> DomainResult<DomainSettings>;
    async fn upsert(&self, settings: DomainSettings) -> DomainResult<DomainSettings>;
}
