pub mod entity;
pub mod repository;

pub use entity::{DEFAULT_CUSTOM_DOMAIN, DomainSettings, SslStatus};
pub use repository::DomainSettingsRepository;
