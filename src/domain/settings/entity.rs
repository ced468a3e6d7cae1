// src/domain/settings/entity.rs
use crate::domain::errors::{DomainError, DomainResult};
use chrono::{DateTime, Utc};
use std::{fmt, str::FromStr};

pub const DEFAULT_CUSTOM_DOMAIN: &str = "newskikwetu.com";
const DEFAULT_DNS_PROVIDER: &str = "Not set";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SslStatus {
    #[default]
    Pending,
    Active,
    Expired,
}

impl SslStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Active => "active",
            Self::Expired => "expired",
        }
    }
}

impl fmt::Display for SslStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SslStatus {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "active" => Ok(Self::Active),
            "expired" => Ok(Self::Expired),
            other => Err(DomainError::Validation(format!("unknown ssl status: {other}"))),
        }
    }
}

/// Deployment-wide singleton.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainSettings {
    pub custom_domain: String,
    pub is_configured: bool,
    pub dns_provider: String,
    pub ssl_status: SslStatus,
    pub last_verified: DateTime<Utc>,
}

impl DomainSettings {
    pub fn new(
        custom_domain: impl Into<String>,
        is_configured: bool,
        dns_provider: impl Into<String>,
        ssl_status: SslStatus,
        last_verified: DateTime<Utc>,
    ) -> DomainResult<Self> {
        let custom_domain: String = custom_domain.into();
        let custom_domain = custom_domain.trim().to_ascii_lowercase();
        if custom_domain.is_empty() {
            return Err(DomainError::Validation("custom domain cannot be empty".into()));
        }
        if custom_domain.chars().any(char::is_whitespace) {
            return Err(DomainError::Validation(
                "custom domain cannot contain whitespace".into(),
            ));
        }
        let dns_provider: String = dns_provider.into();
        let dns_provider = match dns_provider.trim() {
            "" => DEFAULT_DNS_PROVIDER.to_string(),
            provider => provider.to_string(),
        };
        Ok(Self {
            custom_domain,
            is_configured,
            dns_provider,
            ssl_status,
            last_verified,
        })
    }

    /// Row inserted when the store holds none.
    pub fn default_at(now: DateTime<Utc>) -> Self {
        Self {
            custom_domain: DEFAULT_CUSTOM_DOMAIN.to_string(),
            is_configured: false,
            dns_provider: DEFAULT_DNS_PROVIDER.to_string(),
            ssl_status: SslStatus::Pending,
            last_verified: now,
        }
    }

    pub fn mark_verified(&mut self, now: DateTime<Utc>) {
        self.is_configured = true;
        self.ssl_status = SslStatus::Active;
        self.last_verified = now;
    }
}
