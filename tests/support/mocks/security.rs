// tests/support/mocks/security.rs
use async_trait::async_trait;
use nikwetu_core::application::{
    ApplicationResult, error::ApplicationError, ports::security::PasswordHasher,
};

/// Reversible stand-in for Argon2 so tests stay fast.
#[derive(Clone, Default)]
pub struct DummyPasswordHasher;

#[async_trait]
impl PasswordHasher for DummyPasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        Ok(format!("hashed:{password}"))
    }

    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()> {
        if expected_hash == format!("hashed:{password}") {
            Ok(())
        } else {
            Err(ApplicationError::unauthorized("invalid credentials"))
        }
    }
}
