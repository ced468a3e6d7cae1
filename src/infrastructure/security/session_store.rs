// src/infrastructure/security/session_store.rs
use crate::application::{
    ApplicationResult,
    dto::{AuthenticatedAdmin, IssuedSession},
    ports::{security::SessionStore, time::Clock},
};
use argon2::password_hash::rand_core::{OsRng, RngCore};
use async_trait::async_trait;
use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use chrono::{DateTime, Duration, Utc};
use sha2::{Digest, Sha256};
use std::{collections::HashMap, sync::Arc};
use tokio::sync::RwLock;

const TOKEN_BYTES: usize = 32;

struct SessionEntry {
    admin: AuthenticatedAdmin,
    expires_at: DateTime<Utc>,
}

/// Opaque bearer sessions held in process memory, keyed by the SHA-256
/// digest of the token.
pub struct InMemorySessionStore {
    sessions: RwLock<HashMap<String, SessionEntry>>,
    ttl: Duration,
    clock: Arc<dyn Clock>,
}

impl InMemorySessionStore {
    pub fn new(ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            ttl,
            clock,
        }
    }

    fn digest(token: &str) -> String {
        format!("{:x}", Sha256::digest(token.as_bytes()))
    }

    fn generate_token() -> String {
        let mut bytes = [0_u8; TOKEN_BYTES];
        OsRng.fill_bytes(&mut bytes);
        URL_SAFE_NO_PAD.encode(bytes)
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn create(&self, admin: AuthenticatedAdmin) -> ApplicationResult<IssuedSession> {
        let now = self.clock.now();
        let token = Self::generate_token();
        let expires_at = now + self.ttl;

        let mut sessions = self.sessions.write().await;
        sessions.retain(|_, entry| entry.expires_at > now);
        sessions.insert(Self::digest(&token), SessionEntry { admin, expires_at });

        Ok(IssuedSession { token, expires_at })
    }

    async fn resolve(&self, token: &str) -> ApplicationResult<Option<AuthenticatedAdmin>> {
        let key = Self::digest(token);
        let now = self.clock.now();
        {
            let sessions = self.sessions.read().await;
            match sessions.get(&key) {
                None => return Ok(None),
                Some(entry) if entry.expires_at > now => return Ok(Some(entry.admin.clone())),
                Some(_) => {}
            }
        }
        self.sessions.write().await.remove(&key);
        Ok(None)
    }

    async fn revoke(&self, token: &str) -> ApplicationResult<()> {
        self.sessions.write().await.remove(&Self::digest(token));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct SteppingClock(Mutex<DateTime<Utc>>);

    impl SteppingClock {
        fn advance(&self, by: Duration) {
            let mut now = self.0.lock().unwrap();
            *now += by;
        }
    }

    impl Clock for SteppingClock {
        fn now(&self) -> DateTime<Utc> {
            *self.0.lock().unwrap()
        }
    }

    fn admin() -> AuthenticatedAdmin {
        AuthenticatedAdmin {
            id: "a1".into(),
            email: "editor@news.co".into(),
            display_name: "Editor".into(),
        }
    }

    #[tokio::test]
    async fn sessions_expire_after_ttl() {
        let clock = Arc::new(SteppingClock(Mutex::new(Utc::now())));
        let store = InMemorySessionStore::new(Duration::minutes(30), clock.clone());

        let issued = store.create(admin()).await.unwrap();
        assert_eq!(store.resolve(&issued.token).await.unwrap(), Some(admin()));

        clock.advance(Duration::minutes(31));
        assert_eq!(store.resolve(&issued.token).await.unwrap(), None);
    }

    #[tokio::test]
    async fn revoked_tokens_no_longer_resolve() {
        let clock = Arc::new(SteppingClock(Mutex::new(Utc::now())));
        let store = InMemorySessionStore::new(Duration::hours(1), clock);

        let issued = store.create(admin()).await.unwrap();
        let other = store.create(admin()).await.unwrap();
        assert_ne!(issued.token, other.token);

        store.revoke(&issued.token).await.unwrap();
        assert_eq!(store.resolve(&issued.token).await.unwrap(), None);
        assert!(store.resolve(&other.token).await.unwrap().is_some());
    }
}
