// src/application/commands/auth.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::{AdminProfileDto, AuthenticatedAdmin, SessionDto},
        error::{ApplicationError, ApplicationResult},
        ports::{
            security::{PasswordHasher, SessionStore},
            time::Clock,
        },
    },
    domain::admin::{AdminEmail, AdminUserRepository, NewAdminUser},
};

const INVALID_CREDENTIALS: &str = "invalid email or password";
const MIN_PASSWORD_LEN: usize = 8;

pub struct SignInCommand {
    pub email: String,
    pub password: String,
}

pub struct EnsureAdminCommand {
    pub email: String,
    pub password: String,
    pub display_name: String,
}

pub struct AuthService {
    admins: Arc<dyn AdminUserRepository>,
    password_hasher: Arc<dyn PasswordHasher>,
    sessions: Arc<dyn SessionStore>,
    clock: Arc<dyn Clock>,
}

impl AuthService {
    pub fn new(
        admins: Arc<dyn AdminUserRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        sessions: Arc<dyn SessionStore>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            admins,
            password_hasher,
            sessions,
            clock,
        }
    }

    pub async fn sign_in(&self, command: SignInCommand) -> ApplicationResult<SessionDto> {
        let email = AdminEmail::new(command.email)
            .map_err(|_| ApplicationError::unauthorized(INVALID_CREDENTIALS))?;
        let user = self
            .admins
            .find_by_email(&email)
            .await?
            .ok_or_else(|| ApplicationError::unauthorized(INVALID_CREDENTIALS))?;

        self.password_hasher
            .verify(&command.password, &user.password_hash)
            .await
            .map_err(|err| match err {
                ApplicationError::Unauthorized(_) => {
                    ApplicationError::unauthorized(INVALID_CREDENTIALS)
                }
                other => other,
            })?;

        let admin = AuthenticatedAdmin::from(&user);
        let session = self.sessions.create(admin.clone()).await?;
        tracing::info!(admin_id = %admin.id, "admin signed in");

        Ok(SessionDto {
            token: session.token,
            expires_at: session.expires_at,
            user: admin.into(),
        })
    }

    pub async fn sign_out(&self, token: &str) -> ApplicationResult<()> {
        self.sessions.revoke(token).await
    }

    pub async fn current_user(&self, token: &str) -> ApplicationResult<Option<AdminProfileDto>> {
        Ok(self.sessions.resolve(token).await?.map(Into::into))
    }

    /// Resolves a bearer token or fails with `Unauthorized`.
    pub async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedAdmin> {
        self.sessions
            .resolve(token)
            .await?
            .ok_or_else(|| ApplicationError::unauthorized("session expired or invalid"))
    }

    /// Creates the bootstrap admin when the address is not registered yet.
    /// Returns whether an account was created.
    pub async fn ensure_admin(&self, command: EnsureAdminCommand) -> ApplicationResult<bool> {
        let email = AdminEmail::new(command.email)?;
        if self.admins.find_by_email(&email).await?.is_some() {
            return Ok(false);
        }
        if command.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(ApplicationError::validation(format!(
                "admin password must be at least {MIN_PASSWORD_LEN} characters"
            )));
        }

        let password_hash = self.password_hasher.hash(&command.password).await?;
        let display_name = match command.display_name.trim() {
            "" => "Admin".to_string(),
            name => name.to_string(),
        };
        let created = self
            .admins
            .insert(NewAdminUser {
                email,
                display_name,
                password_hash,
                created_at: self.clock.now(),
            })
            .await?;
        tracing::info!(admin_id = %created.id.as_str(), email = %created.email, "bootstrap admin created");
        Ok(true)
    }
}
