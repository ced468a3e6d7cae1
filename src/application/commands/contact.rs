// src/application/commands/contact.rs
use std::sync::Arc;

use crate::{
    application::{error::ApplicationResult, ports::time::Clock},
    domain::contact::{ContactMessageRepository, NewContactMessage},
};

pub struct SubmitContactCommand {
    pub name: String,
    pub email: String,
    pub message: String,
}

pub struct ContactCommandService {
    repo: Arc<dyn ContactMessageRepository>,
    clock: Arc<dyn Clock>,
}

impl ContactCommandService {
    pub fn new(repo: Arc<dyn ContactMessageRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repo, clock }
    }

    pub async fn submit_contact(&self, command: SubmitContactCommand) -> ApplicationResult<()> {
        let message = NewContactMessage::new(
            &command.name,
            &command.email,
            &command.message,
            self.clock.now(),
        )?;
        let stored = self.repo.insert(message).await?;
        tracing::info!(message_id = %stored.id, "contact message received");
        Ok(())
    }
}
