// src/application/commands/posts/delete.rs
use super::PostCommandService;
use crate::{application::error::ApplicationResult, domain::post::PostId};

pub struct DeletePostCommand {
    pub id: String,
}

impl PostCommandService {
    /// Deleting an unknown id succeeds.
    pub async fn delete_post(&self, command: DeletePostCommand) -> ApplicationResult<()> {
        let id = PostId::new(command.id)?;
        let removed = self.write_repo.delete(&id).await?;
        if removed {
            tracing::info!(post_id = %id, "post deleted");
        } else {
            tracing::debug!(post_id = %id, "delete requested for missing post");
        }
        Ok(())
    }
}
