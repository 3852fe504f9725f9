// src/application/commands/statuses.rs
use std::sync::Arc;

use crate::{
    application::{dto::StatusDto, error::ApplicationResult},
    domain::status::{NewStatus, StatusId, StatusRepository},
};

/// The workflow status set is configured once at deployment and rarely
/// touched afterwards, so this service stays minimal: add and remove.
pub struct StatusCommandService {
    repo: Arc<dyn StatusRepository>,
}

impl StatusCommandService {
    pub fn new(repo: Arc<dyn StatusRepository>) -> Self {
        Self { repo }
    }

    pub async fn create_status(
        &self,
        name: impl Into<String>,
        position: i16,
    ) -> ApplicationResult<StatusDto> {
        let status = self.repo.insert(NewStatus::new(name, position)?).await?;
        tracing::info!(status = %status.name, "workflow status created");
        Ok(status.into())
    }

    /// Rejected with a conflict while any story still sits in this state.
    pub async fn delete_status(&self, id: i64) -> ApplicationResult<()> {
        let id = StatusId::new(id)?;
        self.repo.delete(id).await?;
        Ok(())
    }
}
