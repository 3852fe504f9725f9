// src/domain/status/workflow.rs
use std::sync::Arc;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::status::entity::StatusId;
use crate::domain::status::repository::StatusRepository;

/// Designated workflow states resolved once at startup.
///
/// Publication checks compare against the configured "ready to publish"
/// status by its resolved id; the name-to-id lookup happens here and
/// nowhere else, so no query or derivation logic carries a literal
/// status identifier.
#[derive(Debug, Clone, Copy)]
pub struct WorkflowConfig {
    published: StatusId,
}

impl WorkflowConfig {
    pub fn new(published: StatusId) -> Self {
        Self { published }
    }

    /// Looks up the designated published status by name. Fails loudly when
    /// the workflow table does not contain it; a deployment without a
    /// published state cannot derive publication at all.
    pub async fn resolve(
        repo: &Arc<dyn StatusRepository>,
        published_name: &str,
    ) -> DomainResult<Self> {
        let status = repo
            .find_by_name(published_name)
            .await?
            .ok_or_else(|| {
                DomainError::NotFound(format!(
                    "designated published status not configured: {published_name}"
                ))
            })?;
        Ok(Self::new(status.id))
    }

    pub fn published(&self) -> StatusId {
        self.published
    }
}
