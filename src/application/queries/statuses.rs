// src/application/queries/statuses.rs
use std::sync::Arc;

use crate::{
    application::{dto::StatusDto, error::ApplicationResult},
    domain::status::StatusRepository,
};

pub struct StatusQueryService {
    repo: Arc<dyn StatusRepository>,
}

impl StatusQueryService {
    pub fn new(repo: Arc<dyn StatusRepository>) -> Self {
        Self { repo }
    }

    /// The workflow status set ordered by position.
    pub async fn list_statuses(&self) -> ApplicationResult<Vec<StatusDto>> {
        Ok(self
            .repo
            .list()
            .await?
            .into_iter()
            .map(Into::into)
            .collect())
    }
}
