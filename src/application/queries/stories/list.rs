// src/application/queries/stories/list.rs
use super::StoryQueryService;
use crate::application::{dto::StoryDto, error::ApplicationResult};

impl StoryQueryService {
    /// All stories in default listing order: position descending.
    pub async fn list_stories(&self) -> ApplicationResult<Vec<StoryDto>> {
        let stories = self.read_repo.list().await?;
        self.assemble_all(stories).await
    }
}
