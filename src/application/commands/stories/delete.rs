// src/application/commands/stories/delete.rs
use super::StoryCommandService;
use crate::{application::error::ApplicationResult, domain::story::StoryId};

impl StoryCommandService {
    /// Hard-deletes a story. Linked authors, media, and taxonomy entries
    /// are shared and stay in place; in practice newsrooms prefer moving
    /// stories to an archived workflow status instead.
    pub async fn delete_story(&self, id: i64) -> ApplicationResult<()> {
        let id = StoryId::new(id)?;
        self.write_repo.delete(id).await?;
        tracing::info!(story_id = i64::from(id), "story deleted");
        Ok(())
    }
}
