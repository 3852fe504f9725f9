// src/application/queries/stories/get.rs
use super::StoryQueryService;
use crate::{
    application::{
        dto::StoryDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::story::StoryId,
};

impl StoryQueryService {
    pub async fn get_story(&self, id: i64) -> ApplicationResult<StoryDto> {
        let id = StoryId::new(id)?;
        let story = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("story not found"))?;
        self.assemble(story).await
    }

    pub async fn get_story_by_url_slug(&self, url_slug: &str) -> ApplicationResult<StoryDto> {
        let story = self
            .read_repo
            .find_by_url_slug(url_slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("story not found"))?;
        self.assemble(story).await
    }
}
