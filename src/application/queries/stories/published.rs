// src/application/queries/stories/published.rs
use super::StoryQueryService;
use crate::application::{dto::StoryDto, error::ApplicationResult};

impl StoryQueryService {
    /// Stories in the designated published workflow state whose publish
    /// time has passed, position descending.
    ///
    /// A pure filter against the store. Hot read path for the public
    /// site; callers that need more can memoize on (status set, coarse
    /// time bucket) and invalidate on any story write.
    pub async fn list_published(&self) -> ApplicationResult<Vec<StoryDto>> {
        let now = self.clock.now();
        let stories = self
            .read_repo
            .list_published(self.workflow.published(), now)
            .await?;
        self.assemble_all(stories).await
    }
}
