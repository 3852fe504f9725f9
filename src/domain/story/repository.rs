use crate::domain::errors::DomainResult;
use crate::domain::status::StatusId;
use crate::domain::story::entity::{NewStory, Story, StoryUpdate};
use crate::domain::story::value_objects::StoryId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
pub trait StoryWriteRepository: Send + Sync {
    /// Persists a new story.
    ///
    /// When `story.position` is `None` the store assigns the next free
    /// position: one past the current maximum, or zero for the first
    /// story. The read-max-then-insert must be atomic against concurrent
    /// inserts; implementations retry internally on contention and only
    /// then surface a conflict. An explicit position is taken as-is and a
    /// duplicate is a conflict, never reassigned.
    async fn insert(&self, story: NewStory) -> DomainResult<Story>;
    async fn update(&self, update: StoryUpdate) -> DomainResult<Story>;
    async fn delete(&self, id: StoryId) -> DomainResult<()>;
}

#[async_trait]
pub trait StoryReadRepository: Send + Sync {
    async fn find_by_id(&self, id: StoryId) -> DomainResult<Option<Story>>;
    async fn find_by_url_slug(&self, url_slug: &str) -> DomainResult<Option<Story>>;
    /// All stories in default listing order: position descending.
    async fn list(&self) -> DomainResult<Vec<Story>>;
    /// Stories in the designated published state with an elapsed publish
    /// time, position descending.
    async fn list_published(
        &self,
        published: StatusId,
        now: DateTime<Utc>,
    ) -> DomainResult<Vec<Story>>;
}
