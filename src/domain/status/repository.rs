use crate::domain::errors::DomainResult;
use crate::domain::status::entity::{NewStatus, Status, StatusId};
use async_trait::async_trait;

#[async_trait]
pub trait StatusRepository: Send + Sync {
    async fn insert(&self, status: NewStatus) -> DomainResult<Status>;
    /// Fails with a conflict while any story still references the status.
    async fn delete(&self, id: StatusId) -> DomainResult<()>;
    async fn find_by_id(&self, id: StatusId) -> DomainResult<Option<Status>>;
    async fn find_by_name(&self, name: &str) -> DomainResult<Option<Status>>;
    /// All statuses ordered by workflow position.
    async fn list(&self) -> DomainResult<Vec<Status>>;
}
