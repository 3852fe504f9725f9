use crate::domain::author::entity::{Author, AuthorUpdate, NewAuthor};
use crate::domain::author::value_objects::AuthorId;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait AuthorRepository: Send + Sync {
    async fn insert(&self, author: NewAuthor) -> DomainResult<Author>;
    async fn update(&self, update: AuthorUpdate) -> DomainResult<Author>;
    /// Removes the author and detaches every reference to it (story
    /// bylines, attachment credits). The referencing records survive.
    async fn delete(&self, id: AuthorId) -> DomainResult<()>;
    async fn find_by_id(&self, id: AuthorId) -> DomainResult<Option<Author>>;
    async fn find_many(&self, ids: &[AuthorId]) -> DomainResult<Vec<Author>>;
    async fn list(&self) -> DomainResult<Vec<Author>>;
}
