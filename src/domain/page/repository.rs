use crate::domain::errors::DomainResult;
use crate::domain::page::entity::{NewPage, Page, PageId, PageUpdate};
use async_trait::async_trait;

#[async_trait]
pub trait PageRepository: Send + Sync {
    async fn insert(&self, page: NewPage) -> DomainResult<Page>;
    async fn update(&self, update: PageUpdate) -> DomainResult<Page>;
    async fn delete(&self, id: PageId) -> DomainResult<()>;
    async fn find_by_id(&self, id: PageId) -> DomainResult<Option<Page>>;
    async fn find_by_slug(&self, slug: &str) -> DomainResult<Option<Page>>;
    async fn list(&self) -> DomainResult<Vec<Page>>;
    async fn list_children(&self, parent: PageId) -> DomainResult<Vec<Page>>;
}
