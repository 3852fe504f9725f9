// src/application/queries/pages.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::PageDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::page::{PageId, PageRepository},
};

pub struct PageQueryService {
    repo: Arc<dyn PageRepository>,
}

impl PageQueryService {
    pub fn new(repo: Arc<dyn PageRepository>) -> Self {
        Self { repo }
    }

    pub async fn get_page(&self, id: i64) -> ApplicationResult<PageDto> {
        let id = PageId::new(id)?;
        let page = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("page not found"))?;
        Ok(page.into())
    }

    pub async fn get_page_by_slug(&self, slug: &str) -> ApplicationResult<PageDto> {
        let page = self
            .repo
            .find_by_slug(slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("page not found"))?;
        Ok(page.into())
    }

    pub async fn list_pages(&self) -> ApplicationResult<Vec<PageDto>> {
        Ok(self
            .repo
            .list()
            .await?
            .into_iter()
            .map(Into::into)
            .collect())
    }

    /// Direct children of a page in the parent-id tree.
    pub async fn list_children(&self, parent: i64) -> ApplicationResult<Vec<PageDto>> {
        let parent = PageId::new(parent)?;
        Ok(self
            .repo
            .list_children(parent)
            .await?
            .into_iter()
            .map(Into::into)
            .collect())
    }
}
