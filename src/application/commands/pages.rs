// src/application/commands/pages.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::PageDto,
        error::{ApplicationError, ApplicationResult},
        ports::util::SlugGenerator,
    },
    domain::{
        display::TemplateId,
        page::{NewPage, PageId, PageRepository, PageUpdate},
    },
};

#[derive(Debug, Clone, Default)]
pub struct CreatePageCommand {
    pub parent: Option<i64>,
    pub title: String,
    /// Empty means: derive from the title.
    pub slug: String,
    pub body: String,
    pub alternate_template: Option<i64>,
}

#[derive(Debug, Clone, Default)]
pub struct UpdatePageCommand {
    pub parent: Option<Option<i64>>,
    pub title: Option<String>,
    pub slug: Option<String>,
    pub body: Option<String>,
    pub alternate_template: Option<Option<i64>>,
}

pub struct PageCommandService {
    repo: Arc<dyn PageRepository>,
    slug_generator: Arc<dyn SlugGenerator>,
}

impl PageCommandService {
    pub fn new(repo: Arc<dyn PageRepository>, slug_generator: Arc<dyn SlugGenerator>) -> Self {
        Self {
            repo,
            slug_generator,
        }
    }

    pub async fn create_page(&self, command: CreatePageCommand) -> ApplicationResult<PageDto> {
        let parent = match command.parent {
            Some(id) => {
                let id = PageId::new(id)?;
                self.repo
                    .find_by_id(id)
                    .await?
                    .ok_or_else(|| ApplicationError::not_found("parent page not found"))?;
                Some(id)
            }
            None => None,
        };

        let slug = if command.slug.is_empty() {
            self.slug_generator.slugify(&command.title)
        } else {
            command.slug
        };
        if slug.is_empty() {
            return Err(ApplicationError::validation("page slug cannot be empty"));
        }

        let page = self
            .repo
            .insert(NewPage {
                parent,
                title: command.title,
                slug,
                body: command.body,
                alternate_template: command
                    .alternate_template
                    .map(TemplateId::new)
                    .transpose()?,
            })
            .await?;
        tracing::info!(page = %page.slug, "page created");
        Ok(page.into())
    }

    pub async fn update_page(
        &self,
        id: i64,
        command: UpdatePageCommand,
    ) -> ApplicationResult<PageDto> {
        let id = PageId::new(id)?;
        let mut update = PageUpdate::new(id);

        if let Some(parent) = command.parent {
            let parent = match parent {
                Some(parent_id) => {
                    let parent_id = PageId::new(parent_id)?;
                    if parent_id == id {
                        return Err(ApplicationError::validation(
                            "page cannot be its own parent",
                        ));
                    }
                    self.repo
                        .find_by_id(parent_id)
                        .await?
                        .ok_or_else(|| ApplicationError::not_found("parent page not found"))?;
                    Some(parent_id)
                }
                None => None,
            };
            update = update.with_parent(parent);
        }
        if let Some(title) = command.title {
            update = update.with_title(title);
        }
        if let Some(slug) = command.slug {
            if slug.is_empty() {
                return Err(ApplicationError::validation("page slug cannot be empty"));
            }
            update = update.with_slug(slug);
        }
        if let Some(body) = command.body {
            update = update.with_body(body);
        }
        if let Some(template) = command.alternate_template {
            update = update.with_alternate_template(template.map(TemplateId::new).transpose()?);
        }

        Ok(self.repo.update(update).await?.into())
    }

    pub async fn delete_page(&self, id: i64) -> ApplicationResult<()> {
        let id = PageId::new(id)?;
        self.repo.delete(id).await?;
        Ok(())
    }
}
