// src/application/services/mod.rs
use std::sync::Arc;

use crate::application::commands::{
    attachments::AttachmentCommandService, authors::AuthorCommandService,
    pages::PageCommandService, statuses::StatusCommandService, stories::StoryCommandService,
};
use crate::application::ports::{time::Clock, util::SlugGenerator};
use crate::application::queries::{
    attachments::AttachmentQueryService, authors::AuthorQueryService, pages::PageQueryService,
    statuses::StatusQueryService, stories::StoryQueryService,
};
use crate::config::AppConfig;
use crate::domain::{
    attachment::AttachmentRepository,
    author::AuthorRepository,
    page::PageRepository,
    status::{StatusRepository, WorkflowConfig},
    story::{StoryReadRepository, StoryWriteRepository},
    taxonomy::TaxonomyRepository,
    user::UserRepository,
};

/// Bundles every repository port behind one constructor argument so the
/// service wiring below stays readable.
pub struct Repositories {
    pub story_write: Arc<dyn StoryWriteRepository>,
    pub story_read: Arc<dyn StoryReadRepository>,
    pub status: Arc<dyn StatusRepository>,
    pub author: Arc<dyn AuthorRepository>,
    pub user: Arc<dyn UserRepository>,
    pub attachment: Arc<dyn AttachmentRepository>,
    pub taxonomy: Arc<dyn TaxonomyRepository>,
    pub page: Arc<dyn PageRepository>,
}

pub struct ApplicationServices {
    pub story_commands: StoryCommandService,
    pub story_queries: StoryQueryService,
    pub author_commands: AuthorCommandService,
    pub author_queries: AuthorQueryService,
    pub status_commands: StatusCommandService,
    pub status_queries: StatusQueryService,
    pub attachment_commands: AttachmentCommandService,
    pub attachment_queries: AttachmentQueryService,
    pub page_commands: PageCommandService,
    pub page_queries: PageQueryService,
}

impl ApplicationServices {
    pub fn new(
        repos: Repositories,
        workflow: WorkflowConfig,
        config: &AppConfig,
        clock: Arc<dyn Clock>,
        slug_generator: Arc<dyn SlugGenerator>,
    ) -> Self {
        Self {
            story_commands: StoryCommandService::new(
                Arc::clone(&repos.story_write),
                Arc::clone(&repos.story_read),
                Arc::clone(&repos.status),
                Arc::clone(&slug_generator),
                Arc::clone(&clock),
            ),
            story_queries: StoryQueryService::new(
                Arc::clone(&repos.story_read),
                Arc::clone(&repos.status),
                Arc::clone(&repos.author),
                Arc::clone(&repos.user),
                Arc::clone(&repos.attachment),
                Arc::clone(&repos.taxonomy),
                workflow,
                config.breaking_requires_published(),
                Arc::clone(&clock),
            ),
            author_commands: AuthorCommandService::new(
                Arc::clone(&repos.author),
                Arc::clone(&repos.user),
                config.default_organization(),
            ),
            author_queries: AuthorQueryService::new(
                Arc::clone(&repos.author),
                Arc::clone(&repos.user),
            ),
            status_commands: StatusCommandService::new(Arc::clone(&repos.status)),
            status_queries: StatusQueryService::new(Arc::clone(&repos.status)),
            attachment_commands: AttachmentCommandService::new(
                Arc::clone(&repos.attachment),
                Arc::clone(&repos.author),
                Arc::clone(&repos.user),
            ),
            attachment_queries: AttachmentQueryService::new(
                Arc::clone(&repos.attachment),
                Arc::clone(&repos.author),
                Arc::clone(&repos.user),
            ),
            page_commands: PageCommandService::new(
                Arc::clone(&repos.page),
                Arc::clone(&slug_generator),
            ),
            page_queries: PageQueryService::new(Arc::clone(&repos.page)),
        }
    }
}
