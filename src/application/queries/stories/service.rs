// src/application/queries/stories/service.rs
use std::sync::Arc;

use crate::{
    application::ports::time::Clock,
    domain::{
        attachment::AttachmentRepository, author::AuthorRepository, status::StatusRepository,
        status::WorkflowConfig, story::StoryReadRepository, taxonomy::TaxonomyRepository,
        user::UserRepository,
    },
};

pub struct StoryQueryService {
    pub(super) read_repo: Arc<dyn StoryReadRepository>,
    pub(super) status_repo: Arc<dyn StatusRepository>,
    pub(super) author_repo: Arc<dyn AuthorRepository>,
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) attachment_repo: Arc<dyn AttachmentRepository>,
    pub(super) taxonomy_repo: Arc<dyn TaxonomyRepository>,
    pub(super) workflow: WorkflowConfig,
    pub(super) breaking_requires_published: bool,
    pub(super) clock: Arc<dyn Clock>,
}

impl StoryQueryService {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        read_repo: Arc<dyn StoryReadRepository>,
        status_repo: Arc<dyn StatusRepository>,
        author_repo: Arc<dyn AuthorRepository>,
        user_repo: Arc<dyn UserRepository>,
        attachment_repo: Arc<dyn AttachmentRepository>,
        taxonomy_repo: Arc<dyn TaxonomyRepository>,
        workflow: WorkflowConfig,
        breaking_requires_published: bool,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            read_repo,
            status_repo,
            author_repo,
            user_repo,
            attachment_repo,
            taxonomy_repo,
            workflow,
            breaking_requires_published,
            clock,
        }
    }
}
