// src/application/commands/stories/service.rs
use std::sync::Arc;

use crate::{
    application::ports::{time::Clock, util::SlugGenerator},
    domain::{
        status::StatusRepository,
        story::{StoryReadRepository, StoryWriteRepository},
    },
};

pub struct StoryCommandService {
    pub(super) write_repo: Arc<dyn StoryWriteRepository>,
    pub(super) read_repo: Arc<dyn StoryReadRepository>,
    pub(super) status_repo: Arc<dyn StatusRepository>,
    pub(super) slug_generator: Arc<dyn SlugGenerator>,
    pub(super) clock: Arc<dyn Clock>,
}

impl StoryCommandService {
    pub fn new(
        write_repo: Arc<dyn StoryWriteRepository>,
        read_repo: Arc<dyn StoryReadRepository>,
        status_repo: Arc<dyn StatusRepository>,
        slug_generator: Arc<dyn SlugGenerator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            status_repo,
            slug_generator,
            clock,
        }
    }
}
