// src/application/commands/stories/update.rs
use super::StoryCommandService;
use crate::{
    application::{
        dto::StoryRecordDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        attachment::{AudioId, ImageId, PollId, ReviewId, VideoId},
        author::AuthorId,
        display::{CardFocus, CardSize},
        status::StatusId,
        story::{AssignmentSlug, BreakingDuration, StoryId, StoryPosition, StoryUpdate},
        taxonomy::{SectionId, TagId},
    },
};
use chrono::{DateTime, Utc};

/// Field-by-field patch for a story. Absent fields stay untouched;
/// `created` can never be patched and `last_updated` is stamped from the
/// clock on every call.
#[derive(Debug, Clone, Default)]
pub struct UpdateStoryCommand {
    pub assignment_slug: Option<String>,
    pub status: Option<i64>,
    pub title: Option<String>,
    pub url_slug: Option<String>,
    pub authors: Option<Vec<i64>>,
    pub teaser: Option<String>,
    pub subhead: Option<String>,
    pub body: Option<String>,
    pub summary: Option<String>,
    pub angle: Option<String>,
    pub sources: Option<String>,
    /// Explicit reposition; subject to the same uniqueness rule as
    /// insert, never silently reassigned.
    pub position: Option<i64>,
    pub sections: Option<Vec<i64>>,
    pub tags: Option<Vec<i64>>,
    pub series: Option<bool>,
    pub card: Option<Option<i64>>,
    pub card_size: Option<String>,
    pub card_focus: Option<String>,
    pub feature_card_image: Option<bool>,
    pub publish_time: Option<DateTime<Utc>>,
    pub breaking_duration: Option<i64>,
    pub featured_image: Option<Option<i64>>,
    pub featured_video: Option<Option<i64>>,
    pub featured_audio: Option<Option<i64>>,
    pub review: Option<Option<i64>>,
    pub poll: Option<Option<i64>>,
}

impl StoryCommandService {
    pub async fn update_story(
        &self,
        id: i64,
        command: UpdateStoryCommand,
    ) -> ApplicationResult<StoryRecordDto> {
        let id = StoryId::new(id)?;
        self.read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("story not found"))?;

        let now = self.clock.now();
        let mut update = StoryUpdate::new(id, now);

        if let Some(slug) = command.assignment_slug {
            update = update.with_assignment_slug(AssignmentSlug::new(slug)?);
        }
        if let Some(status) = command.status {
            let status = StatusId::new(status)?;
            self.status_repo
                .find_by_id(status)
                .await?
                .ok_or_else(|| ApplicationError::not_found("status not found"))?;
            update = update.with_status(status);
        }
        if let Some(title) = command.title {
            update = update.with_title(title);
        }
        if let Some(url_slug) = command.url_slug {
            update = update.with_url_slug(url_slug);
        }
        if let Some(authors) = command.authors {
            let authors = authors
                .into_iter()
                .map(AuthorId::new)
                .collect::<Result<Vec<_>, _>>()?;
            update = update.with_authors(authors);
        }
        if let Some(teaser) = command.teaser {
            update = update.with_teaser(teaser);
        }
        if let Some(subhead) = command.subhead {
            update = update.with_subhead(subhead);
        }
        if let Some(body) = command.body {
            update = update.with_body(body);
        }
        if let Some(summary) = command.summary {
            update.summary = Some(summary);
        }
        if let Some(angle) = command.angle {
            update.angle = Some(angle);
        }
        if let Some(sources) = command.sources {
            update.sources = Some(sources);
        }
        if let Some(position) = command.position {
            update = update.with_position(StoryPosition::new(position)?);
        }
        if let Some(sections) = command.sections {
            let sections = sections
                .into_iter()
                .map(SectionId::new)
                .collect::<Result<Vec<_>, _>>()?;
            update = update.with_sections(sections);
        }
        if let Some(tags) = command.tags {
            let tags = tags
                .into_iter()
                .map(TagId::new)
                .collect::<Result<Vec<_>, _>>()?;
            update = update.with_tags(tags);
        }
        if let Some(series) = command.series {
            update.series = Some(series);
        }
        if let Some(card) = command.card {
            update = update.with_card(card.map(ImageId::new).transpose()?);
        }
        if let Some(card_size) = command.card_size {
            update = update.with_card_size(CardSize::parse(&card_size)?);
        }
        if let Some(card_focus) = command.card_focus {
            update = update.with_card_focus(CardFocus::parse(&card_focus)?);
        }
        if let Some(feature_card_image) = command.feature_card_image {
            update = update.with_feature_card_image(feature_card_image);
        }
        if let Some(publish_time) = command.publish_time {
            update = update.with_publish_time(publish_time);
        }
        if let Some(hours) = command.breaking_duration {
            update = update.with_breaking_duration(BreakingDuration::new(hours)?);
        }
        if let Some(featured_image) = command.featured_image {
            update = update.with_featured_image(featured_image.map(ImageId::new).transpose()?);
        }
        if let Some(featured_video) = command.featured_video {
            update = update.with_featured_video(featured_video.map(VideoId::new).transpose()?);
        }
        if let Some(featured_audio) = command.featured_audio {
            update = update.with_featured_audio(featured_audio.map(AudioId::new).transpose()?);
        }
        if let Some(review) = command.review {
            update = update.with_review(review.map(ReviewId::new).transpose()?);
        }
        if let Some(poll) = command.poll {
            update = update.with_poll(poll.map(PollId::new).transpose()?);
        }

        let updated = self.write_repo.update(update).await?;
        tracing::debug!(story = %updated.assignment_slug, "story updated");
        Ok(updated.into())
    }
}
