// src/domain/story/entity.rs
use crate::domain::attachment::{AudioId, ImageId, PollId, ReviewId, VideoId};
use crate::domain::author::AuthorId;
use crate::domain::display::{CardFocus, CardSize, TemplateId};
use crate::domain::status::StatusId;
use crate::domain::story::value_objects::{
    AssignmentSlug, BreakingDuration, StoryId, StoryPosition,
};
use crate::domain::taxonomy::{SectionId, TagId};
use chrono::{DateTime, Utc};

/// A standalone piece of content that conveys a message to a consumer.
///
/// The aggregate root of the data layer: composes bylines, workflow
/// status, linked media, taxonomy, and scheduling into a publishable
/// unit. Referenced authors and media are shared, never owned; deleting
/// a story leaves all of them in place, and vice versa.
#[derive(Debug, Clone)]
pub struct Story {
    pub id: StoryId,
    // primary content
    pub assignment_slug: AssignmentSlug,
    pub status: StatusId,
    pub title: String,
    pub url_slug: String,
    pub authors: Vec<AuthorId>,
    pub teaser: String,
    pub subhead: String,
    pub body: String,
    pub alternate_template: Option<TemplateId>,
    // planning
    pub summary: String,
    pub angle: String,
    pub sources: String,
    // organization
    pub position: StoryPosition,
    pub sections: Vec<SectionId>,
    pub tags: Vec<TagId>,
    pub series: bool,
    // card
    pub card: Option<ImageId>,
    pub card_size: CardSize,
    pub card_focus: CardFocus,
    pub feature_card_image: bool,
    // dates and times
    pub publish_time: DateTime<Utc>,
    pub breaking_duration: BreakingDuration,
    pub created: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
    // linked media
    pub featured_image: Option<ImageId>,
    pub featured_video: Option<VideoId>,
    pub featured_audio: Option<AudioId>,
    pub review: Option<ReviewId>,
    pub poll: Option<PollId>,
}

impl Story {
    /// The image to display as the story's featured image.
    ///
    /// The card image (list and teaser views) and the featured image
    /// (full-article view) are distinct slots; `feature_card_image`
    /// decides which one wins without duplicating data entry.
    pub fn resolved_featured_image(&self) -> Option<ImageId> {
        match self.card {
            Some(card) if self.feature_card_image => Some(card),
            _ => self.featured_image,
        }
    }

    /// True once the story sits in the designated published workflow
    /// state and its publish time has strictly passed. A story scheduled
    /// in the future is never published regardless of status.
    pub fn is_published(&self, published: StatusId, now: DateTime<Utc>) -> bool {
        self.status == published && self.publish_time < now
    }

    /// End of the breaking-news window. Saturates at the edge of the
    /// representable time range rather than overflowing.
    pub fn breaking_ends_at(&self) -> DateTime<Utc> {
        self.publish_time
            .checked_add_signed(self.breaking_duration.as_duration())
            .unwrap_or(DateTime::<Utc>::MAX_UTC)
    }

    /// True while `now` is strictly before the end of the breaking
    /// window; the boundary instant itself is not breaking.
    ///
    /// This is the raw window check: it does not require the story to be
    /// published. Read paths that want "breaking implies published"
    /// combine this with `is_published`.
    pub fn is_breaking(&self, now: DateTime<Utc>) -> bool {
        now < self.breaking_ends_at()
    }

    /// URL path to the story from the website root:
    /// `/YYYY/MM/DD/<url_slug>/`, derived from the publish time.
    pub fn path(&self) -> String {
        format!(
            "/{}/{}/",
            self.publish_time.format("%Y/%m/%d"),
            self.url_slug
        )
    }
}

#[derive(Debug, Clone)]
pub struct NewStory {
    pub assignment_slug: AssignmentSlug,
    pub status: StatusId,
    pub title: String,
    pub url_slug: String,
    pub authors: Vec<AuthorId>,
    pub teaser: String,
    pub subhead: String,
    pub body: String,
    pub alternate_template: Option<TemplateId>,
    pub summary: String,
    pub angle: String,
    pub sources: String,
    /// None asks the store to assign the next free position atomically;
    /// Some inserts at exactly that position or fails on a duplicate.
    pub position: Option<StoryPosition>,
    pub sections: Vec<SectionId>,
    pub tags: Vec<TagId>,
    pub series: bool,
    pub card: Option<ImageId>,
    pub card_size: CardSize,
    pub card_focus: CardFocus,
    pub feature_card_image: bool,
    pub publish_time: DateTime<Utc>,
    pub breaking_duration: BreakingDuration,
    pub created: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
    pub featured_image: Option<ImageId>,
    pub featured_video: Option<VideoId>,
    pub featured_audio: Option<AudioId>,
    pub review: Option<ReviewId>,
    pub poll: Option<PollId>,
}

/// Partial update; unset fields are left untouched. `created` is never
/// part of an update, and `last_updated` is always stamped.
#[derive(Debug, Clone)]
pub struct StoryUpdate {
    pub id: StoryId,
    pub assignment_slug: Option<AssignmentSlug>,
    pub status: Option<StatusId>,
    pub title: Option<String>,
    pub url_slug: Option<String>,
    pub authors: Option<Vec<AuthorId>>,
    pub teaser: Option<String>,
    pub subhead: Option<String>,
    pub body: Option<String>,
    pub summary: Option<String>,
    pub angle: Option<String>,
    pub sources: Option<String>,
    pub position: Option<StoryPosition>,
    pub sections: Option<Vec<SectionId>>,
    pub tags: Option<Vec<TagId>>,
    pub series: Option<bool>,
    pub card: Option<Option<ImageId>>,
    pub card_size: Option<CardSize>,
    pub card_focus: Option<CardFocus>,
    pub feature_card_image: Option<bool>,
    pub publish_time: Option<DateTime<Utc>>,
    pub breaking_duration: Option<BreakingDuration>,
    pub featured_image: Option<Option<ImageId>>,
    pub featured_video: Option<Option<VideoId>>,
    pub featured_audio: Option<Option<AudioId>>,
    pub review: Option<Option<ReviewId>>,
    pub poll: Option<Option<PollId>>,
    pub last_updated: DateTime<Utc>,
}

impl StoryUpdate {
    pub fn new(id: StoryId, last_updated: DateTime<Utc>) -> Self {
        Self {
            id,
            assignment_slug: None,
            status: None,
            title: None,
            url_slug: None,
            authors: None,
            teaser: None,
            subhead: None,
            body: None,
            summary: None,
            angle: None,
            sources: None,
            position: None,
            sections: None,
            tags: None,
            series: None,
            card: None,
            card_size: None,
            card_focus: None,
            feature_card_image: None,
            publish_time: None,
            breaking_duration: None,
            featured_image: None,
            featured_video: None,
            featured_audio: None,
            review: None,
            poll: None,
            last_updated,
        }
    }

    pub fn with_assignment_slug(mut self, slug: AssignmentSlug) -> Self {
        self.assignment_slug = Some(slug);
        self
    }

    pub fn with_status(mut self, status: StatusId) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_url_slug(mut self, url_slug: impl Into<String>) -> Self {
        self.url_slug = Some(url_slug.into());
        self
    }

    pub fn with_authors(mut self, authors: Vec<AuthorId>) -> Self {
        self.authors = Some(authors);
        self
    }

    pub fn with_teaser(mut self, teaser: impl Into<String>) -> Self {
        self.teaser = Some(teaser.into());
        self
    }

    pub fn with_subhead(mut self, subhead: impl Into<String>) -> Self {
        self.subhead = Some(subhead.into());
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn with_position(mut self, position: StoryPosition) -> Self {
        self.position = Some(position);
        self
    }

    pub fn with_sections(mut self, sections: Vec<SectionId>) -> Self {
        self.sections = Some(sections);
        self
    }

    pub fn with_tags(mut self, tags: Vec<TagId>) -> Self {
        self.tags = Some(tags);
        self
    }

    pub fn with_card(mut self, card: Option<ImageId>) -> Self {
        self.card = Some(card);
        self
    }

    pub fn with_card_size(mut self, card_size: CardSize) -> Self {
        self.card_size = Some(card_size);
        self
    }

    pub fn with_card_focus(mut self, card_focus: CardFocus) -> Self {
        self.card_focus = Some(card_focus);
        self
    }

    pub fn with_feature_card_image(mut self, feature_card_image: bool) -> Self {
        self.feature_card_image = Some(feature_card_image);
        self
    }

    pub fn with_publish_time(mut self, publish_time: DateTime<Utc>) -> Self {
        self.publish_time = Some(publish_time);
        self
    }

    pub fn with_breaking_duration(mut self, breaking_duration: BreakingDuration) -> Self {
        self.breaking_duration = Some(breaking_duration);
        self
    }

    pub fn with_featured_image(mut self, featured_image: Option<ImageId>) -> Self {
        self.featured_image = Some(featured_image);
        self
    }

    pub fn with_featured_video(mut self, featured_video: Option<VideoId>) -> Self {
        self.featured_video = Some(featured_video);
        self
    }

    pub fn with_featured_audio(mut self, featured_audio: Option<AudioId>) -> Self {
        self.featured_audio = Some(featured_audio);
        self
    }

    pub fn with_review(mut self, review: Option<ReviewId>) -> Self {
        self.review = Some(review);
        self
    }

    pub fn with_poll(mut self, poll: Option<PollId>) -> Self {
        self.poll = Some(poll);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_story() -> Story {
        Story {
            id: StoryId::new(1).unwrap(),
            assignment_slug: AssignmentSlug::new("city-council").unwrap(),
            status: StatusId::new(1).unwrap(),
            title: "Council approves budget".into(),
            url_slug: "council-approves-budget".into(),
            authors: vec![],
            teaser: String::new(),
            subhead: String::new(),
            body: String::new(),
            alternate_template: None,
            summary: String::new(),
            angle: String::new(),
            sources: String::new(),
            position: StoryPosition::first(),
            sections: vec![],
            tags: vec![],
            series: false,
            card: None,
            card_size: CardSize::default(),
            card_focus: CardFocus::default(),
            feature_card_image: true,
            publish_time: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            breaking_duration: BreakingDuration::default(),
            created: Utc::now(),
            last_updated: Utc::now(),
            featured_image: None,
            featured_video: None,
            featured_audio: None,
            review: None,
            poll: None,
        }
    }

    #[test]
    fn card_wins_when_flagged_as_featured() {
        let mut story = sample_story();
        story.card = Some(ImageId::new(10).unwrap());
        story.featured_image = Some(ImageId::new(20).unwrap());
        story.feature_card_image = true;
        assert_eq!(
            story.resolved_featured_image(),
            Some(ImageId::new(10).unwrap())
        );
    }

    #[test]
    fn featured_image_wins_when_card_not_flagged() {
        let mut story = sample_story();
        story.card = Some(ImageId::new(10).unwrap());
        story.featured_image = Some(ImageId::new(20).unwrap());
        story.feature_card_image = false;
        assert_eq!(
            story.resolved_featured_image(),
            Some(ImageId::new(20).unwrap())
        );
    }

    #[test]
    fn featured_image_used_when_card_unset() {
        let mut story = sample_story();
        story.featured_image = Some(ImageId::new(20).unwrap());
        assert_eq!(
            story.resolved_featured_image(),
            Some(ImageId::new(20).unwrap())
        );
    }

    #[test]
    fn resolved_featured_image_empty_when_both_unset() {
        assert_eq!(sample_story().resolved_featured_image(), None);
    }

    #[test]
    fn path_is_derived_from_publish_time_and_slug() {
        let mut story = sample_story();
        story.publish_time = Utc.with_ymd_and_hms(2024, 3, 7, 18, 30, 0).unwrap();
        assert_eq!(story.path(), "/2024/03/07/council-approves-budget/");
    }

    #[test]
    fn published_requires_status_and_elapsed_publish_time() {
        let published = StatusId::new(7).unwrap();
        let mut story = sample_story();
        story.status = published;
        let after = story.publish_time + chrono::Duration::seconds(1);
        let before = story.publish_time - chrono::Duration::seconds(1);

        assert!(story.is_published(published, after));
        assert!(!story.is_published(published, before));
        // Exactly at the publish instant is still unpublished.
        assert!(!story.is_published(published, story.publish_time));
        // Right status required too.
        assert!(!story.is_published(StatusId::new(8).unwrap(), after));
    }

    #[test]
    fn breaking_window_boundary_is_exclusive() {
        let mut story = sample_story();
        story.publish_time = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        story.breaking_duration = BreakingDuration::new(3).unwrap();

        let inside = Utc.with_ymd_and_hms(2024, 1, 1, 2, 59, 59).unwrap();
        let boundary = Utc.with_ymd_and_hms(2024, 1, 1, 3, 0, 0).unwrap();

        assert!(story.is_breaking(inside));
        assert!(!story.is_breaking(boundary));
    }

    #[test]
    fn zero_duration_story_never_breaks() {
        let story = sample_story();
        assert!(!story.is_breaking(story.publish_time));
    }

    /// A window reaching past the representable time range saturates
    /// instead of panicking; the story just stays breaking.
    #[test]
    fn maximal_breaking_window_saturates() {
        let mut story = sample_story();
        story.publish_time = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        story.breaking_duration = BreakingDuration::new(BreakingDuration::MAX_HOURS).unwrap();

        assert_eq!(story.breaking_ends_at(), DateTime::<Utc>::MAX_UTC);
        assert!(story.is_breaking(Utc.with_ymd_and_hms(2100, 1, 1, 0, 0, 0).unwrap()));
    }
}
