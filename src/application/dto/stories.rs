// src/application/dto/stories.rs
use crate::domain::story::Story;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::attachments::{AudioDto, ImageDto, PollDto, ReviewDto, VideoDto};
use super::authors::AuthorDto;
use super::statuses::StatusDto;
use super::taxonomy::{SectionDto, TagDto};

/// Full story representation with every direct relationship expanded one
/// level (media credits reach two levels through their authors' users).
///
/// `featured_image` carries the *resolved* display image: the card when
/// `feature_card_image` is set, the dedicated featured image otherwise.
/// The raw card is exposed alongside it. `is_published`, `is_breaking`,
/// and `path` are derived at assembly time and read-only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoryDto {
    pub id: i64,
    pub assignment_slug: String,
    pub status: StatusDto,
    pub title: String,
    pub url_slug: String,
    pub authors: Vec<AuthorDto>,
    pub teaser: String,
    pub subhead: String,
    pub body: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alternate_template: Option<i64>,
    pub summary: String,
    pub angle: String,
    pub sources: String,
    pub position: i64,
    pub sections: Vec<SectionDto>,
    pub tags: Vec<TagDto>,
    pub series: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card: Option<ImageDto>,
    pub card_size: String,
    pub card_focus: String,
    pub feature_card_image: bool,
    pub publish_time: DateTime<Utc>,
    pub breaking_duration: i64,
    pub created: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured_image: Option<ImageDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured_video: Option<VideoDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured_audio: Option<AudioDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub review: Option<ReviewDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poll: Option<PollDto>,
    pub path: String,
    pub is_published: bool,
    pub is_breaking: bool,
}

/// Flat story representation returned by write operations: relationships
/// stay as ids. How deep to expand them is the API layer's decision; the
/// nested [`StoryDto`] is what the read path produces.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoryRecordDto {
    pub id: i64,
    pub assignment_slug: String,
    pub status: i64,
    pub title: String,
    pub url_slug: String,
    pub authors: Vec<i64>,
    pub teaser: String,
    pub subhead: String,
    pub body: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alternate_template: Option<i64>,
    pub summary: String,
    pub angle: String,
    pub sources: String,
    pub position: i64,
    pub sections: Vec<i64>,
    pub tags: Vec<i64>,
    pub series: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card: Option<i64>,
    pub card_size: String,
    pub card_focus: String,
    pub feature_card_image: bool,
    pub publish_time: DateTime<Utc>,
    pub breaking_duration: i64,
    pub created: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured_image: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured_video: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured_audio: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub review: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poll: Option<i64>,
    pub path: String,
}

impl From<Story> for StoryRecordDto {
    fn from(story: Story) -> Self {
        let path = story.path();
        Self {
            id: story.id.into(),
            assignment_slug: story.assignment_slug.into(),
            status: story.status.into(),
            title: story.title,
            url_slug: story.url_slug,
            authors: story.authors.into_iter().map(Into::into).collect(),
            teaser: story.teaser,
            subhead: story.subhead,
            body: story.body,
            alternate_template: story.alternate_template.map(Into::into),
            summary: story.summary,
            angle: story.angle,
            sources: story.sources,
            position: story.position.into(),
            sections: story.sections.into_iter().map(Into::into).collect(),
            tags: story.tags.into_iter().map(Into::into).collect(),
            series: story.series,
            card: story.card.map(Into::into),
            card_size: story.card_size.as_str().to_string(),
            card_focus: story.card_focus.as_str().to_string(),
            feature_card_image: story.feature_card_image,
            publish_time: story.publish_time,
            breaking_duration: story.breaking_duration.hours(),
            created: story.created,
            last_updated: story.last_updated,
            featured_image: story.featured_image.map(Into::into),
            featured_video: story.featured_video.map(Into::into),
            featured_audio: story.featured_audio.map(Into::into),
            review: story.review.map(Into::into),
            poll: story.poll.map(Into::into),
            path,
        }
    }
}
