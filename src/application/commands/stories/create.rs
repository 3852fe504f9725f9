// src/application/commands/stories/create.rs
use super::StoryCommandService;
use crate::{
    application::{
        dto::StoryRecordDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        attachment::{AudioId, ImageId, PollId, ReviewId, VideoId},
        author::AuthorId,
        display::{CardFocus, CardSize, TemplateId},
        status::StatusId,
        story::{AssignmentSlug, BreakingDuration, NewStory, StoryPosition},
        taxonomy::{SectionId, TagId},
    },
};
use chrono::{DateTime, Utc};

pub struct CreateStoryCommand {
    pub assignment_slug: String,
    pub status: i64,
    pub title: String,
    /// Empty means: derive from the title, mirroring the admin editor's
    /// slug prepopulation.
    pub url_slug: String,
    pub authors: Vec<i64>,
    pub teaser: String,
    pub subhead: String,
    pub body: String,
    pub alternate_template: Option<i64>,
    pub summary: String,
    pub angle: String,
    pub sources: String,
    /// None requests storage-side assignment of the next free position.
    pub position: Option<i64>,
    pub sections: Vec<i64>,
    pub tags: Vec<i64>,
    pub series: bool,
    pub card: Option<i64>,
    pub card_size: Option<String>,
    pub card_focus: Option<String>,
    pub feature_card_image: bool,
    pub publish_time: DateTime<Utc>,
    pub breaking_duration: i64,
    pub featured_image: Option<i64>,
    pub featured_video: Option<i64>,
    pub featured_audio: Option<i64>,
    pub review: Option<i64>,
    pub poll: Option<i64>,
}

impl CreateStoryCommand {
    pub fn builder() -> CreateStoryCommandBuilder {
        CreateStoryCommandBuilder::default()
    }
}

#[derive(Default)]
pub struct CreateStoryCommandBuilder {
    assignment_slug: Option<String>,
    status: Option<i64>,
    title: String,
    url_slug: String,
    authors: Vec<i64>,
    teaser: String,
    subhead: String,
    body: String,
    alternate_template: Option<i64>,
    summary: String,
    angle: String,
    sources: String,
    position: Option<i64>,
    sections: Vec<i64>,
    tags: Vec<i64>,
    series: bool,
    card: Option<i64>,
    card_size: Option<String>,
    card_focus: Option<String>,
    feature_card_image: Option<bool>,
    publish_time: Option<DateTime<Utc>>,
    breaking_duration: i64,
    featured_image: Option<i64>,
    featured_video: Option<i64>,
    featured_audio: Option<i64>,
    review: Option<i64>,
    poll: Option<i64>,
}

impl CreateStoryCommandBuilder {
    pub fn assignment_slug(mut self, slug: impl Into<String>) -> Self {
        self.assignment_slug = Some(slug.into());
        self
    }

    pub fn status(mut self, status: i64) -> Self {
        self.status = Some(status);
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn url_slug(mut self, url_slug: impl Into<String>) -> Self {
        self.url_slug = url_slug.into();
        self
    }

    pub fn authors(mut self, authors: Vec<i64>) -> Self {
        self.authors = authors;
        self
    }

    pub fn teaser(mut self, teaser: impl Into<String>) -> Self {
        self.teaser = teaser.into();
        self
    }

    pub fn subhead(mut self, subhead: impl Into<String>) -> Self {
        self.subhead = subhead.into();
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    pub fn alternate_template(mut self, template: i64) -> Self {
        self.alternate_template = Some(template);
        self
    }

    pub fn summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = summary.into();
        self
    }

    pub fn angle(mut self, angle: impl Into<String>) -> Self {
        self.angle = angle.into();
        self
    }

    pub fn sources(mut self, sources: impl Into<String>) -> Self {
        self.sources = sources.into();
        self
    }

    pub fn position(mut self, position: i64) -> Self {
        self.position = Some(position);
        self
    }

    pub fn sections(mut self, sections: Vec<i64>) -> Self {
        self.sections = sections;
        self
    }

    pub fn tags(mut self, tags: Vec<i64>) -> Self {
        self.tags = tags;
        self
    }

    pub fn series(mut self, series: bool) -> Self {
        self.series = series;
        self
    }

    pub fn card(mut self, card: i64) -> Self {
        self.card = Some(card);
        self
    }

    pub fn card_size(mut self, card_size: impl Into<String>) -> Self {
        self.card_size = Some(card_size.into());
        self
    }

    pub fn card_focus(mut self, card_focus: impl Into<String>) -> Self {
        self.card_focus = Some(card_focus.into());
        self
    }

    pub fn feature_card_image(mut self, feature_card_image: bool) -> Self {
        self.feature_card_image = Some(feature_card_image);
        self
    }

    pub fn publish_time(mut self, publish_time: DateTime<Utc>) -> Self {
        self.publish_time = Some(publish_time);
        self
    }

    pub fn breaking_duration(mut self, hours: i64) -> Self {
        self.breaking_duration = hours;
        self
    }

    pub fn featured_image(mut self, image: i64) -> Self {
        self.featured_image = Some(image);
        self
    }

    pub fn featured_video(mut self, video: i64) -> Self {
        self.featured_video = Some(video);
        self
    }

    pub fn featured_audio(mut self, audio: i64) -> Self {
        self.featured_audio = Some(audio);
        self
    }

    pub fn review(mut self, review: i64) -> Self {
        self.review = Some(review);
        self
    }

    pub fn poll(mut self, poll: i64) -> Self {
        self.poll = Some(poll);
        self
    }

    pub fn build(self) -> Result<CreateStoryCommand, &'static str> {
        Ok(CreateStoryCommand {
            assignment_slug: self.assignment_slug.ok_or("assignment slug is required")?,
            status: self.status.ok_or("status is required")?,
            title: self.title,
            url_slug: self.url_slug,
            authors: self.authors,
            teaser: self.teaser,
            subhead: self.subhead,
            body: self.body,
            alternate_template: self.alternate_template,
            summary: self.summary,
            angle: self.angle,
            sources: self.sources,
            position: self.position,
            sections: self.sections,
            tags: self.tags,
            series: self.series,
            card: self.card,
            card_size: self.card_size,
            card_focus: self.card_focus,
            feature_card_image: self.feature_card_image.unwrap_or(true),
            publish_time: self.publish_time.ok_or("publish time is required")?,
            breaking_duration: self.breaking_duration,
            featured_image: self.featured_image,
            featured_video: self.featured_video,
            featured_audio: self.featured_audio,
            review: self.review,
            poll: self.poll,
        })
    }
}

impl StoryCommandService {
    pub async fn create_story(
        &self,
        command: CreateStoryCommand,
    ) -> ApplicationResult<StoryRecordDto> {
        let assignment_slug = AssignmentSlug::new(command.assignment_slug)?;
        let status = StatusId::new(command.status)?;
        self.status_repo
            .find_by_id(status)
            .await?
            .ok_or_else(|| ApplicationError::not_found("status not found"))?;

        let url_slug = if command.url_slug.is_empty() {
            self.slug_generator.slugify(&command.title)
        } else {
            command.url_slug
        };

        let authors = command
            .authors
            .into_iter()
            .map(AuthorId::new)
            .collect::<Result<Vec<_>, _>>()?;
        let sections = command
            .sections
            .into_iter()
            .map(SectionId::new)
            .collect::<Result<Vec<_>, _>>()?;
        let tags = command
            .tags
            .into_iter()
            .map(TagId::new)
            .collect::<Result<Vec<_>, _>>()?;

        let card_size = match command.card_size.as_deref() {
            Some(value) => CardSize::parse(value)?,
            None => CardSize::default(),
        };
        let card_focus = match command.card_focus.as_deref() {
            Some(value) => CardFocus::parse(value)?,
            None => CardFocus::default(),
        };

        let position = command.position.map(StoryPosition::new).transpose()?;
        let breaking_duration = BreakingDuration::new(command.breaking_duration)?;
        let now = self.clock.now();

        let new_story = NewStory {
            assignment_slug,
            status,
            title: command.title,
            url_slug,
            authors,
            teaser: command.teaser,
            subhead: command.subhead,
            body: command.body,
            alternate_template: command
                .alternate_template
                .map(TemplateId::new)
                .transpose()?,
            summary: command.summary,
            angle: command.angle,
            sources: command.sources,
            position,
            sections,
            tags,
            series: command.series,
            card: command.card.map(ImageId::new).transpose()?,
            card_size,
            card_focus,
            feature_card_image: command.feature_card_image,
            publish_time: command.publish_time,
            breaking_duration,
            created: now,
            last_updated: now,
            featured_image: command.featured_image.map(ImageId::new).transpose()?,
            featured_video: command.featured_video.map(VideoId::new).transpose()?,
            featured_audio: command.featured_audio.map(AudioId::new).transpose()?,
            review: command.review.map(ReviewId::new).transpose()?,
            poll: command.poll.map(PollId::new).transpose()?,
        };

        let created = self.write_repo.insert(new_story).await?;
        tracing::info!(
            story = %created.assignment_slug,
            position = i64::from(created.position),
            "story created"
        );
        Ok(created.into())
    }
}
