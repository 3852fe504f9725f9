// src/application/queries/stories/assemble.rs
//
// Builds the nested story representation: every direct relationship
// expanded one level, media credits reaching two through their authors'
// user identities. Structural nesting only.
use super::StoryQueryService;
use crate::{
    application::{
        dto::{AudioDto, AuthorDto, ImageDto, StoryDto, VideoDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        attachment::{AudioId, ImageId, VideoId},
        author::{Author, AuthorId},
        story::Story,
    },
};

impl StoryQueryService {
    pub(super) async fn assemble(&self, story: Story) -> ApplicationResult<StoryDto> {
        let status = self
            .status_repo
            .find_by_id(story.status)
            .await?
            .ok_or_else(|| ApplicationError::not_found("story status not found"))?;

        let authors = self.expand_authors(&story.authors).await?;
        let sections = self
            .taxonomy_repo
            .find_sections(&story.sections)
            .await?
            .into_iter()
            .map(Into::into)
            .collect();
        let tags = self
            .taxonomy_repo
            .find_tags(&story.tags)
            .await?
            .into_iter()
            .map(Into::into)
            .collect();

        let card = self.fetch_image(story.card).await?;
        // The featured slot carries the resolved image: the card when the
        // editor flagged it, the dedicated featured image otherwise.
        let featured_image = self.fetch_image(story.resolved_featured_image()).await?;
        let featured_video = self.fetch_video(story.featured_video).await?;
        let featured_audio = self.fetch_audio(story.featured_audio).await?;

        let review = match story.review {
            Some(id) => self.attachment_repo.find_review(id).await?.map(Into::into),
            None => None,
        };
        let poll = match story.poll {
            Some(id) => self.attachment_repo.find_poll(id).await?.map(Into::into),
            None => None,
        };

        let now = self.clock.now();
        let is_published = story.is_published(self.workflow.published(), now);
        let in_window = story.is_breaking(now);
        let is_breaking = if self.breaking_requires_published {
            is_published && in_window
        } else {
            in_window
        };
        let path = story.path();

        Ok(StoryDto {
            id: story.id.into(),
            assignment_slug: story.assignment_slug.into(),
            status: status.into(),
            title: story.title,
            url_slug: story.url_slug,
            authors,
            teaser: story.teaser,
            subhead: story.subhead,
            body: story.body,
            alternate_template: story.alternate_template.map(Into::into),
            summary: story.summary,
            angle: story.angle,
            sources: story.sources,
            position: story.position.into(),
            sections,
            tags,
            series: story.series,
            card,
            card_size: story.card_size.as_str().to_string(),
            card_focus: story.card_focus.as_str().to_string(),
            feature_card_image: story.feature_card_image,
            publish_time: story.publish_time,
            breaking_duration: story.breaking_duration.hours(),
            created: story.created,
            last_updated: story.last_updated,
            featured_image,
            featured_video,
            featured_audio,
            review,
            poll,
            path,
            is_published,
            is_breaking,
        })
    }

    pub(super) async fn assemble_all(
        &self,
        stories: Vec<Story>,
    ) -> ApplicationResult<Vec<StoryDto>> {
        let mut assembled = Vec::with_capacity(stories.len());
        for story in stories {
            assembled.push(self.assemble(story).await?);
        }
        Ok(assembled)
    }

    async fn expand_authors(&self, ids: &[AuthorId]) -> ApplicationResult<Vec<AuthorDto>> {
        let authors = self.author_repo.find_many(ids).await?;
        let mut expanded = Vec::with_capacity(authors.len());
        for author in authors {
            expanded.push(self.expand_author(author).await?);
        }
        Ok(expanded)
    }

    async fn expand_author(&self, author: Author) -> ApplicationResult<AuthorDto> {
        let user = match author.user_id {
            Some(user_id) => self.user_repo.find_by_id(user_id).await?,
            None => None,
        };
        Ok(AuthorDto::from_parts(author, user))
    }

    async fn fetch_image(&self, id: Option<ImageId>) -> ApplicationResult<Option<ImageDto>> {
        let Some(id) = id else { return Ok(None) };
        let Some(image) = self.attachment_repo.find_image(id).await? else {
            return Ok(None);
        };
        let credit = self.expand_authors(&image.credit).await?;
        Ok(Some(ImageDto::from_parts(image, credit)))
    }

    async fn fetch_video(&self, id: Option<VideoId>) -> ApplicationResult<Option<VideoDto>> {
        let Some(id) = id else { return Ok(None) };
        let Some(video) = self.attachment_repo.find_video(id).await? else {
            return Ok(None);
        };
        let credit = self.expand_authors(&video.credit).await?;
        Ok(Some(VideoDto::from_parts(video, credit)))
    }

    async fn fetch_audio(&self, id: Option<AudioId>) -> ApplicationResult<Option<AudioDto>> {
        let Some(id) = id else { return Ok(None) };
        let Some(audio) = self.attachment_repo.find_audio(id).await? else {
            return Ok(None);
        };
        let credit = self.expand_authors(&audio.credit).await?;
        Ok(Some(AudioDto::from_parts(audio, credit)))
    }
}
