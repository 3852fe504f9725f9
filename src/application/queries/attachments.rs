// src/application/queries/attachments.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::{AudioDto, AuthorDto, ImageDto, PollDto, ReviewDto, VideoDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        attachment::{AttachmentRepository, AudioId, ImageId, PollId, ReviewId, VideoId},
        author::{AuthorId, AuthorRepository},
        user::UserRepository,
    },
};

pub struct AttachmentQueryService {
    repo: Arc<dyn AttachmentRepository>,
    author_repo: Arc<dyn AuthorRepository>,
    user_repo: Arc<dyn UserRepository>,
}

impl AttachmentQueryService {
    pub fn new(
        repo: Arc<dyn AttachmentRepository>,
        author_repo: Arc<dyn AuthorRepository>,
        user_repo: Arc<dyn UserRepository>,
    ) -> Self {
        Self {
            repo,
            author_repo,
            user_repo,
        }
    }

    pub async fn get_image(&self, id: i64) -> ApplicationResult<ImageDto> {
        let image = self
            .repo
            .find_image(ImageId::new(id)?)
            .await?
            .ok_or_else(|| ApplicationError::not_found("image not found"))?;
        let credit = self.expand_credit(&image.credit).await?;
        Ok(ImageDto::from_parts(image, credit))
    }

    pub async fn get_video(&self, id: i64) -> ApplicationResult<VideoDto> {
        let video = self
            .repo
            .find_video(VideoId::new(id)?)
            .await?
            .ok_or_else(|| ApplicationError::not_found("video not found"))?;
        let credit = self.expand_credit(&video.credit).await?;
        Ok(VideoDto::from_parts(video, credit))
    }

    pub async fn get_audio(&self, id: i64) -> ApplicationResult<AudioDto> {
        let audio = self
            .repo
            .find_audio(AudioId::new(id)?)
            .await?
            .ok_or_else(|| ApplicationError::not_found("audio not found"))?;
        let credit = self.expand_credit(&audio.credit).await?;
        Ok(AudioDto::from_parts(audio, credit))
    }

    pub async fn get_poll(&self, id: i64) -> ApplicationResult<PollDto> {
        let poll = self
            .repo
            .find_poll(PollId::new(id)?)
            .await?
            .ok_or_else(|| ApplicationError::not_found("poll not found"))?;
        Ok(poll.into())
    }

    pub async fn get_review(&self, id: i64) -> ApplicationResult<ReviewDto> {
        let review = self
            .repo
            .find_review(ReviewId::new(id)?)
            .await?
            .ok_or_else(|| ApplicationError::not_found("review not found"))?;
        Ok(review.into())
    }

    async fn expand_credit(&self, ids: &[AuthorId]) -> ApplicationResult<Vec<AuthorDto>> {
        let authors = self.author_repo.find_many(ids).await?;
        let mut expanded = Vec::with_capacity(authors.len());
        for author in authors {
            let user = match author.user_id {
                Some(user_id) => self.user_repo.find_by_id(user_id).await?,
                None => None,
            };
            expanded.push(AuthorDto::from_parts(author, user));
        }
        Ok(expanded)
    }
}
