// src/application/commands/attachments.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::{AudioDto, AuthorDto, ImageDto, PollDto, ReviewDto, VideoDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        attachment::{
            AttachmentRepository, AudioId, ImageId, NewAudio, NewImage, NewPoll, NewPollChoice,
            NewReview, NewVideo, PollId, ReviewId, VideoId,
        },
        author::{Author, AuthorId, AuthorRepository},
        user::UserRepository,
    },
};

#[derive(Debug, Clone, Default)]
pub struct CreateImageCommand {
    pub title: String,
    pub file: String,
    pub caption: String,
    pub credit: Vec<i64>,
}

#[derive(Debug, Clone, Default)]
pub struct CreateVideoCommand {
    pub title: String,
    pub url: String,
    pub credit: Vec<i64>,
}

#[derive(Debug, Clone, Default)]
pub struct CreateAudioCommand {
    pub title: String,
    pub url: String,
    pub credit: Vec<i64>,
}

#[derive(Debug, Clone, Default)]
pub struct CreatePollCommand {
    pub question: String,
    pub choices: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct CreateReviewCommand {
    pub item: String,
    pub rating: Option<i16>,
    pub body: String,
}

pub struct AttachmentCommandService {
    repo: Arc<dyn AttachmentRepository>,
    author_repo: Arc<dyn AuthorRepository>,
    user_repo: Arc<dyn UserRepository>,
}

impl AttachmentCommandService {
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

    pub async fn create_image(&self, command: CreateImageCommand) -> ApplicationResult<ImageDto> {
        let credit = self.resolve_credit(command.credit).await?;
        let image = self
            .repo
            .insert_image(NewImage {
                title: command.title,
                file: command.file,
                caption: command.caption,
                credit: credit.iter().map(|author| author.id).collect(),
            })
            .await?;
        let credit = self.expand_credit(credit).await?;
        Ok(ImageDto::from_parts(image, credit))
    }

    pub async fn create_video(&self, command: CreateVideoCommand) -> ApplicationResult<VideoDto> {
        let credit = self.resolve_credit(command.credit).await?;
        let video = self
            .repo
            .insert_video(NewVideo {
                title: command.title,
                url: command.url,
                credit: credit.iter().map(|author| author.id).collect(),
            })
            .await?;
        let credit = self.expand_credit(credit).await?;
        Ok(VideoDto::from_parts(video, credit))
    }

    pub async fn create_audio(&self, command: CreateAudioCommand) -> ApplicationResult<AudioDto> {
        let credit = self.resolve_credit(command.credit).await?;
        let audio = self
            .repo
            .insert_audio(NewAudio {
                title: command.title,
                url: command.url,
                credit: credit.iter().map(|author| author.id).collect(),
            })
            .await?;
        let credit = self.expand_credit(credit).await?;
        Ok(AudioDto::from_parts(audio, credit))
    }

    pub async fn create_poll(&self, command: CreatePollCommand) -> ApplicationResult<PollDto> {
        if command.question.trim().is_empty() {
            return Err(ApplicationError::validation("poll question cannot be empty"));
        }
        let choices = command
            .choices
            .into_iter()
            .map(|text| NewPollChoice { text })
            .collect();
        let poll = self
            .repo
            .insert_poll(NewPoll {
                question: command.question,
                choices,
            })
            .await?;
        Ok(poll.into())
    }

    pub async fn create_review(&self, command: CreateReviewCommand) -> ApplicationResult<ReviewDto> {
        let review = self
            .repo
            .insert_review(NewReview {
                item: command.item,
                rating: command.rating,
                body: command.body,
            })
            .await?;
        Ok(review.into())
    }

    pub async fn delete_image(&self, id: i64) -> ApplicationResult<()> {
        Ok(self.repo.delete_image(ImageId::new(id)?).await?)
    }

    pub async fn delete_video(&self, id: i64) -> ApplicationResult<()> {
        Ok(self.repo.delete_video(VideoId::new(id)?).await?)
    }

    pub async fn delete_audio(&self, id: i64) -> ApplicationResult<()> {
        Ok(self.repo.delete_audio(AudioId::new(id)?).await?)
    }

    pub async fn delete_poll(&self, id: i64) -> ApplicationResult<()> {
        Ok(self.repo.delete_poll(PollId::new(id)?).await?)
    }

    pub async fn delete_review(&self, id: i64) -> ApplicationResult<()> {
        Ok(self.repo.delete_review(ReviewId::new(id)?).await?)
    }

    /// Every credited author must exist before the media row is written.
    async fn resolve_credit(&self, credit: Vec<i64>) -> ApplicationResult<Vec<Author>> {
        let ids = credit
            .into_iter()
            .map(AuthorId::new)
            .collect::<Result<Vec<_>, _>>()?;
        let authors = self.author_repo.find_many(&ids).await?;
        if authors.len() != ids.len() {
            return Err(ApplicationError::not_found("credited author not found"));
        }
        Ok(authors)
    }

    async fn expand_credit(&self, authors: Vec<Author>) -> ApplicationResult<Vec<AuthorDto>> {
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
