// src/application/commands/authors.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::AuthorDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        attachment::ImageId,
        author::{AuthorId, AuthorRepository, AuthorUpdate, NewAuthor, TwitterHandle},
        user::{UserId, UserRepository},
    },
};

#[derive(Debug, Clone, Default)]
pub struct CreateAuthorCommand {
    pub user: Option<i64>,
    pub first_name: String,
    pub last_name: String,
    /// Empty falls back to the configured default organization.
    pub organization: String,
    pub title: String,
    pub email: String,
    pub twitter: Option<String>,
    pub mug: Option<i64>,
    pub bio: String,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateAuthorCommand {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub organization: Option<String>,
    pub title: Option<String>,
    pub email: Option<String>,
    pub twitter: Option<Option<String>>,
    pub mug: Option<Option<i64>>,
    pub bio: Option<String>,
}

pub struct AuthorCommandService {
    repo: Arc<dyn AuthorRepository>,
    user_repo: Arc<dyn UserRepository>,
    default_organization: String,
}

impl AuthorCommandService {
    pub fn new(
        repo: Arc<dyn AuthorRepository>,
        user_repo: Arc<dyn UserRepository>,
        default_organization: impl Into<String>,
    ) -> Self {
        Self {
            repo,
            user_repo,
            default_organization: default_organization.into(),
        }
    }

    pub async fn create_author(&self, command: CreateAuthorCommand) -> ApplicationResult<AuthorDto> {
        let user_id = match command.user {
            Some(id) => {
                let id = UserId::new(id)?;
                self.user_repo
                    .find_by_id(id)
                    .await?
                    .ok_or_else(|| ApplicationError::not_found("user not found"))?;
                Some(id)
            }
            None => None,
        };

        let organization = if command.organization.is_empty() {
            self.default_organization.clone()
        } else {
            command.organization
        };

        let new_author = NewAuthor {
            user_id,
            first_name: command.first_name,
            last_name: command.last_name,
            organization,
            title: command.title,
            email: command.email,
            twitter: command.twitter.map(TwitterHandle::new).transpose()?,
            mug: command.mug.map(ImageId::new).transpose()?,
            bio: command.bio,
        };

        let author = self.repo.insert(new_author).await?;
        tracing::info!(author = %author.display_name(), "author created");
        self.present(author).await
    }

    pub async fn update_author(
        &self,
        id: i64,
        command: UpdateAuthorCommand,
    ) -> ApplicationResult<AuthorDto> {
        let id = AuthorId::new(id)?;
        let mut update = AuthorUpdate::new(id);

        if let Some(first_name) = command.first_name {
            update = update.with_first_name(first_name);
        }
        if let Some(last_name) = command.last_name {
            update = update.with_last_name(last_name);
        }
        if let Some(organization) = command.organization {
            update = update.with_organization(organization);
        }
        if let Some(title) = command.title {
            update = update.with_title(title);
        }
        if let Some(email) = command.email {
            update = update.with_email(email);
        }
        if let Some(twitter) = command.twitter {
            update = update.with_twitter(twitter.map(TwitterHandle::new).transpose()?);
        }
        if let Some(mug) = command.mug {
            update = update.with_mug(mug.map(ImageId::new).transpose()?);
        }
        if let Some(bio) = command.bio {
            update = update.with_bio(bio);
        }

        let author = self.repo.update(update).await?;
        self.present(author).await
    }

    /// Removes the byline. Stories and media that credited it stay in
    /// place with the reference detached by the store.
    pub async fn delete_author(&self, id: i64) -> ApplicationResult<()> {
        let id = AuthorId::new(id)?;
        self.repo.delete(id).await?;
        tracing::info!(author_id = i64::from(id), "author deleted");
        Ok(())
    }

    async fn present(
        &self,
        author: crate::domain::author::Author,
    ) -> ApplicationResult<AuthorDto> {
        let user = match author.user_id {
            Some(user_id) => self.user_repo.find_by_id(user_id).await?,
            None => None,
        };
        Ok(AuthorDto::from_parts(author, user))
    }
}
