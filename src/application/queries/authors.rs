// src/application/queries/authors.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::AuthorDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        author::{Author, AuthorId, AuthorRepository},
        user::UserRepository,
    },
};

pub struct AuthorQueryService {
    repo: Arc<dyn AuthorRepository>,
    user_repo: Arc<dyn UserRepository>,
}

impl AuthorQueryService {
    pub fn new(repo: Arc<dyn AuthorRepository>, user_repo: Arc<dyn UserRepository>) -> Self {
        Self { repo, user_repo }
    }

    pub async fn get_author(&self, id: i64) -> ApplicationResult<AuthorDto> {
        let id = AuthorId::new(id)?;
        let author = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("author not found"))?;
        self.expand(author).await
    }

    pub async fn list_authors(&self) -> ApplicationResult<Vec<AuthorDto>> {
        let authors = self.repo.list().await?;
        let mut expanded = Vec::with_capacity(authors.len());
        for author in authors {
            expanded.push(self.expand(author).await?);
        }
        Ok(expanded)
    }

    async fn expand(&self, author: Author) -> ApplicationResult<AuthorDto> {
        let user = match author.user_id {
            Some(user_id) => self.user_repo.find_by_id(user_id).await?,
            None => None,
        };
        Ok(AuthorDto::from_parts(author, user))
    }
}
