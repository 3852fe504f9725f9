// src/infrastructure/repositories/postgres_author.rs
use super::map_sqlx;
use crate::domain::attachment::ImageId;
use crate::domain::author::{
    Author, AuthorId, AuthorRepository, AuthorUpdate, NewAuthor, TwitterHandle,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::UserId;
use async_trait::async_trait;
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};
use std::collections::HashMap;

const AUTHOR_COLUMNS: &str =
    "id, user_id, first_name, last_name, organization, title, email, twitter, mug, bio";

#[derive(Clone)]
pub struct PostgresAuthorRepository {
    pool: PgPool,
}

impl PostgresAuthorRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct AuthorRow {
    id: i64,
    user_id: Option<i64>,
    first_name: String,
    last_name: String,
    organization: String,
    title: String,
    email: String,
    twitter: Option<String>,
    mug: Option<i64>,
    bio: String,
}

impl TryFrom<AuthorRow> for Author {
    type Error = DomainError;

    fn try_from(row: AuthorRow) -> Result<Self, Self::Error> {
        Ok(Author {
            id: AuthorId::new(row.id)?,
            user_id: row.user_id.map(UserId::new).transpose()?,
            first_name: row.first_name,
            last_name: row.last_name,
            organization: row.organization,
            title: row.title,
            email: row.email,
            twitter: row.twitter.map(TwitterHandle::new).transpose()?,
            mug: row.mug.map(ImageId::new).transpose()?,
            bio: row.bio,
        })
    }
}

#[async_trait]
impl AuthorRepository for PostgresAuthorRepository {
    async fn insert(&self, author: NewAuthor) -> DomainResult<Author> {
        let sql = format!(
            "INSERT INTO authors (user_id, first_name, last_name, organization, title, email, twitter, mug, bio)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING {AUTHOR_COLUMNS}"
        );
        let row = sqlx::query_as::<_, AuthorRow>(&sql)
            .bind(author.user_id.map(i64::from))
            .bind(&author.first_name)
            .bind(&author.last_name)
            .bind(&author.organization)
            .bind(&author.title)
            .bind(&author.email)
            .bind(author.twitter.as_ref().map(TwitterHandle::as_str))
            .bind(author.mug.map(i64::from))
            .bind(&author.bio)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Author::try_from(row)
    }

    async fn update(&self, update: AuthorUpdate) -> DomainResult<Author> {
        let AuthorUpdate {
            id,
            first_name,
            last_name,
            organization,
            title,
            email,
            twitter,
            mug,
            bio,
        } = update;

        let no_changes = first_name.is_none()
            && last_name.is_none()
            && organization.is_none()
            && title.is_none()
            && email.is_none()
            && twitter.is_none()
            && mug.is_none()
            && bio.is_none();
        if no_changes {
            return self
                .find_by_id(id)
                .await?
                .ok_or_else(|| DomainError::NotFound("author not found".into()));
        }

        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("UPDATE authors SET ");
        let mut fields = builder.separated(", ");

        if let Some(first_name) = first_name {
            fields.push("first_name = ").push_bind_unseparated(first_name);
        }
        if let Some(last_name) = last_name {
            fields.push("last_name = ").push_bind_unseparated(last_name);
        }
        if let Some(organization) = organization {
            fields
                .push("organization = ")
                .push_bind_unseparated(organization);
        }
        if let Some(title) = title {
            fields.push("title = ").push_bind_unseparated(title);
        }
        if let Some(email) = email {
            fields.push("email = ").push_bind_unseparated(email);
        }
        if let Some(twitter) = twitter {
            fields
                .push("twitter = ")
                .push_bind_unseparated(twitter.map(String::from));
        }
        if let Some(mug) = mug {
            fields.push("mug = ").push_bind_unseparated(mug.map(i64::from));
        }
        if let Some(bio) = bio {
            fields.push("bio = ").push_bind_unseparated(bio);
        }

        builder.push(" WHERE id = ");
        builder.push_bind(i64::from(id));
        builder.push(" RETURNING ");
        builder.push(AUTHOR_COLUMNS);

        let row = builder
            .build_query_as::<AuthorRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound("author not found".into()))?;

        Author::try_from(row)
    }

    async fn delete(&self, id: AuthorId) -> DomainResult<()> {
        // Byline and credit rows cascade; the stories and media they
        // pointed at are untouched.
        let result = sqlx::query("DELETE FROM authors WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("author not found".into()));
        }
        Ok(())
    }

    async fn find_by_id(&self, id: AuthorId) -> DomainResult<Option<Author>> {
        let sql = format!("SELECT {AUTHOR_COLUMNS} FROM authors WHERE id = $1");
        let row = sqlx::query_as::<_, AuthorRow>(&sql)
            .bind(i64::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Author::try_from).transpose()
    }

    async fn find_many(&self, ids: &[AuthorId]) -> DomainResult<Vec<Author>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let raw: Vec<i64> = ids.iter().copied().map(i64::from).collect();
        let sql = format!("SELECT {AUTHOR_COLUMNS} FROM authors WHERE id = ANY($1)");
        let rows = sqlx::query_as::<_, AuthorRow>(&sql)
            .bind(&raw)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        // Byline order is the caller's order, not the database's.
        let mut by_id: HashMap<i64, Author> = HashMap::with_capacity(rows.len());
        for row in rows {
            by_id.insert(row.id, Author::try_from(row)?);
        }
        Ok(raw.iter().filter_map(|id| by_id.remove(id)).collect())
    }

    async fn list(&self) -> DomainResult<Vec<Author>> {
        let sql = format!("SELECT {AUTHOR_COLUMNS} FROM authors ORDER BY id");
        let rows = sqlx::query_as::<_, AuthorRow>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(Author::try_from).collect()
    }
}
