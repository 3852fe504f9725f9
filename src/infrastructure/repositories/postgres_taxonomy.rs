// src/infrastructure/repositories/postgres_taxonomy.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::taxonomy::{Section, SectionId, Tag, TagId, TaxonomyRepository};
use async_trait::async_trait;
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresTaxonomyRepository {
    pool: PgPool,
}

impl PostgresTaxonomyRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct TermRow {
    id: i64,
    name: String,
    slug: String,
}

impl TryFrom<TermRow> for Section {
    type Error = DomainError;

    fn try_from(row: TermRow) -> Result<Self, Self::Error> {
        Ok(Section {
            id: SectionId::new(row.id)?,
            name: row.name,
            slug: row.slug,
        })
    }
}

impl TryFrom<TermRow> for Tag {
    type Error = DomainError;

    fn try_from(row: TermRow) -> Result<Self, Self::Error> {
        Ok(Tag {
            id: TagId::new(row.id)?,
            name: row.name,
            slug: row.slug,
        })
    }
}

#[async_trait]
impl TaxonomyRepository for PostgresTaxonomyRepository {
    async fn insert_section(&self, name: &str, slug: &str) -> DomainResult<Section> {
        let row = sqlx::query_as::<_, TermRow>(
            "INSERT INTO sections (name, slug) VALUES ($1, $2) RETURNING id, name, slug",
        )
        .bind(name)
        .bind(slug)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Section::try_from(row)
    }

    async fn insert_tag(&self, name: &str, slug: &str) -> DomainResult<Tag> {
        let row = sqlx::query_as::<_, TermRow>(
            "INSERT INTO tags (name, slug) VALUES ($1, $2) RETURNING id, name, slug",
        )
        .bind(name)
        .bind(slug)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Tag::try_from(row)
    }

    async fn find_sections(&self, ids: &[SectionId]) -> DomainResult<Vec<Section>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let raw: Vec<i64> = ids.iter().copied().map(i64::from).collect();
        let rows = sqlx::query_as::<_, TermRow>(
            "SELECT id, name, slug FROM sections WHERE id = ANY($1) ORDER BY id",
        )
        .bind(&raw)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Section::try_from).collect()
    }

    async fn find_tags(&self, ids: &[TagId]) -> DomainResult<Vec<Tag>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let raw: Vec<i64> = ids.iter().copied().map(i64::from).collect();
        let rows = sqlx::query_as::<_, TermRow>(
            "SELECT id, name, slug FROM tags WHERE id = ANY($1) ORDER BY id",
        )
        .bind(&raw)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Tag::try_from).collect()
    }

    async fn list_sections(&self) -> DomainResult<Vec<Section>> {
        let rows = sqlx::query_as::<_, TermRow>("SELECT id, name, slug FROM sections ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(Section::try_from).collect()
    }

    async fn list_tags(&self) -> DomainResult<Vec<Tag>> {
        let rows = sqlx::query_as::<_, TermRow>("SELECT id, name, slug FROM tags ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(Tag::try_from).collect()
    }
}
