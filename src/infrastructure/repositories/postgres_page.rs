// src/infrastructure/repositories/postgres_page.rs
use super::map_sqlx;
use crate::domain::display::TemplateId;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::page::{NewPage, Page, PageId, PageRepository, PageUpdate};
use async_trait::async_trait;
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const PAGE_COLUMNS: &str = "id, parent, title, slug, body, alternate_template";

#[derive(Clone)]
pub struct PostgresPageRepository {
    pool: PgPool,
}

impl PostgresPageRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct PageRow {
    id: i64,
    parent: Option<i64>,
    title: String,
    slug: String,
    body: String,
    alternate_template: Option<i64>,
}

impl TryFrom<PageRow> for Page {
    type Error = DomainError;

    fn try_from(row: PageRow) -> Result<Self, Self::Error> {
        Ok(Page {
            id: PageId::new(row.id)?,
            parent: row.parent.map(PageId::new).transpose()?,
            title: row.title,
            slug: row.slug,
            body: row.body,
            alternate_template: row.alternate_template.map(TemplateId::new).transpose()?,
        })
    }
}

#[async_trait]
impl PageRepository for PostgresPageRepository {
    async fn insert(&self, page: NewPage) -> DomainResult<Page> {
        let sql = format!(
            "INSERT INTO pages (parent, title, slug, body, alternate_template)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {PAGE_COLUMNS}"
        );
        let row = sqlx::query_as::<_, PageRow>(&sql)
            .bind(page.parent.map(i64::from))
            .bind(&page.title)
            .bind(&page.slug)
            .bind(&page.body)
            .bind(page.alternate_template.map(i64::from))
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Page::try_from(row)
    }

    async fn update(&self, update: PageUpdate) -> DomainResult<Page> {
        let PageUpdate {
            id,
            parent,
            title,
            slug,
            body,
            alternate_template,
        } = update;

        let no_changes = parent.is_none()
            && title.is_none()
            && slug.is_none()
            && body.is_none()
            && alternate_template.is_none();
        if no_changes {
            return self
                .find_by_id(id)
                .await?
                .ok_or_else(|| DomainError::NotFound("page not found".into()));
        }

        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("UPDATE pages SET ");
        let mut fields = builder.separated(", ");

        if let Some(parent) = parent {
            fields
                .push("parent = ")
                .push_bind_unseparated(parent.map(i64::from));
        }
        if let Some(title) = title {
            fields.push("title = ").push_bind_unseparated(title);
        }
        if let Some(slug) = slug {
            fields.push("slug = ").push_bind_unseparated(slug);
        }
        if let Some(body) = body {
            fields.push("body = ").push_bind_unseparated(body);
        }
        if let Some(template) = alternate_template {
            fields
                .push("alternate_template = ")
                .push_bind_unseparated(template.map(i64::from));
        }

        builder.push(" WHERE id = ");
        builder.push_bind(i64::from(id));
        builder.push(" RETURNING ");
        builder.push(PAGE_COLUMNS);

        let row = builder
            .build_query_as::<PageRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound("page not found".into()))?;

        Page::try_from(row)
    }

    async fn delete(&self, id: PageId) -> DomainResult<()> {
        // Children re-root through the schema rather than dangling.
        let result = sqlx::query("DELETE FROM pages WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("page not found".into()));
        }
        Ok(())
    }

    async fn find_by_id(&self, id: PageId) -> DomainResult<Option<Page>> {
        let sql = format!("SELECT {PAGE_COLUMNS} FROM pages WHERE id = $1");
        let row = sqlx::query_as::<_, PageRow>(&sql)
            .bind(i64::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Page::try_from).transpose()
    }

    async fn find_by_slug(&self, slug: &str) -> DomainResult<Option<Page>> {
        let sql = format!("SELECT {PAGE_COLUMNS} FROM pages WHERE slug = $1");
        let row = sqlx::query_as::<_, PageRow>(&sql)
            .bind(slug)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Page::try_from).transpose()
    }

    async fn list(&self) -> DomainResult<Vec<Page>> {
        let sql = format!("SELECT {PAGE_COLUMNS} FROM pages ORDER BY id");
        let rows = sqlx::query_as::<_, PageRow>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(Page::try_from).collect()
    }

    async fn list_children(&self, parent: PageId) -> DomainResult<Vec<Page>> {
        let sql = format!("SELECT {PAGE_COLUMNS} FROM pages WHERE parent = $1 ORDER BY id");
        let rows = sqlx::query_as::<_, PageRow>(&sql)
            .bind(i64::from(parent))
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(Page::try_from).collect()
    }
}
