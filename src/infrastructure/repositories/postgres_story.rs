// src/infrastructure/repositories/postgres_story.rs
use super::error::CNT_STORY_POSITION;
use super::map_sqlx;
use crate::domain::attachment::{AudioId, ImageId, PollId, ReviewId, VideoId};
use crate::domain::author::AuthorId;
use crate::domain::display::{CardFocus, CardSize, TemplateId};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::status::StatusId;
use crate::domain::story::{
    AssignmentSlug, BreakingDuration, NewStory, Story, StoryId, StoryPosition,
    StoryReadRepository, StoryUpdate, StoryWriteRepository,
};
use crate::domain::taxonomy::{SectionId, TagId};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder, Transaction};

const STORY_COLUMNS: &str = r#"id, assignment_slug, status_id, title, url_slug, teaser, subhead,
    body, alternate_template, summary, angle, sources, "position", series, card, card_size,
    card_focus, feature_card_image, publish_time, breaking_duration, created, last_updated,
    featured_image, featured_video, featured_audio, review, poll"#;

#[derive(Clone)]
pub struct PostgresStoryWriteRepository {
    pool: PgPool,
}

impl PostgresStoryWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresStoryReadRepository {
    pool: PgPool,
}

impl PostgresStoryReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct StoryRow {
    id: i64,
    assignment_slug: String,
    status_id: i64,
    title: String,
    url_slug: String,
    teaser: String,
    subhead: String,
    body: String,
    alternate_template: Option<i64>,
    summary: String,
    angle: String,
    sources: String,
    position: i64,
    series: bool,
    card: Option<i64>,
    card_size: String,
    card_focus: String,
    feature_card_image: bool,
    publish_time: DateTime<Utc>,
    breaking_duration: i64,
    created: DateTime<Utc>,
    last_updated: DateTime<Utc>,
    featured_image: Option<i64>,
    featured_video: Option<i64>,
    featured_audio: Option<i64>,
    review: Option<i64>,
    poll: Option<i64>,
}

impl StoryRow {
    fn into_story(
        self,
        authors: Vec<AuthorId>,
        sections: Vec<SectionId>,
        tags: Vec<TagId>,
    ) -> DomainResult<Story> {
        Ok(Story {
            id: StoryId::new(self.id)?,
            assignment_slug: AssignmentSlug::new(self.assignment_slug)?,
            status: StatusId::new(self.status_id)?,
            title: self.title,
            url_slug: self.url_slug,
            authors,
            teaser: self.teaser,
            subhead: self.subhead,
            body: self.body,
            alternate_template: self.alternate_template.map(TemplateId::new).transpose()?,
            summary: self.summary,
            angle: self.angle,
            sources: self.sources,
            position: StoryPosition::new(self.position)?,
            sections,
            tags,
            series: self.series,
            card: self.card.map(ImageId::new).transpose()?,
            card_size: CardSize::parse(&self.card_size)?,
            card_focus: CardFocus::parse(&self.card_focus)?,
            feature_card_image: self.feature_card_image,
            publish_time: self.publish_time,
            breaking_duration: BreakingDuration::new(self.breaking_duration)?,
            created: self.created,
            last_updated: self.last_updated,
            featured_image: self.featured_image.map(ImageId::new).transpose()?,
            featured_video: self.featured_video.map(VideoId::new).transpose()?,
            featured_audio: self.featured_audio.map(AudioId::new).transpose()?,
            review: self.review.map(ReviewId::new).transpose()?,
            poll: self.poll.map(PollId::new).transpose()?,
        })
    }
}

async fn write_links(
    tx: &mut Transaction<'_, Postgres>,
    story_id: i64,
    authors: &[AuthorId],
    sections: &[SectionId],
    tags: &[TagId],
) -> Result<(), sqlx::Error> {
    for author in authors {
        sqlx::query("INSERT INTO story_authors (story_id, author_id) VALUES ($1, $2)")
            .bind(story_id)
            .bind(i64::from(*author))
            .execute(&mut **tx)
            .await?;
    }
    for section in sections {
        sqlx::query("INSERT INTO story_sections (story_id, section_id) VALUES ($1, $2)")
            .bind(story_id)
            .bind(i64::from(*section))
            .execute(&mut **tx)
            .await?;
    }
    for tag in tags {
        sqlx::query("INSERT INTO story_tags (story_id, tag_id) VALUES ($1, $2)")
            .bind(story_id)
            .bind(i64::from(*tag))
            .execute(&mut **tx)
            .await?;
    }
    Ok(())
}

async fn load_links(
    pool: &PgPool,
    story_id: i64,
) -> DomainResult<(Vec<AuthorId>, Vec<SectionId>, Vec<TagId>)> {
    let author_ids: Vec<i64> = sqlx::query_scalar(
        "SELECT author_id FROM story_authors WHERE story_id = $1 ORDER BY author_id",
    )
    .bind(story_id)
    .fetch_all(pool)
    .await
    .map_err(map_sqlx)?;

    let section_ids: Vec<i64> = sqlx::query_scalar(
        "SELECT section_id FROM story_sections WHERE story_id = $1 ORDER BY section_id",
    )
    .bind(story_id)
    .fetch_all(pool)
    .await
    .map_err(map_sqlx)?;

    let tag_ids: Vec<i64> =
        sqlx::query_scalar("SELECT tag_id FROM story_tags WHERE story_id = $1 ORDER BY tag_id")
            .bind(story_id)
            .fetch_all(pool)
            .await
            .map_err(map_sqlx)?;

    Ok((
        author_ids
            .into_iter()
            .map(AuthorId::new)
            .collect::<DomainResult<_>>()?,
        section_ids
            .into_iter()
            .map(SectionId::new)
            .collect::<DomainResult<_>>()?,
        tag_ids
            .into_iter()
            .map(TagId::new)
            .collect::<DomainResult<_>>()?,
    ))
}

impl PostgresStoryWriteRepository {
    /// One insert attempt in its own transaction. With no explicit
    /// position the current maximum is read inside the transaction, so a
    /// concurrent insert at the same position surfaces as a unique
    /// violation on commit rather than silently reusing it.
    async fn try_insert(&self, story: &NewStory) -> Result<StoryRow, sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        let position = match story.position {
            Some(position) => i64::from(position),
            None => {
                sqlx::query_scalar::<_, i64>(
                    r#"SELECT COALESCE(MAX("position") + 1, 0) FROM stories"#,
                )
                .fetch_one(&mut *tx)
                .await?
            }
        };

        let sql = format!(
            r#"INSERT INTO stories (assignment_slug, status_id, title, url_slug, teaser, subhead,
                body, alternate_template, summary, angle, sources, "position", series, card,
                card_size, card_focus, feature_card_image, publish_time, breaking_duration,
                created, last_updated, featured_image, featured_video, featured_audio, review, poll)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17,
                $18, $19, $20, $21, $22, $23, $24, $25, $26)
             RETURNING {STORY_COLUMNS}"#
        );

        let row = sqlx::query_as::<_, StoryRow>(&sql)
            .bind(story.assignment_slug.as_str())
            .bind(i64::from(story.status))
            .bind(&story.title)
            .bind(&story.url_slug)
            .bind(&story.teaser)
            .bind(&story.subhead)
            .bind(&story.body)
            .bind(story.alternate_template.map(i64::from))
            .bind(&story.summary)
            .bind(&story.angle)
            .bind(&story.sources)
            .bind(position)
            .bind(story.series)
            .bind(story.card.map(i64::from))
            .bind(story.card_size.as_str())
            .bind(story.card_focus.as_str())
            .bind(story.feature_card_image)
            .bind(story.publish_time)
            .bind(story.breaking_duration.hours())
            .bind(story.created)
            .bind(story.last_updated)
            .bind(story.featured_image.map(i64::from))
            .bind(story.featured_video.map(i64::from))
            .bind(story.featured_audio.map(i64::from))
            .bind(story.review.map(i64::from))
            .bind(story.poll.map(i64::from))
            .fetch_one(&mut *tx)
            .await?;

        write_links(&mut tx, row.id, &story.authors, &story.sections, &story.tags).await?;
        tx.commit().await?;
        Ok(row)
    }
}

#[async_trait]
impl StoryWriteRepository for PostgresStoryWriteRepository {
    async fn insert(&self, story: NewStory) -> DomainResult<Story> {
        const MAX_ATTEMPTS: u32 = 3;
        let assigned = story.position.is_none();

        let mut attempt = 1;
        let row = loop {
            match self.try_insert(&story).await {
                Ok(row) => break row,
                Err(err) => {
                    // Only an assigned position is retried; an explicit
                    // duplicate is the caller's conflict to resolve.
                    let contended = assigned
                        && attempt < MAX_ATTEMPTS
                        && matches!(
                            &err,
                            sqlx::Error::Database(db) if db.constraint() == Some(CNT_STORY_POSITION)
                        );
                    if !contended {
                        return Err(map_sqlx(err));
                    }
                    tracing::warn!(attempt, "story position contention, retrying insert");
                    attempt += 1;
                }
            }
        };

        let NewStory {
            authors,
            sections,
            tags,
            ..
        } = story;
        row.into_story(authors, sections, tags)
    }

    async fn update(&self, update: StoryUpdate) -> DomainResult<Story> {
        let id = i64::from(update.id);
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE stories SET last_updated = ");
        builder.push_bind(update.last_updated);

        if let Some(slug) = update.assignment_slug {
            builder.push(", assignment_slug = ");
            builder.push_bind(String::from(slug));
        }
        if let Some(status) = update.status {
            builder.push(", status_id = ");
            builder.push_bind(i64::from(status));
        }
        if let Some(title) = update.title {
            builder.push(", title = ");
            builder.push_bind(title);
        }
        if let Some(url_slug) = update.url_slug {
            builder.push(", url_slug = ");
            builder.push_bind(url_slug);
        }
        if let Some(teaser) = update.teaser {
            builder.push(", teaser = ");
            builder.push_bind(teaser);
        }
        if let Some(subhead) = update.subhead {
            builder.push(", subhead = ");
            builder.push_bind(subhead);
        }
        if let Some(body) = update.body {
            builder.push(", body = ");
            builder.push_bind(body);
        }
        if let Some(summary) = update.summary {
            builder.push(", summary = ");
            builder.push_bind(summary);
        }
        if let Some(angle) = update.angle {
            builder.push(", angle = ");
            builder.push_bind(angle);
        }
        if let Some(sources) = update.sources {
            builder.push(", sources = ");
            builder.push_bind(sources);
        }
        if let Some(position) = update.position {
            builder.push(r#", "position" = "#);
            builder.push_bind(i64::from(position));
        }
        if let Some(series) = update.series {
            builder.push(", series = ");
            builder.push_bind(series);
        }
        if let Some(card) = update.card {
            builder.push(", card = ");
            builder.push_bind(card.map(i64::from));
        }
        if let Some(card_size) = update.card_size {
            builder.push(", card_size = ");
            builder.push_bind(card_size.as_str());
        }
        if let Some(card_focus) = update.card_focus {
            builder.push(", card_focus = ");
            builder.push_bind(card_focus.as_str());
        }
        if let Some(feature_card_image) = update.feature_card_image {
            builder.push(", feature_card_image = ");
            builder.push_bind(feature_card_image);
        }
        if let Some(publish_time) = update.publish_time {
            builder.push(", publish_time = ");
            builder.push_bind(publish_time);
        }
        if let Some(breaking_duration) = update.breaking_duration {
            builder.push(", breaking_duration = ");
            builder.push_bind(breaking_duration.hours());
        }
        if let Some(featured_image) = update.featured_image {
            builder.push(", featured_image = ");
            builder.push_bind(featured_image.map(i64::from));
        }
        if let Some(featured_video) = update.featured_video {
            builder.push(", featured_video = ");
            builder.push_bind(featured_video.map(i64::from));
        }
        if let Some(featured_audio) = update.featured_audio {
            builder.push(", featured_audio = ");
            builder.push_bind(featured_audio.map(i64::from));
        }
        if let Some(review) = update.review {
            builder.push(", review = ");
            builder.push_bind(review.map(i64::from));
        }
        if let Some(poll) = update.poll {
            builder.push(", poll = ");
            builder.push_bind(poll.map(i64::from));
        }

        builder.push(" WHERE id = ");
        builder.push_bind(id);
        builder.push(" RETURNING ");
        builder.push(STORY_COLUMNS);

        let row = builder
            .build_query_as::<StoryRow>()
            .fetch_optional(&mut *tx)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound("story not found".into()))?;

        if let Some(authors) = &update.authors {
            sqlx::query("DELETE FROM story_authors WHERE story_id = $1")
                .bind(id)
                .execute(&mut *tx)
                .await
                .map_err(map_sqlx)?;
            write_links(&mut tx, id, authors, &[], &[])
                .await
                .map_err(map_sqlx)?;
        }
        if let Some(sections) = &update.sections {
            sqlx::query("DELETE FROM story_sections WHERE story_id = $1")
                .bind(id)
                .execute(&mut *tx)
                .await
                .map_err(map_sqlx)?;
            write_links(&mut tx, id, &[], sections, &[])
                .await
                .map_err(map_sqlx)?;
        }
        if let Some(tags) = &update.tags {
            sqlx::query("DELETE FROM story_tags WHERE story_id = $1")
                .bind(id)
                .execute(&mut *tx)
                .await
                .map_err(map_sqlx)?;
            write_links(&mut tx, id, &[], &[], tags)
                .await
                .map_err(map_sqlx)?;
        }

        tx.commit().await.map_err(map_sqlx)?;

        let (authors, sections, tags) = load_links(&self.pool, id).await?;
        row.into_story(authors, sections, tags)
    }

    async fn delete(&self, id: StoryId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM stories WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("story not found".into()));
        }
        Ok(())
    }
}

impl PostgresStoryReadRepository {
    async fn hydrate(&self, row: StoryRow) -> DomainResult<Story> {
        let (authors, sections, tags) = load_links(&self.pool, row.id).await?;
        row.into_story(authors, sections, tags)
    }

    async fn hydrate_all(&self, rows: Vec<StoryRow>) -> DomainResult<Vec<Story>> {
        let mut stories = Vec::with_capacity(rows.len());
        for row in rows {
            stories.push(self.hydrate(row).await?);
        }
        Ok(stories)
    }
}

#[async_trait]
impl StoryReadRepository for PostgresStoryReadRepository {
    async fn find_by_id(&self, id: StoryId) -> DomainResult<Option<Story>> {
        let sql = format!("SELECT {STORY_COLUMNS} FROM stories WHERE id = $1");
        let row = sqlx::query_as::<_, StoryRow>(&sql)
            .bind(i64::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        match row {
            Some(row) => Ok(Some(self.hydrate(row).await?)),
            None => Ok(None),
        }
    }

    async fn find_by_url_slug(&self, url_slug: &str) -> DomainResult<Option<Story>> {
        let sql =
            format!("SELECT {STORY_COLUMNS} FROM stories WHERE url_slug = $1 ORDER BY id LIMIT 1");
        let row = sqlx::query_as::<_, StoryRow>(&sql)
            .bind(url_slug)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        match row {
            Some(row) => Ok(Some(self.hydrate(row).await?)),
            None => Ok(None),
        }
    }

    async fn list(&self) -> DomainResult<Vec<Story>> {
        let sql = format!(r#"SELECT {STORY_COLUMNS} FROM stories ORDER BY "position" DESC"#);
        let rows = sqlx::query_as::<_, StoryRow>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;
        self.hydrate_all(rows).await
    }

    async fn list_published(
        &self,
        published: StatusId,
        now: DateTime<Utc>,
    ) -> DomainResult<Vec<Story>> {
        let sql = format!(
            r#"SELECT {STORY_COLUMNS} FROM stories
               WHERE status_id = $1 AND publish_time < $2
               ORDER BY "position" DESC"#
        );
        let rows = sqlx::query_as::<_, StoryRow>(&sql)
            .bind(i64::from(published))
            .bind(now)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;
        self.hydrate_all(rows).await
    }
}
