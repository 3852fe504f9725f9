// src/infrastructure/repositories/postgres_attachment.rs
use super::map_sqlx;
use crate::domain::attachment::{
    AttachmentRepository, Audio, AudioId, Image, ImageId, NewAudio, NewImage, NewPoll, NewReview,
    NewVideo, Poll, PollChoice, PollChoiceId, PollId, Review, ReviewId, Video, VideoId,
};
use crate::domain::author::AuthorId;
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use sqlx::{FromRow, PgPool, Postgres, Transaction};

#[derive(Clone)]
pub struct PostgresAttachmentRepository {
    pool: PgPool,
}

impl PostgresAttachmentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn load_credit(&self, sql: &str, id: i64) -> DomainResult<Vec<AuthorId>> {
        let ids: Vec<i64> = sqlx::query_scalar(sql)
            .bind(id)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;
        ids.into_iter().map(AuthorId::new).collect()
    }
}

async fn write_credit(
    tx: &mut Transaction<'_, Postgres>,
    sql: &str,
    id: i64,
    credit: &[AuthorId],
) -> Result<(), sqlx::Error> {
    for author in credit {
        sqlx::query(sql)
            .bind(id)
            .bind(i64::from(*author))
            .execute(&mut **tx)
            .await?;
    }
    Ok(())
}

#[derive(Debug, FromRow)]
struct ImageRow {
    id: i64,
    title: String,
    file: String,
    caption: String,
}

#[derive(Debug, FromRow)]
struct MediaRow {
    id: i64,
    title: String,
    url: String,
}

#[derive(Debug, FromRow)]
struct PollRow {
    id: i64,
    question: String,
}

#[derive(Debug, FromRow)]
struct PollChoiceRow {
    id: i64,
    poll_id: i64,
    text: String,
}

#[derive(Debug, FromRow)]
struct ReviewRow {
    id: i64,
    item: String,
    rating: Option<i16>,
    body: String,
}

impl TryFrom<PollChoiceRow> for PollChoice {
    type Error = DomainError;

    fn try_from(row: PollChoiceRow) -> Result<Self, Self::Error> {
        Ok(PollChoice {
            id: PollChoiceId::new(row.id)?,
            poll_id: PollId::new(row.poll_id)?,
            text: row.text,
        })
    }
}

impl TryFrom<ReviewRow> for Review {
    type Error = DomainError;

    fn try_from(row: ReviewRow) -> Result<Self, Self::Error> {
        Ok(Review {
            id: ReviewId::new(row.id)?,
            item: row.item,
            rating: row.rating,
            body: row.body,
        })
    }
}

#[async_trait]
impl AttachmentRepository for PostgresAttachmentRepository {
    async fn insert_image(&self, image: NewImage) -> DomainResult<Image> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;
        let row = sqlx::query_as::<_, ImageRow>(
            "INSERT INTO images (title, file, caption) VALUES ($1, $2, $3)
             RETURNING id, title, file, caption",
        )
        .bind(&image.title)
        .bind(&image.file)
        .bind(&image.caption)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_sqlx)?;

        write_credit(
            &mut tx,
            "INSERT INTO image_credits (image_id, author_id) VALUES ($1, $2)",
            row.id,
            &image.credit,
        )
        .await
        .map_err(map_sqlx)?;
        tx.commit().await.map_err(map_sqlx)?;

        Ok(Image {
            id: ImageId::new(row.id)?,
            title: row.title,
            file: row.file,
            caption: row.caption,
            credit: image.credit,
        })
    }

    async fn find_image(&self, id: ImageId) -> DomainResult<Option<Image>> {
        let row = sqlx::query_as::<_, ImageRow>(
            "SELECT id, title, file, caption FROM images WHERE id = $1",
        )
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        let Some(row) = row else {
            return Ok(None);
        };
        let credit = self
            .load_credit(
                "SELECT author_id FROM image_credits WHERE image_id = $1 ORDER BY author_id",
                row.id,
            )
            .await?;
        Ok(Some(Image {
            id: ImageId::new(row.id)?,
            title: row.title,
            file: row.file,
            caption: row.caption,
            credit,
        }))
    }

    async fn delete_image(&self, id: ImageId) -> DomainResult<()> {
        // Story card/featured slots and author mugs drop to NULL through
        // the schema; credit rows cascade.
        let result = sqlx::query("DELETE FROM images WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("image not found".into()));
        }
        Ok(())
    }

    async fn insert_video(&self, video: NewVideo) -> DomainResult<Video> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;
        let row = sqlx::query_as::<_, MediaRow>(
            "INSERT INTO videos (title, url) VALUES ($1, $2) RETURNING id, title, url",
        )
        .bind(&video.title)
        .bind(&video.url)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_sqlx)?;

        write_credit(
            &mut tx,
            "INSERT INTO video_credits (video_id, author_id) VALUES ($1, $2)",
            row.id,
            &video.credit,
        )
        .await
        .map_err(map_sqlx)?;
        tx.commit().await.map_err(map_sqlx)?;

        Ok(Video {
            id: VideoId::new(row.id)?,
            title: row.title,
            url: row.url,
            credit: video.credit,
        })
    }

    async fn find_video(&self, id: VideoId) -> DomainResult<Option<Video>> {
        let row = sqlx::query_as::<_, MediaRow>("SELECT id, title, url FROM videos WHERE id = $1")
            .bind(i64::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let Some(row) = row else {
            return Ok(None);
        };
        let credit = self
            .load_credit(
                "SELECT author_id FROM video_credits WHERE video_id = $1 ORDER BY author_id",
                row.id,
            )
            .await?;
        Ok(Some(Video {
            id: VideoId::new(row.id)?,
            title: row.title,
            url: row.url,
            credit,
        }))
    }

    async fn delete_video(&self, id: VideoId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM videos WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("video not found".into()));
        }
        Ok(())
    }

    async fn insert_audio(&self, audio: NewAudio) -> DomainResult<Audio> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;
        let row = sqlx::query_as::<_, MediaRow>(
            "INSERT INTO audios (title, url) VALUES ($1, $2) RETURNING id, title, url",
        )
        .bind(&audio.title)
        .bind(&audio.url)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_sqlx)?;

        write_credit(
            &mut tx,
            "INSERT INTO audio_credits (audio_id, author_id) VALUES ($1, $2)",
            row.id,
            &audio.credit,
        )
        .await
        .map_err(map_sqlx)?;
        tx.commit().await.map_err(map_sqlx)?;

        Ok(Audio {
            id: AudioId::new(row.id)?,
            title: row.title,
            url: row.url,
            credit: audio.credit,
        })
    }

    async fn find_audio(&self, id: AudioId) -> DomainResult<Option<Audio>> {
        let row = sqlx::query_as::<_, MediaRow>("SELECT id, title, url FROM audios WHERE id = $1")
            .bind(i64::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let Some(row) = row else {
            return Ok(None);
        };
        let credit = self
            .load_credit(
                "SELECT author_id FROM audio_credits WHERE audio_id = $1 ORDER BY author_id",
                row.id,
            )
            .await?;
        Ok(Some(Audio {
            id: AudioId::new(row.id)?,
            title: row.title,
            url: row.url,
            credit,
        }))
    }

    async fn delete_audio(&self, id: AudioId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM audios WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("audio not found".into()));
        }
        Ok(())
    }

    async fn insert_poll(&self, poll: NewPoll) -> DomainResult<Poll> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;
        let row = sqlx::query_as::<_, PollRow>(
            "INSERT INTO polls (question) VALUES ($1) RETURNING id, question",
        )
        .bind(&poll.question)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_sqlx)?;

        let mut choices = Vec::with_capacity(poll.choices.len());
        for choice in &poll.choices {
            let choice_row = sqlx::query_as::<_, PollChoiceRow>(
                "INSERT INTO poll_choices (poll_id, text) VALUES ($1, $2)
                 RETURNING id, poll_id, text",
            )
            .bind(row.id)
            .bind(&choice.text)
            .fetch_one(&mut *tx)
            .await
            .map_err(map_sqlx)?;
            choices.push(PollChoice::try_from(choice_row)?);
        }
        tx.commit().await.map_err(map_sqlx)?;

        Ok(Poll {
            id: PollId::new(row.id)?,
            question: row.question,
            choices,
        })
    }

    async fn find_poll(&self, id: PollId) -> DomainResult<Option<Poll>> {
        let row = sqlx::query_as::<_, PollRow>("SELECT id, question FROM polls WHERE id = $1")
            .bind(i64::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let Some(row) = row else {
            return Ok(None);
        };
        let choice_rows = sqlx::query_as::<_, PollChoiceRow>(
            "SELECT id, poll_id, text FROM poll_choices WHERE poll_id = $1 ORDER BY id",
        )
        .bind(row.id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(Some(Poll {
            id: PollId::new(row.id)?,
            question: row.question,
            choices: choice_rows
                .into_iter()
                .map(PollChoice::try_from)
                .collect::<Result<_, _>>()?,
        }))
    }

    async fn delete_poll(&self, id: PollId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM polls WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("poll not found".into()));
        }
        Ok(())
    }

    async fn insert_review(&self, review: NewReview) -> DomainResult<Review> {
        let row = sqlx::query_as::<_, ReviewRow>(
            "INSERT INTO reviews (item, rating, body) VALUES ($1, $2, $3)
             RETURNING id, item, rating, body",
        )
        .bind(&review.item)
        .bind(review.rating)
        .bind(&review.body)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Review::try_from(row)
    }

    async fn find_review(&self, id: ReviewId) -> DomainResult<Option<Review>> {
        let row = sqlx::query_as::<_, ReviewRow>(
            "SELECT id, item, rating, body FROM reviews WHERE id = $1",
        )
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Review::try_from).transpose()
    }

    async fn delete_review(&self, id: ReviewId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM reviews WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("review not found".into()));
        }
        Ok(())
    }
}
