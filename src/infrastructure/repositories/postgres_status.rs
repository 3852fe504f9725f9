// src/infrastructure/repositories/postgres_status.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::status::{NewStatus, Status, StatusId, StatusRepository};
use async_trait::async_trait;
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresStatusRepository {
    pool: PgPool,
}

impl PostgresStatusRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct StatusRow {
    id: i64,
    name: String,
    position: i16,
}

impl TryFrom<StatusRow> for Status {
    type Error = DomainError;

    fn try_from(row: StatusRow) -> Result<Self, Self::Error> {
        Ok(Status {
            id: StatusId::new(row.id)?,
            name: row.name,
            position: row.position,
        })
    }
}

#[async_trait]
impl StatusRepository for PostgresStatusRepository {
    async fn insert(&self, status: NewStatus) -> DomainResult<Status> {
        let row = sqlx::query_as::<_, StatusRow>(
            "INSERT INTO statuses (name, position) VALUES ($1, $2)
             RETURNING id, name, position",
        )
        .bind(&status.name)
        .bind(status.position)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Status::try_from(row)
    }

    async fn delete(&self, id: StatusId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM statuses WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(|err| match &err {
                // The stories FK has no delete action on purpose: a status
                // in use cannot be removed.
                sqlx::Error::Database(db) if db.code().as_deref() == Some("23503") => {
                    DomainError::Conflict("status is still referenced by stories".into())
                }
                _ => map_sqlx(err),
            })?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("status not found".into()));
        }
        Ok(())
    }

    async fn find_by_id(&self, id: StatusId) -> DomainResult<Option<Status>> {
        let row =
            sqlx::query_as::<_, StatusRow>("SELECT id, name, position FROM statuses WHERE id = $1")
                .bind(i64::from(id))
                .fetch_optional(&self.pool)
                .await
                .map_err(map_sqlx)?;

        row.map(Status::try_from).transpose()
    }

    async fn find_by_name(&self, name: &str) -> DomainResult<Option<Status>> {
        let row = sqlx::query_as::<_, StatusRow>(
            "SELECT id, name, position FROM statuses WHERE name = $1",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Status::try_from).transpose()
    }

    async fn list(&self) -> DomainResult<Vec<Status>> {
        let rows = sqlx::query_as::<_, StatusRow>(
            "SELECT id, name, position FROM statuses ORDER BY position",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Status::try_from).collect()
    }
}
