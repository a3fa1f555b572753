//! Formats Repository

use async_trait::async_trait;
use mockall::automock;
use sqlx::{FromRow, Postgres, Row, postgres::PgRow, query_as};

use crate::{
    database::Db,
    domain::{errors::RepositoryError, formats::models::Format},
};

const FIND_FORMAT_BY_ID_SQL: &str = include_str!("sql/find_format_by_id.sql");

#[automock]
#[async_trait]
pub trait FormatsRepository: Send + Sync {
    /// Find a format by its internal id.
    async fn find_by_id(&self, id: i64) -> Result<Option<Format>, RepositoryError>;
}

#[derive(Debug, Clone)]
pub struct PgFormatsRepository {
    db: Db,
}

impl PgFormatsRepository {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self { db }
    }
}

#[async_trait]
impl FormatsRepository for PgFormatsRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Format>, RepositoryError> {
        Ok(query_as::<Postgres, Format>(FIND_FORMAT_BY_ID_SQL)
            .bind(id)
            .fetch_optional(self.db.pool())
            .await?)
    }
}

impl<'r> FromRow<'r, PgRow> for Format {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: row.try_get("id")?,
            slug: row.try_get("slug")?,
        })
    }
}
