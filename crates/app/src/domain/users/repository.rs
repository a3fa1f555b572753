//! Users Repository

use async_trait::async_trait;
use mockall::automock;
use sqlx::{FromRow, Postgres, Row, postgres::PgRow, query_as};

use crate::{
    database::Db,
    domain::{
        errors::RepositoryError,
        users::models::{User, UserUuid},
    },
};

const FIND_USER_BY_ID_SQL: &str = include_str!("sql/find_user_by_id.sql");

#[automock]
#[async_trait]
pub trait UsersRepository: Send + Sync {
    /// Find a user by its internal id.
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, RepositoryError>;
}

#[derive(Debug, Clone)]
pub struct PgUsersRepository {
    db: Db,
}

impl PgUsersRepository {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UsersRepository for PgUsersRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, RepositoryError> {
        Ok(query_as::<Postgres, User>(FIND_USER_BY_ID_SQL)
            .bind(id)
            .fetch_optional(self.db.pool())
            .await?)
    }
}

impl<'r> FromRow<'r, PgRow> for User {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: row.try_get("id")?,
            uuid: UserUuid::from_uuid(row.try_get("uuid")?),
            status: row.try_get("status")?,
            block_checkout: row.try_get("block_checkout")?,
        })
    }
}
