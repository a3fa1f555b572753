//! Affiliates Repository

use async_trait::async_trait;
use mockall::automock;
use sqlx::{FromRow, Postgres, Row, postgres::PgRow, query_as};

use crate::{
    database::Db,
    domain::{
        affiliates::models::{Affiliate, AffiliateUuid},
        errors::RepositoryError,
    },
};

const FIND_AFFILIATE_BY_UUID_SQL: &str = include_str!("../sql/find_affiliate_by_uuid.sql");

#[automock]
#[async_trait]
pub trait AffiliatesRepository: Send + Sync {
    /// Find an affiliate by its public UUID.
    async fn find_by_uuid(&self, uuid: AffiliateUuid)
    -> Result<Option<Affiliate>, RepositoryError>;
}

#[derive(Debug, Clone)]
pub struct PgAffiliatesRepository {
    db: Db,
}

impl PgAffiliatesRepository {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AffiliatesRepository for PgAffiliatesRepository {
    async fn find_by_uuid(
        &self,
        uuid: AffiliateUuid,
    ) -> Result<Option<Affiliate>, RepositoryError> {
        Ok(query_as::<Postgres, Affiliate>(FIND_AFFILIATE_BY_UUID_SQL)
            .bind(uuid.into_uuid())
            .fetch_optional(self.db.pool())
            .await?)
    }
}

impl<'r> FromRow<'r, PgRow> for Affiliate {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: row.try_get("id")?,
            uuid: AffiliateUuid::from_uuid(row.try_get("uuid")?),
            user_id: row.try_get("user_id")?,
        })
    }
}
