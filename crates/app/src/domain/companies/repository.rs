//! Companies Repository

use async_trait::async_trait;
use mockall::automock;
use sqlx::{FromRow, Postgres, Row, postgres::PgRow, query_as};

use crate::{
    database::Db,
    domain::{companies::models::Company, errors::RepositoryError},
};

const FIND_COMPANY_BY_ID_SQL: &str = include_str!("sql/find_company_by_id.sql");

#[automock]
#[async_trait]
pub trait CompaniesRepository: Send + Sync {
    /// Find a company by its internal id.
    async fn find_by_id(&self, id: i64) -> Result<Option<Company>, RepositoryError>;
}

#[derive(Debug, Clone)]
pub struct PgCompaniesRepository {
    db: Db,
}

impl PgCompaniesRepository {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CompaniesRepository for PgCompaniesRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Company>, RepositoryError> {
        Ok(query_as::<Postgres, Company>(FIND_COMPANY_BY_ID_SQL)
            .bind(id)
            .fetch_optional(self.db.pool())
            .await?)
    }
}

impl<'r> FromRow<'r, PgRow> for Company {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: row.try_get("id")?,
            company_type: row.try_get("company_type")?,
            movingpay_ec_id: row.try_get("movingpay_ec_id")?,
        })
    }
}
