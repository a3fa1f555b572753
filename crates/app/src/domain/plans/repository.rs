//! Plans Repository

use async_trait::async_trait;
use mockall::automock;
use sqlx::{FromRow, Postgres, Row, postgres::PgRow, query_as};

use crate::{
    database::Db,
    domain::{
        errors::RepositoryError,
        plans::models::{Plan, PlanUuid},
    },
};

const FIND_PLANS_BY_OFFER_ID_SQL: &str = include_str!("sql/find_plans_by_offer_id.sql");

#[automock]
#[async_trait]
pub trait PlansRepository: Send + Sync {
    /// Plans of a subscription offer.
    async fn find_by_offer_id(&self, offer_id: i64) -> Result<Vec<Plan>, RepositoryError>;
}

#[derive(Debug, Clone)]
pub struct PgPlansRepository {
    db: Db,
}

impl PgPlansRepository {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PlansRepository for PgPlansRepository {
    async fn find_by_offer_id(&self, offer_id: i64) -> Result<Vec<Plan>, RepositoryError> {
        Ok(query_as::<Postgres, Plan>(FIND_PLANS_BY_OFFER_ID_SQL)
            .bind(offer_id)
            .fetch_all(self.db.pool())
            .await?)
    }
}

impl<'r> FromRow<'r, PgRow> for Plan {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: row.try_get("id")?,
            uuid: PlanUuid::from_uuid(row.try_get("uuid")?),
            offer_id: row.try_get("offer_id")?,
            title: row.try_get("title")?,
            tag: row.try_get("tag")?,
            price: row.try_get("price")?,
            promotional_price: row.try_get("promotional_price")?,
            first_charge_price_enabled: row.try_get("first_charge_price_enabled")?,
            first_charge_price: row.try_get("first_charge_price")?,
            charge_frequency: row.try_get("charge_frequency")?,
            is_default: row.try_get("is_default")?,
        })
    }
}
