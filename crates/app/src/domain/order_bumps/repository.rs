//! Order Bumps Repository

use async_trait::async_trait;
use mockall::automock;
use sqlx::{FromRow, Postgres, Row, postgres::PgRow, query_as};

use crate::{
    database::Db,
    domain::{errors::RepositoryError, order_bumps::models::OrderBump},
};

const FIND_ORDER_BUMPS_BY_OFFER_ID_SQL: &str =
    include_str!("sql/find_order_bumps_by_offer_id.sql");

#[automock]
#[async_trait]
pub trait OrderBumpsRepository: Send + Sync {
    /// All order bumps attached to an offer, in display order.
    async fn find_all_by_offer_id(&self, offer_id: i64)
    -> Result<Vec<OrderBump>, RepositoryError>;
}

#[derive(Debug, Clone)]
pub struct PgOrderBumpsRepository {
    db: Db,
}

impl PgOrderBumpsRepository {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OrderBumpsRepository for PgOrderBumpsRepository {
    async fn find_all_by_offer_id(
        &self,
        offer_id: i64,
    ) -> Result<Vec<OrderBump>, RepositoryError> {
        Ok(
            query_as::<Postgres, OrderBump>(FIND_ORDER_BUMPS_BY_OFFER_ID_SQL)
                .bind(offer_id)
                .fetch_all(self.db.pool())
                .await?,
        )
    }
}

impl<'r> FromRow<'r, PgRow> for OrderBump {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: row.try_get("id")?,
            offer_id: row.try_get("offer_id")?,
            offered_offer_id: row.try_get("offered_offer_id")?,
            name: row.try_get("name")?,
            tag: row.try_get("tag")?,
            description: row.try_get("description")?,
            sort_order: row.try_get("sort_order")?,
        })
    }
}
