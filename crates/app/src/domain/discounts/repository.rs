//! Discounts Repository

use async_trait::async_trait;
use mockall::automock;
use sqlx::query_scalar;

use crate::{database::Db, domain::errors::RepositoryError};

const HAS_DISCOUNTS_FOR_PRODUCT_ID_SQL: &str =
    include_str!("sql/has_discounts_for_product_id.sql");

#[automock]
#[async_trait]
pub trait DiscountsRepository: Send + Sync {
    /// Whether any discount coupon exists for the product.
    async fn has_any_for_product_id(&self, product_id: i64) -> Result<bool, RepositoryError>;
}

#[derive(Debug, Clone)]
pub struct PgDiscountsRepository {
    db: Db,
}

impl PgDiscountsRepository {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self { db }
    }
}

#[async_trait]
impl DiscountsRepository for PgDiscountsRepository {
    async fn has_any_for_product_id(&self, product_id: i64) -> Result<bool, RepositoryError> {
        Ok(query_scalar::<_, bool>(HAS_DISCOUNTS_FOR_PRODUCT_ID_SQL)
            .bind(product_id)
            .fetch_one(self.db.pool())
            .await?)
    }
}
