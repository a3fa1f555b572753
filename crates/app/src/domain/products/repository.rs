//! Products Repository

use async_trait::async_trait;
use mockall::automock;
use sqlx::{FromRow, Postgres, Row, postgres::PgRow, query_as};

use crate::{
    database::Db,
    domain::{
        errors::RepositoryError,
        products::models::{Product, ProductUuid},
    },
};

const FIND_PRODUCT_BY_ID_SQL: &str = include_str!("sql/find_product_by_id.sql");

#[automock]
#[async_trait]
pub trait ProductsRepository: Send + Sync {
    /// Find a product by its internal id.
    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, RepositoryError>;
}

#[derive(Debug, Clone)]
pub struct PgProductsRepository {
    db: Db,
}

impl PgProductsRepository {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductsRepository for PgProductsRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, RepositoryError> {
        Ok(query_as::<Postgres, Product>(FIND_PRODUCT_BY_ID_SQL)
            .bind(id)
            .fetch_optional(self.db.pool())
            .await?)
    }
}

impl<'r> FromRow<'r, PgRow> for Product {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: row.try_get("id")?,
            uuid: ProductUuid::from_uuid(row.try_get("uuid")?),
            name: row.try_get("name")?,
            user_id: row.try_get("user_id")?,
            company_id: row.try_get("company_id")?,
            format_id: row.try_get("format_id")?,
            status: row.try_get("status")?,
            evaluation_status: row.try_get("evaluation_status")?,
            currency: row.try_get("currency")?,
            photo_url: row.try_get("photo_url")?,
            seller_name: row.try_get("seller_name")?,
        })
    }
}
