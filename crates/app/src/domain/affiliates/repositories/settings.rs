//! Product Affiliate Settings Repository

use async_trait::async_trait;
use mockall::automock;
use sqlx::{FromRow, Postgres, Row, postgres::PgRow, query_as};
use uuid::Uuid;

use crate::{
    database::Db,
    domain::{
        affiliates::models::ProductAffiliateSettings, errors::RepositoryError,
        offers::models::OfferUuid,
    },
};

const FIND_SETTINGS_BY_PRODUCT_ID_SQL: &str =
    include_str!("../sql/find_product_affiliate_settings_by_product_id.sql");

#[automock]
#[async_trait]
pub trait ProductAffiliateSettingsRepository: Send + Sync {
    /// Find the affiliation settings for a product.
    async fn find_by_product_id(
        &self,
        product_id: i64,
    ) -> Result<Option<ProductAffiliateSettings>, RepositoryError>;
}

#[derive(Debug, Clone)]
pub struct PgProductAffiliateSettingsRepository {
    db: Db,
}

impl PgProductAffiliateSettingsRepository {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductAffiliateSettingsRepository for PgProductAffiliateSettingsRepository {
    async fn find_by_product_id(
        &self,
        product_id: i64,
    ) -> Result<Option<ProductAffiliateSettings>, RepositoryError> {
        Ok(
            query_as::<Postgres, ProductAffiliateSettings>(FIND_SETTINGS_BY_PRODUCT_ID_SQL)
                .bind(product_id)
                .fetch_optional(self.db.pool())
                .await?,
        )
    }
}

impl<'r> FromRow<'r, PgRow> for ProductAffiliateSettings {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let last_offers: Vec<Uuid> = row.try_get("last_offers")?;

        Ok(Self {
            id: row.try_get("id")?,
            product_id: row.try_get("product_id")?,
            commission_preference: row.try_get("commission_preference")?,
            cookie_lifetime: row.try_get("cookie_lifetime")?,
            last_offers: last_offers.into_iter().map(OfferUuid::from_uuid).collect(),
        })
    }
}
