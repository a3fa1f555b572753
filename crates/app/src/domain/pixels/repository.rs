//! Pixels Repository

use async_trait::async_trait;
use mockall::automock;
use sqlx::{FromRow, Postgres, Row, postgres::PgRow, query_as};

use crate::{
    database::Db,
    domain::{
        errors::RepositoryError,
        pixels::models::{Pixel, PixelUuid},
    },
};

const FIND_PIXELS_BY_USER_ID_AND_PRODUCT_ID_SQL: &str =
    include_str!("sql/find_pixels_by_user_id_and_product_id.sql");

#[automock]
#[async_trait]
pub trait PixelsRepository: Send + Sync {
    /// Every pixel a user configured for a product, enabled or not.
    async fn find_all_by_user_id_and_product_id(
        &self,
        user_id: i64,
        product_id: i64,
    ) -> Result<Vec<Pixel>, RepositoryError>;
}

#[derive(Debug, Clone)]
pub struct PgPixelsRepository {
    db: Db,
}

impl PgPixelsRepository {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PixelsRepository for PgPixelsRepository {
    async fn find_all_by_user_id_and_product_id(
        &self,
        user_id: i64,
        product_id: i64,
    ) -> Result<Vec<Pixel>, RepositoryError> {
        Ok(
            query_as::<Postgres, Pixel>(FIND_PIXELS_BY_USER_ID_AND_PRODUCT_ID_SQL)
                .bind(user_id)
                .bind(product_id)
                .fetch_all(self.db.pool())
                .await?,
        )
    }
}

impl<'r> FromRow<'r, PgRow> for Pixel {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: row.try_get("id")?,
            uuid: PixelUuid::from_uuid(row.try_get("uuid")?),
            user_id: row.try_get("user_id")?,
            product_id: row.try_get("product_id")?,
            events: row.try_get("events")?,
            platform: row.try_get("platform")?,
            code: row.try_get("code")?,
            status: row.try_get("status")?,
            is_api: row.try_get("is_api")?,
            enable_bankslip_purchase_percentage: row
                .try_get("enable_bankslip_purchase_percentage")?,
            enable_pix_purchase_percentage: row.try_get("enable_pix_purchase_percentage")?,
            bank_slip_purchase_percentage: row.try_get("bank_slip_purchase_percentage")?,
            pix_purchase_percentage: row.try_get("pix_purchase_percentage")?,
            google_ads_conversion_label: row.try_get("google_ads_conversion_label")?,
        })
    }
}
