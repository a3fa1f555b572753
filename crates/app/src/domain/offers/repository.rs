//! Offers Repository

use async_trait::async_trait;
use mockall::automock;
use sqlx::{FromRow, Postgres, Row, postgres::PgRow, query, query_as};

use crate::{
    database::Db,
    domain::{
        errors::RepositoryError,
        offers::models::{Offer, OfferUuid},
    },
};

const FIND_OFFER_BY_UUID_SQL: &str = include_str!("sql/find_offer_by_uuid.sql");
const FIND_OFFER_BY_ID_SQL: &str = include_str!("sql/find_offer_by_id.sql");
const INCREMENT_CHECKOUT_COUNT_SQL: &str = include_str!("sql/increment_checkout_count.sql");

#[automock]
#[async_trait]
pub trait OffersRepository: Send + Sync {
    /// Find an offer by its public UUID.
    async fn find_by_uuid(&self, uuid: OfferUuid) -> Result<Option<Offer>, RepositoryError>;

    /// Find an offer by its internal id.
    async fn find_by_id(&self, id: i64) -> Result<Option<Offer>, RepositoryError>;

    /// Atomically add one to the offer's checkout counter.
    async fn increment_checkout_count(&self, uuid: OfferUuid) -> Result<(), RepositoryError>;
}

#[derive(Debug, Clone)]
pub struct PgOffersRepository {
    db: Db,
}

impl PgOffersRepository {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OffersRepository for PgOffersRepository {
    async fn find_by_uuid(&self, uuid: OfferUuid) -> Result<Option<Offer>, RepositoryError> {
        Ok(query_as::<Postgres, Offer>(FIND_OFFER_BY_UUID_SQL)
            .bind(uuid.into_uuid())
            .fetch_optional(self.db.pool())
            .await?)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Offer>, RepositoryError> {
        Ok(query_as::<Postgres, Offer>(FIND_OFFER_BY_ID_SQL)
            .bind(id)
            .fetch_optional(self.db.pool())
            .await?)
    }

    async fn increment_checkout_count(&self, uuid: OfferUuid) -> Result<(), RepositoryError> {
        let rows_affected = query(INCREMENT_CHECKOUT_COUNT_SQL)
            .bind(uuid.into_uuid())
            .execute(self.db.pool())
            .await?
            .rows_affected();

        if rows_affected == 0 {
            return Err(RepositoryError::NotFound("offer"));
        }

        Ok(())
    }
}

impl<'r> FromRow<'r, PgRow> for Offer {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: row.try_get("id")?,
            uuid: OfferUuid::from_uuid(row.try_get("uuid")?),
            product_id: row.try_get("product_id")?,
            checkout_config_id: row.try_get("checkout_config_id")?,
            status: row.try_get("status")?,
            is_temporary: row.try_get("is_temporary")?,
            price: row.try_get("price")?,
            billing_type: row.try_get("billing_type")?,
            is_free: row.try_get("is_free")?,
            back_redirect_url: row.try_get("back_redirect_url")?,
            back_redirect_url_enabled: row.try_get("back_redirect_url_enabled")?,
            order_bumps_enabled: row.try_get("order_bumps_enabled")?,
        })
    }
}
