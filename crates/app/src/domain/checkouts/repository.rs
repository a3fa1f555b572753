//! Checkouts Repository

use async_trait::async_trait;
use jiff_sqlx::Timestamp as SqlxTimestamp;
use mockall::automock;
use sqlx::{FromRow, Postgres, Row, postgres::PgRow, query, query_as, types::Json};

use crate::{
    database::Db,
    domain::{
        checkouts::models::{Checkout, CheckoutStatus, CheckoutUuid, PixelData},
        errors::RepositoryError,
    },
};

const CREATE_CHECKOUT_SQL: &str = include_str!("sql/create_checkout.sql");
const FIND_CHECKOUT_BY_UUID_SQL: &str = include_str!("sql/find_checkout_by_uuid.sql");
const UPDATE_CHECKOUT_SQL: &str = include_str!("sql/update_checkout.sql");

#[automock]
#[async_trait]
pub trait CheckoutsRepository: Send + Sync {
    /// Persist a new checkout.
    async fn create(&self, checkout: &Checkout) -> Result<(), RepositoryError>;

    /// Find a checkout by its UUID.
    async fn find_by_uuid(&self, uuid: CheckoutUuid)
    -> Result<Option<Checkout>, RepositoryError>;

    /// Overwrite a stored checkout, refreshing its `updated_at`.
    async fn update(&self, checkout: &Checkout) -> Result<Checkout, RepositoryError>;
}

#[derive(Debug, Clone)]
pub struct PgCheckoutsRepository {
    db: Db,
}

impl PgCheckoutsRepository {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CheckoutsRepository for PgCheckoutsRepository {
    async fn create(&self, checkout: &Checkout) -> Result<(), RepositoryError> {
        query(CREATE_CHECKOUT_SQL)
            .bind(checkout.uuid.into_uuid())
            .bind(checkout.code.as_deref())
            .bind(checkout.offer_id)
            .bind(checkout.product_id)
            .bind(checkout.affiliate_id)
            .bind(checkout.status.as_str())
            .bind(checkout.user_agent.as_deref())
            .bind(checkout.os.as_deref())
            .bind(checkout.os_version.as_deref())
            .bind(checkout.browser.as_deref())
            .bind(checkout.browser_version.as_deref())
            .bind(checkout.is_mobile)
            .bind(checkout.ip.as_deref())
            .bind(checkout.city.as_deref())
            .bind(checkout.state.as_deref())
            .bind(checkout.country.as_deref())
            .bind(checkout.lat.as_deref())
            .bind(checkout.lon.as_deref())
            .bind(checkout.currency.as_str())
            .bind(checkout.email_sent_amount)
            .bind(checkout.sms_sent_amount)
            .bind(checkout.src.as_deref())
            .bind(checkout.utm_source.as_deref())
            .bind(checkout.utm_medium.as_deref())
            .bind(checkout.utm_campaign.as_deref())
            .bind(checkout.utm_term.as_deref())
            .bind(checkout.utm_content.as_deref())
            .bind(checkout.mercado_pago_device_session_id.as_deref())
            .bind(checkout.pixel_data.as_ref().map(Json))
            .bind(checkout.original_url.as_deref())
            .bind(SqlxTimestamp::from(checkout.created_at))
            .bind(SqlxTimestamp::from(checkout.updated_at))
            .execute(self.db.pool())
            .await?;

        Ok(())
    }

    async fn find_by_uuid(
        &self,
        uuid: CheckoutUuid,
    ) -> Result<Option<Checkout>, RepositoryError> {
        Ok(query_as::<Postgres, Checkout>(FIND_CHECKOUT_BY_UUID_SQL)
            .bind(uuid.into_uuid())
            .fetch_optional(self.db.pool())
            .await?)
    }

    async fn update(&self, checkout: &Checkout) -> Result<Checkout, RepositoryError> {
        query_as::<Postgres, Checkout>(UPDATE_CHECKOUT_SQL)
            .bind(checkout.uuid.into_uuid())
            .bind(checkout.code.as_deref())
            .bind(checkout.affiliate_id)
            .bind(checkout.status.as_str())
            .bind(checkout.email_sent_amount)
            .bind(checkout.sms_sent_amount)
            .bind(checkout.mercado_pago_device_session_id.as_deref())
            .bind(checkout.pixel_data.as_ref().map(Json))
            .fetch_optional(self.db.pool())
            .await?
            .ok_or(RepositoryError::NotFound("checkout"))
    }
}

impl<'r> FromRow<'r, PgRow> for Checkout {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let status: String = row.try_get("status")?;

        let status = status
            .parse::<CheckoutStatus>()
            .map_err(|e| sqlx::Error::ColumnDecode {
                index: "status".to_string(),
                source: Box::new(e),
            })?;

        let pixel_data: Option<Json<PixelData>> = row.try_get("pixel_data")?;

        Ok(Self {
            uuid: CheckoutUuid::from_uuid(row.try_get("uuid")?),
            code: row.try_get("code")?,
            offer_id: row.try_get("offer_id")?,
            product_id: row.try_get("product_id")?,
            affiliate_id: row.try_get("affiliate_id")?,
            status,
            user_agent: row.try_get("user_agent")?,
            os: row.try_get("os")?,
            os_version: row.try_get("os_version")?,
            browser: row.try_get("browser")?,
            browser_version: row.try_get("browser_version")?,
            is_mobile: row.try_get("is_mobile")?,
            ip: row.try_get("ip")?,
            city: row.try_get("city")?,
            state: row.try_get("state")?,
            country: row.try_get("country")?,
            lat: row.try_get("lat")?,
            lon: row.try_get("lon")?,
            currency: row.try_get("currency")?,
            email_sent_amount: row.try_get("email_sent_amount")?,
            sms_sent_amount: row.try_get("sms_sent_amount")?,
            src: row.try_get("src")?,
            utm_source: row.try_get("utm_source")?,
            utm_medium: row.try_get("utm_medium")?,
            utm_campaign: row.try_get("utm_campaign")?,
            utm_term: row.try_get("utm_term")?,
            utm_content: row.try_get("utm_content")?,
            mercado_pago_device_session_id: row.try_get("mercado_pago_device_session_id")?,
            pixel_data: pixel_data.map(|Json(data)| data),
            original_url: row.try_get("original_url")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
