//! Checkout Configs Repository

use async_trait::async_trait;
use mockall::automock;
use sqlx::{FromRow, Postgres, Row, postgres::PgRow, query_as};

use crate::{
    database::Db,
    domain::{
        checkout_configs::models::{CheckoutConfig, CheckoutConfigUuid},
        errors::RepositoryError,
    },
};

const FIND_CHECKOUT_CONFIG_BY_ID_SQL: &str = include_str!("sql/find_checkout_config_by_id.sql");

#[automock]
#[async_trait]
pub trait CheckoutConfigsRepository: Send + Sync {
    /// Find a checkout configuration by its internal id.
    async fn find_by_id(&self, id: i64) -> Result<Option<CheckoutConfig>, RepositoryError>;
}

#[derive(Debug, Clone)]
pub struct PgCheckoutConfigsRepository {
    db: Db,
}

impl PgCheckoutConfigsRepository {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CheckoutConfigsRepository for PgCheckoutConfigsRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<CheckoutConfig>, RepositoryError> {
        Ok(query_as::<Postgres, CheckoutConfig>(FIND_CHECKOUT_CONFIG_BY_ID_SQL)
            .bind(id)
            .fetch_optional(self.db.pool())
            .await?)
    }
}

impl<'r> FromRow<'r, PgRow> for CheckoutConfig {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: row.try_get("id")?,
            uuid: CheckoutConfigUuid::from_uuid(row.try_get("uuid")?),
            show_company_info: row.try_get("show_company_info")?,
            show_website_address: row.try_get("show_website_address")?,
            logo_enabled: row.try_get("logo_enabled")?,
            logo_url: row.try_get("logo_url")?,
            logo_position: row.try_get("logo_position")?,
            banner_enabled: row.try_get("banner_enabled")?,
            banner_url: row.try_get("banner_url")?,
            favicon_enabled: row.try_get("favicon_enabled")?,
            favicon_type: row.try_get("favicon_type")?,
            favicon_url: row.try_get("favicon_url")?,
            background_type: row.try_get("background_type")?,
            background_color: row.try_get("background_color")?,
            color_primary: row.try_get("color_primary")?,
            color_secondary: row.try_get("color_secondary")?,
            color_buy_button: row.try_get("color_buy_button")?,
            ads_text_enabled: row.try_get("ads_text_enabled")?,
            ads_text: row.try_get("ads_text")?,
            cpf_enabled: row.try_get("cpf_enabled")?,
            cnpj_enabled: row.try_get("cnpj_enabled")?,
            bank_slip_enabled: row.try_get("bank_slip_enabled")?,
            credit_card_enabled: row.try_get("credit_card_enabled")?,
            pix_enabled: row.try_get("pix_enabled")?,
            nupay_enabled: row.try_get("nupay_enabled")?,
            picpay_enabled: row.try_get("picpay_enabled")?,
            apple_pay_enabled: row.try_get("apple_pay_enabled")?,
            google_pay_enabled: row.try_get("google_pay_enabled")?,
            google_pay_merchant_id: row.try_get("google_pay_merchant_id")?,
            automatic_discount_bank_slip: row.try_get("automatic_discount_bank_slip")?,
            automatic_discount_credit_card: row.try_get("automatic_discount_credit_card")?,
            automatic_discount_pix: row.try_get("automatic_discount_pix")?,
            automatic_discount_nupay: row.try_get("automatic_discount_nupay")?,
            automatic_discount_picpay: row.try_get("automatic_discount_picpay")?,
            automatic_discount_apple_pay: row.try_get("automatic_discount_apple_pay")?,
            automatic_discount_google_pay: row.try_get("automatic_discount_google_pay")?,
            installments_limit: row.try_get("installments_limit")?,
            preselected_installment: row.try_get("preselected_installment")?,
            interest_free_installments: row.try_get("interest_free_installments")?,
            address_required: row.try_get("address_required")?,
            whatsapp_enabled: row.try_get("whatsapp_enabled")?,
            support_phone: row.try_get("support_phone")?,
            support_phone_verified: row.try_get("support_phone_verified")?,
            countdown_enabled: row.try_get("countdown_enabled")?,
            countdown_time: row.try_get("countdown_time")?,
            countdown_finish_message: row.try_get("countdown_finish_message")?,
            notifications_enabled: row.try_get("notifications_enabled")?,
            social_proof_enabled: row.try_get("social_proof_enabled")?,
            reviews_enabled: row.try_get("reviews_enabled")?,
        })
    }
}
