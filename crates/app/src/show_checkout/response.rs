//! Checkout page view model.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::{
    checkouts::models::CheckoutUuid, offers::models::OfferUuid, pixels::models::PixelUuid,
    plans::models::PlanUuid, products::models::ProductUuid,
};

/// Convert integer minor currency units to major units (12345 -> 123.45).
#[must_use]
pub fn minor_to_major(minor: i64) -> Decimal {
    Decimal::new(minor, 2)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShowCheckoutResponse {
    pub billing_type: String,
    pub is_free: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub back_redirect_url: Option<String>,

    pub config: CheckoutPageConfig,
    pub order_bumps: Vec<OrderBumpSummary>,
    pub product: ProductSummary,
    pub reviews: Vec<ReviewSummary>,
    pub pixels: Vec<PixelSummary>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<CompanySummary>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub affiliate_settings: Option<AffiliateSettingsSummary>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub plans: Vec<PlanSummary>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub google_pay_merchant_id: Option<String>,
}

/// Presentation and payment settings of the page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckoutPageConfig {
    pub checkout_uuid: CheckoutUuid,
    pub checkout_date: String,
    pub has_discount: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub favicon: Option<String>,

    pub logo_enabled: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,

    pub logo_position: String,
    pub banner_enabled: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub banner: Option<String>,

    pub background_type: String,
    pub background_color: String,
    pub color_primary: String,
    pub color_secondary: String,
    pub color_buy_button: String,
    pub ads_text_enabled: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ads_text: Option<String>,

    pub cpf_enabled: bool,
    pub cnpj_enabled: bool,
    pub bank_slip_enabled: bool,
    pub credit_card_enabled: bool,
    pub pix_enabled: bool,
    pub nupay_enabled: bool,
    pub picpay_enabled: bool,
    pub apple_pay_enabled: bool,
    pub google_pay_enabled: bool,
    pub automatic_discount_bank_slip: f64,
    pub automatic_discount_credit_card: f64,
    pub automatic_discount_pix: f64,
    pub automatic_discount_nupay: f64,
    pub automatic_discount_picpay: f64,
    pub automatic_discount_apple_pay: f64,
    pub automatic_discount_google_pay: f64,
    pub installments_limit: i32,
    pub preselected_installment: i32,
    pub interest_free_installments: i32,
    pub show_website_address: bool,
    pub show_company_info: bool,
    pub address_required: bool,
    pub whatsapp_enabled: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub support_phone: Option<String>,

    pub support_phone_verified: bool,
    pub countdown_enabled: bool,
    pub countdown_time: i32,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub countdown_finish_message: Option<String>,

    pub notifications_enabled: bool,
    pub social_proof_enabled: bool,
    pub reviews_enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderBumpSummary {
    /// UUID of the upsold offer.
    pub uuid: OfferUuid,
    pub product_name: String,
    pub name: String,
    pub tag: String,
    pub description: String,

    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,

    pub format: String,
    pub order: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductSummary {
    pub uuid: ProductUuid,
    pub name: String,

    /// The offer's price.
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,

    pub format: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReviewSummary {
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,

    pub stars: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PixelSummary {
    pub uuid: PixelUuid,
    pub events: String,
    pub platform: String,
    pub code: String,
    pub is_api: bool,
    pub enable_bankslip_purchase_percentage: bool,
    pub enable_pix_purchase_percentage: bool,
    pub bank_slip_purchase_percentage: f64,
    pub pix_purchase_percentage: f64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub google_ads_conversion_label: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompanySummary {
    pub fantasy_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AffiliateSettingsSummary {
    pub commission_preference: String,

    /// Days.
    pub cookie_lifetime: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanSummary {
    pub uuid: PlanUuid,
    pub title: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,

    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,

    #[serde(with = "rust_decimal::serde::float")]
    pub promotional_price: Decimal,

    pub first_charge_price_enabled: bool,

    #[serde(with = "rust_decimal::serde::float")]
    pub first_charge_price: Decimal,

    pub charge_frequency: String,
    pub is_default: bool,
}
