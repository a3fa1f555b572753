//! Checkout Config Models

use crate::uuids::TypedUuid;

/// Checkout Config UUID
pub type CheckoutConfigUuid = TypedUuid<CheckoutConfig>;

pub const FAVICON_TYPE_FILE: &str = "FILE";

/// Checkout Config Model
///
/// Presentation and payment-method settings attached to an offer. Media
/// fields hold paths relative to the media bucket; an empty string means unset.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutConfig {
    pub id: i64,
    pub uuid: CheckoutConfigUuid,

    pub show_company_info: bool,
    pub show_website_address: bool,

    pub logo_enabled: bool,
    pub logo_url: String,
    pub logo_position: String,
    pub banner_enabled: bool,
    pub banner_url: String,
    pub favicon_enabled: bool,
    pub favicon_type: String,
    pub favicon_url: String,

    pub background_type: String,
    pub background_color: String,
    pub color_primary: String,
    pub color_secondary: String,
    pub color_buy_button: String,

    pub ads_text_enabled: bool,
    pub ads_text: String,

    pub cpf_enabled: bool,
    pub cnpj_enabled: bool,
    pub bank_slip_enabled: bool,
    pub credit_card_enabled: bool,
    pub pix_enabled: bool,
    pub nupay_enabled: bool,
    pub picpay_enabled: bool,
    pub apple_pay_enabled: bool,
    pub google_pay_enabled: bool,
    pub google_pay_merchant_id: String,

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

    pub address_required: bool,
    pub whatsapp_enabled: bool,
    pub support_phone: String,
    pub support_phone_verified: bool,
    pub countdown_enabled: bool,
    pub countdown_time: i32,
    pub countdown_finish_message: String,
    pub notifications_enabled: bool,
    pub social_proof_enabled: bool,
    pub reviews_enabled: bool,
}

impl CheckoutConfig {
    #[must_use]
    pub fn has_file_favicon(&self) -> bool {
        self.favicon_type == FAVICON_TYPE_FILE
    }
}
