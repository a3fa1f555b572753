//! Test helpers.

use std::sync::Arc;

use salvo::{affix_state::inject, prelude::*};

use checkout_app::{
    domain::{checkouts::models::CheckoutUuid, products::models::ProductUuid},
    show_checkout::{
        MockShowCheckoutService,
        response::{CheckoutPageConfig, ProductSummary, ShowCheckoutResponse, minor_to_major},
    },
};

use crate::state::State;

pub(crate) const OFFER_UUID: &str = "3f2c9d4e-8a1b-4c7d-9e6f-0a1b2c3d4e5f";

pub(crate) fn checkout_service(show_checkout: MockShowCheckoutService, route: Router) -> Service {
    let state = Arc::new(State::new(Arc::new(show_checkout)));

    Service::new(Router::new().hoop(inject(state)).push(route))
}

/// A one-time offer priced 50.00 with every optional block empty.
pub(crate) fn checkout_page() -> ShowCheckoutResponse {
    ShowCheckoutResponse {
        billing_type: "ONE_TIME".to_string(),
        is_free: false,
        back_redirect_url: None,
        config: page_config(),
        order_bumps: Vec::new(),
        product: ProductSummary {
            uuid: ProductUuid::new(),
            name: "Rust Course".to_string(),
            price: minor_to_major(5000),
            photo: None,
            format: "ebook".to_string(),
        },
        reviews: Vec::new(),
        pixels: Vec::new(),
        company: None,
        affiliate_settings: None,
        plans: Vec::new(),
        google_pay_merchant_id: None,
    }
}

fn page_config() -> CheckoutPageConfig {
    CheckoutPageConfig {
        checkout_uuid: CheckoutUuid::new(),
        checkout_date: "2026-01-01T00:00:00Z".to_string(),
        has_discount: false,
        favicon: None,
        logo_enabled: false,
        logo: None,
        logo_position: "CENTER".to_string(),
        banner_enabled: false,
        banner: None,
        background_type: "COLOR".to_string(),
        background_color: "#ffffff".to_string(),
        color_primary: "#000000".to_string(),
        color_secondary: "#333333".to_string(),
        color_buy_button: "#00aa00".to_string(),
        ads_text_enabled: false,
        ads_text: None,
        cpf_enabled: true,
        cnpj_enabled: false,
        bank_slip_enabled: false,
        credit_card_enabled: true,
        pix_enabled: true,
        nupay_enabled: false,
        picpay_enabled: false,
        apple_pay_enabled: false,
        google_pay_enabled: false,
        automatic_discount_bank_slip: 0.0,
        automatic_discount_credit_card: 0.0,
        automatic_discount_pix: 0.0,
        automatic_discount_nupay: 0.0,
        automatic_discount_picpay: 0.0,
        automatic_discount_apple_pay: 0.0,
        automatic_discount_google_pay: 0.0,
        installments_limit: 12,
        preselected_installment: 1,
        interest_free_installments: 1,
        show_website_address: false,
        show_company_info: false,
        address_required: false,
        whatsapp_enabled: false,
        support_phone: None,
        support_phone_verified: false,
        countdown_enabled: false,
        countdown_time: 0,
        countdown_finish_message: None,
        notifications_enabled: false,
        social_proof_enabled: false,
        reviews_enabled: false,
    }
}
