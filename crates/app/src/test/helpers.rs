//! Test Helpers

use std::time::Duration;

use uuid::Uuid;

use crate::{
    domain::{
        affiliates::models::{Affiliate, AffiliateUuid, ProductAffiliateSettings},
        checkout_configs::models::{CheckoutConfig, CheckoutConfigUuid},
        companies::models::{COMPANY_TYPE_LEGAL_PERSON, Company},
        formats::models::Format,
        offers::models::{BILLING_TYPE_ONE_TIME, OFFER_STATUS_ACTIVE, Offer, OfferUuid},
        order_bumps::models::OrderBump,
        pixels::models::{Pixel, PixelUuid},
        plans::models::{Plan, PlanUuid},
        products::models::{PRODUCT_STATUS_ACTIVE, Product, ProductUuid},
        reviews::models::{REVIEW_STATUS_ACTIVE, Review},
        users::models::{BLOCK_CHECKOUT_ACTIVE, USER_STATUS_ACTIVE, User, UserUuid},
    },
    settings::{CheckoutSettings, Environment},
    show_checkout::request::ShowCheckoutRequest,
};

pub(crate) const MEDIA_BASE_URL: &str = "https://cdn.example.com/";

pub(crate) const OFFER_ID: i64 = 1;
pub(crate) const PRODUCT_ID: i64 = 10;
pub(crate) const SELLER_ID: i64 = 100;
pub(crate) const AFFILIATE_USER_ID: i64 = 200;
pub(crate) const AFFILIATE_ID: i64 = 300;
pub(crate) const COMPANY_ID: i64 = 1000;
pub(crate) const FORMAT_ID: i64 = 5;
pub(crate) const CHECKOUT_CONFIG_ID: i64 = 20;

pub(crate) const OFFER_UUID: OfferUuid =
    OfferUuid::from_uuid(Uuid::from_u128(0x3f2c_9d4e_8a1b_4c7d_9e6f_0a1b_2c3d_4e5f));
pub(crate) const PRODUCT_UUID: ProductUuid =
    ProductUuid::from_uuid(Uuid::from_u128(0x7b1e_04c2_5d3a_4f8e_b6c9_1d2e_3f4a_5b6c));
pub(crate) const AFFILIATE_UUID: AffiliateUuid =
    AffiliateUuid::from_uuid(Uuid::from_u128(0xa11f_0000_0000_4000_8000_0000_0000_0001));
pub(crate) const OTHER_AFFILIATE_UUID: AffiliateUuid =
    AffiliateUuid::from_uuid(Uuid::from_u128(0xa11f_0000_0000_4000_8000_0000_0000_0002));

pub(crate) fn settings(environment: &str) -> CheckoutSettings {
    CheckoutSettings {
        environment: Environment::new(environment),
        media_base_url: MEDIA_BASE_URL.to_string(),
        request_timeout: Duration::from_secs(5),
    }
}

pub(crate) fn request() -> ShowCheckoutRequest {
    ShowCheckoutRequest {
        offer_uuid: OFFER_UUID.to_string(),
        ..ShowCheckoutRequest::default()
    }
}

/// Active one-time offer priced 50.00 with order bumps disabled.
pub(crate) fn offer() -> Offer {
    Offer {
        id: OFFER_ID,
        uuid: OFFER_UUID,
        product_id: PRODUCT_ID,
        checkout_config_id: CHECKOUT_CONFIG_ID,
        status: OFFER_STATUS_ACTIVE.to_string(),
        is_temporary: false,
        price: 5000,
        billing_type: BILLING_TYPE_ONE_TIME.to_string(),
        is_free: false,
        back_redirect_url: String::new(),
        back_redirect_url_enabled: false,
        order_bumps_enabled: false,
    }
}

pub(crate) fn product() -> Product {
    Product {
        id: PRODUCT_ID,
        uuid: PRODUCT_UUID,
        name: "Rust Course".to_string(),
        user_id: SELLER_ID,
        company_id: COMPANY_ID,
        format_id: FORMAT_ID,
        status: PRODUCT_STATUS_ACTIVE.to_string(),
        evaluation_status: "APPROVED".to_string(),
        currency: "BRL".to_string(),
        photo_url: "products/rust.png".to_string(),
        seller_name: "Ferris Cursos".to_string(),
    }
}

pub(crate) fn user(id: i64, block_checkout: &str) -> User {
    User {
        id,
        uuid: UserUuid::new(),
        status: USER_STATUS_ACTIVE.to_string(),
        block_checkout: block_checkout.to_string(),
    }
}

pub(crate) fn company() -> Company {
    Company {
        id: COMPANY_ID,
        company_type: COMPANY_TYPE_LEGAL_PERSON.to_string(),
        movingpay_ec_id: String::new(),
    }
}

pub(crate) fn format() -> Format {
    Format {
        id: FORMAT_ID,
        slug: "ebook".to_string(),
    }
}

/// Config with every toggle off and every text empty.
pub(crate) fn checkout_config() -> CheckoutConfig {
    CheckoutConfig {
        id: CHECKOUT_CONFIG_ID,
        uuid: CheckoutConfigUuid::new(),
        show_company_info: false,
        show_website_address: false,
        logo_enabled: false,
        logo_url: String::new(),
        logo_position: "CENTER".to_string(),
        banner_enabled: false,
        banner_url: String::new(),
        favicon_enabled: false,
        favicon_type: String::new(),
        favicon_url: String::new(),
        background_type: "COLOR".to_string(),
        background_color: "#ffffff".to_string(),
        color_primary: "#000000".to_string(),
        color_secondary: "#333333".to_string(),
        color_buy_button: "#00aa00".to_string(),
        ads_text_enabled: false,
        ads_text: String::new(),
        cpf_enabled: true,
        cnpj_enabled: false,
        bank_slip_enabled: false,
        credit_card_enabled: false,
        pix_enabled: false,
        nupay_enabled: false,
        picpay_enabled: false,
        apple_pay_enabled: false,
        google_pay_enabled: false,
        google_pay_merchant_id: String::new(),
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
        address_required: false,
        whatsapp_enabled: false,
        support_phone: String::new(),
        support_phone_verified: false,
        countdown_enabled: false,
        countdown_time: 0,
        countdown_finish_message: String::new(),
        notifications_enabled: false,
        social_proof_enabled: false,
        reviews_enabled: false,
    }
}

pub(crate) fn affiliate(id: i64, uuid: AffiliateUuid, user_id: i64) -> Affiliate {
    Affiliate { id, uuid, user_id }
}

pub(crate) fn affiliate_settings(last_offers: Vec<OfferUuid>) -> ProductAffiliateSettings {
    ProductAffiliateSettings {
        id: 1,
        product_id: PRODUCT_ID,
        commission_preference: "LAST_CLICK".to_string(),
        cookie_lifetime: 30,
        last_offers,
    }
}

pub(crate) fn order_bump(id: i64, offered_offer_id: i64, sort_order: i32) -> OrderBump {
    OrderBump {
        id,
        offer_id: OFFER_ID,
        offered_offer_id,
        name: format!("Bump {id}"),
        tag: "Oferta".to_string(),
        description: "Leve junto".to_string(),
        sort_order,
    }
}

pub(crate) fn review(id: i64, description: &str) -> Review {
    Review {
        id,
        checkout_config_id: CHECKOUT_CONFIG_ID,
        name: format!("Reviewer {id}"),
        description: description.to_string(),
        photo_url: format!("reviews/{id}.jpg"),
        stars: 5,
        status: REVIEW_STATUS_ACTIVE.to_string(),
    }
}

pub(crate) fn pixel(id: i64, user_id: i64, status: bool) -> Pixel {
    Pixel {
        id,
        uuid: PixelUuid::new(),
        user_id,
        product_id: PRODUCT_ID,
        events: "purchase".to_string(),
        platform: "FACEBOOK".to_string(),
        code: format!("pixel-{id}"),
        status,
        is_api: false,
        enable_bankslip_purchase_percentage: false,
        enable_pix_purchase_percentage: false,
        bank_slip_purchase_percentage: 0.0,
        pix_purchase_percentage: 0.0,
        google_ads_conversion_label: String::new(),
    }
}

pub(crate) fn plan(id: i64, price: i64, tag: &str) -> Plan {
    Plan {
        id,
        uuid: PlanUuid::new(),
        offer_id: OFFER_ID,
        title: format!("Plan {id}"),
        tag: tag.to_string(),
        price,
        promotional_price: 0,
        first_charge_price_enabled: false,
        first_charge_price: 0,
        charge_frequency: "MONTHLY".to_string(),
        is_default: id == 1,
    }
}

/// A seller user that passes the sell check without a block flag.
pub(crate) fn seller() -> User {
    user(SELLER_ID, "")
}

/// An affiliate user allowed to promote.
pub(crate) fn affiliate_user() -> User {
    user(AFFILIATE_USER_ID, BLOCK_CHECKOUT_ACTIVE)
}
