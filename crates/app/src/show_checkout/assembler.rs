//! Maps resolved domain data into the checkout page view model.

use crate::{
    domain::{
        affiliates::models::ProductAffiliateSettings, checkout_configs::models::CheckoutConfig,
        checkouts::models::Checkout, companies::models::Company, formats::models::Format,
        offers::models::Offer, order_bumps::models::OrderBump, pixels::models::Pixel,
        plans::models::Plan, products::models::Product, reviews::models::Review,
    },
    media::FileResolver,
    show_checkout::response::{
        AffiliateSettingsSummary, CheckoutPageConfig, CompanySummary, OrderBumpSummary,
        PixelSummary, PlanSummary, ProductSummary, ReviewSummary, ShowCheckoutResponse,
        minor_to_major,
    },
};

/// An order bump whose upsold offer, product and format all resolved.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ResolvedOrderBump {
    pub bump: OrderBump,
    pub offer: Offer,
    pub product: Product,
    pub format: Format,
}

/// Results of the enrichment lookups, already downgraded on failure.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct Enrichment {
    pub order_bumps: Vec<ResolvedOrderBump>,
    pub reviews: Vec<Review>,
    pub pixels: Vec<Pixel>,
    pub plans: Vec<Plan>,
    pub has_discount: bool,
}

/// Everything the page is built from.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct CheckoutSnapshot {
    pub offer: Offer,
    pub product: Product,
    pub company: Company,
    pub format: Format,
    pub config: CheckoutConfig,
    pub checkout: Checkout,
    pub affiliate_settings: Option<ProductAffiliateSettings>,
    pub enrichment: Enrichment,
}

/// Builds [`ShowCheckoutResponse`] values. Holds no state besides its inputs,
/// so the same snapshot always yields the same response.
pub(crate) struct Assembler<'a> {
    pub files: &'a dyn FileResolver,
    pub is_production: bool,
}

impl Assembler<'_> {
    pub(crate) fn assemble(&self, snapshot: &CheckoutSnapshot) -> ShowCheckoutResponse {
        let CheckoutSnapshot {
            offer,
            product,
            company,
            format,
            config,
            affiliate_settings,
            enrichment,
            ..
        } = snapshot;

        let company = (config.show_company_info
            && company.is_legal_person()
            && !product.seller_name.is_empty())
        .then(|| CompanySummary {
            fantasy_name: product.seller_name.clone(),
        });

        ShowCheckoutResponse {
            billing_type: offer.billing_type.clone(),
            is_free: offer.is_free,
            back_redirect_url: offer.back_redirect().map(str::to_string),
            config: self.page_config(snapshot),
            order_bumps: enrichment
                .order_bumps
                .iter()
                .map(|resolved| self.order_bump(resolved))
                .collect(),
            product: ProductSummary {
                uuid: product.uuid,
                name: product.name.clone(),
                price: minor_to_major(offer.price),
                photo: self.resolve(&product.photo_url),
                format: format.slug.clone(),
            },
            reviews: enrichment
                .reviews
                .iter()
                .map(|review| self.review(review))
                .collect(),
            pixels: enrichment
                .pixels
                .iter()
                .filter(|pixel| pixel.is_enabled())
                .map(pixel)
                .collect(),
            company,
            affiliate_settings: affiliate_settings.as_ref().map(|settings| {
                AffiliateSettingsSummary {
                    commission_preference: settings.commission_preference.clone(),
                    cookie_lifetime: settings.cookie_lifetime,
                }
            }),
            plans: enrichment.plans.iter().map(plan).collect(),
            google_pay_merchant_id: non_empty(&config.google_pay_merchant_id),
        }
    }

    fn page_config(&self, snapshot: &CheckoutSnapshot) -> CheckoutPageConfig {
        let config = &snapshot.config;
        let one_time = snapshot.offer.is_one_time();

        let logo = self.resolve(&config.logo_url);
        let banner = self.resolve(&config.banner_url);

        let favicon = if !config.favicon_enabled {
            None
        } else if config.has_file_favicon() {
            self.resolve(&config.favicon_url)
        } else if config.logo_enabled {
            logo.clone()
        } else {
            None
        };

        let credit_card_enabled = config.credit_card_enabled
            && (!self.is_production || snapshot.company.has_merchant_account());

        CheckoutPageConfig {
            checkout_uuid: snapshot.checkout.uuid,
            checkout_date: checkout_date(&snapshot.checkout),
            has_discount: snapshot.enrichment.has_discount,
            favicon,
            logo_enabled: config.logo_enabled,
            logo,
            logo_position: config.logo_position.clone(),
            banner_enabled: config.banner_enabled,
            banner,
            background_type: config.background_type.clone(),
            background_color: config.background_color.clone(),
            color_primary: config.color_primary.clone(),
            color_secondary: config.color_secondary.clone(),
            color_buy_button: config.color_buy_button.clone(),
            ads_text_enabled: config.ads_text_enabled,
            ads_text: non_empty(&config.ads_text),
            cpf_enabled: config.cpf_enabled,
            cnpj_enabled: config.cnpj_enabled,
            bank_slip_enabled: config.bank_slip_enabled && one_time,
            credit_card_enabled,
            pix_enabled: config.pix_enabled,
            // Not offered yet, whatever the config says.
            nupay_enabled: false,
            picpay_enabled: config.picpay_enabled && one_time,
            apple_pay_enabled: config.apple_pay_enabled && one_time,
            google_pay_enabled: config.google_pay_enabled && one_time,
            automatic_discount_bank_slip: config.automatic_discount_bank_slip,
            automatic_discount_credit_card: config.automatic_discount_credit_card,
            automatic_discount_pix: config.automatic_discount_pix,
            automatic_discount_nupay: config.automatic_discount_nupay,
            automatic_discount_picpay: config.automatic_discount_picpay,
            automatic_discount_apple_pay: config.automatic_discount_apple_pay,
            automatic_discount_google_pay: config.automatic_discount_google_pay,
            installments_limit: config.installments_limit,
            preselected_installment: config.preselected_installment,
            interest_free_installments: config.interest_free_installments,
            show_website_address: config.show_website_address,
            show_company_info: config.show_company_info,
            address_required: config.address_required,
            whatsapp_enabled: config.whatsapp_enabled,
            support_phone: non_empty(&config.support_phone),
            support_phone_verified: config.support_phone_verified,
            countdown_enabled: config.countdown_enabled,
            countdown_time: config.countdown_time,
            countdown_finish_message: non_empty(&config.countdown_finish_message),
            notifications_enabled: config.notifications_enabled,
            social_proof_enabled: config.social_proof_enabled,
            reviews_enabled: config.reviews_enabled,
        }
    }

    fn order_bump(&self, resolved: &ResolvedOrderBump) -> OrderBumpSummary {
        let ResolvedOrderBump {
            bump,
            offer,
            product,
            format,
        } = resolved;

        OrderBumpSummary {
            uuid: offer.uuid,
            product_name: product.name.clone(),
            name: bump.name.clone(),
            tag: bump.tag.clone(),
            description: bump.description.clone(),
            price: minor_to_major(offer.price),
            photo: self.resolve(&product.photo_url),
            format: format.slug.clone(),
            order: bump.sort_order,
        }
    }

    fn review(&self, review: &Review) -> ReviewSummary {
        ReviewSummary {
            name: review.name.clone(),
            description: non_empty(&review.description),
            photo: self.resolve(&review.photo_url),
            stars: review.stars,
        }
    }

    fn resolve(&self, relative_path: &str) -> Option<String> {
        (!relative_path.is_empty()).then(|| self.files.resolve(relative_path))
    }
}

fn pixel(pixel: &Pixel) -> PixelSummary {
    PixelSummary {
        uuid: pixel.uuid,
        events: pixel.events.clone(),
        platform: pixel.platform.clone(),
        code: pixel.code.clone(),
        is_api: pixel.is_api,
        enable_bankslip_purchase_percentage: pixel.enable_bankslip_purchase_percentage,
        enable_pix_purchase_percentage: pixel.enable_pix_purchase_percentage,
        bank_slip_purchase_percentage: pixel.bank_slip_purchase_percentage,
        pix_purchase_percentage: pixel.pix_purchase_percentage,
        google_ads_conversion_label: non_empty(&pixel.google_ads_conversion_label),
    }
}

fn plan(plan: &Plan) -> PlanSummary {
    PlanSummary {
        uuid: plan.uuid,
        title: plan.title.clone(),
        tag: plan.display_tag().map(str::to_string),
        price: minor_to_major(plan.price),
        promotional_price: minor_to_major(plan.promotional_price),
        first_charge_price_enabled: plan.first_charge_price_enabled,
        first_charge_price: minor_to_major(plan.first_charge_price),
        charge_frequency: plan.charge_frequency.clone(),
        is_default: plan.is_default,
    }
}

/// Creation time in RFC 3339, second precision, UTC.
fn checkout_date(checkout: &Checkout) -> String {
    checkout
        .created_at
        .strftime("%Y-%m-%dT%H:%M:%SZ")
        .to_string()
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use rust_decimal::Decimal;
    use testresult::TestResult;

    use crate::{
        domain::checkouts::models::NewCheckout,
        media::BaseUrlFileResolver,
        test::helpers::{self, MEDIA_BASE_URL},
    };

    use super::*;

    fn snapshot() -> CheckoutSnapshot {
        let created_at: Timestamp = "2025-03-04T05:06:07.891Z"
            .parse()
            .expect("valid timestamp");

        CheckoutSnapshot {
            offer: helpers::offer(),
            product: helpers::product(),
            company: helpers::company(),
            format: helpers::format(),
            config: helpers::checkout_config(),
            checkout: Checkout::accessed(
                NewCheckout {
                    offer_id: Some(helpers::OFFER_ID),
                    product_id: helpers::PRODUCT_ID,
                    currency: "BRL".to_string(),
                    ..NewCheckout::default()
                },
                created_at,
            ),
            affiliate_settings: None,
            enrichment: Enrichment::default(),
        }
    }

    fn assemble(snapshot: &CheckoutSnapshot, is_production: bool) -> ShowCheckoutResponse {
        let files = BaseUrlFileResolver::new(MEDIA_BASE_URL);

        Assembler {
            files: &files,
            is_production,
        }
        .assemble(snapshot)
    }

    #[test]
    fn assembling_the_same_snapshot_is_byte_identical() -> TestResult {
        let mut snapshot = snapshot();
        snapshot.enrichment.reviews = vec![helpers::review(1, "Great"), helpers::review(2, "")];
        snapshot.enrichment.plans = vec![helpers::plan(1, 4990, "Popular")];

        let first = serde_json::to_string(&assemble(&snapshot, false))?;
        let second = serde_json::to_string(&assemble(&snapshot, false))?;

        assert_eq!(first, second);

        Ok(())
    }

    #[test]
    fn money_is_rendered_in_major_units() -> TestResult {
        let mut snapshot = snapshot();
        snapshot.offer.price = 12345;

        let response = assemble(&snapshot, false);

        assert_eq!(response.product.price, Decimal::new(12345, 2));
        assert_eq!(
            serde_json::to_value(&response)?["product"]["price"],
            serde_json::json!(123.45)
        );

        Ok(())
    }

    #[test]
    fn checkout_fields_come_from_the_recorded_checkout() {
        let snapshot = snapshot();

        let response = assemble(&snapshot, false);

        assert_eq!(response.config.checkout_uuid, snapshot.checkout.uuid);
        assert_eq!(response.config.checkout_date, "2025-03-04T05:06:07Z");
    }

    #[test]
    fn recurring_offers_disable_one_time_payment_methods() {
        let mut snapshot = snapshot();
        snapshot.offer.billing_type = "RECURRING".to_string();
        snapshot.config.apple_pay_enabled = true;
        snapshot.config.google_pay_enabled = true;
        snapshot.config.bank_slip_enabled = true;
        snapshot.config.picpay_enabled = true;
        snapshot.config.pix_enabled = true;
        snapshot.config.nupay_enabled = true;

        let config = assemble(&snapshot, false).config;

        assert!(!config.apple_pay_enabled);
        assert!(!config.google_pay_enabled);
        assert!(!config.bank_slip_enabled);
        assert!(!config.picpay_enabled);
        assert!(config.pix_enabled);
        assert!(!config.nupay_enabled);
    }

    #[test]
    fn one_time_offers_keep_configured_payment_methods() {
        let mut snapshot = snapshot();
        snapshot.config.apple_pay_enabled = true;
        snapshot.config.bank_slip_enabled = true;

        let config = assemble(&snapshot, false).config;

        assert!(config.apple_pay_enabled);
        assert!(config.bank_slip_enabled);
        assert!(!config.google_pay_enabled);
    }

    #[test]
    fn production_credit_card_requires_a_merchant_account() {
        let mut snapshot = snapshot();
        snapshot.config.credit_card_enabled = true;

        assert!(assemble(&snapshot, false).config.credit_card_enabled);
        assert!(!assemble(&snapshot, true).config.credit_card_enabled);

        snapshot.company.movingpay_ec_id = "ec-123".to_string();

        assert!(assemble(&snapshot, true).config.credit_card_enabled);
    }

    #[test]
    fn file_favicons_are_resolved() {
        let mut snapshot = snapshot();
        snapshot.config.favicon_enabled = true;
        snapshot.config.favicon_type = "FILE".to_string();
        snapshot.config.favicon_url = "/favicons/shop.ico".to_string();

        let config = assemble(&snapshot, false).config;

        assert_eq!(
            config.favicon.as_deref(),
            Some("https://cdn.example.com/favicons/shop.ico")
        );
    }

    #[test]
    fn favicon_falls_back_to_the_logo_only_when_enabled() {
        let mut snapshot = snapshot();
        snapshot.config.logo_enabled = true;
        snapshot.config.logo_url = "logos/shop.png".to_string();
        snapshot.config.favicon_type = "LOGO".to_string();

        let config = assemble(&snapshot, false).config;

        assert_eq!(
            config.logo.as_deref(),
            Some("https://cdn.example.com/logos/shop.png")
        );
        assert_eq!(config.favicon, None);

        snapshot.config.favicon_enabled = true;

        let config = assemble(&snapshot, false).config;

        assert_eq!(config.favicon, config.logo);
    }

    #[test]
    fn empty_media_and_text_are_omitted() -> TestResult {
        let mut snapshot = snapshot();
        snapshot.product.photo_url = String::new();

        let value = serde_json::to_value(assemble(&snapshot, false))?;

        for key in [
            "logo",
            "banner",
            "favicon",
            "ads_text",
            "support_phone",
            "countdown_finish_message",
        ] {
            assert!(value["config"].get(key).is_none(), "{key} should be omitted");
        }

        assert!(value["product"].get("photo").is_none());
        assert!(value.get("back_redirect_url").is_none());
        assert!(value.get("google_pay_merchant_id").is_none());
        assert!(value.get("company").is_none());
        assert!(value.get("affiliate_settings").is_none());
        assert!(value.get("plans").is_none());
        assert_eq!(value["order_bumps"], serde_json::json!([]));
        assert_eq!(value["reviews"], serde_json::json!([]));
        assert_eq!(value["pixels"], serde_json::json!([]));

        Ok(())
    }

    #[test]
    fn company_block_needs_legal_person_and_seller_name() {
        let mut snapshot = snapshot();

        assert_eq!(assemble(&snapshot, false).company, None);

        snapshot.config.show_company_info = true;

        assert_eq!(
            assemble(&snapshot, false).company,
            Some(CompanySummary {
                fantasy_name: "Ferris Cursos".to_string()
            })
        );

        snapshot.company.company_type = "NATURAL_PERSON".to_string();

        assert_eq!(assemble(&snapshot, false).company, None);

        snapshot.company.company_type = "LEGAL_PERSON".to_string();
        snapshot.product.seller_name = String::new();

        assert_eq!(assemble(&snapshot, false).company, None);
    }

    #[test]
    fn back_redirect_requires_enabled_and_non_empty() {
        let mut snapshot = snapshot();
        snapshot.offer.back_redirect_url = "https://example.com/back".to_string();

        assert_eq!(assemble(&snapshot, false).back_redirect_url, None);

        snapshot.offer.back_redirect_url_enabled = true;

        assert_eq!(
            assemble(&snapshot, false).back_redirect_url.as_deref(),
            Some("https://example.com/back")
        );
    }

    #[test]
    fn enrichment_is_shaped_for_display() {
        let mut snapshot = snapshot();

        let mut labelled = helpers::pixel(1, helpers::SELLER_ID, true);
        labelled.google_ads_conversion_label = "AW-1/abc".to_string();

        snapshot.enrichment.pixels = vec![
            labelled,
            helpers::pixel(2, helpers::SELLER_ID, false),
            helpers::pixel(3, helpers::SELLER_ID, true),
        ];
        snapshot.enrichment.reviews = vec![helpers::review(1, "")];
        snapshot.enrichment.plans = vec![
            helpers::plan(1, 4990, "Nenhum"),
            helpers::plan(2, 9990, "Popular"),
        ];

        let response = assemble(&snapshot, false);

        let codes: Vec<_> = response.pixels.iter().map(|p| p.code.as_str()).collect();

        assert_eq!(codes, ["pixel-1", "pixel-3"]);
        assert_eq!(
            response.pixels[0].google_ads_conversion_label.as_deref(),
            Some("AW-1/abc")
        );
        assert_eq!(response.pixels[1].google_ads_conversion_label, None);

        assert_eq!(response.reviews[0].description, None);
        assert_eq!(
            response.reviews[0].photo.as_deref(),
            Some("https://cdn.example.com/reviews/1.jpg")
        );

        assert_eq!(response.plans[0].tag, None);
        assert_eq!(response.plans[1].tag.as_deref(), Some("Popular"));
        assert_eq!(response.plans[1].price, Decimal::new(9990, 2));
    }

    #[test]
    fn affiliate_settings_are_summarised() {
        let mut snapshot = snapshot();
        snapshot.affiliate_settings = Some(helpers::affiliate_settings(vec![helpers::OFFER_UUID]));

        assert_eq!(
            assemble(&snapshot, false).affiliate_settings,
            Some(AffiliateSettingsSummary {
                commission_preference: "LAST_CLICK".to_string(),
                cookie_lifetime: 30,
            })
        );
    }
}
