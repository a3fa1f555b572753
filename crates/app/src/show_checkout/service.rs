//! Show Checkout Service

use std::sync::Arc;

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use crate::{
    database::Db,
    domain::{
        affiliates::{
            AffiliatesRepository, PgAffiliatesRepository, PgProductAffiliateSettingsRepository,
            ProductAffiliateSettingsRepository,
            models::{AffiliateUuid, ProductAffiliateSettings},
        },
        checkout_configs::{
            CheckoutConfigsRepository, PgCheckoutConfigsRepository, models::CheckoutConfig,
        },
        checkouts::{
            CheckoutsRepository, PgCheckoutsRepository,
            models::{Checkout, NewCheckout},
        },
        companies::{CompaniesRepository, PgCompaniesRepository, models::Company},
        discounts::{DiscountsRepository, PgDiscountsRepository},
        formats::{FormatsRepository, PgFormatsRepository, models::Format},
        offers::{
            OffersRepository, PgOffersRepository,
            models::{Offer, OfferUuid},
        },
        order_bumps::{OrderBumpsRepository, PgOrderBumpsRepository, models::OrderBump},
        pixels::{PgPixelsRepository, PixelsRepository, models::Pixel},
        plans::{PgPlansRepository, PlansRepository, models::Plan},
        products::{PgProductsRepository, ProductsRepository, models::Product},
        reviews::{PgReviewsRepository, ReviewsRepository, models::Review},
        users::{PgUsersRepository, UsersRepository, models::User},
    },
    media::{BaseUrlFileResolver, FileResolver},
    settings::CheckoutSettings,
    show_checkout::{
        assembler::{Assembler, CheckoutSnapshot, Enrichment, ResolvedOrderBump},
        deadline::Deadline,
        errors::{ShowCheckoutError, no_action},
        request::ShowCheckoutRequest,
        response::ShowCheckoutResponse,
        tracking, validation,
    },
};

#[automock]
#[async_trait]
pub trait ShowCheckoutService: Send + Sync {
    /// Resolve an offer's checkout page and record the visit.
    async fn show_checkout(
        &self,
        request: ShowCheckoutRequest,
    ) -> Result<ShowCheckoutResponse, ShowCheckoutError>;
}

/// One collaborator per entity the pipeline reads or writes.
#[derive(Clone)]
pub struct Repositories {
    pub offers: Arc<dyn OffersRepository>,
    pub products: Arc<dyn ProductsRepository>,
    pub users: Arc<dyn UsersRepository>,
    pub companies: Arc<dyn CompaniesRepository>,
    pub formats: Arc<dyn FormatsRepository>,
    pub checkout_configs: Arc<dyn CheckoutConfigsRepository>,
    pub affiliates: Arc<dyn AffiliatesRepository>,
    pub affiliate_settings: Arc<dyn ProductAffiliateSettingsRepository>,
    pub checkouts: Arc<dyn CheckoutsRepository>,
    pub order_bumps: Arc<dyn OrderBumpsRepository>,
    pub reviews: Arc<dyn ReviewsRepository>,
    pub pixels: Arc<dyn PixelsRepository>,
    pub plans: Arc<dyn PlansRepository>,
    pub discounts: Arc<dyn DiscountsRepository>,
}

impl Repositories {
    #[must_use]
    pub fn postgres(db: &Db) -> Self {
        Self {
            offers: Arc::new(PgOffersRepository::new(db.clone())),
            products: Arc::new(PgProductsRepository::new(db.clone())),
            users: Arc::new(PgUsersRepository::new(db.clone())),
            companies: Arc::new(PgCompaniesRepository::new(db.clone())),
            formats: Arc::new(PgFormatsRepository::new(db.clone())),
            checkout_configs: Arc::new(PgCheckoutConfigsRepository::new(db.clone())),
            affiliates: Arc::new(PgAffiliatesRepository::new(db.clone())),
            affiliate_settings: Arc::new(PgProductAffiliateSettingsRepository::new(db.clone())),
            checkouts: Arc::new(PgCheckoutsRepository::new(db.clone())),
            order_bumps: Arc::new(PgOrderBumpsRepository::new(db.clone())),
            reviews: Arc::new(PgReviewsRepository::new(db.clone())),
            pixels: Arc::new(PgPixelsRepository::new(db.clone())),
            plans: Arc::new(PgPlansRepository::new(db.clone())),
            discounts: Arc::new(PgDiscountsRepository::new(db.clone())),
        }
    }
}

/// Offer and everything it needs to be sold, all eligible.
struct EligibleOffer {
    offer: Offer,
    product: Product,
    company: Company,
    format: Format,
    config: CheckoutConfig,
}

/// A successful affiliate attribution.
struct Attribution {
    affiliate_id: i64,
    user_id: i64,
    settings: ProductAffiliateSettings,
}

#[derive(Clone)]
pub struct ShowCheckout {
    repositories: Repositories,
    files: Arc<dyn FileResolver>,
    settings: CheckoutSettings,
}

impl ShowCheckout {
    #[must_use]
    pub fn new(
        repositories: Repositories,
        files: Arc<dyn FileResolver>,
        settings: CheckoutSettings,
    ) -> Self {
        Self {
            repositories,
            files,
            settings,
        }
    }

    /// Postgres repositories with media resolved against the configured base URL.
    #[must_use]
    pub fn postgres(db: &Db, settings: CheckoutSettings) -> Self {
        let files = Arc::new(BaseUrlFileResolver::new(settings.media_base_url.clone()));

        Self::new(Repositories::postgres(db), files, settings)
    }

    async fn run(
        &self,
        request: ShowCheckoutRequest,
    ) -> Result<ShowCheckoutResponse, ShowCheckoutError> {
        let offer_uuid = validation::validate(&request).map_err(ShowCheckoutError::Validation)?;

        let deadline = Deadline::after(self.settings.request_timeout);

        let eligible = self.resolve_eligible_offer(offer_uuid, deadline).await?;
        let attribution = self.resolve_attribution(&request, &eligible, deadline).await?;

        let checkout = self
            .record_checkout(&request, &eligible, attribution.as_ref(), deadline)
            .await?;

        let pixel_owner_id = attribution
            .as_ref()
            .map_or(eligible.product.user_id, |attribution| attribution.user_id);

        let enrichment = self.enrich(&eligible, pixel_owner_id, deadline).await;

        let EligibleOffer {
            offer,
            product,
            company,
            format,
            config,
        } = eligible;

        let snapshot = CheckoutSnapshot {
            offer,
            product,
            company,
            format,
            config,
            checkout,
            affiliate_settings: attribution.map(|attribution| attribution.settings),
            enrichment,
        };

        Ok(self.assembler().assemble(&snapshot))
    }

    fn assembler(&self) -> Assembler<'_> {
        Assembler {
            files: self.files.as_ref(),
            is_production: self.settings.is_production(),
        }
    }

    async fn resolve_eligible_offer(
        &self,
        offer_uuid: OfferUuid,
        deadline: Deadline,
    ) -> Result<EligibleOffer, ShowCheckoutError> {
        let repositories = &self.repositories;

        let offer = deadline
            .run(repositories.offers.find_by_uuid(offer_uuid))
            .await?
            .filter(Offer::is_checkout_eligible)
            .ok_or(no_action("offer missing, inactive or temporary"))?;

        let product = deadline
            .run(repositories.products.find_by_id(offer.product_id))
            .await?
            .filter(Product::is_sellable)
            .ok_or(no_action("product missing, inactive or refused"))?;

        deadline
            .run(repositories.users.find_by_id(product.user_id))
            .await?
            .filter(User::can_sell)
            .ok_or(no_action("seller missing, inactive or blocked"))?;

        let company = deadline
            .run(repositories.companies.find_by_id(product.company_id))
            .await?
            .ok_or(no_action("company missing"))?;

        let format = deadline
            .run(repositories.formats.find_by_id(product.format_id))
            .await?
            .ok_or(no_action("product format missing"))?;

        let config = deadline
            .run(
                repositories
                    .checkout_configs
                    .find_by_id(offer.checkout_config_id),
            )
            .await?
            .ok_or(no_action("checkout config missing"))?;

        Ok(EligibleOffer {
            offer,
            product,
            company,
            format,
            config,
        })
    }

    /// An unknown affiliate is skipped, a known but unauthorized one rejects
    /// the whole request.
    async fn resolve_attribution(
        &self,
        request: &ShowCheckoutRequest,
        eligible: &EligibleOffer,
        deadline: Deadline,
    ) -> Result<Option<Attribution>, ShowCheckoutError> {
        let Some(candidate) = tracking::affiliate_candidate(request, eligible.product.uuid) else {
            return Ok(None);
        };

        let Some(affiliate_uuid) = validation::is_hyphenated_uuid(&candidate)
            .then(|| Uuid::try_parse(&candidate).ok())
            .flatten()
            .map(AffiliateUuid::from_uuid)
        else {
            debug!(affiliate = %candidate, "malformed affiliate code, skipping attribution");

            return Ok(None);
        };

        let affiliate = match deadline
            .run(self.repositories.affiliates.find_by_uuid(affiliate_uuid))
            .await
        {
            Ok(Some(affiliate)) => affiliate,
            Ok(None) => {
                debug!(%affiliate_uuid, "unknown affiliate, skipping attribution");

                return Ok(None);
            }
            Err(error) => {
                warn!(%affiliate_uuid, %error, "affiliate lookup failed, skipping attribution");

                return Ok(None);
            }
        };

        deadline
            .run(self.repositories.users.find_by_id(affiliate.user_id))
            .await?
            .filter(User::can_promote)
            .ok_or(no_action("affiliate user missing, inactive or blocked"))?;

        let settings = deadline
            .run(
                self.repositories
                    .affiliate_settings
                    .find_by_product_id(eligible.product.id),
            )
            .await?
            .ok_or(no_action("product affiliate settings missing"))?;

        if !settings.allows_offer(eligible.offer.uuid) {
            return Err(no_action("affiliate not authorized for offer"));
        }

        Ok(Some(Attribution {
            affiliate_id: affiliate.id,
            user_id: affiliate.user_id,
            settings,
        }))
    }

    async fn record_checkout(
        &self,
        request: &ShowCheckoutRequest,
        eligible: &EligibleOffer,
        attribution: Option<&Attribution>,
        deadline: Deadline,
    ) -> Result<Checkout, ShowCheckoutError> {
        let client = request.client_info.clone();
        let utm = request.utm_info.clone();

        let checkout = Checkout::accessed(
            NewCheckout {
                offer_id: Some(eligible.offer.id),
                product_id: eligible.product.id,
                affiliate_id: attribution.map(|attribution| attribution.affiliate_id),
                currency: eligible.product.currency.clone(),
                user_agent: client.user_agent,
                os: client.os,
                os_version: client.os_version,
                browser: client.browser,
                browser_version: client.browser_version,
                is_mobile: client.is_mobile,
                ip: client.ip,
                city: client.city,
                state: client.state,
                country: client.country,
                lat: client.lat,
                lon: client.lon,
                src: utm.src,
                utm_source: utm.utm_source,
                utm_medium: utm.utm_medium,
                utm_campaign: utm.utm_campaign,
                utm_term: utm.utm_term,
                utm_content: utm.utm_content,
                pixel_data: tracking::extract_pixel_data(request),
                original_url: request.original_url.clone(),
            },
            Timestamp::now(),
        );

        deadline
            .run(self.repositories.checkouts.create(&checkout))
            .await?;

        debug!(checkout_uuid = %checkout.uuid, "checkout recorded");

        if let Err(error) = deadline
            .run(
                self.repositories
                    .offers
                    .increment_checkout_count(eligible.offer.uuid),
            )
            .await
        {
            warn!(offer_uuid = %eligible.offer.uuid, %error, "failed to increment checkout count");
        }

        Ok(checkout)
    }

    async fn enrich(
        &self,
        eligible: &EligibleOffer,
        pixel_owner_id: i64,
        deadline: Deadline,
    ) -> Enrichment {
        let (order_bumps, reviews, pixels, plans, has_discount) = tokio::join!(
            self.order_bumps(&eligible.offer, deadline),
            self.reviews(eligible.config.id, deadline),
            self.pixels(pixel_owner_id, eligible.product.id, deadline),
            self.plans(eligible.offer.id, deadline),
            self.has_discount(eligible.product.id, deadline),
        );

        Enrichment {
            order_bumps,
            reviews,
            pixels,
            plans,
            has_discount,
        }
    }

    async fn order_bumps(&self, offer: &Offer, deadline: Deadline) -> Vec<ResolvedOrderBump> {
        if !offer.order_bumps_enabled {
            return Vec::new();
        }

        let bumps = match deadline
            .run(self.repositories.order_bumps.find_all_by_offer_id(offer.id))
            .await
        {
            Ok(bumps) => bumps,
            Err(error) => {
                warn!(offer_id = offer.id, %error, "failed to load order bumps");

                return Vec::new();
            }
        };

        let mut resolved = Vec::with_capacity(bumps.len());

        for bump in bumps {
            if let Some(order_bump) = self.resolve_order_bump(bump, deadline).await {
                resolved.push(order_bump);
            }
        }

        resolved
    }

    /// Resolve a bump's upsold offer, dropping it when anything is missing or ineligible.
    async fn resolve_order_bump(
        &self,
        bump: OrderBump,
        deadline: Deadline,
    ) -> Option<ResolvedOrderBump> {
        let repositories = &self.repositories;

        let offer = deadline
            .run(repositories.offers.find_by_id(bump.offered_offer_id))
            .await
            .ok()
            .flatten()
            .filter(Offer::is_checkout_eligible);

        let Some(offer) = offer else {
            debug!(order_bump_id = bump.id, "order bump offer unavailable, dropping");

            return None;
        };

        let product = deadline
            .run(repositories.products.find_by_id(offer.product_id))
            .await
            .ok()
            .flatten()
            .filter(Product::is_sellable)?;

        let format = deadline
            .run(repositories.formats.find_by_id(product.format_id))
            .await
            .ok()
            .flatten()?;

        Some(ResolvedOrderBump {
            bump,
            offer,
            product,
            format,
        })
    }

    async fn reviews(&self, checkout_config_id: i64, deadline: Deadline) -> Vec<Review> {
        deadline
            .run(
                self.repositories
                    .reviews
                    .find_by_checkout_config_id(checkout_config_id),
            )
            .await
            .unwrap_or_else(|error| {
                warn!(checkout_config_id, %error, "failed to load reviews");

                Vec::new()
            })
    }

    async fn pixels(&self, user_id: i64, product_id: i64, deadline: Deadline) -> Vec<Pixel> {
        deadline
            .run(
                self.repositories
                    .pixels
                    .find_all_by_user_id_and_product_id(user_id, product_id),
            )
            .await
            .unwrap_or_else(|error| {
                warn!(user_id, product_id, %error, "failed to load pixels");

                Vec::new()
            })
    }

    async fn plans(&self, offer_id: i64, deadline: Deadline) -> Vec<Plan> {
        deadline
            .run(self.repositories.plans.find_by_offer_id(offer_id))
            .await
            .unwrap_or_else(|error| {
                warn!(offer_id, %error, "failed to load plans");

                Vec::new()
            })
    }

    async fn has_discount(&self, product_id: i64, deadline: Deadline) -> bool {
        deadline
            .run(self.repositories.discounts.has_any_for_product_id(product_id))
            .await
            .unwrap_or_else(|error| {
                warn!(product_id, %error, "failed to check discounts");

                false
            })
    }
}

#[async_trait]
impl ShowCheckoutService for ShowCheckout {
    async fn show_checkout(
        &self,
        request: ShowCheckoutRequest,
    ) -> Result<ShowCheckoutResponse, ShowCheckoutError> {
        let offer_uuid = request.offer_uuid.clone();

        self.run(request).await.inspect_err(|error| match error {
            ShowCheckoutError::NoActionRequired { reason } => {
                info!(%offer_uuid, reason, "checkout not shown");
            }
            ShowCheckoutError::Validation(details) => {
                debug!(%offer_uuid, ?details, "checkout request rejected");
            }
            ShowCheckoutError::Internal(source) => {
                error!(%offer_uuid, error = %source, "checkout failed");
            }
        })
    }
}
