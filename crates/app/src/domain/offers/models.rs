//! Offer Models

use crate::uuids::TypedUuid;

/// Offer UUID
pub type OfferUuid = TypedUuid<Offer>;

pub const OFFER_STATUS_ACTIVE: &str = "ACTIVE";
pub const BILLING_TYPE_ONE_TIME: &str = "ONE_TIME";

/// Offer Model
///
/// A purchasable configuration of a product. Prices are integer minor units.
#[derive(Debug, Clone, PartialEq)]
pub struct Offer {
    pub id: i64,
    pub uuid: OfferUuid,
    pub product_id: i64,
    pub checkout_config_id: i64,
    pub status: String,
    pub is_temporary: bool,
    pub price: i64,
    pub billing_type: String,
    pub is_free: bool,
    pub back_redirect_url: String,
    pub back_redirect_url_enabled: bool,
    pub order_bumps_enabled: bool,
}

impl Offer {
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status == OFFER_STATUS_ACTIVE
    }

    /// Active and not a temporary offer.
    #[must_use]
    pub fn is_checkout_eligible(&self) -> bool {
        self.is_active() && !self.is_temporary
    }

    #[must_use]
    pub fn is_one_time(&self) -> bool {
        self.billing_type == BILLING_TYPE_ONE_TIME
    }

    /// The back redirect URL, when enabled and set.
    #[must_use]
    pub fn back_redirect(&self) -> Option<&str> {
        (self.back_redirect_url_enabled && !self.back_redirect_url.is_empty())
            .then_some(self.back_redirect_url.as_str())
    }
}
