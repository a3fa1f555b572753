//! Affiliate Models

use crate::{domain::offers::models::OfferUuid, uuids::TypedUuid};

/// Affiliate UUID
pub type AffiliateUuid = TypedUuid<Affiliate>;

/// Affiliate Model
#[derive(Debug, Clone, PartialEq)]
pub struct Affiliate {
    pub id: i64,
    pub uuid: AffiliateUuid,
    pub user_id: i64,
}

/// Product Affiliate Settings Model
///
/// Per-product affiliation terms and the offers affiliates may promote.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductAffiliateSettings {
    pub id: i64,
    pub product_id: i64,
    pub commission_preference: String,

    /// Attribution cookie lifetime, in days.
    pub cookie_lifetime: i32,

    pub last_offers: Vec<OfferUuid>,
}

impl ProductAffiliateSettings {
    #[must_use]
    pub fn allows_offer(&self, offer: OfferUuid) -> bool {
        self.last_offers.contains(&offer)
    }
}
