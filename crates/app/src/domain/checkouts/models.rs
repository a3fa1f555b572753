//! Checkout Models

use std::{collections::BTreeMap, fmt, str::FromStr};

use jiff::Timestamp;

use crate::uuids::TypedUuid;

/// Checkout UUID
pub type CheckoutUuid = TypedUuid<Checkout>;

/// Ad-platform tracking identifiers captured when the checkout was opened,
/// keyed by identifier name (`fbclid`, `fbp`, `gclid`, ...).
pub type PixelData = BTreeMap<String, String>;

/// Checkout lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutStatus {
    Accessed,
    AbandonedCart,
    Recovered,
    SaleFinalized,
}

impl CheckoutStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Accessed => "ACCESSED",
            Self::AbandonedCart => "ABANDONED_CART",
            Self::Recovered => "RECOVERED",
            Self::SaleFinalized => "SALE_FINALIZED",
        }
    }
}

impl fmt::Display for CheckoutStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a stored status is not one of the known lifecycle values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown checkout status: {0}")]
pub struct UnknownCheckoutStatus(pub String);

impl FromStr for CheckoutStatus {
    type Err = UnknownCheckoutStatus;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "ACCESSED" => Ok(Self::Accessed),
            "ABANDONED_CART" => Ok(Self::AbandonedCart),
            "RECOVERED" => Ok(Self::Recovered),
            "SALE_FINALIZED" => Ok(Self::SaleFinalized),
            other => Err(UnknownCheckoutStatus(other.to_string())),
        }
    }
}

/// Checkout Model
///
/// One record per checkout page visit, snapshotting the visitor's device,
/// location and campaign attribution at access time.
#[derive(Debug, Clone, PartialEq)]
pub struct Checkout {
    pub uuid: CheckoutUuid,
    pub code: Option<String>,
    pub offer_id: Option<i64>,
    pub product_id: i64,
    pub affiliate_id: Option<i64>,
    pub status: CheckoutStatus,

    pub user_agent: Option<String>,
    pub os: Option<String>,
    pub os_version: Option<String>,
    pub browser: Option<String>,
    pub browser_version: Option<String>,
    pub is_mobile: bool,
    pub ip: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub lat: Option<String>,
    pub lon: Option<String>,
    pub currency: String,

    pub email_sent_amount: i32,
    pub sms_sent_amount: i32,

    pub src: Option<String>,
    pub utm_source: Option<String>,
    pub utm_medium: Option<String>,
    pub utm_campaign: Option<String>,
    pub utm_term: Option<String>,
    pub utm_content: Option<String>,

    pub mercado_pago_device_session_id: Option<String>,

    /// `None` when no tracking identifier was present; never an empty map.
    pub pixel_data: Option<PixelData>,
    pub original_url: Option<String>,

    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// New Checkout Data
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewCheckout {
    pub offer_id: Option<i64>,
    pub product_id: i64,
    pub affiliate_id: Option<i64>,
    pub currency: String,

    pub user_agent: Option<String>,
    pub os: Option<String>,
    pub os_version: Option<String>,
    pub browser: Option<String>,
    pub browser_version: Option<String>,
    pub is_mobile: bool,
    pub ip: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub lat: Option<String>,
    pub lon: Option<String>,

    pub src: Option<String>,
    pub utm_source: Option<String>,
    pub utm_medium: Option<String>,
    pub utm_campaign: Option<String>,
    pub utm_term: Option<String>,
    pub utm_content: Option<String>,

    pub pixel_data: Option<PixelData>,
    pub original_url: Option<String>,
}

impl Checkout {
    /// Open a new checkout in the `ACCESSED` state with a fresh UUID.
    #[must_use]
    pub fn accessed(new: NewCheckout, now: Timestamp) -> Self {
        Self {
            uuid: CheckoutUuid::new(),
            code: None,
            offer_id: new.offer_id,
            product_id: new.product_id,
            affiliate_id: new.affiliate_id,
            status: CheckoutStatus::Accessed,
            user_agent: new.user_agent,
            os: new.os,
            os_version: new.os_version,
            browser: new.browser,
            browser_version: new.browser_version,
            is_mobile: new.is_mobile,
            ip: new.ip,
            city: new.city,
            state: new.state,
            country: new.country,
            lat: new.lat,
            lon: new.lon,
            currency: new.currency,
            email_sent_amount: 0,
            sms_sent_amount: 0,
            src: new.src,
            utm_source: new.utm_source,
            utm_medium: new.utm_medium,
            utm_campaign: new.utm_campaign,
            utm_term: new.utm_term,
            utm_content: new.utm_content,
            mercado_pago_device_session_id: None,
            pixel_data: new.pixel_data.filter(|data| !data.is_empty()),
            original_url: new.original_url,
            created_at: now,
            updated_at: now,
        }
    }

    #[must_use]
    pub fn pixel_value(&self, key: &str) -> Option<&str> {
        self.pixel_data
            .as_ref()
            .and_then(|data| data.get(key))
            .map(String::as_str)
    }

    pub fn touch(&mut self, now: Timestamp) {
        self.updated_at = now;
    }

    #[must_use]
    pub fn is_accessed(&self) -> bool {
        self.status == CheckoutStatus::Accessed
    }

    #[must_use]
    pub fn is_abandoned_cart(&self) -> bool {
        self.status == CheckoutStatus::AbandonedCart
    }

    #[must_use]
    pub fn is_recovered(&self) -> bool {
        self.status == CheckoutStatus::Recovered
    }

    #[must_use]
    pub fn is_sale_finalized(&self) -> bool {
        self.status == CheckoutStatus::SaleFinalized
    }
}
