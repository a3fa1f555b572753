//! Checkout page requests.

use std::collections::BTreeMap;

/// Device, browser and geolocation details reported by the storefront.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientInfo {
    pub ip: Option<String>,
    pub user_agent: Option<String>,
    pub is_mobile: bool,
    pub browser: Option<String>,
    pub browser_version: Option<String>,
    pub os: Option<String>,
    pub os_version: Option<String>,
    pub country: Option<String>,
    pub state: Option<String>,
    pub city: Option<String>,
    pub lat: Option<String>,
    pub lon: Option<String>,
}

/// Campaign attribution parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UtmInfo {
    pub src: Option<String>,
    pub utm_source: Option<String>,
    pub utm_medium: Option<String>,
    pub utm_campaign: Option<String>,
    pub utm_term: Option<String>,
    pub utm_content: Option<String>,
}

/// Canonical checkout page request, independent of the entrypoint it came from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShowCheckoutRequest {
    pub offer_uuid: String,

    /// Explicit affiliate code. Wins over the affiliate cookie.
    pub aff: Option<String>,

    /// Raw `Cookie` header.
    pub cookie: Option<String>,

    pub client_info: ClientInfo,
    pub utm_info: UtmInfo,
    pub original_url: Option<String>,

    pub fbclid: Option<String>,
    pub gclid: Option<String>,
    pub ttclid: Option<String>,
    pub click_id: Option<String>,
}

/// Request parameters as an HTTP entrypoint sees them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawCheckoutParams {
    /// Offer id taken from the request path.
    pub offer_id: String,

    /// Query string parameters, first value per key.
    pub query: BTreeMap<String, String>,

    /// `User-Agent` header.
    pub user_agent: Option<String>,

    /// `Cookie` header.
    pub cookie: Option<String>,
}

impl RawCheckoutParams {
    fn param(&self, key: &str) -> Option<String> {
        self.query.get(key).and_then(|value| non_empty(value))
    }
}

impl From<RawCheckoutParams> for ShowCheckoutRequest {
    fn from(raw: RawCheckoutParams) -> Self {
        let user_agent = raw
            .user_agent
            .as_deref()
            .and_then(non_empty)
            .or_else(|| raw.param("userAgent"));

        Self {
            offer_uuid: normalize_offer_id(&raw.offer_id),
            aff: raw.param("aff"),
            cookie: raw.cookie.as_deref().and_then(non_empty),
            client_info: ClientInfo {
                ip: raw.param("ip"),
                user_agent,
                is_mobile: raw.query.get("isMobile").is_some_and(|value| value == "true"),
                browser: raw.param("browser"),
                browser_version: raw.param("browserVersion"),
                os: raw.param("os"),
                os_version: raw.param("osVersion"),
                country: raw.param("country"),
                state: raw.param("state"),
                city: raw.param("city"),
                lat: raw.param("lat"),
                lon: raw.param("lon"),
            },
            utm_info: UtmInfo {
                src: raw.param("src"),
                utm_source: raw.param("utm_source"),
                utm_medium: raw.param("utm_medium"),
                utm_campaign: raw.param("utm_campaign"),
                utm_term: raw.param("utm_term"),
                utm_content: raw.param("utm_content"),
            },
            original_url: raw.param("originalUrl"),
            fbclid: raw.param("fbclid"),
            gclid: raw.param("gclid"),
            ttclid: raw.param("ttclid"),
            click_id: raw.param("clickId"),
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

/// Trim the path segment and hyphenate a bare 32-digit hex id.
fn normalize_offer_id(offer_id: &str) -> String {
    let offer_id = offer_id.trim();

    if offer_id.len() != 32 || !offer_id.bytes().all(|b| b.is_ascii_hexdigit()) {
        return offer_id.to_string();
    }

    format!(
        "{}-{}-{}-{}-{}",
        &offer_id[0..8],
        &offer_id[8..12],
        &offer_id[12..16],
        &offer_id[16..20],
        &offer_id[20..32]
    )
}
