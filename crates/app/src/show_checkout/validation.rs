//! Structural request checks.

use std::{collections::BTreeMap, net::IpAddr};

use url::Url;
use uuid::Uuid;

use crate::{domain::offers::models::OfferUuid, show_checkout::request::ShowCheckoutRequest};

/// Field name to reason.
pub type ValidationErrors = BTreeMap<&'static str, String>;

/// Whether `value` is a hyphenated 8-4-4-4-12 hex UUID, in any letter case.
pub(crate) fn is_hyphenated_uuid(value: &str) -> bool {
    value.len() == 36 && Uuid::try_parse(value).is_ok()
}

/// Validate a request, returning the parsed offer UUID.
pub(crate) fn validate(request: &ShowCheckoutRequest) -> Result<OfferUuid, ValidationErrors> {
    let mut errors = ValidationErrors::new();

    let offer_uuid = if request.offer_uuid.is_empty() {
        errors.insert("offer_uuid", "is required".to_string());
        None
    } else if is_hyphenated_uuid(&request.offer_uuid) {
        Uuid::try_parse(&request.offer_uuid)
            .ok()
            .map(OfferUuid::from_uuid)
    } else {
        errors.insert("offer_uuid", "must be a valid UUID".to_string());
        None
    };

    if let Some(original_url) = &request.original_url
        && Url::parse(original_url).is_err()
    {
        errors.insert("original_url", "must be a valid URL".to_string());
    }

    let client = &request.client_info;

    if let Some(ip) = &client.ip
        && ip.parse::<IpAddr>().is_err()
    {
        errors.insert("ip", "must be a valid IP address".to_string());
    }

    let utm = &request.utm_info;

    for (field, value, min) in [
        ("browser", &client.browser, 1),
        ("browser_version", &client.browser_version, 1),
        ("os", &client.os, 1),
        ("os_version", &client.os_version, 1),
        ("country", &client.country, 2),
        ("state", &client.state, 2),
        ("city", &client.city, 1),
        ("src", &utm.src, 1),
        ("utm_source", &utm.utm_source, 1),
        ("utm_medium", &utm.utm_medium, 1),
        ("utm_campaign", &utm.utm_campaign, 1),
        ("utm_term", &utm.utm_term, 1),
        ("utm_content", &utm.utm_content, 1),
    ] {
        if let Some(value) = value
            && value.chars().count() < min
        {
            errors.insert(field, format!("must be at least {min} characters"));
        }
    }

    match offer_uuid {
        Some(offer_uuid) if errors.is_empty() => Ok(offer_uuid),
        _ => Err(errors),
    }
}
