//! Tracking identifiers from query parameters and cookies.

use crate::{
    domain::{checkouts::models::PixelData, products::models::ProductUuid},
    show_checkout::request::ShowCheckoutRequest,
};

/// Find the first non-empty value of the cookie `name` in a raw `Cookie` header.
pub(crate) fn cookie_value<'a>(cookie: Option<&'a str>, name: &str) -> Option<&'a str> {
    cookie?
        .split(';')
        .filter_map(|part| part.trim().strip_prefix(name)?.strip_prefix('='))
        .find(|value| !value.is_empty())
}

/// Name of the cookie holding the affiliate code for a product.
pub(crate) fn affiliate_cookie_name(product_uuid: ProductUuid) -> String {
    format!("aff.{product_uuid}")
}

/// The affiliate code to attribute, the explicit one first.
pub(crate) fn affiliate_candidate(
    request: &ShowCheckoutRequest,
    product_uuid: ProductUuid,
) -> Option<String> {
    request.aff.clone().or_else(|| {
        cookie_value(
            request.cookie.as_deref(),
            &affiliate_cookie_name(product_uuid),
        )
        .map(str::to_string)
    })
}

/// Collect ad-click identifiers. `None` when nothing was found.
pub(crate) fn extract_pixel_data(request: &ShowCheckoutRequest) -> Option<PixelData> {
    let cookie = request.cookie.as_deref();

    let from_request_or_cookie = |value: &Option<String>, cookie_name: &str| {
        value
            .clone()
            .or_else(|| cookie_value(cookie, cookie_name).map(str::to_string))
    };

    let entries = [
        ("fbclid", from_request_or_cookie(&request.fbclid, "_fbc")),
        ("fbp", cookie_value(cookie, "_fbp").map(str::to_string)),
        ("gclid", from_request_or_cookie(&request.gclid, "_gcl_au")),
        ("ttclid", from_request_or_cookie(&request.ttclid, "ttclid")),
        ("ttp", cookie_value(cookie, "_ttp").map(str::to_string)),
        ("click_id", request.click_id.clone()),
    ];

    let pixel_data: PixelData = entries
        .into_iter()
        .filter_map(|(key, value)| Some((key.to_string(), value?)))
        .collect();

    (!pixel_data.is_empty()).then_some(pixel_data)
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;

    #[test]
    fn cookie_lookup_matches_exact_names() {
        let cookie = Some("_fbp=fb.1.123; _fbc=fb.1.456;theme=dark");

        assert_eq!(cookie_value(cookie, "_fbp"), Some("fb.1.123"));
        assert_eq!(cookie_value(cookie, "_fbc"), Some("fb.1.456"));
        assert_eq!(cookie_value(cookie, "theme"), Some("dark"));
        assert_eq!(cookie_value(cookie, "_fb"), None);
        assert_eq!(cookie_value(None, "_fbp"), None);
    }

    #[test]
    fn empty_cookie_values_keep_scanning() {
        let cookie = Some("ttclid=; ttclid=later");

        assert_eq!(cookie_value(cookie, "ttclid"), Some("later"));
        assert_eq!(cookie_value(Some("ttclid="), "ttclid"), None);
    }

    #[test]
    fn explicit_identifiers_win_over_cookies() {
        let request = ShowCheckoutRequest {
            fbclid: Some("from-query".to_string()),
            cookie: Some("_fbc=from-cookie; _gcl_au=gcl; _ttp=ttp".to_string()),
            ..ShowCheckoutRequest::default()
        };

        let pixel_data = extract_pixel_data(&request).unwrap_or_default();

        assert_eq!(pixel_data.get("fbclid").map(String::as_str), Some("from-query"));
        assert_eq!(pixel_data.get("gclid").map(String::as_str), Some("gcl"));
        assert_eq!(pixel_data.get("ttp").map(String::as_str), Some("ttp"));
        assert_eq!(pixel_data.get("fbp"), None);
    }

    #[test]
    fn click_id_is_never_read_from_cookies() {
        let request = ShowCheckoutRequest {
            cookie: Some("click_id=abc; clickId=abc".to_string()),
            ..ShowCheckoutRequest::default()
        };

        assert_eq!(extract_pixel_data(&request), None);
    }

    #[test]
    fn no_identifiers_means_no_pixel_data() {
        let request = ShowCheckoutRequest {
            cookie: Some(String::new()),
            ..ShowCheckoutRequest::default()
        };

        assert_eq!(extract_pixel_data(&request), None);
    }

    #[test]
    fn affiliate_code_prefers_the_explicit_value() {
        let product = ProductUuid::from_uuid(Uuid::from_u128(7));
        let cookie = format!("{}=cookie-aff", affiliate_cookie_name(product));

        let request = ShowCheckoutRequest {
            aff: Some("query-aff".to_string()),
            cookie: Some(cookie.clone()),
            ..ShowCheckoutRequest::default()
        };

        assert_eq!(
            affiliate_candidate(&request, product).as_deref(),
            Some("query-aff")
        );

        let request = ShowCheckoutRequest {
            cookie: Some(cookie),
            ..ShowCheckoutRequest::default()
        };

        assert_eq!(
            affiliate_candidate(&request, product).as_deref(),
            Some("cookie-aff")
        );
    }

    #[test]
    fn affiliate_cookie_is_scoped_to_the_product() {
        let product = ProductUuid::from_uuid(Uuid::from_u128(7));
        let other = ProductUuid::from_uuid(Uuid::from_u128(8));

        let request = ShowCheckoutRequest {
            cookie: Some(format!("{}=other-aff", affiliate_cookie_name(other))),
            ..ShowCheckoutRequest::default()
        };

        assert_eq!(affiliate_candidate(&request, product), None);
    }
}
