//! Show Checkout Handler

use salvo::{
    http::header::{COOKIE, USER_AGENT},
    oapi::extract::PathParam,
    prelude::*,
};
use tracing::debug;

use checkout_app::show_checkout::request::RawCheckoutParams;

use crate::{checkouts::errors::into_error_response, extensions::*, observability};

/// Show Checkout Handler
///
/// Resolves an offer's checkout page and records the visit. Offers that
/// cannot be sold answer `200` with the `NO_ACTION_REQUIRED` error body.
#[endpoint(tags("checkout"), summary = "Show Checkout")]
pub(crate) async fn handler(
    offer: PathParam<String>,
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<(), StatusError> {
    let state = depot.state_or_500()?;

    let params = RawCheckoutParams {
        offer_id: offer.into_inner(),
        query: req
            .queries()
            .iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect(),
        user_agent: req.header::<String>(USER_AGENT),
        cookie: req.header::<String>(COOKIE),
    };

    match state.show_checkout.show_checkout(params.into()).await {
        Ok(page) => {
            observability::observe_checkout_outcome("rendered");

            debug!(checkout_uuid = %page.config.checkout_uuid, "checkout rendered");

            res.render(Json(page));
        }
        Err(error) => {
            observability::observe_checkout_outcome(error.outcome());

            let (status, body) = into_error_response(&error);

            res.status_code(status);
            res.render(Json(body));
        }
    }

    Ok(())
}
