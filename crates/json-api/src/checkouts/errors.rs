//! Checkout Errors

use std::collections::BTreeMap;

use salvo::{http::StatusCode, oapi::ToSchema};
use serde::{Deserialize, Serialize};

use checkout_app::show_checkout::errors::{NO_ACTION_REQUIRED_MESSAGE, ShowCheckoutError};

/// Error body shared by every checkout failure.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ErrorResponse {
    /// Always `true`
    pub error: bool,

    /// Machine-readable outcome code
    pub code: String,

    /// Message safe to show to the buyer
    pub message: String,

    /// HTTP status, repeated for clients that only read the body
    pub status: u16,

    /// Field to reason, for validation failures
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<BTreeMap<String, String>>,
}

impl ErrorResponse {
    fn new(status: StatusCode, code: &str, message: &str) -> Self {
        Self {
            error: true,
            code: code.to_string(),
            message: message.to_string(),
            status: status.as_u16(),
            details: None,
        }
    }
}

/// Status and body for a pipeline error. Turning a visit away is not a
/// failure for the storefront, so it is a 200.
pub(crate) fn into_error_response(error: &ShowCheckoutError) -> (StatusCode, ErrorResponse) {
    match error {
        ShowCheckoutError::NoActionRequired { .. } => (
            StatusCode::OK,
            ErrorResponse::new(
                StatusCode::OK,
                "NO_ACTION_REQUIRED",
                NO_ACTION_REQUIRED_MESSAGE,
            ),
        ),
        ShowCheckoutError::Validation(details) => {
            let mut body = ErrorResponse::new(
                StatusCode::BAD_REQUEST,
                "VALIDATION_ERROR",
                "Invalid request parameters",
            );

            body.details = Some(
                details
                    .iter()
                    .map(|(field, reason)| ((*field).to_string(), reason.clone()))
                    .collect(),
            );

            (StatusCode::BAD_REQUEST, body)
        }
        ShowCheckoutError::Internal(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            ErrorResponse::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "Internal server error",
            ),
        ),
    }
}
