//! Request ID propagation.

use salvo::{
    http::{StatusCode, header::HeaderValue},
    prelude::Response,
};
use tracing::warn;
use uuid::Uuid;

pub(super) const REQUEST_ID_HEADER: &str = "x-request-id";

/// Reuse the caller's request id, or mint a time-ordered one.
pub(super) fn resolve_request_id(header_value: Option<String>) -> String {
    header_value
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| Uuid::now_v7().to_string())
}

pub(super) fn set_request_id_header(res: &mut Response, request_id: &str) {
    match HeaderValue::from_str(request_id) {
        Ok(value) => {
            res.headers_mut().insert(REQUEST_ID_HEADER, value);
        }
        Err(source) => {
            warn!(request_id, "request id is not a valid header value: {source}");
        }
    }
}

/// Salvo leaves the status unset for plain successful renders.
pub(super) fn response_status_or_ok(status_code: Option<StatusCode>) -> StatusCode {
    status_code.unwrap_or(StatusCode::OK)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caller_request_ids_are_kept() {
        assert_eq!(
            resolve_request_id(Some(" req-123 ".to_string())),
            "req-123"
        );
    }

    #[test]
    fn blank_request_ids_are_replaced() {
        let generated = resolve_request_id(Some("   ".to_string()));

        assert!(Uuid::parse_str(&generated).is_ok(), "expected a uuid, got {generated}");
        assert!(Uuid::parse_str(&resolve_request_id(None)).is_ok());
    }
}
