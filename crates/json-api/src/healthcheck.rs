//! Health Check Handler

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

const SERVICE_NAME: &str = "checkout-api";

/// Health check response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Always `healthy` while the process serves requests
    pub status: String,

    /// Service identifier
    pub service: String,
}

/// Health check handler
///
/// Liveness only: the database is not probed.
#[endpoint(tags("health"), summary = "Health check endpoint")]
pub(crate) async fn handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: SERVICE_NAME.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use salvo::{
        prelude::*,
        test::{ResponseExt, TestClient},
    };
    use testresult::TestResult;

    use super::*;

    #[tokio::test]
    async fn reports_healthy_service() -> TestResult {
        let router = Router::new().push(Router::with_path("health").get(handler));

        let mut response = TestClient::get("http://example.com/health")
            .send(&Service::new(router))
            .await;

        assert_eq!(response.status_code, Some(StatusCode::OK));

        let body: HealthResponse = response.take_json().await?;

        assert_eq!(body.status, "healthy");
        assert_eq!(body.service, "checkout-api");

        Ok(())
    }
}
