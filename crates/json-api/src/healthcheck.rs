//! Healthcheck and API index handlers

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

/// Healthcheck response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct HealthResponse {
    /// Service status
    pub status: String,
}

/// API index response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct IndexResponse {
    /// Service banner
    pub message: String,
}

/// Healthcheck handler
#[endpoint(tags("health"), summary = "Health check endpoint")]
pub(crate) async fn handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

/// API index handler
///
/// Answers with a fixed banner so clients can confirm they reached the API.
#[endpoint(tags("health"), summary = "API index")]
pub(crate) async fn index() -> Json<IndexResponse> {
    Json(IndexResponse {
        message: "E-commerce Store API".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use super::*;

    fn make_service() -> Service {
        Service::new(
            Router::with_path("api")
                .get(index)
                .push(Router::with_path("healthcheck").get(handler)),
        )
    }

    #[tokio::test]
    async fn test_healthcheck() -> TestResult {
        let response: HealthResponse = TestClient::get("http://example.com/api/healthcheck")
            .send(&make_service())
            .await
            .take_json()
            .await?;

        assert_eq!(response.status, "ok", "healthcheck status");

        Ok(())
    }

    #[tokio::test]
    async fn test_index_banner() -> TestResult {
        let response: IndexResponse = TestClient::get("http://example.com/api")
            .send(&make_service())
            .await
            .take_json()
            .await?;

        assert_eq!(response.message, "E-commerce Store API", "index banner");

        Ok(())
    }
}
