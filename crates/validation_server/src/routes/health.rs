//! Health check and readiness endpoints
//!
//! Provides health and readiness probes for load balancer integration and
//! service availability monitoring.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};

use super::AppState;

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    /// Health status
    pub status: String,
    /// Server version
    pub version: String,
    /// Server uptime in seconds
    pub uptime_secs: u64,
    /// Number of rules each trade is checked against
    pub rule_count: usize,
    /// Active date parse policy
    pub date_policy: String,
}

/// Readiness response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadyResponse {
    /// Ready status
    pub ready: bool,
}

/// Build the health routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_handler))
        .route("/ready", get(ready_handler))
}

/// GET /health - Health check endpoint
async fn health_handler(State(state): State<AppState>) -> impl IntoResponse {
    let response = HealthResponse {
        status: "healthy".to_string(),
        version: crate::VERSION.to_string(),
        uptime_secs: state.start_time.elapsed().as_secs(),
        rule_count: state.pipeline.rules().len(),
        date_policy: state.config.rules.date_policy.to_string(),
    };

    (StatusCode::OK, Json(response))
}

/// GET /ready - Readiness probe endpoint
async fn ready_handler() -> impl IntoResponse {
    (StatusCode::OK, Json(ReadyResponse { ready: true }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ServerConfig;
    use axum::body::Body;
    use axum::http::Request;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn create_test_state() -> AppState {
        AppState::new(Arc::new(ServerConfig::default()))
    }

    async fn get_health(router: Router) -> HealthResponse {
        let response = router
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_health_endpoint_returns_json() {
        let health = get_health(routes().with_state(create_test_state())).await;

        assert_eq!(health.status, "healthy");
        assert_eq!(health.version, crate::VERSION);
        assert_eq!(health.rule_count, 7);
        assert_eq!(health.date_policy, "lenient");
    }

    #[tokio::test]
    async fn test_health_reports_strict_pipeline() {
        let mut config = ServerConfig::default();
        config.rules.date_policy = trade_validation::DatePolicy::Strict;
        let state = AppState::new(Arc::new(config));

        let health = get_health(routes().with_state(state)).await;

        assert_eq!(health.rule_count, 8);
        assert_eq!(health.date_policy, "strict");
    }

    #[tokio::test]
    async fn test_ready_endpoint_returns_json() {
        let router = routes().with_state(create_test_state());

        let response = router
            .oneshot(Request::builder().uri("/ready").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let ready: ReadyResponse = serde_json::from_slice(&body).unwrap();

        assert!(ready.ready);
    }

    #[tokio::test]
    async fn test_health_response_camel_case() {
        let router = routes().with_state(create_test_state());

        let response = router
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json_str = std::str::from_utf8(&body).unwrap();

        assert!(json_str.contains("uptimeSecs"));
        assert!(json_str.contains("ruleCount"));
        assert!(json_str.contains("datePolicy"));
    }
}
