//! API router.
//!
//! Returns a composable `Router` that can be mounted on any axum server.
//! Routes are nested under `/api/`.

use axum::http::{header, Method};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

use crate::api::endpoints;
use crate::api::types::ApiContext;

/// Build the API router with default limits.
pub fn lab_api_router() -> Router {
    build_router(ApiContext::default())
}

/// Build router from a pre-constructed `ApiContext`.
pub fn build_router(ctx: ApiContext) -> Router {
    // The portal web client calls from its own origin.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    let routes = Router::new()
        .route("/health", get(endpoints::health::check))
        .route("/labs/analyze", post(endpoints::labs::analyze))
        .route("/labs/patterns", get(endpoints::labs::patterns))
        .with_state(ctx);

    Router::new().nest("/api", routes).layer(cors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    fn json_request(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let body = to_bytes(response.into_body(), 1 << 20).await.unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn health_returns_ok() {
        let app = lab_api_router();
        let req = Request::builder()
            .uri("/api/health")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(req).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["status"], "ok");
        assert_eq!(json["version"], crate::config::APP_VERSION);
    }

    #[tokio::test]
    async fn analyze_returns_patterns_and_scores() {
        let app = lab_api_router();
        let req = json_request(
            "/api/labs/analyze",
            r#"{"labValues":[{"testName":"Fasting Glucose","result":"145 mg/dL"}]}"#,
        );
        let response = app.oneshot(req).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["patterns"][0]["patternType"], "diabetes");
        assert_eq!(json["patterns"][0]["severity"], "high");
        assert_eq!(json["patterns"][0]["relatedTests"][0], "Fasting Glucose");
        assert_eq!(json["riskScores"]["diabetes"], 50.0);
        assert_eq!(json["riskScores"]["kidneyDisease"], 0.0);
        assert!(json["analysisId"].as_str().is_some_and(|id| id.len() == 36));
        assert!(json["analyzedAt"].is_string());
    }

    #[tokio::test]
    async fn analyze_empty_batch_is_not_an_error() {
        let app = lab_api_router();
        let req = json_request("/api/labs/analyze", r#"{"labValues":[]}"#);
        let response = app.oneshot(req).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["patterns"], serde_json::json!([]));
        assert_eq!(json["riskScores"]["cardiovascular"], 0.0);
    }

    #[tokio::test]
    async fn analyze_malformed_json_returns_400() {
        let app = lab_api_router();
        let req = json_request("/api/labs/analyze", r#"{"labValues":[{"testName":"TSH"}]}"#);
        let response = app.oneshot(req).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["error"]["code"], "BAD_REQUEST");
    }

    #[tokio::test]
    async fn analyze_rejects_oversized_batch() {
        let app = build_router(ApiContext::new(2));
        let req = json_request(
            "/api/labs/analyze",
            r#"{"labValues":[
                {"testName":"CRP","result":"4"},
                {"testName":"ESR","result":"35"},
                {"testName":"WBC","result":"12"}
            ]}"#,
        );
        let response = app.oneshot(req).await.unwrap();

        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
        let json = body_json(response).await;
        assert_eq!(json["error"]["code"], "BATCH_TOO_LARGE");
    }

    #[tokio::test]
    async fn patterns_catalogue_in_detector_order() {
        let app = lab_api_router();
        let req = Request::builder()
            .uri("/api/labs/patterns")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(req).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        let patterns = json["patterns"].as_array().unwrap();
        assert_eq!(patterns.len(), 10);
        assert_eq!(patterns[0]["patternType"], "metabolic_syndrome");
        assert_eq!(patterns[9]["patternType"], "systemic_inflammation");
    }

    #[tokio::test]
    async fn unknown_route_returns_404() {
        let app = lab_api_router();
        let req = Request::builder()
            .uri("/api/labs/unknown")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
