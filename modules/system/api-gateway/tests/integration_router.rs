#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Full-stack router tests: module routes behind the gateway middleware.

use std::time::Duration;

use api_gateway::{ApiGateway, ApiGatewayConfig};
use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response, StatusCode, header};
use axum::routing::{get, post};
use required_remainder::{ApiDoc, SOLVE_PATH, register_routes};
use serde_json::{Value, json};
use tower::ServiceExt as _;
use utoipa::OpenApi as _;

fn gateway(config: ApiGatewayConfig) -> Router {
    ApiGateway::new(config)
        .with_openapi(ApiDoc::openapi())
        .build_router(register_routes(Router::new()))
        .unwrap()
}

fn app() -> Router {
    gateway(ApiGatewayConfig::default())
}

async fn body_json(response: Response<Body>) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_text(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn solve_request(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(SOLVE_PATH)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_owned()))
        .unwrap()
}

#[tokio::test]
async fn solve_works_through_full_stack() {
    let response = app()
        .oneshot(solve_request(r#"[{"x":10,"y":3,"n":20},{"x":1,"y":0,"n":5}]"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!([13, null]));
}

#[tokio::test]
async fn request_id_is_generated_when_absent() {
    let response = app()
        .oneshot(Request::get("/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();

    let rid = response.headers().get("x-request-id").expect("x-request-id");
    assert!(!rid.to_str().unwrap().is_empty());
}

#[tokio::test]
async fn incoming_request_id_is_echoed() {
    let response = app()
        .oneshot(
            Request::get("/healthz")
                .header("x-request-id", "client-supplied-42")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.headers()["x-request-id"], "client-supplied-42");
}

#[tokio::test]
async fn health_reports_application_and_version() {
    let config = ApiGatewayConfig {
        application_name: "remainder-under-test".to_owned(),
        ..ApiGatewayConfig::default()
    };
    let response = gateway(config)
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "UP");
    assert_eq!(json["application"], "remainder-under-test");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    assert!(json["timestamp"].is_string());
}

#[tokio::test]
async fn simple_health_and_healthz() {
    let response = app()
        .oneshot(Request::get("/health/simple").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "OK");

    let response = app()
        .oneshot(Request::get("/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(body_text(response).await, "ok");
}

#[tokio::test]
async fn cors_preflight_allows_any_origin() {
    let response = app()
        .oneshot(
            Request::builder()
                .method("OPTIONS")
                .uri(SOLVE_PATH)
                .header(header::ORIGIN, "https://frontend.test")
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );
    let methods = response.headers()[header::ACCESS_CONTROL_ALLOW_METHODS]
        .to_str()
        .unwrap()
        .to_owned();
    assert!(methods.contains("POST"));
}

#[tokio::test]
async fn cors_disabled_adds_no_headers() {
    let config = ApiGatewayConfig {
        cors_enabled: false,
        ..ApiGatewayConfig::default()
    };
    let response = gateway(config)
        .oneshot(
            Request::get("/healthz")
                .header(header::ORIGIN, "https://frontend.test")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .is_none()
    );
}

#[tokio::test]
async fn oversized_body_is_payload_too_large() {
    let config = ApiGatewayConfig {
        body_limit_bytes: 64,
        ..ApiGatewayConfig::default()
    };
    let items: Vec<Value> = (0..20).map(|_| json!({"x": 10, "y": 3, "n": 20})).collect();
    let body = serde_json::to_string(&items).unwrap();

    let response = gateway(config).oneshot(solve_request(&body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    let json = body_json(response).await;
    assert_eq!(json["code"], "PAYLOAD_TOO_LARGE");
    assert_eq!(json["status"], 413);
}

#[tokio::test]
async fn handler_panic_becomes_internal_error_problem() {
    async fn boom() -> &'static str {
        panic!("connection string leaked");
    }

    let router = ApiGateway::new(ApiGatewayConfig::default())
        .build_router(Router::new().route("/boom", get(boom)))
        .unwrap();

    let response = router
        .oneshot(Request::get("/boom").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(response.headers().get("x-request-id").is_some());
    let text = body_text(response).await;
    assert!(!text.contains("connection string"));
    let json: Value = serde_json::from_str(&text).unwrap();
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert_eq!(
        json["detail"],
        "An unexpected error occurred. Please try again later."
    );
    assert_eq!(json["trace_id"].as_str().map(str::len), Some(8));
    assert_eq!(json["instance"], "/boom");
    assert_eq!(json["method"], "GET");
    assert!(json["timestamp"].is_string());
}

#[tokio::test]
async fn slow_handler_times_out() {
    async fn slow() -> &'static str {
        tokio::time::sleep(Duration::from_secs(5)).await;
        "late"
    }

    let config = ApiGatewayConfig {
        request_timeout: Duration::from_millis(20),
        ..ApiGatewayConfig::default()
    };
    let router = ApiGateway::new(config)
        .build_router(Router::new().route("/slow", post(slow)))
        .unwrap();

    let response = router
        .oneshot(Request::post("/slow").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::GATEWAY_TIMEOUT);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "application/problem+json"
    );
    assert!(response.headers().get("x-request-id").is_some());
    let json = body_json(response).await;
    assert_eq!(json["status"], 504);
    assert_eq!(json["code"], "REQUEST_TIMEOUT");
    assert_eq!(json["instance"], "/slow");
    assert_eq!(json["method"], "POST");
    assert!(json["timestamp"].is_string());
    let trace_id = json["trace_id"].as_str().expect("trace_id");
    assert_eq!(trace_id.len(), 8);
    assert!(trace_id.chars().all(|c| c.is_ascii_alphanumeric()));
}

#[tokio::test]
async fn openapi_served_only_when_docs_enabled() {
    let response = app()
        .oneshot(Request::get("/openapi.json").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let config = ApiGatewayConfig {
        enable_docs: true,
        ..ApiGatewayConfig::default()
    };
    let response = gateway(config)
        .oneshot(Request::get("/openapi.json").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json["paths"][SOLVE_PATH]["post"].is_object());
    assert_eq!(json["info"]["title"], "required-remainder-backend");
}
