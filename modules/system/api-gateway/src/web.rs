use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::openapi::OpenApi;

/// Static facts reported by the health endpoint.
#[derive(Debug, Clone)]
pub struct HealthInfo {
    pub application: String,
    pub version: String,
}

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub timestamp: DateTime<Utc>,
    pub application: String,
    pub version: String,
}

/// Detailed health report.
pub async fn health_check(State(info): State<Arc<HealthInfo>>) -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "UP",
        timestamp: Utc::now(),
        application: info.application.clone(),
        version: info.version.clone(),
    })
}

/// Plain-text health probe.
pub async fn simple_health() -> &'static str {
    "OK"
}

/// The merged `OpenAPI` document.
pub async fn openapi_json(State(doc): State<Arc<OpenApi>>) -> Json<OpenApi> {
    Json(doc.as_ref().clone())
}
