use std::time::Duration;

use serde::{Deserialize, Serialize};

/// HTTP server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ApiGatewayConfig {
    pub bind_addr: String,

    /// Name reported by the health endpoint.
    pub application_name: String,

    /// Requests still running after this long are answered with 504.
    #[serde(with = "humantime_serde")]
    pub request_timeout: Duration,

    /// Largest accepted request body.
    pub body_limit_bytes: usize,

    /// Serve `/openapi.json`.
    pub enable_docs: bool,

    pub cors_enabled: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cors: Option<CorsConfig>,
}

impl Default for ApiGatewayConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            application_name: default_application_name(),
            request_timeout: default_request_timeout(),
            body_limit_bytes: default_body_limit_bytes(),
            enable_docs: false,
            cors_enabled: true,
            cors: None,
        }
    }
}

fn default_bind_addr() -> String {
    "127.0.0.1:8080".to_owned()
}

fn default_application_name() -> String {
    "required-remainder-backend".to_owned()
}

fn default_request_timeout() -> Duration {
    Duration::from_secs(30)
}

fn default_body_limit_bytes() -> usize {
    1024 * 1024
}

/// Cross-origin settings. The defaults accept any origin with the common verbs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
    pub allowed_methods: Vec<String>,
    pub allowed_headers: Vec<String>,
    pub allow_credentials: bool,
    pub max_age_seconds: u64,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec!["*".to_owned()],
            allowed_methods: ["GET", "POST", "PUT", "DELETE", "OPTIONS"]
                .into_iter()
                .map(str::to_owned)
                .collect(),
            allowed_headers: vec!["*".to_owned()],
            allow_credentials: false,
            max_age_seconds: 0,
        }
    }
}
