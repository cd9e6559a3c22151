use std::time::Duration;

use axum::http::{HeaderName, HeaderValue, Method};
use tower_http::cors::{Any, CorsLayer};
use tracing::warn;

use crate::config::{ApiGatewayConfig, CorsConfig};

/// Build a CORS layer from config.
///
/// # Errors
///
/// Returns an error if `allow_credentials` is `true` while origins, methods or
/// headers contain `"*"`. Browsers reject credentialed responses with wildcard
/// CORS headers, so this combination is always a misconfiguration.
pub fn build_cors_layer(cfg: &ApiGatewayConfig) -> anyhow::Result<CorsLayer> {
    let cors_cfg: CorsConfig = cfg.cors.clone().unwrap_or_default();

    let any_origin = is_wildcard(&cors_cfg.allowed_origins);
    let any_method = is_wildcard(&cors_cfg.allowed_methods);
    let any_header = is_wildcard(&cors_cfg.allowed_headers);

    if cors_cfg.allow_credentials && (any_origin || any_method || any_header) {
        anyhow::bail!(
            "CORS misconfiguration: allow_credentials=true cannot be combined with '*' in \
             allowed_origins, allowed_methods or allowed_headers"
        );
    }

    if any_origin {
        warn!(
            "CORS is configured with allowed_origins=['*']. \
             Any website can make cross-origin requests to the API."
        );
    }

    let mut layer = CorsLayer::new();

    if any_origin {
        layer = layer.allow_origin(Any);
    } else {
        let origins: Vec<HeaderValue> = cors_cfg
            .allowed_origins
            .iter()
            .filter_map(|s| HeaderValue::from_str(s).ok())
            .collect();
        if !origins.is_empty() {
            layer = layer.allow_origin(origins);
        }
    }

    if any_method {
        layer = layer.allow_methods(Any);
    } else {
        let methods: Vec<Method> = cors_cfg
            .allowed_methods
            .iter()
            .filter_map(|s| s.parse().ok())
            .collect();
        if !methods.is_empty() {
            layer = layer.allow_methods(methods);
        }
    }

    if any_header {
        layer = layer.allow_headers(Any);
    } else {
        let headers: Vec<HeaderName> = cors_cfg
            .allowed_headers
            .iter()
            .filter_map(|s| s.parse().ok())
            .collect();
        if !headers.is_empty() {
            layer = layer.allow_headers(headers);
        }
    }

    if cors_cfg.allow_credentials {
        layer = layer.allow_credentials(true);
    }

    if cors_cfg.max_age_seconds > 0 {
        layer = layer.max_age(Duration::from_secs(cors_cfg.max_age_seconds));
    }

    Ok(layer)
}

fn is_wildcard(values: &[String]) -> bool {
    values.iter().any(|v| v == "*")
}
