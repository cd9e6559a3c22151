use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware::from_fn;
use axum::routing::get;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use utoipa::openapi::OpenApi;

use crate::config::ApiGatewayConfig;
use crate::middleware;
use crate::web::{self, HealthInfo};

/// HTTP host: wraps module routes with health endpoints and the middleware stack.
pub struct ApiGateway {
    config: ApiGatewayConfig,
    openapi: Option<Arc<OpenApi>>,
}

impl ApiGateway {
    #[must_use]
    pub fn new(config: ApiGatewayConfig) -> Self {
        Self {
            config,
            openapi: None,
        }
    }

    #[must_use]
    pub fn config(&self) -> &ApiGatewayConfig {
        &self.config
    }

    /// Attach the `OpenAPI` document served at `/openapi.json` when docs are enabled.
    #[must_use]
    pub fn with_openapi(mut self, mut doc: OpenApi) -> Self {
        doc.info.title.clone_from(&self.config.application_name);
        doc.info.version = env!("CARGO_PKG_VERSION").to_owned();
        self.openapi = Some(Arc::new(doc));
        self
    }

    fn apply_trace_layer(router: Router) -> Router {
        use tower_http::trace::TraceLayer;
        use tracing::field::Empty;

        router.layer(
            TraceLayer::new_for_http()
                .make_span_with(|req: &axum::http::Request<axum::body::Body>| {
                    let rid = req
                        .headers()
                        .get(middleware::request_id::header())
                        .and_then(|v| v.to_str().ok())
                        .unwrap_or("n/a");

                    tracing::info_span!(
                        "http_request",
                        method = %req.method(),
                        uri = %req.uri().path(),
                        version = ?req.version(),
                        request_id = %rid,
                        status = Empty,
                        latency_ms = Empty,
                    )
                })
                .on_response(
                    |res: &axum::http::Response<axum::body::Body>,
                     latency: std::time::Duration,
                     span: &tracing::Span| {
                        span.record("status", res.status().as_u16());
                        span.record("latency_ms", latency.as_millis());
                    },
                ),
        )
    }

    /// Apply all middleware layers to a router.
    ///
    /// Layers are registered innermost first. At runtime requests flow:
    /// `SetRequestId` → `PropagateRequestId` → Trace → `push_req_id_to_extensions` →
    /// `contextualize_failures` → `CatchPanic` → Timeout → `BodyLimit` → CORS → Router.
    ///
    /// # Errors
    /// Returns an error if the CORS configuration is invalid.
    pub(crate) fn apply_middleware_stack(&self, mut router: Router) -> Result<Router> {
        let config = &self.config;

        // CORS
        if config.cors_enabled {
            router = router.layer(crate::cors::build_cors_layer(config)?);
        }

        // Body limit, enforced by the JSON extractor so oversize bodies map to a Problem
        router = router.layer(DefaultBodyLimit::max(config.body_limit_bytes));

        router = router.layer(TimeoutLayer::with_status_code(
            axum::http::StatusCode::GATEWAY_TIMEOUT,
            config.request_timeout,
        ));

        router = router.layer(CatchPanicLayer::custom(crate::error::panic_to_response));

        // Adds path and method to panic and timeout Problems
        router = router.layer(from_fn(crate::error::contextualize_failures));

        router = router.layer(from_fn(middleware::request_id::push_req_id_to_extensions));

        router = Self::apply_trace_layer(router);

        let x_request_id = middleware::request_id::header();
        router = router.layer(PropagateRequestIdLayer::new(x_request_id.clone()));
        router = router.layer(SetRequestIdLayer::new(
            x_request_id,
            middleware::request_id::MakeReqId,
        ));

        Ok(router)
    }

    /// Build the full router around the given module routes.
    ///
    /// # Errors
    /// Returns an error if middleware setup fails.
    pub fn build_router(&self, module_routes: Router) -> Result<Router> {
        let info = Arc::new(HealthInfo {
            application: self.config.application_name.clone(),
            version: env!("CARGO_PKG_VERSION").to_owned(),
        });

        let mut router = Router::new()
            .route("/health", get(web::health_check))
            .with_state(info)
            .route("/health/simple", get(web::simple_health))
            .route("/healthz", get(|| async { "ok" }))
            .merge(module_routes);

        if self.config.enable_docs {
            if let Some(doc) = &self.openapi {
                router = router.merge(
                    Router::new()
                        .route("/openapi.json", get(web::openapi_json))
                        .with_state(Arc::clone(doc)),
                );
            } else {
                tracing::warn!("Docs enabled but no OpenAPI document was attached");
            }
        }

        self.apply_middleware_stack(router)
    }

    fn parse_bind_address(bind_addr: &str) -> Result<SocketAddr> {
        bind_addr
            .parse()
            .map_err(|e| anyhow::anyhow!("Invalid bind address '{bind_addr}': {e}"))
    }

    /// Bind the configured address and serve until `shutdown` resolves.
    ///
    /// # Errors
    /// Returns an error if the address is invalid, binding fails, or the server fails.
    pub async fn serve<F>(&self, router: Router, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = Self::parse_bind_address(&self.config.bind_addr)?;
        let listener = tokio::net::TcpListener::bind(addr).await?;
        tracing::info!("HTTP server bound on {}", addr);

        serve_listener(listener, router, shutdown).await
    }
}

/// Serve on an already bound listener until `shutdown` resolves.
///
/// # Errors
/// Returns an error if the server fails.
pub async fn serve_listener<F>(
    listener: tokio::net::TcpListener,
    router: Router,
    shutdown: F,
) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, router)
        .with_graceful_shutdown(async move {
            shutdown.await;
            tracing::info!("HTTP server shutting down gracefully");
        })
        .await
        .map_err(|e| anyhow::anyhow!(e))
}
