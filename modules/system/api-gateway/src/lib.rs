//! API Gateway for the required remainder service
//!
//! Owns the HTTP server: health endpoints, the `OpenAPI` document, and the
//! middleware stack wrapped around the module routes.

pub mod config;
pub mod cors;
pub mod error;
pub mod middleware;
pub mod module;
pub mod web;

pub use config::{ApiGatewayConfig, CorsConfig};
pub use module::ApiGateway;
