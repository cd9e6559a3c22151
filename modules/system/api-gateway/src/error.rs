//! Boundary handling for failures no handler turned into a response.
//!
//! Panics and timeouts are produced by tower layers that never see the
//! request, so [`contextualize_failures`] runs outside them and finishes the
//! Problem with the request path and method.

use std::any::Any;

use axum::extract::Request;
use axum::http::{StatusCode, header};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use remainder_errors::{ErrDef, new_trace_id};

pub struct ErrorCode;

impl ErrorCode {
    const INTERNAL_ERROR: ErrDef = ErrDef {
        status: 500,
        title: "Internal Server Error",
        code: "INTERNAL_ERROR",
        type_url: "https://errors.required-remainder.dev/INTERNAL_ERROR",
    };

    const REQUEST_TIMEOUT: ErrDef = ErrDef {
        status: 504,
        title: "Gateway Timeout",
        code: "REQUEST_TIMEOUT",
        type_url: "https://errors.required-remainder.dev/REQUEST_TIMEOUT",
    };

    #[must_use]
    pub const fn internal_v1() -> ErrDef {
        Self::INTERNAL_ERROR
    }

    /// Request exceeded `server.request_timeout`.
    #[must_use]
    pub const fn request_timeout_v1() -> ErrDef {
        Self::REQUEST_TIMEOUT
    }
}

/// Generic message returned for every unexpected failure.
pub const INTERNAL_ERROR_DETAIL: &str = "An unexpected error occurred. Please try again later.";

pub const REQUEST_TIMEOUT_DETAIL: &str = "The request took too long to process.";

/// Attached to a panic response; holds the token already written to the log.
#[derive(Debug, Clone)]
pub struct UnhandledFailure {
    pub trace_id: String,
}

/// Turn a handler panic into a 500 Problem. Panic details go to the log only.
#[must_use]
#[allow(clippy::needless_pass_by_value)] // signature required by CatchPanicLayer
pub fn panic_to_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let trace_id = new_trace_id();

    let message = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic payload");

    tracing::error!(trace_id = %trace_id, panic = %message, "Unexpected error while handling request");

    let mut response = ErrorCode::internal_v1()
        .as_problem(INTERNAL_ERROR_DETAIL)
        .with_trace_id(trace_id.as_str())
        .stamped()
        .into_response();
    response
        .extensions_mut()
        .insert(UnhandledFailure { trace_id });
    response
}

/// Complete panic and timeout responses with the request context.
///
/// A panic response is rebuilt with the same trace id. A bare 504 (no content
/// type, as emitted by the timeout layer) becomes a `REQUEST_TIMEOUT` Problem.
pub async fn contextualize_failures(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let instance = req.uri().path().to_owned();

    let response = next.run(req).await;

    if let Some(failure) = response.extensions().get::<UnhandledFailure>() {
        return ErrorCode::internal_v1()
            .with_context(
                INTERNAL_ERROR_DETAIL,
                &instance,
                method.as_str(),
                failure.trace_id.as_str(),
            )
            .into_response();
    }

    if response.status() == StatusCode::GATEWAY_TIMEOUT
        && !response.headers().contains_key(header::CONTENT_TYPE)
    {
        let trace_id = new_trace_id();
        tracing::warn!(
            trace_id = %trace_id,
            instance = %instance,
            method = %method,
            "Request timed out"
        );
        return ErrorCode::request_timeout_v1()
            .with_context(REQUEST_TIMEOUT_DETAIL, &instance, method.as_str(), trace_id)
            .into_response();
    }

    response
}
