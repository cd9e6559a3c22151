//! `x-request-id` generation and propagation.

use axum::extract::Request;
use axum::http::{HeaderName, HeaderValue};
use axum::middleware::Next;
use axum::response::Response;
use tower_http::request_id::{MakeRequestId, RequestId};

const REQUEST_ID_LEN: usize = 21;

#[must_use]
pub fn header() -> HeaderName {
    HeaderName::from_static("x-request-id")
}

/// Request id as seen by handlers, inserted into request extensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XRequestId(pub String);

/// Generates a nanoid for requests that arrive without `x-request-id`.
#[derive(Clone, Copy, Default)]
pub struct MakeReqId;

impl MakeRequestId for MakeReqId {
    fn make_request_id<B>(&mut self, _request: &http::Request<B>) -> Option<RequestId> {
        let id = nanoid::nanoid!(REQUEST_ID_LEN);
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}

/// Copy the request id into extensions and the current span.
pub async fn push_req_id_to_extensions(mut req: Request, next: Next) -> Response {
    let rid = req
        .headers()
        .get(header())
        .and_then(|v| v.to_str().ok())
        .map(ToOwned::to_owned);

    if let Some(rid) = rid {
        tracing::Span::current().record("request_id", rid.as_str());
        req.extensions_mut().insert(XRequestId(rid));
    }

    next.run(req).await
}
