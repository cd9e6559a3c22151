use axum::extract::rejection::JsonRejection;
use http::StatusCode;
use remainder_errors::{Problem, new_trace_id};

use crate::errors::ErrorCode;

/// Map a rejected request body to a 400 Problem (413 for oversized bodies).
///
/// Every call generates a fresh correlation token and logs it together with
/// the failure so support can match the response to the server log.
pub fn rejection_to_problem(rejection: &JsonRejection, instance: &str, method: &str) -> Problem {
    let trace_id = new_trace_id();
    let detail = rejection.body_text();

    let problem = match rejection {
        JsonRejection::JsonDataError(_) => {
            let problem =
                ErrorCode::validation_v1().with_context(&detail, instance, method, &trace_id);
            match offending_field(&detail) {
                Some(field) => problem.with_field(field),
                None => problem,
            }
        }
        JsonRejection::MissingJsonContentType(_) => ErrorCode::malformed_request_v1().with_context(
            "Expected request with `Content-Type: application/json`",
            instance,
            method,
            &trace_id,
        ),
        JsonRejection::BytesRejection(_) if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE => {
            ErrorCode::payload_too_large_v1().with_context(&detail, instance, method, &trace_id)
        }
        _ => ErrorCode::malformed_request_v1().with_context(&detail, instance, method, &trace_id),
    };

    tracing::warn!(
        trace_id = %trace_id,
        code = %problem.code,
        instance = %instance,
        "Rejected request body: {detail}"
    );
    problem
}

/// Best-effort extraction of the item field named in a JSON data error.
///
/// The detail reads `<prefix>: <path>: <message>` where the path looks like
/// `[2].y` or `[0]`. Only the path and the start of the message are trusted;
/// the rest of the message may echo client input.
fn offending_field(detail: &str) -> Option<String> {
    let located = detail
        .split_once("target type: ")
        .map_or(detail, |(_, rest)| rest);
    let (path, message) = located.split_once(": ")?;
    let item_path = path.strip_prefix('[')?;
    let (_, member) = item_path.split_once(']')?;

    if let Some(name) = member.strip_prefix('.') {
        let name: String = name
            .chars()
            .take_while(|c| c.is_ascii_alphanumeric() || *c == '_')
            .collect();
        return (!name.is_empty()).then_some(name);
    }

    let rest = message.strip_prefix("missing field `")?;
    rest.split_once('`').map(|(name, _)| name.to_owned())
}
