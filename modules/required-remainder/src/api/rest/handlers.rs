use axum::Json;
use axum::extract::rejection::JsonRejection;
use http::{Method, Uri};
use remainder_errors::Problem;

use crate::api::rest::dto::{SolveBatchResp, SolveItemReq};
use crate::api::rest::error::rejection_to_problem;
use crate::domain::model::RemainderQuery;
use crate::domain::service;

/// Solve a batch of `(x, y, n)` items.
///
/// Invalid items come back as `null` in their slot; only a body that cannot be
/// read as an array of items fails the whole request.
#[utoipa::path(
    post,
    path = "/api/required-remainder/solve",
    tag = "Required Remainder",
    operation_id = "required-remainder.solve",
    request_body(content = Vec<SolveItemReq>, description = "Items to solve"),
    responses(
        (status = 200, description = "One result per item, null for invalid items", body = Vec<Option<i64>>),
        (status = 400, description = "Malformed request body", body = Problem, content_type = "application/problem+json"),
        (status = 500, description = "Internal server error", body = Problem, content_type = "application/problem+json"),
    )
)]
pub async fn solve_batch(
    method: Method,
    uri: Uri,
    payload: Result<Json<Vec<SolveItemReq>>, JsonRejection>,
) -> Result<Json<SolveBatchResp>, Problem> {
    let Json(items) =
        payload.map_err(|rejection| rejection_to_problem(&rejection, uri.path(), method.as_str()))?;

    let queries: Vec<RemainderQuery> = items.into_iter().map(Into::into).collect();
    Ok(Json(service::solve_all(&queries)))
}
