use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::model::RemainderQuery;

/// REST DTO for one `(x, y, n)` item of a solve request
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema)]
#[schema(title = "SolveItem")]
pub struct SolveItemReq {
    /// Divisor, 2 <= x <= 10^9
    pub x: i64,
    /// Required remainder, 0 <= y < x
    pub y: i64,
    /// Upper bound, y <= n <= 10^9
    pub n: i64,
}

impl From<SolveItemReq> for RemainderQuery {
    fn from(req: SolveItemReq) -> Self {
        Self::new(req.x, req.y, req.n)
    }
}

/// One slot per request item: the maximal `k`, or `null` for an invalid item.
pub type SolveBatchResp = Vec<Option<i64>>;
