/// Inclusive upper limit shared by the divisor and the upper bound.
pub const MAX_VALUE: i64 = 1_000_000_000;

/// Smallest accepted divisor.
pub const MIN_DIVISOR: i64 = 2;

/// One `(x, y, n)` query: find the largest `k <= n` with `k mod x = y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RemainderQuery {
    /// Divisor.
    pub x: i64,
    /// Required remainder.
    pub y: i64,
    /// Inclusive upper bound on `k`.
    pub n: i64,
}

impl RemainderQuery {
    #[must_use]
    pub const fn new(x: i64, y: i64, n: i64) -> Self {
        Self { x, y, n }
    }
}
