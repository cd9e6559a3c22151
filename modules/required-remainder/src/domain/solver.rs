//! Closed-form solver.
//!
//! Every `k` with `k mod x = y` lies on the progression `y, y + x, y + 2x, ...`,
//! so the largest term not above `n` is `((n - y) / x) * x + y`. With `n >= y`
//! the truncating division is a floor.

use super::error::DomainError;
use super::model::RemainderQuery;

/// Compute the largest `k <= n` with `k mod x = y` for a validated query.
///
/// All arithmetic is checked `i64`: `q * x` may approach `10^18` for the
/// accepted ranges, which still fits.
///
/// # Errors
/// Returns [`DomainError::NoSolution`] if the arithmetic overflows or the
/// result breaks `0 <= k <= n`. Neither can happen after
/// [`validate`](super::validator::validate) succeeded.
pub fn solve(query: RemainderQuery) -> Result<i64, DomainError> {
    let RemainderQuery { x, y, n } = query;

    let k = n
        .checked_sub(y)
        .and_then(|span| span.checked_div(x))
        .and_then(|q| q.checked_mul(x))
        .and_then(|base| base.checked_add(y))
        .ok_or(DomainError::no_solution(query))?;

    if !(0..=n).contains(&k) {
        return Err(DomainError::no_solution(query));
    }
    Ok(k)
}
