//! Range constraints on a single query, checked in the order x, y, n.

use super::error::{DomainError, Field};
use super::model::{MAX_VALUE, MIN_DIVISOR, RemainderQuery};

pub const X_OUT_OF_RANGE: &str = "x must be between 2 and 10^9";
pub const Y_OUT_OF_RANGE: &str = "y must be between 0 and x-1";
pub const N_OUT_OF_RANGE: &str = "n must be between y and 10^9";

/// Check `2 <= x <= 10^9`, `0 <= y < x` and `y <= n <= 10^9`.
///
/// # Errors
/// Returns [`DomainError::Validation`] naming the first field that fails.
pub fn validate(query: RemainderQuery) -> Result<(), DomainError> {
    let RemainderQuery { x, y, n } = query;

    if !(MIN_DIVISOR..=MAX_VALUE).contains(&x) {
        return Err(DomainError::validation(Field::X, X_OUT_OF_RANGE));
    }
    if !(0..x).contains(&y) {
        return Err(DomainError::validation(Field::Y, Y_OUT_OF_RANGE));
    }
    if !(y..=MAX_VALUE).contains(&n) {
        return Err(DomainError::validation(Field::N, N_OUT_OF_RANGE));
    }
    Ok(())
}
