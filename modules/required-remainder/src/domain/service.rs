//! Batch orchestration.
//!
//! Each item goes through validation and then the solver on its own. A failed
//! item leaves `None` in its slot and never stops the rest of the batch.

use tracing::{debug, error, info, warn};

use super::error::DomainError;
use super::model::RemainderQuery;
use super::solver::solve;
use super::validator::validate;

/// Validate and solve a single query.
///
/// # Errors
/// Returns [`DomainError::Validation`] for out-of-range input and
/// [`DomainError::NoSolution`] if the solver postcondition is broken.
pub fn find_max_k(query: RemainderQuery) -> Result<i64, DomainError> {
    debug!(x = query.x, y = query.y, n = query.n, "Finding max k");
    validate(query)?;
    let k = solve(query)?;
    debug!(k, x = query.x, y = query.y, n = query.n, "Found max k");
    Ok(k)
}

/// Solve every query independently, keeping input order and length.
#[must_use]
pub fn solve_all(queries: &[RemainderQuery]) -> Vec<Option<i64>> {
    info!(count = queries.len(), "Solving required remainder batch");

    let results: Vec<Option<i64>> = queries
        .iter()
        .enumerate()
        .map(|(index, &query)| solve_item(index, query))
        .collect();

    let solved = results.iter().filter(|r| r.is_some()).count();
    info!(
        count = queries.len(),
        solved,
        rejected = queries.len() - solved,
        "Completed required remainder batch"
    );
    results
}

fn solve_item(index: usize, query: RemainderQuery) -> Option<i64> {
    match find_max_k(query) {
        Ok(k) => Some(k),
        Err(DomainError::Validation { field, message }) => {
            warn!(item = index, field = %field, "Batch item failed validation: {message}");
            None
        }
        Err(e @ DomainError::NoSolution { .. }) => {
            error!(
                item = index,
                x = query.x,
                y = query.y,
                n = query.n,
                "Solver invariant violated for validated input: {e}"
            );
            None
        }
    }
}
