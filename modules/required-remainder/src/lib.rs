//! Required Remainder Module
//!
//! Finds the largest `k` with `0 <= k <= n` and `k mod x = y` for batches of
//! `(x, y, n)` triples.
//!
//! ## Architecture
//!
//! - `domain/validator.rs` - range checks on a single triple
//! - `domain/solver.rs` - closed-form solution for a validated triple
//! - `domain/service.rs` - batch orchestration, one result slot per item
//! - `api/rest` - `POST /api/required-remainder/solve` and its error mapping

pub use domain::error::{DomainError, Field};
pub use domain::model::RemainderQuery;
pub use domain::service::{find_max_k, solve_all};

pub use api::rest::routes::{ApiDoc, SOLVE_PATH, register_routes};

#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod errors;
