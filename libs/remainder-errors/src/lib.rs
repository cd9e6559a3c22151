//! Error payload types shared by the required remainder service.
//!
//! - RFC 9457 Problem Details (`Problem`)
//! - Error catalog support (`ErrDef`)
//! - Short correlation tokens for failed requests (`new_trace_id`)
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod catalog;
pub mod problem;
pub mod trace;

pub use catalog::ErrDef;
pub use problem::{APPLICATION_PROBLEM_JSON, Problem};
pub use trace::{TRACE_ID_LEN, new_trace_id};

/// Attach the request path, HTTP method and correlation token to a Problem.
///
/// The timestamp is set to the current UTC time so every finalized problem
/// describes a single occurrence.
pub fn finalize(p: Problem, instance: &str, method: &str, trace_id: impl Into<String>) -> Problem {
    p.with_instance(instance)
        .with_method(method)
        .with_trace_id(trace_id)
        .stamped()
}
