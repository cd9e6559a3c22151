//! Domain layer for the required remainder module
//!
//! Everything here is a pure function of its inputs.

pub mod error;
pub mod model;
pub mod service;
pub mod solver;
pub mod validator;
