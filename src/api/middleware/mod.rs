//! HTTP middleware wrapping every route.
//!
//! Provides request logging and cross-origin headers. Neither alters request
//! or response semantics.

pub mod cors;
pub mod tracing;
