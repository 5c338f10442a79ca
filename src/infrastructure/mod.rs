//! Infrastructure layer with concrete implementations of domain traits.
//!
//! - [`memory`] - Process-local storage for repository records

pub mod memory;
