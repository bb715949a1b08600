//! Shared test utilities for the grid-projection workspace.
//!
//! This crate provides deterministic geographic point sets and reference
//! projection fixtures used across the test suite. All generators return
//! plain `(longitude, latitude)` degree pairs that pass the `proj-common`
//! validity predicates, so tests can feed them straight into a projector;
//! fixtures additionally carry independently computed planar coordinates.
//!
//! # Usage
//!
//! Add to your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! test-utils = { path = "../test-utils" }
//! ```

pub mod fixtures;
pub mod generators;

// Re-export commonly used items at the crate root
pub use fixtures::*;
pub use generators::*;
