//! Integration tests and shared test helpers for backplan
//!
//! The actual test cases live in `tests/integration_tests.rs`; this
//! library only carries the helpers they share.

#![deny(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod test_utils;
