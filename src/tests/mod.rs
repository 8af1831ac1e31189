//! Unit tests for the validation crate.
//!
//! Tests are organised by component, covering ordering, short-circuiting,
//! aggregation and the asynchronous mirrors.

mod fixtures;
mod severity_tests;
