//! Integration tests for Sketch.

pub mod chart_test;
pub mod executor_test;
pub mod postgres_test;
