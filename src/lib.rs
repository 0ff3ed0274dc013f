//! Sketch - query a relational database and render the result as a chart.
//!
//! This library exposes the core modules for use in integration tests.

pub mod catalog;
pub mod chart;
pub mod cli;
pub mod config;
pub mod db;
pub mod error;
pub mod insights;
pub mod logging;
pub mod preview;
pub mod query;
