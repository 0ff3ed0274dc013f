//! Mock connectors for testing and `--mock-db` runs.
//!
//! `MockConnector` returns a canned result; `FailingConnector` fails a
//! configurable number of times before succeeding, which is what the
//! executor's retry tests need.

use super::{ColumnInfo, Connector, QueryResult, Value};
use crate::error::{Result, SketchError};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// A connector that returns a predefined result for every query.
pub struct MockConnector {
    result: QueryResult,
    calls: AtomicUsize,
}

impl MockConnector {
    /// Creates a mock connector seeded with a small restaurant dataset,
    /// so `--mock-db` runs produce a meaningful chart.
    pub fn new() -> Self {
        Self::with_result(sample_result())
    }

    /// Creates a mock connector that returns the given result.
    pub fn with_result(result: QueryResult) -> Self {
        Self {
            result,
            calls: AtomicUsize::new(0),
        }
    }

    /// Returns how many times `execute_query` was invoked.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Default for MockConnector {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Connector for MockConnector {
    async fn execute_query(&self, _sql: &str) -> Result<QueryResult> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.result.clone())
    }

    async fn ping(&self) -> Result<()> {
        Ok(())
    }

    async fn close(&self) -> Result<()> {
        Ok(())
    }
}

/// A connector that fails a fixed number of times before succeeding.
///
/// With `failures >= attempts` it never succeeds within the retry budget.
pub struct FailingConnector {
    failures: usize,
    error_message: String,
    result: QueryResult,
    calls: AtomicUsize,
}

impl FailingConnector {
    /// Creates a connector that fails `failures` times, then succeeds with
    /// the sample dataset.
    pub fn new(failures: usize) -> Self {
        Self {
            failures,
            error_message: "connection reset by peer".to_string(),
            result: sample_result(),
            calls: AtomicUsize::new(0),
        }
    }

    /// Sets the message carried by each failure.
    pub fn with_error_message(mut self, message: impl Into<String>) -> Self {
        self.error_message = message.into();
        self
    }

    /// Sets the result returned once failures are exhausted.
    pub fn with_result(mut self, result: QueryResult) -> Self {
        self.result = result;
        self
    }

    /// Returns how many times `execute_query` was invoked.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Connector for FailingConnector {
    async fn execute_query(&self, _sql: &str) -> Result<QueryResult> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        if call < self.failures {
            Err(SketchError::connection(self.error_message.clone()))
        } else {
            Ok(self.result.clone())
        }
    }

    async fn ping(&self) -> Result<()> {
        if self.calls.load(Ordering::SeqCst) < self.failures {
            Err(SketchError::connection(self.error_message.clone()))
        } else {
            Ok(())
        }
    }

    async fn close(&self) -> Result<()> {
        Ok(())
    }
}

/// A small ratings-by-stars dataset in the shape the saved catalog returns.
fn sample_result() -> QueryResult {
    let columns = vec![
        ColumnInfo::new("stars", "float8"),
        ColumnInfo::new("restaurant_count", "int8"),
        ColumnInfo::new("avg_reviews", "float8"),
    ];
    let rows = vec![
        vec![Value::Float(3.0), Value::Int(42), Value::Float(61.0)],
        vec![Value::Float(3.5), Value::Int(88), Value::Float(97.5)],
        vec![Value::Float(4.0), Value::Int(115), Value::Float(142.3)],
        vec![Value::Float(4.5), Value::Int(64), Value::Float(188.9)],
        vec![Value::Float(5.0), Value::Int(19), Value::Float(74.2)],
    ];

    QueryResult::with_data(columns, rows).with_execution_time(Duration::from_millis(1))
}
