//! Database abstraction layer for Sketch.
//!
//! Provides a trait-based interface for database access, so the query
//! executor can run against a real server or an in-memory mock.

mod mock;
mod postgres;
mod types;

pub use mock::{FailingConnector, MockConnector};
pub use postgres::PostgresConnector;
pub use types::{ColumnInfo, QueryResult, Row, Value};

use crate::config::ConnectionConfig;
use crate::error::Result;
use async_trait::async_trait;

/// Trait defining the interface for database connectors.
///
/// Every `execute_query` call acquires its own connection and releases it on
/// all exit paths, including errors. Implementations hold a pool, not an
/// open connection.
#[async_trait]
pub trait Connector: Send + Sync {
    /// Executes a SQL query and returns the materialized result.
    async fn execute_query(&self, sql: &str) -> Result<QueryResult>;

    /// Checks that the database is reachable (a `SELECT 1` round-trip).
    async fn ping(&self) -> Result<()>;

    /// Closes the underlying connection pool.
    async fn close(&self) -> Result<()>;
}

/// Creates a database connector for the given configuration.
///
/// This is the central factory function for database connections.
pub async fn connect(config: &ConnectionConfig) -> Result<Box<dyn Connector>> {
    let connector = PostgresConnector::connect(config).await?;
    Ok(Box::new(connector))
}
