//! Live PostgreSQL tests.
//!
//! Skipped unless DATABASE_URL is set.

use db_sketch::config::ConnectionConfig;
use db_sketch::db::{Connector, PostgresConnector, Value};
use db_sketch::query::QueryExecutor;

/// Helper to create a test connector from the environment.
async fn get_test_connector() -> Option<PostgresConnector> {
    let url = std::env::var("DATABASE_URL").ok()?;
    let config = ConnectionConfig::from_connection_string(&url).ok()?;
    PostgresConnector::connect(&config).await.ok()
}

#[tokio::test]
async fn test_ping() {
    let Some(connector) = get_test_connector().await else {
        eprintln!("Skipping test: DATABASE_URL not set");
        return;
    };

    connector.ping().await.unwrap();
    connector.close().await.unwrap();
}

#[tokio::test]
async fn test_execute_simple_select() {
    let Some(connector) = get_test_connector().await else {
        eprintln!("Skipping test: DATABASE_URL not set");
        return;
    };

    let executor = QueryExecutor::new(&connector);
    let result = executor
        .execute("SELECT 1 as num, 'hello' as greeting")
        .await
        .unwrap();

    assert_eq!(result.column_names(), vec!["num", "greeting"]);
    assert_eq!(result.row_count, 1);

    connector.close().await.unwrap();
}

#[tokio::test]
async fn test_execute_query_with_error() {
    let Some(connector) = get_test_connector().await else {
        eprintln!("Skipping test: DATABASE_URL not set");
        return;
    };

    let result = connector
        .execute_query("SELECT * FROM nonexistent_table_xyz")
        .await;
    assert!(result.is_err());

    let error = result.unwrap_err();
    assert!(
        error.to_string().contains("nonexistent_table_xyz")
            || error.to_string().contains("does not exist")
    );

    connector.close().await.unwrap();
}

#[tokio::test]
async fn test_numeric_aggregates_decode_as_floats() {
    let Some(connector) = get_test_connector().await else {
        eprintln!("Skipping test: DATABASE_URL not set");
        return;
    };

    // AVG over integers returns NUMERIC, the type every catalog aggregate
    // produces.
    let result = connector
        .execute_query("SELECT AVG(n) AS avg_rating, SUM(n) AS total FROM (VALUES (1), (2)) AS t(n)")
        .await
        .unwrap();

    assert_eq!(
        result.value(0, "avg_rating").and_then(Value::as_f64),
        Some(1.5)
    );
    assert_eq!(result.value(0, "total").and_then(Value::as_f64), Some(3.0));

    connector.close().await.unwrap();
}

#[tokio::test]
async fn test_date_and_timestamp_decode_as_strings() {
    let Some(connector) = get_test_connector().await else {
        eprintln!("Skipping test: DATABASE_URL not set");
        return;
    };

    let result = connector
        .execute_query(
            "SELECT DATE '2024-01-15' AS review_date, \
             TIMESTAMP '2024-01-15 12:30:00' AS created_time",
        )
        .await
        .unwrap();

    assert_eq!(
        result.value(0, "review_date"),
        Some(&Value::from("2024-01-15"))
    );
    assert_eq!(
        result.value(0, "created_time"),
        Some(&Value::from("2024-01-15 12:30:00"))
    );

    connector.close().await.unwrap();
}

#[tokio::test]
async fn test_empty_result_keeps_column_metadata() {
    let Some(connector) = get_test_connector().await else {
        eprintln!("Skipping test: DATABASE_URL not set");
        return;
    };

    let result = connector
        .execute_query("SELECT 1 as num WHERE false")
        .await
        .unwrap();

    assert!(result.is_empty());
    assert_eq!(result.column_names(), vec!["num"]);

    connector.close().await.unwrap();
}
