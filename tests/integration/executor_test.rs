//! Executor-to-chart pipeline tests against mock connectors.

use std::sync::Arc;
use std::time::Duration;

use db_sketch::chart::{self, Chart, ChartKind};
use db_sketch::db::{ColumnInfo, FailingConnector, MockConnector, QueryResult, Value};
use db_sketch::error::SketchError;
use db_sketch::query::{QueryExecutor, RecordingDelay};

fn ratings_result() -> QueryResult {
    QueryResult::with_data(
        vec![
            ColumnInfo::new("stars", "float8"),
            ColumnInfo::new("restaurant_count", "int8"),
        ],
        vec![
            vec![Value::Float(4.5), Value::Int(10)],
            vec![Value::Float(3.5), Value::Int(20)],
        ],
    )
}

#[tokio::test]
async fn test_execute_and_chart_pipeline() {
    let connector = MockConnector::with_result(ratings_result());
    let executor = QueryExecutor::new(&connector);

    let result = executor
        .execute("SELECT stars, COUNT(*) AS restaurant_count FROM business GROUP BY stars")
        .await
        .unwrap();

    let built = chart::build_chart(&result, ChartKind::Bar, "stars", "restaurant_count", None);
    assert_eq!(built.title(), "restaurant_count by stars");

    let spec = built.to_vega_lite();
    assert_eq!(spec["mark"], "bar");
    assert_eq!(spec["data"]["values"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_pipeline_recovers_from_transient_failures() {
    let connector = FailingConnector::new(2).with_result(ratings_result());
    let delay = Arc::new(RecordingDelay::new());
    let executor = QueryExecutor::new(&connector).with_delay(delay.clone());

    let result = executor.execute("SELECT 1").await.unwrap();

    assert_eq!(result.row_count, 2);
    assert_eq!(connector.calls(), 3);
    assert_eq!(delay.waits(), vec![Duration::from_secs(2); 2]);
}

#[tokio::test]
async fn test_pipeline_gives_up_after_three_attempts() {
    let connector = FailingConnector::new(usize::MAX).with_error_message("no route to host");
    let delay = Arc::new(RecordingDelay::new());
    let executor = QueryExecutor::new(&connector).with_delay(delay.clone());

    let err = executor.execute("SELECT 1").await.unwrap_err();

    assert_eq!(connector.calls(), 3);
    assert_eq!(delay.count(), 2);
    assert!(matches!(err, SketchError::Execution { .. }));
}

#[tokio::test]
async fn test_empty_query_short_circuits_pipeline() {
    let connector = MockConnector::new();
    let executor = QueryExecutor::new(&connector);

    let err = executor.execute("   \n  ").await.unwrap_err();

    assert!(matches!(err, SketchError::EmptyQuery));
    assert_eq!(connector.calls(), 0);
}

#[tokio::test]
async fn test_empty_result_renders_no_data_placeholder() {
    let connector = MockConnector::with_result(QueryResult::new());
    let executor = QueryExecutor::new(&connector);

    let result = executor.execute("SELECT 1 WHERE false").await.unwrap();
    let built = chart::build_chart(&result, ChartKind::Line, "x", "y", None);

    assert_eq!(built, Chart::placeholder("No Data", "No data available"));
}
