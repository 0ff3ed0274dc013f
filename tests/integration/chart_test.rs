//! Chart mapping tests over realistic query results.

use db_sketch::chart::{self, Chart, ChartKind, SemanticType};
use db_sketch::db::{ColumnInfo, QueryResult, Value};
use pretty_assertions::assert_eq;

fn sentiment_result() -> QueryResult {
    QueryResult::with_data(
        vec![
            ColumnInfo::new("month", "int4"),
            ColumnInfo::new("avg_rating", "float8"),
            ColumnInfo::new("status", "text"),
        ],
        vec![
            vec![Value::Int(1), Value::Float(4.1), Value::from("Open")],
            vec![Value::Int(2), Value::Float(3.9), Value::from("Open")],
            vec![Value::Int(3), Value::Float(4.3), Value::from("Closed")],
        ],
    )
}

#[test]
fn test_line_chart_with_color_legend() {
    let built = chart::build_chart(
        &sentiment_result(),
        ChartKind::Line,
        "month",
        "avg_rating",
        Some("status"),
    );

    let spec = built.to_vega_lite();

    assert_eq!(spec["mark"], serde_json::json!({"type": "line", "point": true}));
    // "month" is temporal by name, "avg_rating" quantitative.
    assert_eq!(spec["encoding"]["x"]["type"], "temporal");
    assert_eq!(spec["encoding"]["y"]["type"], "quantitative");
    assert_eq!(spec["encoding"]["color"]["field"], "status");
    assert_eq!(spec["encoding"]["color"]["legend"]["title"], "status");
    assert_eq!(spec["encoding"]["tooltip"].as_array().unwrap().len(), 3);
    assert_eq!(spec["title"], "avg_rating by month");
}

#[test]
fn test_scatter_chart_spec() {
    let built = chart::build_chart(
        &sentiment_result(),
        ChartKind::Scatter,
        "month",
        "avg_rating",
        None,
    );

    let spec = built.to_vega_lite();

    assert_eq!(
        spec["mark"],
        serde_json::json!({"type": "circle", "size": 100})
    );
    assert_eq!(spec["encoding"]["color"]["value"], "steelblue");
    assert_eq!(spec["title"], "avg_rating vs month");
    assert_eq!(spec["width"], 700);
    assert_eq!(spec["height"], 420);
}

#[test]
fn test_histogram_always_bins_quantitatively() {
    // "status" would classify nominal; histogram binning overrides it.
    assert_eq!(chart::infer_field_type("status"), SemanticType::Nominal);

    let built = chart::build_chart(
        &sentiment_result(),
        ChartKind::Histogram,
        "status",
        "avg_rating",
        None,
    );

    let spec = built.to_vega_lite();

    assert_eq!(spec["encoding"]["x"]["type"], "quantitative");
    assert_eq!(spec["encoding"]["x"]["bin"], serde_json::json!({"maxbins": 30}));
    assert_eq!(spec["encoding"]["y"]["aggregate"], "count");
    assert_eq!(
        spec["encoding"]["tooltip"],
        serde_json::json!([{"aggregate": "count"}])
    );
    assert_eq!(spec["title"], "Distribution of status");
}

#[test]
fn test_unknown_kind_renders_untitled_bar() {
    let built = chart::build_chart_named(
        &sentiment_result(),
        "area",
        "month",
        "avg_rating",
        None,
    );

    let spec = built.to_vega_lite();

    assert_eq!(spec["mark"], "bar");
    assert_eq!(spec["title"], "Chart");
    assert!(spec["encoding"]["tooltip"].is_null());
}

#[test]
fn test_invalid_selection_never_panics() {
    for (x, y) in [("nope", "avg_rating"), ("month", "nope"), ("a", "b")] {
        let built = chart::build_chart(&sentiment_result(), ChartKind::Bar, x, y, None);
        assert_eq!(
            built,
            Chart::placeholder("Invalid Selection", "Invalid axis selection")
        );
    }
}

#[test]
fn test_preferred_y_field_on_catalog_shapes() {
    let columns = ["rating_bracket", "restaurant_count", "avg_review_count"];
    assert_eq!(chart::preferred_y_field(&columns), Some("restaurant_count"));

    let columns = ["name", "city"];
    assert_eq!(chart::preferred_y_field(&columns), Some("city"));
}

#[test]
fn test_data_values_round_through_records() {
    let built = chart::build_chart(
        &sentiment_result(),
        ChartKind::Bar,
        "month",
        "avg_rating",
        None,
    );

    let spec = built.to_vega_lite();
    let values = spec["data"]["values"].as_array().unwrap();

    assert_eq!(values.len(), 3);
    assert_eq!(values[0]["month"], 1);
    assert_eq!(values[0]["avg_rating"], 4.1);
    assert_eq!(values[2]["status"], "Closed");
}
