//! Data-driven observations about a query result.
//!
//! Produces short textual notes from column names and values, shown
//! alongside the table preview. Purely cosmetic; rules mirror what an
//! analyst glances at first (volume, quality, trends).

use crate::db::{QueryResult, Value};

/// Derives insight lines from a query result.
///
/// Always returns at least one line for a non-empty result.
pub fn derive(result: &QueryResult) -> Vec<String> {
    if result.is_empty() {
        return Vec::new();
    }

    let mut insights = Vec::new();

    if let Some(total) = sum_column(result, &["restaurant_count", "count"]) {
        insights.push(format!(
            "Market volume: {} restaurants analyzed",
            total.round() as i64
        ));
    }

    if let Some(avg) = mean_column(result, &["avg_rating", "avg_stars"]) {
        insights.push(format!("Average quality: {avg:.2}/5 stars"));
    }

    if result.has_column("stars") {
        insights.push(
            "Rating distribution shows customer satisfaction levels across restaurants".to_string(),
        );
    }

    if result.has_column("cuisine") || result.has_column("category") {
        insights.push("Category leaders: top cuisine types in the market".to_string());
    }

    if result.has_column("year") || result.has_column("month") {
        insights.push("Temporal trends: shows how the market has evolved over time".to_string());
    }

    if result.has_column("status") || result.has_column("is_open") {
        insights.push("Business status: active vs inactive establishments".to_string());
    }

    if insights.is_empty() {
        insights.push("Data loaded: ready for analysis and exploration".to_string());
    }

    insights
}

/// Sums the first present column among `candidates`, skipping non-numeric
/// values.
fn sum_column(result: &QueryResult, candidates: &[&str]) -> Option<f64> {
    let column = first_present(result, candidates)?;
    Some(numeric_values(result, column).sum())
}

/// Averages the first present column among `candidates`; None when the
/// column holds no numeric values.
fn mean_column(result: &QueryResult, candidates: &[&str]) -> Option<f64> {
    let column = first_present(result, candidates)?;
    let values: Vec<f64> = numeric_values(result, column).collect();
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

fn first_present<'a>(result: &QueryResult, candidates: &[&'a str]) -> Option<&'a str> {
    candidates.iter().find(|c| result.has_column(c)).copied()
}

fn numeric_values<'a>(
    result: &'a QueryResult,
    column: &'a str,
) -> impl Iterator<Item = f64> + 'a {
    (0..result.row_count).filter_map(move |row| {
        result.value(row, column).and_then(Value::as_f64)
    })
}
