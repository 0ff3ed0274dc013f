//! Maps query results to chart specifications.
//!
//! This is where axis selections, the field type heuristic, and the chart
//! kind come together. Invalid selections and empty results map to
//! placeholder renders rather than errors, so the host can always draw
//! something.

use crate::db::QueryResult;

use super::heuristic::{infer_field_type, SemanticType};
use super::spec::{
    AxisEncoding, Chart, ChartKind, ColorEncoding, FieldEncoding, PlotSpec, TooltipEntry,
    HISTOGRAM_MAX_BINS,
};

/// The UI sends this sentinel when no color field is selected.
const NO_COLOR_SENTINEL: &str = "None";

/// Builds a chart from a query result and the user's selections.
///
/// Returns a placeholder when the result is empty or when `x_field` /
/// `y_field` is not one of the result's columns.
pub fn build_chart(
    result: &QueryResult,
    kind: ChartKind,
    x_field: &str,
    y_field: &str,
    color_field: Option<&str>,
) -> Chart {
    if let Some(placeholder) = validate(result, x_field, y_field) {
        return placeholder;
    }

    let color = color_encoding(color_field);
    let data = result.records();

    match kind {
        ChartKind::Bar => Chart::Plot(PlotSpec {
            kind,
            title: format!("{y_field} by {x_field}"),
            x: inferred(x_field),
            x_bin: None,
            y: AxisEncoding::Field(inferred(y_field)),
            tooltip: tooltip_fields(x_field, y_field, selected_color(color_field)),
            color,
            data,
        }),
        ChartKind::Scatter => Chart::Plot(PlotSpec {
            kind,
            title: format!("{y_field} vs {x_field}"),
            x: inferred(x_field),
            x_bin: None,
            y: AxisEncoding::Field(inferred(y_field)),
            tooltip: tooltip_fields(x_field, y_field, selected_color(color_field)),
            color,
            data,
        }),
        ChartKind::Line => Chart::Plot(PlotSpec {
            kind,
            title: format!("{y_field} by {x_field}"),
            x: inferred(x_field),
            x_bin: None,
            y: AxisEncoding::Field(inferred(y_field)),
            tooltip: tooltip_fields(x_field, y_field, selected_color(color_field)),
            color,
            data,
        }),
        ChartKind::Histogram => Chart::Plot(PlotSpec {
            kind,
            title: format!("Distribution of {x_field}"),
            // Binning always treats x as quantitative, even when the name
            // heuristic would classify it otherwise. This override applies
            // to histograms only.
            x: FieldEncoding::new(x_field, SemanticType::Quantitative),
            x_bin: Some(HISTOGRAM_MAX_BINS),
            y: AxisEncoding::Count,
            tooltip: vec![TooltipEntry::Count],
            color,
            data,
        }),
    }
}

/// Builds a chart from a UI-supplied kind name.
///
/// Unknown kind names fall back to bar encodings without tooltips, titled
/// "Chart" — a documented default, not a failure.
pub fn build_chart_named(
    result: &QueryResult,
    kind_name: &str,
    x_field: &str,
    y_field: &str,
    color_field: Option<&str>,
) -> Chart {
    match ChartKind::parse(kind_name) {
        Some(kind) => build_chart(result, kind, x_field, y_field, color_field),
        None => fallback_chart(result, x_field, y_field, color_field),
    }
}

/// The fallback render for unknown chart kinds.
fn fallback_chart(
    result: &QueryResult,
    x_field: &str,
    y_field: &str,
    color_field: Option<&str>,
) -> Chart {
    if let Some(placeholder) = validate(result, x_field, y_field) {
        return placeholder;
    }

    Chart::Plot(PlotSpec {
        kind: ChartKind::Bar,
        title: "Chart".to_string(),
        x: inferred(x_field),
        x_bin: None,
        y: AxisEncoding::Field(inferred(y_field)),
        color: color_encoding(color_field),
        tooltip: Vec::new(),
        data: result.records(),
    })
}

/// Checks for the two placeholder conditions: no data, invalid selection.
fn validate(result: &QueryResult, x_field: &str, y_field: &str) -> Option<Chart> {
    if result.columns.is_empty() || result.rows.is_empty() {
        return Some(Chart::placeholder("No Data", "No data available"));
    }

    if !result.has_column(x_field) || !result.has_column(y_field) {
        return Some(Chart::placeholder(
            "Invalid Selection",
            "Invalid axis selection",
        ));
    }

    None
}

/// Encodes a field with its inferred semantic type.
fn inferred(field: &str) -> FieldEncoding {
    FieldEncoding::new(field, infer_field_type(field))
}

/// Resolves the color selection, treating the UI sentinel as no selection.
fn color_encoding(color_field: Option<&str>) -> ColorEncoding {
    match selected_color(color_field) {
        Some(field) => ColorEncoding::Field(inferred(field)),
        None => ColorEncoding::Default,
    }
}

fn selected_color(color_field: Option<&str>) -> Option<&str> {
    color_field.filter(|f| *f != NO_COLOR_SENTINEL)
}

/// Tooltip for x/y charts: both axes, plus the color field when selected.
fn tooltip_fields(x_field: &str, y_field: &str, color_field: Option<&str>) -> Vec<TooltipEntry> {
    let mut entries = vec![
        TooltipEntry::Field(x_field.to_string()),
        TooltipEntry::Field(y_field.to_string()),
    ];
    if let Some(color) = color_field {
        entries.push(TooltipEntry::Field(color.to_string()));
    }
    entries
}
