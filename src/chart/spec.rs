//! Declarative chart specifications.
//!
//! A `Chart` describes what to render (kind, fields, semantic types, title)
//! independent of any rendering library, and serializes to Vega-Lite-shaped
//! JSON with the data inlined. Charts are built fresh per render request and
//! never mutated.

use serde_json::{json, Value as Json};

use super::heuristic::SemanticType;

/// Plot dimensions, matching the dashboard's fixed chart area.
pub const CHART_WIDTH: u32 = 700;
pub const CHART_HEIGHT: u32 = 420;

/// Mark color when no color field is selected.
pub const DEFAULT_MARK_COLOR: &str = "steelblue";

/// Maximum number of bins for histogram x-axes.
pub const HISTOGRAM_MAX_BINS: u32 = 30;

/// Point size for scatter plots.
const SCATTER_POINT_SIZE: u32 = 100;

/// Supported chart kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Bar,
    Scatter,
    Line,
    Histogram,
}

impl ChartKind {
    /// Parses a chart kind from a UI-supplied name.
    ///
    /// Accepts both short names ("bar") and the dashboard's display names
    /// ("Bar Chart"). Unknown names return `None`; callers render the
    /// documented fallback in that case.
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "bar" | "bar chart" => Some(Self::Bar),
            "scatter" | "scatter plot" => Some(Self::Scatter),
            "line" | "line chart" => Some(Self::Line),
            "histogram" => Some(Self::Histogram),
            _ => None,
        }
    }

    /// Returns the Vega-Lite mark for this kind.
    fn mark(&self) -> Json {
        match self {
            Self::Bar | Self::Histogram => json!("bar"),
            Self::Scatter => json!({"type": "circle", "size": SCATTER_POINT_SIZE}),
            Self::Line => json!({"type": "line", "point": true}),
        }
    }
}

/// A field reference with its inferred semantic type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldEncoding {
    pub field: String,
    pub semantic_type: SemanticType,
}

impl FieldEncoding {
    pub fn new(field: impl Into<String>, semantic_type: SemanticType) -> Self {
        Self {
            field: field.into(),
            semantic_type,
        }
    }

    fn to_json(&self) -> Json {
        json!({
            "field": self.field,
            "type": self.semantic_type.as_str(),
            "title": self.field,
        })
    }
}

/// Y-axis encoding: a field, or the computed count used by histograms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AxisEncoding {
    Field(FieldEncoding),
    Count,
}

/// Color channel: a fixed default color, or a field-keyed channel with a
/// legend titled by the field name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorEncoding {
    Default,
    Field(FieldEncoding),
}

impl ColorEncoding {
    fn to_json(&self) -> Json {
        match self {
            Self::Default => json!({"value": DEFAULT_MARK_COLOR}),
            Self::Field(enc) => json!({
                "field": enc.field,
                "type": enc.semantic_type.as_str(),
                "legend": {"title": enc.field},
            }),
        }
    }
}

/// A single tooltip entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TooltipEntry {
    Field(String),
    Count,
}

impl TooltipEntry {
    fn to_json(&self) -> Json {
        match self {
            Self::Field(field) => json!({"field": field}),
            Self::Count => json!({"aggregate": "count"}),
        }
    }
}

/// A chart ready to render: either a real plot or a placeholder state.
///
/// Placeholders are renders in their own right (an empty-state message),
/// not errors.
#[derive(Debug, Clone, PartialEq)]
pub enum Chart {
    /// Empty-state or invalid-selection render.
    Placeholder { title: String, message: String },

    /// A plot over the query result.
    Plot(PlotSpec),
}

/// The full specification of a plot.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotSpec {
    pub kind: ChartKind,
    pub title: String,
    pub x: FieldEncoding,
    /// Bin the x-axis into at most this many bins (histograms only).
    pub x_bin: Option<u32>,
    pub y: AxisEncoding,
    pub color: ColorEncoding,
    pub tooltip: Vec<TooltipEntry>,
    /// Data rows as JSON objects, inlined into the rendered spec.
    pub data: Vec<Json>,
}

impl Chart {
    /// Creates a placeholder chart with the given title and message.
    pub fn placeholder(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Placeholder {
            title: title.into(),
            message: message.into(),
        }
    }

    /// Returns the chart title.
    pub fn title(&self) -> &str {
        match self {
            Self::Placeholder { title, .. } => title,
            Self::Plot(spec) => &spec.title,
        }
    }

    /// Renders the chart as a Vega-Lite v5 JSON specification.
    pub fn to_vega_lite(&self) -> Json {
        match self {
            Self::Placeholder { title, message } => json!({
                "$schema": "https://vega.github.io/schema/vega-lite/v5.json",
                "data": {"values": []},
                "mark": "text",
                "encoding": {"text": {"value": message}},
                "title": title,
                "width": CHART_WIDTH,
                "height": CHART_HEIGHT,
            }),
            Self::Plot(spec) => spec.to_vega_lite(),
        }
    }
}

impl PlotSpec {
    fn to_vega_lite(&self) -> Json {
        let mut x = self.x.to_json();
        if let Some(maxbins) = self.x_bin {
            x["bin"] = json!({"maxbins": maxbins});
        }

        let y = match &self.y {
            AxisEncoding::Field(enc) => enc.to_json(),
            AxisEncoding::Count => json!({"aggregate": "count", "title": "Count"}),
        };

        let mut encoding = json!({
            "x": x,
            "y": y,
            "color": self.color.to_json(),
        });
        if !self.tooltip.is_empty() {
            encoding["tooltip"] = Json::Array(self.tooltip.iter().map(|t| t.to_json()).collect());
        }

        json!({
            "$schema": "https://vega.github.io/schema/vega-lite/v5.json",
            "data": {"values": self.data},
            "mark": self.kind.mark(),
            "encoding": encoding,
            "title": self.title,
            "width": CHART_WIDTH,
            "height": CHART_HEIGHT,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chart_kind_parse() {
        assert_eq!(ChartKind::parse("bar"), Some(ChartKind::Bar));
        assert_eq!(ChartKind::parse("Bar Chart"), Some(ChartKind::Bar));
        assert_eq!(ChartKind::parse("Scatter Plot"), Some(ChartKind::Scatter));
        assert_eq!(ChartKind::parse("line"), Some(ChartKind::Line));
        assert_eq!(ChartKind::parse("HISTOGRAM"), Some(ChartKind::Histogram));
        assert_eq!(ChartKind::parse("pie"), None);
    }

    #[test]
    fn test_placeholder_vega_lite() {
        let chart = Chart::placeholder("No Data", "No data available");
        let spec = chart.to_vega_lite();

        assert_eq!(spec["mark"], "text");
        assert_eq!(spec["encoding"]["text"]["value"], "No data available");
        assert_eq!(spec["title"], "No Data");
        assert_eq!(spec["width"], 700);
        assert_eq!(spec["height"], 420);
        assert!(spec["data"]["values"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_plot_vega_lite_shape() {
        let spec = PlotSpec {
            kind: ChartKind::Bar,
            title: "restaurant_count by stars".to_string(),
            x: FieldEncoding::new("stars", SemanticType::Quantitative),
            x_bin: None,
            y: AxisEncoding::Field(FieldEncoding::new(
                "restaurant_count",
                SemanticType::Quantitative,
            )),
            color: ColorEncoding::Default,
            tooltip: vec![
                TooltipEntry::Field("stars".to_string()),
                TooltipEntry::Field("restaurant_count".to_string()),
            ],
            data: vec![serde_json::json!({"stars": 4.5, "restaurant_count": 10})],
        };

        let rendered = Chart::Plot(spec).to_vega_lite();

        assert_eq!(rendered["mark"], "bar");
        assert_eq!(rendered["encoding"]["x"]["field"], "stars");
        assert_eq!(rendered["encoding"]["x"]["type"], "quantitative");
        assert_eq!(rendered["encoding"]["y"]["field"], "restaurant_count");
        assert_eq!(rendered["encoding"]["color"]["value"], "steelblue");
        assert_eq!(rendered["encoding"]["tooltip"][0]["field"], "stars");
        assert_eq!(rendered["data"]["values"][0]["restaurant_count"], 10);
        assert_eq!(rendered["title"], "restaurant_count by stars");
    }

    #[test]
    fn test_histogram_vega_lite_bin_and_count() {
        let spec = PlotSpec {
            kind: ChartKind::Histogram,
            title: "Distribution of stars".to_string(),
            x: FieldEncoding::new("stars", SemanticType::Quantitative),
            x_bin: Some(HISTOGRAM_MAX_BINS),
            y: AxisEncoding::Count,
            color: ColorEncoding::Default,
            tooltip: vec![TooltipEntry::Count],
            data: vec![],
        };

        let rendered = Chart::Plot(spec).to_vega_lite();

        assert_eq!(rendered["mark"], "bar");
        assert_eq!(rendered["encoding"]["x"]["bin"]["maxbins"], 30);
        assert_eq!(rendered["encoding"]["y"]["aggregate"], "count");
        assert_eq!(rendered["encoding"]["y"]["title"], "Count");
        assert_eq!(rendered["encoding"]["tooltip"][0]["aggregate"], "count");
    }

    #[test]
    fn test_scatter_and_line_marks() {
        assert_eq!(
            ChartKind::Scatter.mark(),
            serde_json::json!({"type": "circle", "size": 100})
        );
        assert_eq!(
            ChartKind::Line.mark(),
            serde_json::json!({"type": "line", "point": true})
        );
    }

    #[test]
    fn test_color_field_encoding() {
        let color = ColorEncoding::Field(FieldEncoding::new("status", SemanticType::Nominal));
        let rendered = color.to_json();

        assert_eq!(rendered["field"], "status");
        assert_eq!(rendered["type"], "nominal");
        assert_eq!(rendered["legend"]["title"], "status");
    }
}
