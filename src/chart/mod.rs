//! Chart mapping: query results to declarative chart specifications.

mod heuristic;
mod mapper;
mod spec;

pub use heuristic::{infer_field_type, preferred_y_field, SemanticType};
pub use mapper::{build_chart, build_chart_named};
pub use spec::{
    AxisEncoding, Chart, ChartKind, ColorEncoding, FieldEncoding, PlotSpec, TooltipEntry,
    CHART_HEIGHT, CHART_WIDTH, DEFAULT_MARK_COLOR, HISTOGRAM_MAX_BINS,
};
