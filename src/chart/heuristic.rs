//! Field type inference from column names.
//!
//! Query results arrive untyped from the user's point of view, so axis
//! encodings are inferred from naming conventions: a column called
//! `avg_rating` is almost certainly a number, `review_date` a date.
//! The heuristic is a pure function to keep it trivially testable.

/// Semantic type of a data field, as chart encodings understand it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SemanticType {
    /// Numeric magnitude.
    Quantitative,
    /// Date or time.
    Temporal,
    /// Categorical label.
    Nominal,
}

impl SemanticType {
    /// Returns the Vega-Lite type code for this semantic type.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Quantitative => "quantitative",
            Self::Temporal => "temporal",
            Self::Nominal => "nominal",
        }
    }
}

/// Substrings that mark a field as quantitative.
const QUANTITATIVE_KEYWORDS: &[&str] =
    &["count", "total", "sum", "avg", "rating", "stars", "review"];

/// Substrings that mark a field as temporal.
const TEMPORAL_KEYWORDS: &[&str] = &["date", "time", "year", "month"];

/// Column names preferred as the default y-axis, checked by exact
/// (lowercased) match.
const PREFERRED_Y_FIELDS: &[&str] = &[
    "count",
    "value",
    "amount",
    "score",
    "avg",
    "avg_rating",
    "avg_reviews",
    "total",
    "sum",
    "stars",
    "restaurant_count",
    "review_count",
];

/// Infers the semantic type of a field from its name.
///
/// Case-insensitive substring matching; quantitative keywords win over
/// temporal ones, anything unmatched is nominal.
pub fn infer_field_type(field_name: &str) -> SemanticType {
    let name = field_name.to_lowercase();

    if QUANTITATIVE_KEYWORDS.iter().any(|k| name.contains(k)) {
        SemanticType::Quantitative
    } else if TEMPORAL_KEYWORDS.iter().any(|k| name.contains(k)) {
        SemanticType::Temporal
    } else {
        SemanticType::Nominal
    }
}

/// Picks a default y-axis field: the first column whose name is a known
/// numeric target, else the last column when more than one exists, else
/// the first.
pub fn preferred_y_field<'a>(columns: &[&'a str]) -> Option<&'a str> {
    if columns.is_empty() {
        return None;
    }

    columns
        .iter()
        .find(|c| PREFERRED_Y_FIELDS.contains(&c.to_lowercase().as_str()))
        .copied()
        .or_else(|| {
            if columns.len() > 1 {
                columns.last().copied()
            } else {
                columns.first().copied()
            }
        })
}
