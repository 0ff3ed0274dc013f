//! Plain-text table preview of a query result.
//!
//! Shown only when the user asks for it; limited to the first 100 rows so a
//! large result cannot flood the terminal.

use crate::db::QueryResult;

/// Maximum rows included in a preview.
pub const PREVIEW_ROW_LIMIT: usize = 100;

/// Renders the first rows of a result as an aligned text table.
///
/// Returns an empty string for a result without columns.
pub fn render_table(result: &QueryResult) -> String {
    if result.columns.is_empty() {
        return String::new();
    }

    let shown = result.rows.len().min(PREVIEW_ROW_LIMIT);

    // Column widths in characters (not bytes, names can carry accents):
    // header vs widest cell among shown rows.
    let mut widths: Vec<usize> = result
        .columns
        .iter()
        .map(|c| c.name.chars().count())
        .collect();
    for row in result.rows.iter().take(shown) {
        for (i, value) in row.iter().enumerate() {
            if let Some(width) = widths.get_mut(i) {
                *width = (*width).max(value.to_display_string().chars().count());
            }
        }
    }

    let mut out = String::new();

    let last = widths.len() - 1;

    let header: Vec<String> = result
        .columns
        .iter()
        .zip(&widths)
        .enumerate()
        .map(|(i, (col, w))| pad_cell(&col.name, *w, i == last))
        .collect();
    out.push_str(&header.join(" | "));
    out.push('\n');

    let separator: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    out.push_str(&separator.join("-+-"));
    out.push('\n');

    for row in result.rows.iter().take(shown) {
        let cells: Vec<String> = row
            .iter()
            .zip(&widths)
            .enumerate()
            .map(|(i, (value, w))| pad_cell(&value.to_display_string(), *w, i == last))
            .collect();
        out.push_str(&cells.join(" | "));
        out.push('\n');
    }

    if result.rows.len() > shown {
        out.push_str(&format!(
            "... {} more rows not shown\n",
            result.rows.len() - shown
        ));
    }

    out
}

/// Left-pads a cell to the column width; the last column is left ragged so
/// lines carry no trailing spaces.
fn pad_cell(text: &str, width: usize, is_last: bool) -> String {
    if is_last {
        text.to_string()
    } else {
        format!("{text:<width$}")
    }
}
