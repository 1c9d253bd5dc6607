//! Rendering comparisons for display.

use crate::domain::Criterion;
use crate::error::CatalogError;

use super::comparator::Summary;

const LIBRARY_HEADER: &str = "LIBRARY";
const MISSING: &str = "-";

/// Render summaries as an aligned text table.
///
/// Columns follow `criteria` order; a criterion named twice gets one column.
/// Values a summary does not carry are shown as `-`.
pub fn render_table<S: AsRef<str>>(
    summaries: &[Summary],
    criteria: &[S],
) -> Result<String, CatalogError> {
    let mut columns: Vec<Criterion> = Vec::new();
    for criterion in Criterion::parse_all(criteria)? {
        if !columns.contains(&criterion) {
            columns.push(criterion);
        }
    }

    let name_width = summaries
        .iter()
        .map(|s| s.library.len())
        .fold(LIBRARY_HEADER.len(), usize::max);

    let widths: Vec<usize> = columns
        .iter()
        .map(|c| {
            summaries
                .iter()
                .map(|s| s.get(c.as_str()).unwrap_or(MISSING).len())
                .fold(c.as_str().len(), usize::max)
        })
        .collect();

    let mut lines = Vec::with_capacity(summaries.len() + 2);

    let header: Vec<&str> = columns.iter().map(|c| c.as_str()).collect();
    lines.push(format_row(LIBRARY_HEADER, &header, name_width, &widths));

    let total = name_width + widths.iter().map(|w| w + 2).sum::<usize>();
    lines.push("-".repeat(total));

    for summary in summaries {
        let cells: Vec<&str> = columns
            .iter()
            .map(|c| summary.get(c.as_str()).unwrap_or(MISSING))
            .collect();
        lines.push(format_row(&summary.library, &cells, name_width, &widths));
    }

    let mut out = lines.join("\n");
    out.push('\n');
    Ok(out)
}

fn format_row(name: &str, cells: &[&str], name_width: usize, widths: &[usize]) -> String {
    let mut row = format!("{:<width$}", name, width = name_width);
    for (cell, width) in cells.iter().zip(widths) {
        row.push_str(&format!("  {:<width$}", cell, width = width));
    }
    row.trim_end().to_string()
}

/// Render summaries as pretty-printed JSON
pub fn render_json(summaries: &[Summary]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(summaries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::comparator::compare_libraries;

    #[test]
    fn test_table_layout() {
        let criteria = ["accessibility", "bundle_size"];
        let summaries = compare_libraries(&criteria).unwrap();
        let table = render_table(&summaries, &criteria).unwrap();

        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "LIBRARY      accessibility  bundle_size");
        assert_eq!(lines[1], "-".repeat(39));
        assert_eq!(lines[2], "Radix UI     excellent      moderate");
        assert_eq!(lines[3], "Headless UI  excellent      small");
        assert_eq!(lines[4], "Ark UI       excellent      moderate");
    }

    #[test]
    fn test_table_marks_missing_values() {
        let summaries = compare_libraries(&["ecosystem"]).unwrap();
        let table = render_table(&summaries, &["ecosystem", "customization"]).unwrap();

        assert!(table.lines().nth(2).unwrap().ends_with("large             -"));
    }

    #[test]
    fn test_table_validates_criteria() {
        let summaries = compare_libraries(&["ecosystem"]).unwrap();
        assert!(matches!(
            render_table(&summaries, &["stars"]),
            Err(CatalogError::InvalidCriterion(_))
        ));
    }

    #[test]
    fn test_json_shape() {
        let summaries = compare_libraries(&["bundle_size"]).unwrap();
        let json = render_json(&summaries).unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[1]["library"], "Headless UI");
        assert_eq!(value[1]["values"]["bundle_size"], "small");
        assert_eq!(value.as_array().unwrap().len(), 3);
    }
}
