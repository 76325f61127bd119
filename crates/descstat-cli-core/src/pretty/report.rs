use comfy_table::{
    Cell, CellAlignment, ContentArrangement, Row as CRow, Table, presets::ASCII_MARKDOWN,
};
use descstat_core::SummaryReport;
use serde::Serialize;

/// Plain text, one `Label: value` line per statistic.
pub fn render_text(title: &str, report: &SummaryReport, decimals: usize) -> String {
    let mut out = format!("==== Measures for {} ====\n", title);
    for (key, value) in report.entries() {
        out.push_str(&format!("{}: {}\n", key.label(), value.render(decimals)));
    }
    out
}

/// Columns: Statistic | Value
pub fn render_table(title: &str, report: &SummaryReport, decimals: usize) -> String {
    let mut t = Table::new();
    t.load_preset(ASCII_MARKDOWN);
    t.set_content_arrangement(ContentArrangement::Dynamic);
    t.set_header(vec!["Statistic", "Value"]);
    for (key, value) in report.entries() {
        let mut row = CRow::new();
        row.add_cell(Cell::new(key.label()).set_alignment(CellAlignment::Left));
        row.add_cell(Cell::new(value.render(decimals)).set_alignment(CellAlignment::Right));
        t.add_row(row);
    }
    format!("{} (n = {})\n{}\n", title, report.count(), t)
}

#[derive(Serialize)]
struct JsonReport<'a> {
    variable: &'a str,
    count: usize,
    statistics: &'a SummaryReport,
}

/// A JSON array with one object per variable.
pub fn render_json(reports: &[(String, SummaryReport)]) -> anyhow::Result<String> {
    let docs: Vec<JsonReport<'_>> = reports
        .iter()
        .map(|(title, report)| JsonReport {
            variable: title,
            count: report.count(),
            statistics: report,
        })
        .collect();
    Ok(serde_json::to_string_pretty(&docs)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use descstat_core::compute;

    #[test]
    fn text_report_lines() {
        let report = compute(&[30.0, 35.0, 40.0, 32.5, 28.0]).unwrap();
        let text = render_text("Delivery time (min)", &report, 2);
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], "==== Measures for Delivery time (min) ====");
        assert_eq!(lines[1], "Mean: 33.10");
        assert_eq!(lines[2], "Median: 32.50");
        assert_eq!(lines[3], "Mode: no unique mode");
        assert_eq!(lines[6], "Range: 12.00");
        assert_eq!(lines.len(), 8);
    }

    #[test]
    fn text_report_renders_undefined_cv() {
        let report = compute(&[-1.0, 1.0]).unwrap();
        let text = render_text("t", &report, 1);
        assert!(text.contains("Coefficient of variation (%): nan"));
        assert!(text.contains("Mean: 0.0"));
    }

    #[test]
    fn table_report_contains_every_label() {
        let report = compute(&[1.0, 2.0, 2.0]).unwrap();
        let table = render_table("x", &report, 3);
        assert!(table.starts_with("x (n = 3)"));
        for label in ["Mean", "Median", "Mode", "Standard deviation", "Variance", "Range"] {
            assert!(table.contains(label), "missing {label}");
        }
        assert!(table.contains("2.000"));
    }

    #[test]
    fn json_report_shape() {
        let reports = vec![
            ("ages".to_string(), compute(&[1.0, 1.0, 2.0, 2.0, 3.0]).unwrap()),
            ("balance".to_string(), compute(&[-1.0, 1.0]).unwrap()),
        ];
        let json = render_json(&reports).unwrap();
        let v: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(v.as_array().unwrap().len(), 2);
        assert_eq!(v[0]["variable"], "ages");
        assert_eq!(v[0]["count"], 5);
        assert_eq!(v[0]["statistics"]["mean"], 1.8);
        assert_eq!(v[0]["statistics"]["median"], 2.0);
        assert_eq!(v[0]["statistics"]["mode"], "no unique mode");
        assert!(v[0]["statistics"]["coefficient_of_variation_percent"].is_number());
        assert!(v[1]["statistics"]["coefficient_of_variation_percent"].is_null());
    }
}
