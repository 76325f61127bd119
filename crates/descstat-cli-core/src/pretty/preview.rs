use comfy_table::{ContentArrangement, Table, presets::ASCII_MARKDOWN};

use crate::ingest::DataTable;

/// First `n` rows of `table` followed by the list of its columns.
pub fn render_preview(table: &DataTable, n: usize) -> String {
    let mut t = Table::new();
    t.load_preset(ASCII_MARKDOWN);
    t.set_content_arrangement(ContentArrangement::Dynamic);
    t.set_header(table.headers().to_vec());
    for row in table.head(n) {
        t.add_row(row.iter().map(|c| c.to_string()).collect::<Vec<_>>());
    }
    format!(
        "Data preview (first rows):\n{}\n\nColumns found in the file:\n{:?}\n",
        t,
        table.headers()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingest::Cell;

    #[test]
    fn preview_shows_head_and_columns() {
        let table = DataTable::new(
            vec!["tempo".into(), "temperatura".into()],
            (0..8)
                .map(|i| vec![Cell::Number(30.0 + i as f64), Cell::Text(format!("t{i}"))])
                .collect(),
        );
        let out = render_preview(&table, 5);
        assert!(out.contains("tempo"));
        assert!(out.contains("t4"));
        assert!(!out.contains("t5"));
        assert!(out.contains("[\"tempo\", \"temperatura\"]"));
    }
}
