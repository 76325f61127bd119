pub mod ingest;
pub mod pretty;
pub mod prompt;

// Re-export for convenience
pub use ingest::{Cell, DataTable, IngestError, TableFormat, parse_number_line};
pub use pretty::{render_json, render_preview, render_table, render_text};
pub use prompt::{prompt_line, prompt_numbers};
