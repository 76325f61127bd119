//! Input ingestion
//!
//! Turns typed-in text and CSV/Excel files into plain `f64` lists for the
//! calculator. Nothing here computes statistics.

mod error;
mod numbers;
mod table;

pub use error::IngestError;
pub use numbers::parse_number_line;
pub use table::{Cell, DataTable, TableFormat};
