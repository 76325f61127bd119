use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("'{token}' (value #{position}) is not a number")]
    BadNumber { token: String, position: usize },
    #[error("unsupported file format '{file}': use .csv, .xlsx or .xls")]
    UnsupportedFormat { file: String },
    #[error("column '{name}' not found; available columns: {available:?}")]
    UnknownColumn {
        name: String,
        available: Vec<String>,
    },
    #[error("workbook '{file}' has no worksheet")]
    NoWorksheet { file: String },
}
