use std::fmt;
use std::path::Path;

use anyhow::Context;
use calamine::{Data, Reader, open_workbook_auto};

use super::error::IngestError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableFormat {
    Csv,
    Excel,
}

impl TableFormat {
    /// Picks the reader from the file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self, IngestError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match ext.as_deref() {
            Some("csv") => Ok(TableFormat::Csv),
            Some("xlsx") | Some("xls") => Ok(TableFormat::Excel),
            _ => Err(IngestError::UnsupportedFormat {
                file: path.display().to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Empty,
    Number(f64),
    Text(String),
}

impl Cell {
    pub fn from_text(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.is_empty() {
            Cell::Empty
        } else if let Ok(v) = raw.parse::<f64>() {
            Cell::Number(v)
        } else {
            Cell::Text(raw.to_string())
        }
    }

    /// Numeric value if the cell holds a finite number.
    pub fn to_number(&self) -> Option<f64> {
        match self {
            Cell::Number(v) if v.is_finite() => Some(*v),
            _ => None,
        }
    }
}

impl From<&Data> for Cell {
    fn from(data: &Data) -> Self {
        match data {
            Data::Empty => Cell::Empty,
            Data::Int(i) => Cell::Number(*i as f64),
            Data::Float(f) => Cell::Number(*f),
            Data::String(s) => Cell::from_text(s),
            other => Cell::Text(other.to_string()),
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Empty => Ok(()),
            Cell::Number(v) => write!(f, "{}", v),
            Cell::Text(s) => f.write_str(s),
        }
    }
}

/// A header row plus data rows, as read from a CSV file or the first
/// worksheet of a workbook.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataTable {
    headers: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl DataTable {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<Cell>>) -> Self {
        Self { headers, rows }
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let table = match TableFormat::from_path(path)? {
            TableFormat::Csv => Self::read_csv(path)?,
            TableFormat::Excel => Self::read_excel(path)?,
        };
        log::debug!(
            "read {} rows x {} columns from {}",
            table.rows.len(),
            table.headers.len(),
            path.display()
        );
        Ok(table)
    }

    fn read_csv(path: &Path) -> anyhow::Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_path(path)
            .with_context(|| format!("cannot open {}", path.display()))?;
        let headers = reader
            .headers()
            .with_context(|| format!("cannot read header of {}", path.display()))?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();
        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record.with_context(|| format!("malformed row in {}", path.display()))?;
            rows.push(record.iter().map(Cell::from_text).collect());
        }
        Ok(Self { headers, rows })
    }

    fn read_excel(path: &Path) -> anyhow::Result<Self> {
        let mut workbook = open_workbook_auto(path)
            .map_err(|e| anyhow::anyhow!("cannot open workbook {}: {}", path.display(), e))?;
        let range = workbook
            .worksheet_range_at(0)
            .ok_or_else(|| IngestError::NoWorksheet {
                file: path.display().to_string(),
            })?
            .map_err(|e| anyhow::anyhow!("cannot read worksheet of {}: {}", path.display(), e))?;
        let mut rows = range.rows();
        let headers = rows
            .next()
            .map(|row| row.iter().map(|c| c.to_string().trim().to_string()).collect())
            .unwrap_or_default();
        let rows = rows.map(|row| row.iter().map(Cell::from).collect()).collect();
        Ok(Self { headers, rows })
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    /// First `n` data rows.
    pub fn head(&self, n: usize) -> &[Vec<Cell>] {
        &self.rows[..n.min(self.rows.len())]
    }

    /// Numbers in column `name`; blank and non-numeric cells are dropped.
    pub fn numeric_column(&self, name: &str) -> anyhow::Result<Vec<f64>> {
        let idx = self
            .headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| IngestError::UnknownColumn {
                name: name.to_string(),
                available: self.headers.clone(),
            })?;
        let values: Vec<f64> = self
            .rows
            .iter()
            .filter_map(|row| row.get(idx).and_then(Cell::to_number))
            .collect();
        let dropped = self.rows.len() - values.len();
        if dropped > 0 {
            log::warn!(
                "column '{}': dropped {} empty or non-numeric cells",
                name,
                dropped
            );
        }
        Ok(values)
    }
}
