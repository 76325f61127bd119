use thiserror::Error;

pub type StatResult<T> = Result<T, StatError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum StatError {
    /// No values to summarise.
    #[error("empty input: at least one value is required")]
    EmptyInput,
    /// NaN or infinite value at `index`.
    #[error("non-finite value {value} at position {index}")]
    NonFinite { index: usize, value: f64 },
}
