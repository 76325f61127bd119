use crate::error::{StatError, StatResult};

/// A validated, non-empty list of finite measurements.
///
/// Input order is kept as given; only [`Sample::sorted`] reorders, and it
/// works on a copy.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    values: Vec<f64>,
}

impl Sample {
    pub fn new(values: Vec<f64>) -> StatResult<Self> {
        if values.is_empty() {
            return Err(StatError::EmptyInput);
        }
        if let Some((index, value)) = values
            .iter()
            .copied()
            .enumerate()
            .find(|(_, v)| !v.is_finite())
        {
            return Err(StatError::NonFinite { index, value });
        }
        Ok(Self { values })
    }

    pub fn from_slice(values: &[f64]) -> StatResult<Self> {
        Self::new(values.to_vec())
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always `false`: construction rejects empty input.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn sum(&self) -> f64 {
        self.values.iter().sum()
    }

    pub fn min(&self) -> f64 {
        self.values.iter().copied().fold(f64::INFINITY, f64::min)
    }

    pub fn max(&self) -> f64 {
        self.values.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }

    /// Ascending copy of the values.
    pub fn sorted(&self) -> Vec<f64> {
        let mut sorted = self.values.clone();
        sorted.sort_by(f64::total_cmp);
        sorted
    }
}

impl TryFrom<Vec<f64>> for Sample {
    type Error = StatError;

    fn try_from(values: Vec<f64>) -> StatResult<Self> {
        Self::new(values)
    }
}

impl TryFrom<&[f64]> for Sample {
    type Error = StatError;

    fn try_from(values: &[f64]) -> StatResult<Self> {
        Self::from_slice(values)
    }
}
