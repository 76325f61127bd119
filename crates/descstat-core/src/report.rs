use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use strum_macros::{Display, EnumString, IntoStaticStr};

/// A single statistic in a [`SummaryReport`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StatValue {
    Number(f64),
    /// Two or more values share the highest frequency.
    NoUniqueMode,
    /// The statistic has no finite value (coefficient of variation with a
    /// zero mean).
    Undefined,
}

impl StatValue {
    pub const NO_UNIQUE_MODE: &'static str = "no unique mode";

    pub fn as_number(&self) -> Option<f64> {
        match self {
            StatValue::Number(v) => Some(*v),
            _ => None,
        }
    }

    /// Numbers with `decimals` places, the sentinels literally.
    pub fn render(&self, decimals: usize) -> String {
        match self {
            StatValue::Number(v) => format!("{:.*}", decimals, v),
            StatValue::NoUniqueMode => Self::NO_UNIQUE_MODE.to_string(),
            StatValue::Undefined => "nan".to_string(),
        }
    }
}

impl Serialize for StatValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            StatValue::Number(v) => serializer.serialize_f64(*v),
            StatValue::NoUniqueMode => serializer.serialize_str(Self::NO_UNIQUE_MODE),
            StatValue::Undefined => serializer.serialize_none(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum StatKey {
    Mean,
    Median,
    Mode,
    PopulationStdev,
    PopulationVariance,
    Range,
    CoefficientOfVariationPercent,
}

impl StatKey {
    /// Report order.
    pub const ALL: [StatKey; 7] = [
        StatKey::Mean,
        StatKey::Median,
        StatKey::Mode,
        StatKey::PopulationStdev,
        StatKey::PopulationVariance,
        StatKey::Range,
        StatKey::CoefficientOfVariationPercent,
    ];

    pub fn name(self) -> &'static str {
        self.into()
    }

    pub fn label(self) -> &'static str {
        match self {
            StatKey::Mean => "Mean",
            StatKey::Median => "Median",
            StatKey::Mode => "Mode",
            StatKey::PopulationStdev => "Standard deviation",
            StatKey::PopulationVariance => "Variance",
            StatKey::Range => "Range",
            StatKey::CoefficientOfVariationPercent => "Coefficient of variation (%)",
        }
    }
}

/// Summary statistics of one sample.
///
/// Fields are private so a report is only ever produced by
/// [`compute`](crate::compute) and stays consistent.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryReport {
    pub(crate) count: usize,
    pub(crate) mean: f64,
    pub(crate) median: f64,
    pub(crate) mode: StatValue,
    pub(crate) population_stdev: f64,
    pub(crate) population_variance: f64,
    pub(crate) range: f64,
    pub(crate) coefficient_of_variation: StatValue,
}

impl SummaryReport {
    /// Number of values the report was computed from.
    pub fn count(&self) -> usize {
        self.count
    }

    pub fn mean(&self) -> f64 {
        self.mean
    }

    pub fn median(&self) -> f64 {
        self.median
    }

    pub fn mode(&self) -> StatValue {
        self.mode
    }

    pub fn population_stdev(&self) -> f64 {
        self.population_stdev
    }

    pub fn population_variance(&self) -> f64 {
        self.population_variance
    }

    pub fn range(&self) -> f64 {
        self.range
    }

    pub fn coefficient_of_variation(&self) -> StatValue {
        self.coefficient_of_variation
    }

    pub fn get(&self, key: StatKey) -> StatValue {
        match key {
            StatKey::Mean => StatValue::Number(self.mean),
            StatKey::Median => StatValue::Number(self.median),
            StatKey::Mode => self.mode,
            StatKey::PopulationStdev => StatValue::Number(self.population_stdev),
            StatKey::PopulationVariance => StatValue::Number(self.population_variance),
            StatKey::Range => StatValue::Number(self.range),
            StatKey::CoefficientOfVariationPercent => self.coefficient_of_variation,
        }
    }

    pub fn entries(&self) -> impl Iterator<Item = (StatKey, StatValue)> + '_ {
        StatKey::ALL.into_iter().map(|k| (k, self.get(k)))
    }
}

impl Serialize for SummaryReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(StatKey::ALL.len()))?;
        for (key, value) in self.entries() {
            map.serialize_entry(key.name(), &value)?;
        }
        map.end()
    }
}
