//! Step-by-step arithmetic behind mean, median, mode and range.
//!
//! Teaching aid: every intermediate quantity is kept so the steps can be
//! printed one by one. The mode uses [`ModePolicy::FirstEncountered`], the
//! way it is usually counted by hand.

use std::fmt;

use crate::mode::{ModePolicy, mode_of};
use crate::report::StatValue;
use crate::sample::Sample;
use crate::summary::median_of_sorted;

#[derive(Debug, Clone, PartialEq)]
pub enum MedianStep {
    /// Odd count: the element at `index`.
    Middle { index: usize, value: f64 },
    /// Even count: the mean of the elements at `left_index` and `left_index + 1`.
    CentralPair {
        left_index: usize,
        left: f64,
        right: f64,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Walkthrough {
    pub values: Vec<f64>,
    pub sum: f64,
    pub count: usize,
    pub mean: f64,
    pub sorted: Vec<f64>,
    pub median_step: MedianStep,
    pub median: f64,
    /// `None` when no value repeats.
    pub mode: Option<f64>,
    pub mode_frequency: usize,
    pub max: f64,
    pub min: f64,
    pub range: f64,
}

impl Walkthrough {
    pub fn new(sample: &Sample) -> Self {
        let sum = sample.sum();
        let count = sample.len();
        let sorted = sample.sorted();
        let upper = count / 2;
        let median_step = if count % 2 == 1 {
            MedianStep::Middle {
                index: upper,
                value: sorted[upper],
            }
        } else {
            MedianStep::CentralPair {
                left_index: upper - 1,
                left: sorted[upper - 1],
                right: sorted[upper],
            }
        };
        let median = median_of_sorted(&sorted);
        let (mode, mode_frequency) = match mode_of(sample, ModePolicy::FirstEncountered) {
            (StatValue::Number(v), freq) => (Some(v), freq),
            (_, freq) => (None, freq),
        };
        let max = sample.max();
        let min = sample.min();
        Self {
            values: sample.values().to_vec(),
            sum,
            count,
            mean: sum / count as f64,
            sorted,
            median_step,
            median,
            mode,
            mode_frequency,
            max,
            min,
            range: max - min,
        }
    }

    pub fn lines(&self) -> Vec<String> {
        let mut out = vec![
            format!("Values: {}", list(&self.values)),
            String::new(),
            "MEAN: sum of the values divided by how many there are.".to_string(),
            format!("Sum of the values: {}", self.sum),
            format!("Number of values: {}", self.count),
            format!("Mean: {}", self.mean),
            String::new(),
            "MEDIAN: the value in the middle once the data is sorted.".to_string(),
            format!("Sorted values: {}", list(&self.sorted)),
        ];
        match &self.median_step {
            MedianStep::Middle { index, value } => {
                out.push(format!(
                    "Odd count ({}): the middle value is at index {}",
                    self.count, index
                ));
                out.push(format!("Central value: {}", value));
            }
            MedianStep::CentralPair {
                left_index,
                left,
                right,
            } => {
                out.push(format!(
                    "Even count ({}): average of the values at indices {} and {}",
                    self.count,
                    left_index,
                    left_index + 1
                ));
                out.push(format!("Left central value: {}", left));
                out.push(format!("Right central value: {}", right));
            }
        }
        out.push(format!("Median: {}", self.median));
        out.push(String::new());
        out.push("MODE: the value that repeats the most.".to_string());
        match self.mode {
            Some(mode) => out.push(format!(
                "Mode: {} - appears {} times.",
                mode, self.mode_frequency
            )),
            None => out.push("No mode: no value repeats.".to_string()),
        }
        out.push(String::new());
        out.push("RANGE: the difference between the largest and the smallest value.".to_string());
        out.push(format!("Largest value: {}", self.max));
        out.push(format!("Smallest value: {}", self.min));
        out.push(format!("Range: {}", self.range));
        out
    }
}

impl fmt::Display for Walkthrough {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.lines() {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

fn list(values: &[f64]) -> String {
    let items: Vec<String> = values.iter().map(|v| v.to_string()).collect();
    format!("[{}]", items.join(", "))
}
