//! Descriptive statistics over small in-memory samples.
//!
//! [`compute`] maps a non-empty list of real numbers to a [`SummaryReport`]
//! holding mean, median, mode, population standard deviation and variance,
//! range and coefficient of variation. Every report value is a [`StatValue`],
//! so a missing mode or an undefined coefficient is a value, not an error.
//!
//! ```
//! use descstat_core::{compute, StatKey, StatValue};
//!
//! let report = compute(&[25.0, 28.0, 30.0, 32.0, 35.0, 40.0]).unwrap();
//! assert_eq!(report.get(StatKey::Median), StatValue::Number(31.0));
//! assert_eq!(report.mode(), StatValue::NoUniqueMode);
//! ```

mod error;
mod mode;
mod report;
mod sample;
mod summary;
pub mod walkthrough;

pub use error::{StatError, StatResult};
pub use mode::{ModePolicy, mode_of};
pub use report::{StatKey, StatValue, SummaryReport};
pub use sample::Sample;
pub use summary::{compute, compute_with, median_of_sorted};
pub use walkthrough::Walkthrough;
