use crate::error::StatResult;
use crate::mode::{ModePolicy, mode_of};
use crate::report::{StatValue, SummaryReport};
use crate::sample::Sample;

/// Computes the summary of `values` with the strict mode policy.
///
/// # Errors
/// [`StatError::EmptyInput`](crate::StatError::EmptyInput) for an empty
/// slice, [`StatError::NonFinite`](crate::StatError::NonFinite) if any value
/// is NaN or infinite.
pub fn compute(values: &[f64]) -> StatResult<SummaryReport> {
    let sample = Sample::from_slice(values)?;
    Ok(compute_with(&sample, ModePolicy::Strict))
}

/// Computes the summary of an already validated sample.
///
/// A constant sample has exactly zero spread. A variance too large for
/// `f64` saturates to infinity; a non-finite coefficient of variation is
/// reported as [`StatValue::Undefined`].
pub fn compute_with(sample: &Sample, policy: ModePolicy) -> SummaryReport {
    let sorted = sample.sorted();
    let (min, max) = (sorted[0], sorted[sorted.len() - 1]);
    let median = median_of_sorted(&sorted);
    let (mode, _) = mode_of(sample, policy);

    let (mean, population_stdev, population_variance) = if min == max {
        (min, 0.0, 0.0)
    } else {
        spread(sample.values())
    };
    let range = max - min;
    let coefficient_of_variation = match population_stdev / mean * 100.0 {
        cv if mean != 0.0 && cv.is_finite() => StatValue::Number(cv),
        _ => StatValue::Undefined,
    };

    log::debug!(
        "summarised {} values: mean={} median={} stdev={}",
        sample.len(),
        mean,
        median,
        population_stdev
    );

    SummaryReport {
        count: sample.len(),
        mean,
        median,
        mode,
        population_stdev,
        population_variance,
        range,
        coefficient_of_variation,
    }
}

// Above this magnitude squared deviations may overflow.
const LARGE: f64 = 1e100;

/// Mean, population standard deviation and population variance of a
/// finite, non-empty slice.
fn spread(values: &[f64]) -> (f64, f64, f64) {
    let n = values.len() as f64;
    let mut mean = values.iter().sum::<f64>() / n;
    if !mean.is_finite() {
        // the plain sum overflowed
        mean = values.iter().map(|x| x / n).sum();
    }

    let max_abs = values.iter().fold(0.0_f64, |acc, x| acc.max(x.abs()));
    // a power of two keeps the scaling exact
    let scale = if max_abs > LARGE { 2f64.powi(-600) } else { 1.0 };
    let scaled_variance = values
        .iter()
        .map(|x| (x * scale - mean * scale).powi(2))
        .sum::<f64>()
        / n;
    let stdev = scaled_variance.sqrt() / scale;
    let variance = scaled_variance / scale / scale;
    (mean, stdev, variance)
}

/// Median of an ascending, non-empty slice.
///
/// Even lengths average the elements at `n/2 - 1` and `n/2`.
pub fn median_of_sorted(sorted: &[f64]) -> f64 {
    let n = sorted.len();
    debug_assert!(n > 0, "median of an empty slice");
    let upper = n / 2;
    if n % 2 == 1 {
        sorted[upper]
    } else {
        (sorted[upper - 1] + sorted[upper]) / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{StatError, StatKey};

    const EPS: f64 = 1e-9;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }

    #[test]
    fn delivery_times_example() {
        let report = compute(&[30.0, 35.0, 40.0, 32.5, 28.0]).unwrap();
        assert!(close(report.mean(), 33.1));
        assert_eq!(report.median(), 32.5);
        assert_eq!(report.range(), 12.0);
        assert_eq!(report.mode(), StatValue::NoUniqueMode);
        assert_eq!(report.count(), 5);
        // deviations: -3.1 1.9 6.9 -0.6 -5.1 -> squares sum 84.2
        assert!(close(report.population_variance(), 84.2 / 5.0));
        let cv = report.coefficient_of_variation().as_number().unwrap();
        assert!(close(cv, (84.2_f64 / 5.0).sqrt() / 33.1 * 100.0));
    }

    #[test]
    fn even_count_median_averages_central_pair() {
        let report = compute(&[25.0, 28.0, 30.0, 32.0, 35.0, 40.0]).unwrap();
        assert_eq!(report.median(), 31.0);
        assert!(close(report.mean(), 190.0 / 6.0));
        assert_eq!(report.range(), 15.0);
    }

    #[test]
    fn median_ignores_input_order() {
        let report = compute(&[40.0, 25.0, 35.0, 28.0, 32.0, 30.0]).unwrap();
        assert_eq!(report.median(), 31.0);
    }

    #[test]
    fn tied_frequencies_have_no_mode() {
        let report = compute(&[1.0, 1.0, 2.0, 2.0, 3.0]).unwrap();
        assert_eq!(report.get(StatKey::Mode), StatValue::NoUniqueMode);
    }

    #[test]
    fn unique_mode_is_reported() {
        let report = compute(&[4.0, 1.0, 4.0, 2.0]).unwrap();
        assert_eq!(report.mode(), StatValue::Number(4.0));
    }

    #[test]
    fn identical_values_have_no_spread() {
        let report = compute(&[7.0, 7.0, 7.0, 7.0]).unwrap();
        assert_eq!(report.population_stdev(), 0.0);
        assert_eq!(report.population_variance(), 0.0);
        assert_eq!(report.range(), 0.0);
        assert_eq!(report.coefficient_of_variation(), StatValue::Number(0.0));
        assert_eq!(report.mode(), StatValue::Number(7.0));
    }

    #[test]
    fn identical_decimals_have_no_spread() {
        let report = compute(&[0.1, 0.1, 0.1]).unwrap();
        assert_eq!(report.mean(), 0.1);
        assert_eq!(report.population_variance(), 0.0);
        assert_eq!(report.population_stdev(), 0.0);
        assert_eq!(report.range(), 0.0);
        assert_eq!(report.coefficient_of_variation(), StatValue::Number(0.0));
    }

    #[test]
    fn huge_identical_values_stay_finite() {
        let report = compute(&[1e308, 1e308]).unwrap();
        assert_eq!(report.mean(), 1e308);
        assert_eq!(report.population_variance(), 0.0);
        assert_eq!(report.coefficient_of_variation(), StatValue::Number(0.0));
    }

    #[test]
    fn huge_values_keep_mean_and_stdev_finite() {
        let report = compute(&[1e308, 1.5e308]).unwrap();
        assert!((report.mean() / 1.25e308 - 1.0).abs() < 1e-12);
        assert!((report.population_stdev() / 0.25e308 - 1.0).abs() < 1e-12);
        assert!(report.population_variance().is_infinite());
        let cv = report.coefficient_of_variation().as_number().unwrap();
        assert!((cv - 20.0).abs() < 1e-9);
    }

    #[test]
    fn overflowing_coefficient_is_undefined() {
        let report = compute(&[1e300, -1e300, 1e-10]).unwrap();
        assert_eq!(report.mean(), 1e-10 / 3.0);
        assert!(report.population_stdev().is_finite());
        assert_eq!(report.coefficient_of_variation(), StatValue::Undefined);
    }

    #[test]
    fn zero_mean_makes_cv_undefined() {
        let report = compute(&[-2.0, 2.0, -1.0, 1.0]).unwrap();
        assert_eq!(report.mean(), 0.0);
        assert_eq!(report.coefficient_of_variation(), StatValue::Undefined);
        assert!(report.population_stdev() > 0.0);
    }

    #[test]
    fn empty_input_is_an_error() {
        assert_eq!(compute(&[]), Err(StatError::EmptyInput));
    }

    #[test]
    fn single_value() {
        let report = compute(&[12.5]).unwrap();
        assert_eq!(report.mean(), 12.5);
        assert_eq!(report.median(), 12.5);
        assert_eq!(report.range(), 0.0);
        assert_eq!(report.population_variance(), 0.0);
    }

    #[test]
    fn first_encountered_policy_through_compute_with() {
        let sample = Sample::from_slice(&[1.0, 1.0, 2.0, 2.0, 3.0]).unwrap();
        let report = compute_with(&sample, ModePolicy::FirstEncountered);
        assert_eq!(report.mode(), StatValue::Number(1.0));
    }

    #[test]
    fn entries_follow_key_order() {
        let report = compute(&[1.0, 2.0, 2.0]).unwrap();
        let keys: Vec<_> = report.entries().map(|(k, _)| k).collect();
        assert_eq!(keys, StatKey::ALL.to_vec());
    }

    #[test]
    fn median_of_sorted_odd_and_even() {
        assert_eq!(median_of_sorted(&[1.0, 2.0, 9.0]), 2.0);
        assert_eq!(median_of_sorted(&[1.0, 2.0, 4.0, 9.0]), 3.0);
        assert_eq!(median_of_sorted(&[5.0]), 5.0);
    }
}
