use std::collections::HashMap;

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use crate::report::StatValue;
use crate::sample::Sample;

/// How ties for the highest frequency are resolved.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ModePolicy {
    /// Any tie for the highest count means there is no unique mode.
    #[default]
    Strict,
    /// Scanning in input order, the first value whose count beats every
    /// earlier count wins; later ties do not displace it. A highest count
    /// of one still means there is no mode.
    FirstEncountered,
}

// -0.0 and 0.0 are the same measurement.
fn key(v: f64) -> OrderedFloat<f64> {
    OrderedFloat(if v == 0.0 { 0.0 } else { v })
}

fn frequencies(values: &[f64]) -> HashMap<OrderedFloat<f64>, usize> {
    let mut freq = HashMap::with_capacity(values.len());
    for &v in values {
        *freq.entry(key(v)).or_insert(0) += 1;
    }
    freq
}

/// Mode of `sample` under `policy`, with the winning count.
///
/// Returns `(StatValue::NoUniqueMode, best_count)` when there is no mode.
pub fn mode_of(sample: &Sample, policy: ModePolicy) -> (StatValue, usize) {
    let values = sample.values();
    let freq = frequencies(values);
    match policy {
        ModePolicy::Strict => {
            let best = freq.values().copied().max().unwrap_or(0);
            if freq.values().filter(|&&c| c == best).count() != 1 {
                return (StatValue::NoUniqueMode, best);
            }
            match values.iter().copied().find(|v| freq[&key(*v)] == best) {
                Some(v) => (StatValue::Number(v), best),
                None => (StatValue::NoUniqueMode, best),
            }
        }
        ModePolicy::FirstEncountered => {
            let mut best = 0;
            let mut mode = None;
            for &v in values {
                let count = freq[&key(v)];
                if count > best {
                    best = count;
                    mode = Some(v);
                }
            }
            match mode {
                Some(v) if best > 1 => (StatValue::Number(v), best),
                _ => (StatValue::NoUniqueMode, best),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn sample(values: &[f64]) -> Sample {
        Sample::from_slice(values).unwrap()
    }

    #[test]
    fn strict_single_winner() {
        let (mode, count) = mode_of(&sample(&[1.0, 2.0, 2.0, 3.0]), ModePolicy::Strict);
        assert_eq!(mode, StatValue::Number(2.0));
        assert_eq!(count, 2);
    }

    #[test]
    fn strict_tie_has_no_mode() {
        let (mode, count) = mode_of(&sample(&[1.0, 1.0, 2.0, 2.0, 3.0]), ModePolicy::Strict);
        assert_eq!(mode, StatValue::NoUniqueMode);
        assert_eq!(count, 2);
    }

    #[test]
    fn strict_all_distinct_has_no_mode() {
        let (mode, _) = mode_of(&sample(&[30.0, 35.0, 40.0, 32.5, 28.0]), ModePolicy::Strict);
        assert_eq!(mode, StatValue::NoUniqueMode);
    }

    #[test]
    fn strict_single_value_is_its_own_mode() {
        let (mode, count) = mode_of(&sample(&[7.5]), ModePolicy::Strict);
        assert_eq!(mode, StatValue::Number(7.5));
        assert_eq!(count, 1);
    }

    #[test]
    fn first_encountered_keeps_earliest_of_tied() {
        let (mode, count) = mode_of(
            &sample(&[3.0, 1.0, 1.0, 3.0, 2.0]),
            ModePolicy::FirstEncountered,
        );
        assert_eq!(mode, StatValue::Number(3.0));
        assert_eq!(count, 2);
    }

    #[test]
    fn first_encountered_prefers_higher_count_found_later() {
        let (mode, count) = mode_of(
            &sample(&[5.0, 5.0, 9.0, 9.0, 9.0]),
            ModePolicy::FirstEncountered,
        );
        assert_eq!(mode, StatValue::Number(9.0));
        assert_eq!(count, 3);
    }

    #[test]
    fn first_encountered_without_repetition_has_no_mode() {
        let (mode, count) = mode_of(
            &sample(&[25.0, 28.0, 30.0, 32.0, 35.0, 40.0]),
            ModePolicy::FirstEncountered,
        );
        assert_eq!(mode, StatValue::NoUniqueMode);
        assert_eq!(count, 1);
    }

    #[test]
    fn signed_zeros_count_together() {
        let (mode, count) = mode_of(&sample(&[-0.0, 0.0, 1.0]), ModePolicy::Strict);
        assert_eq!(mode.as_number(), Some(0.0));
        assert_eq!(count, 2);
    }

    #[test]
    fn policy_parses_from_snake_case() {
        assert_eq!(ModePolicy::from_str("strict").unwrap(), ModePolicy::Strict);
        assert_eq!(
            ModePolicy::from_str("first_encountered").unwrap(),
            ModePolicy::FirstEncountered
        );
        assert!(ModePolicy::from_str("loose").is_err());
        assert_eq!(ModePolicy::FirstEncountered.to_string(), "first_encountered");
    }
}
