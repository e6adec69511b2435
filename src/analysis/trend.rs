//! Linear trend estimation over cross-year windows
//!
//! Slopes are estimated on yearly mean values rather than raw daily samples,
//! so dense windows do not drown out the year-to-year signal.

use crate::analysis::window::{WindowSample, MIN_TREND_SAMPLES};
use std::collections::BTreeMap;

/// Minimum number of distinct years required for a regression
const MIN_TREND_YEARS: usize = 3;

/// Regression denominators below this magnitude are treated as singular
const DENOMINATOR_EPSILON: f64 = 1e-10;

/// Slopes are clamped to this range to keep pathological inputs from
/// propagating into trend classification
const SLOPE_LIMIT: f64 = 1000.0;

/// Estimate the linear trend slope of a window, in variable-units per year
///
/// Window observations are grouped by year and averaged, then an
/// ordinary-least-squares slope is fitted over the (year, mean) pairs.
/// Returns exactly 0.0 whenever the input carries too little signal: fewer
/// than 10 samples, fewer than 3 distinct years, or a near-singular
/// regression denominator. Deterministic and side-effect-free.
#[must_use]
pub fn estimate_trend(window: &WindowSample) -> f64 {
    if window.len() < MIN_TREND_SAMPLES {
        return 0.0;
    }

    let yearly_means = yearly_means(window);
    if yearly_means.len() < MIN_TREND_YEARS {
        return 0.0;
    }

    let n = yearly_means.len() as f64;
    let mut sum_x = 0.0;
    let mut sum_y = 0.0;
    let mut sum_xy = 0.0;
    let mut sum_x2 = 0.0;
    for (year, mean) in &yearly_means {
        let x = f64::from(*year);
        sum_x += x;
        sum_y += mean;
        sum_xy += x * mean;
        sum_x2 += x * x;
    }

    let denominator = n * sum_x2 - sum_x * sum_x;
    if denominator.abs() < DENOMINATOR_EPSILON {
        return 0.0;
    }

    let slope = (n * sum_xy - sum_x * sum_y) / denominator;
    slope.clamp(-SLOPE_LIMIT, SLOPE_LIMIT)
}

/// Group window observations by year and average each year's values
fn yearly_means(window: &WindowSample) -> BTreeMap<i32, f64> {
    let mut sums: BTreeMap<i32, (f64, usize)> = BTreeMap::new();
    for obs in window.observations() {
        let entry = sums.entry(obs.year()).or_insert((0.0, 0));
        entry.0 += obs.value;
        entry.1 += 1;
    }

    sums.into_iter()
        .map(|(year, (sum, count))| (year, sum / count as f64))
        .collect()
}
