//! Cross-year calendar windows over daily series
//!
//! Probability and trend estimation both work on the subset of a series
//! whose calendar position falls close to the event date, taken across every
//! year the series covers.

use crate::models::{DailySeries, Observation};
use chrono::Datelike;

/// Default half-width of the sampling window around the target date
pub const DEFAULT_WINDOW_RADIUS_DAYS: u32 = 7;

/// Trend estimation is considered unreliable below this sample count
pub const MIN_TREND_SAMPLES: usize = 10;

/// The subset of a daily series whose (month, day-of-month) lies within a
/// radius of a target calendar date, across all years present
#[derive(Debug, Clone, PartialEq)]
pub struct WindowSample {
    observations: Vec<Observation>,
}

impl WindowSample {
    /// Number of observations in the window
    #[must_use]
    pub fn len(&self) -> usize {
        self.observations.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// Observations in the window, in series order
    #[must_use]
    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    /// Mean of the window values, or 0.0 for an empty window
    #[must_use]
    pub fn mean(&self) -> f64 {
        if self.observations.is_empty() {
            return 0.0;
        }
        let sum: f64 = self.observations.iter().map(|obs| obs.value).sum();
        sum / self.observations.len() as f64
    }

    /// Fraction of window values satisfying the predicate, in [0, 1]
    ///
    /// Returns 0.0 for an empty window rather than dividing by zero.
    #[must_use]
    pub fn fraction_where<F: Fn(f64) -> bool>(&self, predicate: F) -> f64 {
        if self.observations.is_empty() {
            return 0.0;
        }
        let matching = self
            .observations
            .iter()
            .filter(|obs| predicate(obs.value))
            .count();
        matching as f64 / self.observations.len() as f64
    }

    #[cfg(test)]
    pub(crate) fn from_observations(observations: Vec<Observation>) -> Self {
        Self { observations }
    }
}

/// Extract the cross-year window around a target (month, day-of-month)
///
/// Filters entries whose month matches exactly and whose day-of-month is
/// within `radius_days` of the target day by absolute difference. There is
/// deliberately no month-boundary wraparound: a day-31 target with radius 7
/// does not reach into the following month. Pure filter, no side effects.
#[must_use]
pub fn extract_window(
    series: &DailySeries,
    month: u32,
    day: u32,
    radius_days: u32,
) -> WindowSample {
    let observations = series
        .observations
        .iter()
        .filter(|obs| {
            obs.date.month() == month
                && obs.date.day().abs_diff(day) <= radius_days
        })
        .copied()
        .collect();

    WindowSample { observations }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::WeatherVariable;
    use chrono::NaiveDate;

    fn daily_series(start: (i32, u32, u32), days: u64) -> DailySeries {
        let start = NaiveDate::from_ymd_opt(start.0, start.1, start.2).unwrap();
        let observations = (0..days)
            .map(|offset| {
                let date = start + chrono::Duration::days(offset as i64);
                Observation::new(date, f64::from(date.month()))
            })
            .collect();
        DailySeries::new(WeatherVariable::Temperature, "test".to_string(), observations)
    }

    #[test]
    fn test_window_selects_only_matching_month() {
        let series = daily_series((2000, 1, 1), 366);
        let window = extract_window(&series, 7, 15, 7);

        assert!(!window.is_empty());
        for obs in window.observations() {
            assert_eq!(obs.date.month(), 7);
        }
    }

    #[test]
    fn test_window_radius_bounds() {
        let series = daily_series((2000, 1, 1), 366);
        let window = extract_window(&series, 7, 15, 7);

        // July 8 through July 22 inclusive
        assert_eq!(window.len(), 15);
        for obs in window.observations() {
            assert!(obs.date.day() >= 8 && obs.date.day() <= 22);
        }
    }

    #[test]
    fn test_window_spans_multiple_years() {
        let series = daily_series((2000, 1, 1), 366 * 3);
        let window = extract_window(&series, 7, 15, 7);

        let years: std::collections::HashSet<i32> =
            window.observations().iter().map(Observation::year).collect();
        assert_eq!(years.len(), 3);
    }

    #[test]
    fn test_window_no_month_wraparound() {
        // A day-31 target only reaches back within the same month; days from
        // the following month are never pulled in.
        let series = daily_series((2000, 1, 1), 366);
        let window = extract_window(&series, 1, 31, 7);

        assert_eq!(window.len(), 8); // Jan 24..=31
        for obs in window.observations() {
            assert_eq!(obs.date.month(), 1);
        }
    }

    #[test]
    fn test_window_empty_for_absent_month_data() {
        // Series covering January only, window targeted at June
        let series = daily_series((2000, 1, 1), 31);
        let window = extract_window(&series, 6, 15, 7);

        assert!(window.is_empty());
        assert_eq!(window.mean(), 0.0);
        assert_eq!(window.fraction_where(|v| v > 0.0), 0.0);
    }

    #[test]
    fn test_window_mean_and_fraction() {
        let observations = vec![
            Observation::new(NaiveDate::from_ymd_opt(2000, 6, 15).unwrap(), 10.0),
            Observation::new(NaiveDate::from_ymd_opt(2001, 6, 15).unwrap(), 20.0),
            Observation::new(NaiveDate::from_ymd_opt(2002, 6, 15).unwrap(), 30.0),
        ];
        let window = WindowSample::from_observations(observations);

        assert_eq!(window.mean(), 20.0);
        assert_eq!(window.fraction_where(|v| v > 15.0), 2.0 / 3.0);
    }
}
