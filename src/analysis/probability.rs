//! Per-condition exceedance probabilities and trend classification
//!
//! Four adverse-weather conditions are evaluated per analysis: Very Hot,
//! Very Cold, Heavy Rain and Strong Wind. Probabilities come straight from
//! historical exceedance frequencies; trends from the windowed slope
//! estimator.

use crate::analysis::trend::estimate_trend;
use crate::analysis::window::WindowSample;
use crate::models::{ConditionResult, Thresholds, TrendLabel};

/// Confidence reported when the historical window is empty and the
/// per-condition constant would overstate the result
pub const EMPTY_WINDOW_CONFIDENCE: f64 = 0.1;

/// Fixed per-condition analysis constants
///
/// Confidence values are methodology constants, not data-derived. The
/// p-value pair is a two-valued heuristic (trending / flat), not a
/// calibrated significance test.
#[derive(Debug, Clone, Copy)]
pub struct ConditionSpec {
    /// Condition display name
    pub name: &'static str,
    /// Fixed confidence constant
    pub confidence: f64,
    /// Slope magnitude above which the trend is flagged increasing
    pub slope_threshold: f64,
    /// Heuristic p-value reported when the trend is flagged increasing
    pub p_value_trending: f64,
    /// Heuristic p-value reported otherwise
    pub p_value_flat: f64,
}

pub const VERY_HOT: ConditionSpec = ConditionSpec {
    name: "Very Hot",
    confidence: 0.85,
    slope_threshold: 0.01,
    p_value_trending: 0.04,
    p_value_flat: 0.15,
};

pub const VERY_COLD: ConditionSpec = ConditionSpec {
    name: "Very Cold",
    confidence: 0.78,
    slope_threshold: 0.01,
    p_value_trending: 0.06,
    p_value_flat: 0.20,
};

pub const HEAVY_RAIN: ConditionSpec = ConditionSpec {
    name: "Heavy Rain",
    confidence: 0.72,
    slope_threshold: 0.1,
    p_value_trending: 0.01,
    p_value_flat: 0.25,
};

pub const STRONG_WIND: ConditionSpec = ConditionSpec {
    name: "Strong Wind",
    confidence: 0.65,
    slope_threshold: 0.0,
    p_value_trending: 0.30,
    p_value_flat: 0.30,
};

/// Compute the four condition results for one target date's windows
///
/// The cold trend slope is defined as the negated hot slope (domain rule:
/// cold and hot trends move oppositely), and the wind trend is always
/// reported stable. Both are deliberate simplifications carried over from
/// the original methodology.
#[must_use]
pub fn condition_results(
    temperature: &WindowSample,
    precipitation: &WindowSample,
    wind: &WindowSample,
    thresholds: &Thresholds,
) -> Vec<ConditionResult> {
    let hot_slope = estimate_trend(temperature);
    let rain_slope = estimate_trend(precipitation);
    let wind_slope = estimate_trend(wind);

    vec![
        build_result(
            &VERY_HOT,
            temperature,
            temperature.fraction_where(|v| v > thresholds.hot_temp),
            format!(">{}°C", thresholds.hot_temp),
            hot_slope,
            false,
        ),
        build_result(
            &VERY_COLD,
            temperature,
            temperature.fraction_where(|v| v < thresholds.cold_temp),
            format!("<{}°C", thresholds.cold_temp),
            -hot_slope,
            false,
        ),
        build_result(
            &HEAVY_RAIN,
            precipitation,
            precipitation.fraction_where(|v| v > thresholds.precipitation),
            format!(">{}mm", thresholds.precipitation),
            rain_slope,
            false,
        ),
        build_result(
            &STRONG_WIND,
            wind,
            wind.fraction_where(|v| v > thresholds.wind_speed),
            format!(">{}m/s", thresholds.wind_speed),
            wind_slope,
            true,
        ),
    ]
}

/// Assemble one condition result from its window statistics
fn build_result(
    spec: &ConditionSpec,
    window: &WindowSample,
    exceedance_fraction: f64,
    threshold: String,
    slope: f64,
    always_stable: bool,
) -> ConditionResult {
    let trending = !always_stable && slope.abs() > spec.slope_threshold;
    let trend = if trending {
        TrendLabel::Increasing
    } else {
        TrendLabel::Stable
    };

    let confidence = if window.is_empty() {
        EMPTY_WINDOW_CONFIDENCE
    } else {
        spec.confidence
    };

    ConditionResult {
        condition: spec.name.to_string(),
        probability: round_one_decimal(exceedance_fraction * 100.0),
        threshold,
        trend,
        confidence,
        historical_mean: window.mean(),
        trend_slope: slope,
        p_value: if trending {
            spec.p_value_trending
        } else {
            spec.p_value_flat
        },
    }
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
