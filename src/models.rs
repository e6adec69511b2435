//! Value objects for the weather-risk analysis pipeline
//!
//! Everything here is constructed and consumed within a single analysis call;
//! there is no shared mutable state and no identity beyond structural
//! equality.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Weather variable supplied by a historical data source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeatherVariable {
    Temperature,
    Precipitation,
    WindSpeed,
}

impl WeatherVariable {
    /// All variables the analysis pipeline consumes
    pub const ALL: [WeatherVariable; 3] = [
        WeatherVariable::Temperature,
        WeatherVariable::Precipitation,
        WeatherVariable::WindSpeed,
    ];

    /// Wire/logging name of the variable
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            WeatherVariable::Temperature => "temperature",
            WeatherVariable::Precipitation => "precipitation",
            WeatherVariable::WindSpeed => "wind_speed",
        }
    }
}

impl fmt::Display for WeatherVariable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A single daily observation, immutable once produced by a data source
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Calendar date of the observation
    pub date: NaiveDate,
    /// Observed value in the variable's native unit
    pub value: f64,
}

impl Observation {
    #[must_use]
    pub fn new(date: NaiveDate, value: f64) -> Self {
        Self { date, value }
    }

    /// Year of the observation date
    #[must_use]
    pub fn year(&self) -> i32 {
        self.date.year()
    }
}

/// Daily time series for one (location, variable) pair
///
/// Observations are ordered by date with one value per calendar date. Dates
/// need not be contiguous but are expected daily-dense over the source's
/// coverage range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailySeries {
    /// Variable this series describes
    pub variable: WeatherVariable,
    /// Name of the backing dataset (archive product or simulation label)
    pub dataset: String,
    /// Date-ordered observations
    pub observations: Vec<Observation>,
}

impl DailySeries {
    #[must_use]
    pub fn new(variable: WeatherVariable, dataset: String, observations: Vec<Observation>) -> Self {
        Self {
            variable,
            dataset,
            observations,
        }
    }

    /// Inclusive (first, last) year covered by the series, if non-empty
    #[must_use]
    pub fn year_span(&self) -> Option<(i32, i32)> {
        let first = self.observations.first()?.year();
        let last = self.observations.last()?.year();
        Some((first, last))
    }
}

/// Location coordinates echoed back in the analysis response
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
}

impl Location {
    #[must_use]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Format location as coordinates string
    #[must_use]
    pub fn format_coordinates(&self) -> String {
        format!("{:.4}, {:.4}", self.latitude, self.longitude)
    }
}

/// Caller-supplied condition thresholds, all optional with defaults
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    /// Temperature above which a day counts as "Very Hot" (°C)
    #[serde(default = "default_hot_temp")]
    pub hot_temp: f64,
    /// Temperature below which a day counts as "Very Cold" (°C)
    #[serde(default = "default_cold_temp")]
    pub cold_temp: f64,
    /// Daily precipitation above which a day counts as "Heavy Rain" (mm)
    #[serde(default = "default_precipitation")]
    pub precipitation: f64,
    /// Wind speed above which a day counts as "Strong Wind" (m/s)
    #[serde(default = "default_wind_speed")]
    pub wind_speed: f64,
}

// Default value functions
fn default_hot_temp() -> f64 {
    32.0
}

fn default_cold_temp() -> f64 {
    0.0
}

fn default_precipitation() -> f64 {
    5.0
}

fn default_wind_speed() -> f64 {
    15.0
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            hot_temp: default_hot_temp(),
            cold_temp: default_cold_temp(),
            precipitation: default_precipitation(),
            wind_speed: default_wind_speed(),
        }
    }
}

/// Qualitative trend direction for a condition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendLabel {
    Increasing,
    Stable,
}

impl fmt::Display for TrendLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrendLabel::Increasing => write!(f, "increasing"),
            TrendLabel::Stable => write!(f, "stable"),
        }
    }
}

/// Probability and trend statistics for one adverse-weather condition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionResult {
    /// Condition name (e.g. "Very Hot")
    pub condition: String,
    /// Probability of the threshold being crossed, percent in [0, 100]
    pub probability: f64,
    /// Human-readable threshold description (e.g. ">32°C")
    pub threshold: String,
    /// Qualitative trend direction
    pub trend: TrendLabel,
    /// Fixed per-condition confidence in [0, 1]; lowered when the historical
    /// window is empty
    pub confidence: f64,
    /// Mean of the historical window values (0.0 for an empty window)
    pub historical_mean: f64,
    /// Estimated linear trend slope in variable-units per year
    pub trend_slope: f64,
    /// Two-valued significance heuristic, NOT a calibrated statistical
    /// p-value; smaller when the trend is flagged increasing
    pub p_value: f64,
}

/// Three-tier recommendation for an alternative date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Recommendation {
    /// Comfort index above 70
    Better,
    /// Comfort index above 40
    Monitor,
    /// Everything else
    Risky,
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Recommendation::Better => write!(f, "Better"),
            Recommendation::Monitor => write!(f, "Monitor"),
            Recommendation::Risky => write!(f, "Risky"),
        }
    }
}

/// One ranked alternative-date candidate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlternativeDate {
    /// Candidate date
    pub date: NaiveDate,
    /// Comfort index for the candidate date, in [0, 100]
    pub comfort_index: u8,
    /// Signed day offset from the original event date
    pub offset_days: i64,
    /// Qualitative recommendation derived from the comfort index
    pub recommendation: Recommendation,
}

/// Analysis request as produced by a transport layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
    /// Event date in ISO-8601 format, e.g. "2025-07-04"
    pub event_date: String,
    /// Condition thresholds; defaults apply for omitted fields
    #[serde(default)]
    pub thresholds: Thresholds,
}

/// Metadata describing how an analysis was produced
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisMetadata {
    /// Distinct dataset names that backed the analysis
    pub datasets_used: Vec<String>,
    /// Inclusive year range covered by the fetched series, e.g. "1990-2024"
    pub years_analyzed: String,
    /// When the analysis ran
    pub analysis_timestamp: DateTime<Utc>,
    /// Headline confidence level of the methodology
    pub confidence_level: String,
    /// Description of the sampling window
    pub window_description: String,
}

/// Complete weather-risk analysis response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResponse {
    /// Location the analysis was run for
    pub location: Location,
    /// Original event date
    pub event_date: NaiveDate,
    /// Composite comfort index in [0, 100]
    pub comfort_index: u8,
    /// Per-condition probability results (one per monitored condition)
    pub conditions: Vec<ConditionResult>,
    /// Top-ranked alternative dates
    pub alternative_dates: Vec<AlternativeDate>,
    /// Analysis provenance
    pub metadata: AnalysisMetadata,
}
