//! Weather-risk analysis engine
//!
//! Orchestrates the full pipeline: fetch per-variable series from the
//! injected data source (falling back to the synthetic generator on
//! failure), window each series around the event date, compute per-condition
//! probabilities, aggregate the comfort index, and rank alternative dates.
//! The engine is stateless per call: the same request against the same
//! source yields the same analysis.

use crate::analysis::advisor::{build_candidate, rank_candidates, CANDIDATE_OFFSETS};
use crate::analysis::comfort::aggregate_comfort;
use crate::analysis::probability::condition_results;
use crate::analysis::window::{extract_window, DEFAULT_WINDOW_RADIUS_DAYS};
use crate::error::RaincheckError;
use crate::models::{
    AnalysisMetadata, AnalysisRequest, AnalysisResponse, ConditionResult, DailySeries, Location,
    Thresholds, WeatherVariable,
};
use crate::source::{HistoricalDataSource, SyntheticSource};
use crate::Result;
use chrono::{Datelike, Duration, NaiveDate, Utc};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Headline confidence level reported in response metadata
const CONFIDENCE_LEVEL: &str = "85%";

/// Weather-risk analysis engine
///
/// Holds the injected historical source and an owned synthetic fallback.
/// Construction is explicit; there is no process-wide provider.
pub struct RiskEngine {
    source: Arc<dyn HistoricalDataSource>,
    fallback: SyntheticSource,
}

impl RiskEngine {
    /// Create an engine backed by the given historical data source
    #[must_use]
    pub fn new(source: Arc<dyn HistoricalDataSource>) -> Self {
        Self {
            source,
            fallback: SyntheticSource::new(),
        }
    }

    /// Create an engine backed directly by the synthetic generator
    #[must_use]
    pub fn with_synthetic_source() -> Self {
        Self::new(Arc::new(SyntheticSource::new()))
    }

    /// Run the full weather-risk analysis for a request
    ///
    /// Fails only on bad input (`InvalidDate`, `Validation`); data-source
    /// failures are recovered internally via the synthetic fallback.
    pub async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResponse> {
        validate_coordinates(request.latitude, request.longitude)?;
        let event_date = parse_event_date(&request.event_date)?;
        let location = Location::new(request.latitude, request.longitude);

        info!(
            "Analyzing weather risk for {} on {} (thresholds: {:?})",
            location.format_coordinates(),
            event_date,
            request.thresholds
        );

        let evaluation = self
            .evaluate_date(&location, event_date, &request.thresholds)
            .await;
        let comfort_index = aggregate_comfort(&evaluation.conditions);
        debug!("Comfort index for {event_date}: {comfort_index}");

        let alternative_dates = self
            .suggest_alternatives(&location, event_date, &request.thresholds)
            .await;
        debug!("Ranked {} alternative dates", alternative_dates.len());

        Ok(AnalysisResponse {
            location,
            event_date,
            comfort_index,
            conditions: evaluation.conditions,
            alternative_dates,
            metadata: AnalysisMetadata {
                datasets_used: evaluation.datasets,
                years_analyzed: evaluation.years_analyzed,
                analysis_timestamp: Utc::now(),
                confidence_level: CONFIDENCE_LEVEL.to_string(),
                window_description: format!("±{DEFAULT_WINDOW_RADIUS_DAYS} days"),
            },
        })
    }

    /// Evaluate the four condition probabilities for one calendar date
    async fn evaluate_date(
        &self,
        location: &Location,
        date: NaiveDate,
        thresholds: &Thresholds,
    ) -> DateEvaluation {
        let (temperature, precipitation, wind) = futures::join!(
            self.fetch_series(location, WeatherVariable::Temperature),
            self.fetch_series(location, WeatherVariable::Precipitation),
            self.fetch_series(location, WeatherVariable::WindSpeed),
        );

        let month = date.month();
        let day = date.day();
        let radius = DEFAULT_WINDOW_RADIUS_DAYS;
        let conditions = condition_results(
            &extract_window(&temperature, month, day, radius),
            &extract_window(&precipitation, month, day, radius),
            &extract_window(&wind, month, day, radius),
            thresholds,
        );

        let series = [&temperature, &precipitation, &wind];
        DateEvaluation {
            conditions,
            datasets: distinct_datasets(&series),
            years_analyzed: combined_year_span(&series),
        }
    }

    /// Re-run the full pipeline at the fixed candidate offsets and rank
    async fn suggest_alternatives(
        &self,
        location: &Location,
        event_date: NaiveDate,
        thresholds: &Thresholds,
    ) -> Vec<crate::models::AlternativeDate> {
        let mut candidates = Vec::with_capacity(CANDIDATE_OFFSETS.len());
        for offset in CANDIDATE_OFFSETS {
            let candidate_date = event_date + Duration::days(offset);
            let evaluation = self
                .evaluate_date(location, candidate_date, thresholds)
                .await;
            let comfort = aggregate_comfort(&evaluation.conditions);
            candidates.push(build_candidate(candidate_date, comfort, offset));
        }
        rank_candidates(candidates)
    }

    /// Fetch one series, substituting synthetic data on source failure
    async fn fetch_series(&self, location: &Location, variable: WeatherVariable) -> DailySeries {
        debug!("Fetching {variable} series from {}", self.source.describe());
        match self
            .source
            .fetch(location.latitude, location.longitude, variable)
            .await
        {
            Ok(series) => series,
            Err(err) => {
                warn!(
                    "{} failed for {variable} ({err}), substituting synthetic data",
                    self.source.describe()
                );
                self.fallback
                    .generate(location.latitude, location.longitude, variable)
            }
        }
    }
}

/// Per-date evaluation output shared by the main analysis and the advisor
struct DateEvaluation {
    conditions: Vec<ConditionResult>,
    datasets: Vec<String>,
    years_analyzed: String,
}

fn validate_coordinates(latitude: f64, longitude: f64) -> Result<()> {
    if !(-90.0..=90.0).contains(&latitude) {
        return Err(RaincheckError::validation(format!(
            "latitude {latitude} out of range [-90, 90]"
        )));
    }
    if !(-180.0..=180.0).contains(&longitude) {
        return Err(RaincheckError::validation(format!(
            "longitude {longitude} out of range [-180, 180]"
        )));
    }
    Ok(())
}

fn parse_event_date(event_date: &str) -> Result<NaiveDate> {
    event_date
        .parse::<NaiveDate>()
        .map_err(|err| RaincheckError::invalid_date(format!("{event_date}: {err}")))
}

/// Distinct dataset names in fetch order
fn distinct_datasets(series: &[&DailySeries]) -> Vec<String> {
    let mut datasets = Vec::new();
    for series in series {
        if !datasets.contains(&series.dataset) {
            datasets.push(series.dataset.clone());
        }
    }
    datasets
}

/// Inclusive year range covered by the fetched series
fn combined_year_span(series: &[&DailySeries]) -> String {
    let spans: Vec<(i32, i32)> = series.iter().filter_map(|s| s.year_span()).collect();
    match (
        spans.iter().map(|s| s.0).min(),
        spans.iter().map(|s| s.1).max(),
    ) {
        (Some(first), Some(last)) => format!("{first}-{last}"),
        _ => "unknown".to_string(),
    }
}
