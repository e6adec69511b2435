//! Historical data-source capability
//!
//! The analysis engine is agnostic to where its daily series come from: a
//! real archive adapter and the deterministic synthetic generator both
//! implement [`HistoricalDataSource`]. The concrete source is chosen once at
//! engine construction, never per call.

pub mod synthetic;

pub use synthetic::SyntheticSource;

use crate::models::{DailySeries, WeatherVariable};
use crate::Result;
use async_trait::async_trait;

/// Capability supplying a daily time series for one (location, variable) pair
///
/// Implementations fail with [`crate::RaincheckError::DataUnavailable`] when
/// the backing archive or its credentials are absent; the engine recovers
/// from that by substituting synthetic data, so a failing source never aborts
/// an analysis. Timeout and retry concerns live inside implementations.
#[async_trait]
pub trait HistoricalDataSource: Send + Sync {
    /// Fetch the daily series for a location and variable
    async fn fetch(
        &self,
        latitude: f64,
        longitude: f64,
        variable: WeatherVariable,
    ) -> Result<DailySeries>;

    /// Short human-readable description of the source, for logging
    fn describe(&self) -> &str;
}
