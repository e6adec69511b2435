//! `Raincheck` - Historical weather-risk analysis for event planning
//!
//! This library answers one question: given a location and a calendar date,
//! how likely are adverse weather conditions (heat, cold, heavy rain, strong
//! wind), and are nearby dates safer? It turns long-run daily observations
//! into threshold-crossing probabilities, trend estimates, a composite
//! comfort score and a ranked list of alternative dates.

pub mod analysis;
pub mod engine;
pub mod error;
pub mod models;
pub mod source;

// Re-export core types for public API
pub use analysis::{aggregate_comfort, condition_results, estimate_trend, extract_window};
pub use engine::RiskEngine;
pub use error::RaincheckError;
pub use models::{
    AlternativeDate, AnalysisMetadata, AnalysisRequest, AnalysisResponse, ConditionResult,
    DailySeries, Location, Observation, Recommendation, Thresholds, TrendLabel, WeatherVariable,
};
pub use source::{HistoricalDataSource, SyntheticSource};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, RaincheckError>;
