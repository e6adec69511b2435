//! Weather-risk analysis pipeline
//!
//! The pipeline stages, leaf-first: cross-year window extraction, linear
//! trend estimation, per-condition exceedance probabilities, comfort-index
//! aggregation, and alternative-date ranking. Every stage is a pure function
//! over immutable inputs.

pub mod advisor;
pub mod comfort;
pub mod probability;
pub mod trend;
pub mod window;

pub use advisor::{classify_recommendation, rank_candidates, CANDIDATE_OFFSETS};
pub use comfort::aggregate_comfort;
pub use probability::{condition_results, ConditionSpec};
pub use trend::estimate_trend;
pub use window::{extract_window, WindowSample, DEFAULT_WINDOW_RADIUS_DAYS};
