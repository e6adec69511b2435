//! Alternative-date ranking
//!
//! The engine re-runs the full probability and comfort pipeline at a fixed
//! set of offsets around the event date; this module owns the offsets, the
//! three-tier classification and the ranking of the resulting candidates.

use crate::models::{AlternativeDate, Recommendation};
use chrono::NaiveDate;

/// Day offsets evaluated around the original event date
pub const CANDIDATE_OFFSETS: [i64; 4] = [-14, -7, 7, 14];

/// Number of ranked candidates returned to the caller
pub const RANKED_CANDIDATES: usize = 3;

/// Comfort index above which a candidate is recommended outright
const BETTER_BREAKPOINT: u8 = 70;

/// Comfort index above which a candidate is worth monitoring
const MONITOR_BREAKPOINT: u8 = 40;

/// Classify a comfort index into the three-tier recommendation
#[must_use]
pub fn classify_recommendation(comfort_index: u8) -> Recommendation {
    if comfort_index > BETTER_BREAKPOINT {
        Recommendation::Better
    } else if comfort_index > MONITOR_BREAKPOINT {
        Recommendation::Monitor
    } else {
        Recommendation::Risky
    }
}

/// Build one candidate from its evaluated comfort index
#[must_use]
pub fn build_candidate(date: NaiveDate, comfort_index: u8, offset_days: i64) -> AlternativeDate {
    AlternativeDate {
        date,
        comfort_index,
        offset_days,
        recommendation: classify_recommendation(comfort_index),
    }
}

/// Rank candidates by comfort index descending and keep the top 3
///
/// The sort is stable, so candidates with equal comfort keep their original
/// offset order.
#[must_use]
pub fn rank_candidates(mut candidates: Vec<AlternativeDate>) -> Vec<AlternativeDate> {
    candidates.sort_by(|a, b| b.comfort_index.cmp(&a.comfort_index));
    candidates.truncate(RANKED_CANDIDATES);
    candidates
}
