//! Deterministic fallback scoring
//!
//! Used only when fuzzy inference degenerates (no rule fired, or the
//! centroid is undefined). Fixed-weight linear combination of the four
//! indicators, inverted so that better readings mean lower risk.

use crate::types::StudentIndicators;

const WEIGHT_SOCIOECONOMIC: f64 = 0.2;
const WEIGHT_PARTICIPATION: f64 = 0.3;
const WEIGHT_ATTENDANCE: f64 = 0.3;
const WEIGHT_GRADES: f64 = 0.2;

/// Weighted-heuristic risk over already-clamped indicators
///
/// Attendance is rescaled from its 0-100 universe to 0-10 before weighting.
/// The result is clamped to [0, 10]; given clamped finite inputs it is
/// always finite.
pub fn weighted_risk(indicators: &StudentIndicators) -> f64 {
    let clamped = indicators.clamped();

    let risk = WEIGHT_SOCIOECONOMIC * (10.0 - clamped.socioeconomic_level)
        + WEIGHT_PARTICIPATION * (10.0 - clamped.class_participation)
        + WEIGHT_ATTENDANCE * (10.0 - clamped.attendance / 10.0)
        + WEIGHT_GRADES * (10.0 - clamped.prior_grades);

    risk.clamp(0.0, 10.0)
}
