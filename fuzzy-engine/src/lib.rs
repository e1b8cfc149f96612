//! Fuzzy inference engine for academic risk scoring
//!
//! Maps four continuous student indicators (socioeconomic level, class
//! participation, attendance, prior grades) to a single risk score in [0,10]
//! via a fixed 9-rule Mamdani system with centroid defuzzification.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod heuristic;
pub mod inference;
pub mod membership;
pub mod rules;
pub mod types;
pub mod variables;

pub use error::{Error, Result};
pub use inference::FuzzyRiskEvaluator;
pub use membership::{Term, TriangularMf};
pub use rules::{Antecedent, Rule};
pub use types::{Indicator, RiskAssessment, RiskLevel, RiskScore, StudentIndicators};
pub use variables::LinguisticVariable;

use lazy_static::lazy_static;

lazy_static! {
    static ref SHARED_EVALUATOR: FuzzyRiskEvaluator = FuzzyRiskEvaluator::new();
}

/// Shared immutable evaluator instance.
///
/// The rule base is constructed once on first access and reused for every
/// evaluation. Prefer constructing and injecting a [`FuzzyRiskEvaluator`]
/// where the composition root allows it; this accessor exists for callers
/// without one.
pub fn shared() -> &'static FuzzyRiskEvaluator {
    &SHARED_EVALUATOR
}
