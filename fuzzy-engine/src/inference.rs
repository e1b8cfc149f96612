//! Mamdani inference and the public evaluator
//!
//! Pipeline per evaluation: clamp inputs, fuzzify each indicator into its
//! three bands, compute every rule's firing strength (min over AND, max over
//! OR), clip each rule's consequent set at its strength (min-implication),
//! aggregate the clipped sets by pointwise maximum over a discretized output
//! grid, and defuzzify by centroid. A degenerate aggregate (no rule fired)
//! or non-finite centroid routes to the weighted heuristic instead — the
//! evaluator never returns an error or a non-finite value.

use crate::error::{Error, Result};
use crate::heuristic;
use crate::rules::{rule_base, Rule};
use crate::types::{Indicator, RiskAssessment, RiskLevel, RiskScore, StudentIndicators};
use crate::variables::LinguisticVariable;
use chrono::Utc;
use tracing::{debug, warn};
use uuid::Uuid;

/// Output grid resolution: step 0.1 over [0, 10]
const GRID_POINTS: usize = 101;

/// Aggregate mass below this is treated as "no rule fired"
const MASS_EPSILON: f64 = 1e-9;

/// Score returned when even the heuristic cannot produce a finite value
const DEFAULT_RISK: f64 = 5.0;

/// Fuzzy academic risk evaluator
///
/// Holds the immutable linguistic variables and the fixed 9-rule base.
/// Construction happens once; evaluation is a pure function of its four
/// inputs with no state carried between calls, so a single instance is safe
/// to share across threads.
pub struct FuzzyRiskEvaluator {
    inputs: [LinguisticVariable; 4],
    output: LinguisticVariable,
    rules: Vec<Rule>,
}

impl FuzzyRiskEvaluator {
    /// Create an evaluator with the fixed rule base
    pub fn new() -> Self {
        Self {
            inputs: [
                LinguisticVariable::socioeconomic_level(),
                LinguisticVariable::class_participation(),
                LinguisticVariable::attendance(),
                LinguisticVariable::prior_grades(),
            ],
            output: LinguisticVariable::academic_risk(),
            rules: rule_base(),
        }
    }

    /// Evaluate academic risk from four raw readings
    ///
    /// Inputs are silently clamped into their universes (socioeconomic
    /// level, participation and grades to [0,10], attendance to [0,100]).
    /// Always returns a finite score in [0, 10].
    pub fn evaluate_risk(
        &self,
        socioeconomic_level: f64,
        class_participation: f64,
        attendance: f64,
        prior_grades: f64,
    ) -> f64 {
        self.evaluate(&StudentIndicators::new(
            socioeconomic_level,
            class_participation,
            attendance,
            prior_grades,
        ))
    }

    /// Evaluate academic risk for a set of indicators
    pub fn evaluate(&self, indicators: &StudentIndicators) -> f64 {
        self.evaluate_inner(indicators).0
    }

    /// Full assessment record: score, band, fallback flag, id, timestamp
    pub fn assess(&self, indicators: &StudentIndicators) -> RiskAssessment {
        let clamped = indicators.clamped();
        let (value, used_fallback) = self.evaluate_inner(&clamped);
        let score = RiskScore::new(value);

        RiskAssessment {
            assessment_id: Uuid::new_v4(),
            indicators: clamped,
            score,
            level: RiskLevel::from(score),
            used_fallback,
            assessed_at: Utc::now(),
        }
    }

    fn evaluate_inner(&self, indicators: &StudentIndicators) -> (f64, bool) {
        let clamped = indicators.clamped();

        match self.infer(&clamped) {
            Ok(centroid) => {
                debug!(score = centroid, "fuzzy inference completed");
                (centroid.clamp(0.0, 10.0), false)
            }
            Err(err) => {
                warn!("fuzzy inference degenerated ({err}), using weighted heuristic");
                let fallback = heuristic::weighted_risk(&clamped);
                if fallback.is_finite() {
                    (fallback, true)
                } else {
                    (DEFAULT_RISK, true)
                }
            }
        }
    }

    /// Run the Mamdani pipeline over pre-clamped indicators
    fn infer(&self, indicators: &StudentIndicators) -> Result<f64> {
        // Fuzzification: 4 indicators x 3 bands
        let mut memberships = [[0.0f64; 3]; 4];
        for indicator in Indicator::ALL {
            let i = indicator.index();
            memberships[i] = self.inputs[i].fuzzify(indicators.get(indicator));
        }

        // Rule firing strengths
        let strengths: Vec<f64> = self
            .rules
            .iter()
            .map(|rule| rule.antecedent.firing_strength(&memberships))
            .collect();

        // Implication, aggregation and centroid accumulation in one grid pass
        let span = self.output.max - self.output.min;
        let mut weighted_sum = 0.0;
        let mut mass = 0.0;

        for i in 0..GRID_POINTS {
            let x = self.output.min + span * (i as f64) / ((GRID_POINTS - 1) as f64);

            let mut aggregate = 0.0f64;
            for (rule, strength) in self.rules.iter().zip(&strengths) {
                let clipped = strength.min(self.output.membership(rule.consequent, x));
                aggregate = aggregate.max(clipped);
            }

            weighted_sum += x * aggregate;
            mass += aggregate;
        }

        if !(mass > MASS_EPSILON) {
            return Err(Error::DegenerateAggregate(mass));
        }

        let centroid = weighted_sum / mass;
        if !centroid.is_finite() {
            return Err(Error::NonFiniteCentroid(centroid));
        }

        Ok(centroid)
    }
}

impl Default for FuzzyRiskEvaluator {
    fn default() -> Self {
        Self::new()
    }
}
