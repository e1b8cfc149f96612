//! Request-to-response wiring for the prediction endpoint

use crate::models::{socioeconomic_to_numeric, PredictionRequest, PredictionResponse};
use fuzzy_engine::FuzzyRiskEvaluator;
use std::sync::Arc;
use tracing::info;

/// Classifier output: class label plus at-risk confidence
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    /// Class label (1 = at risk)
    pub prediction: i32,

    /// Confidence for the at-risk class, 0.0-1.0
    pub confidence: f64,
}

/// Seam for the separately-trained statistical classifier.
///
/// The model itself (decision tree / random forest / neural network) is an
/// external collaborator; this crate only carries its prediction alongside
/// the fuzzy score in the response.
pub trait Classifier: Send + Sync {
    /// Classify a prediction request
    fn predict(&self, request: &PredictionRequest) -> Prediction;
}

/// Combines the fuzzy evaluator with a statistical classifier
pub struct RiskPredictor {
    evaluator: Arc<FuzzyRiskEvaluator>,
    classifier: Box<dyn Classifier>,
}

impl RiskPredictor {
    /// Create a predictor over an injected evaluator and classifier
    pub fn new(evaluator: Arc<FuzzyRiskEvaluator>, classifier: Box<dyn Classifier>) -> Self {
        Self {
            evaluator,
            classifier,
        }
    }

    /// Fuzzy risk score for a request
    ///
    /// Maps the categorical socioeconomic label to its numeric value and
    /// doubles the 0-5 form participation onto the engine's 0-10 universe.
    /// Study hours are not an input of the fuzzy system.
    pub fn fuzzy_risk(&self, request: &PredictionRequest) -> f64 {
        let level = socioeconomic_to_numeric(&request.socioeconomic_level);

        self.evaluator.evaluate_risk(
            level,
            request.participation * 2.0,
            request.attendance,
            request.grades,
        )
    }

    /// Full prediction: classifier verdict plus fuzzy score
    pub fn predict(&self, request: &PredictionRequest) -> PredictionResponse {
        let fuzzy_risk = self.fuzzy_risk(request);
        let classified = self.classifier.predict(request);

        info!(
            fuzzy_risk,
            prediction = classified.prediction,
            confidence = classified.confidence,
            "prediction computed"
        );

        PredictionResponse {
            prediction: classified.prediction,
            risk_confidence: classified.confidence,
            fuzzy_risk: Some(fuzzy_risk),
        }
    }
}
