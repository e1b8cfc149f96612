//! External-interface conversion layer for risk prediction
//!
//! Wire DTOs and the categorical mapping consumed by the prediction endpoint
//! and the dashboard prediction form. The HTTP surface itself lives outside
//! this crate; callers deserialize a [`PredictionRequest`], run it through a
//! [`RiskPredictor`] and serialize the [`PredictionResponse`].

#![forbid(unsafe_code)]

pub mod models;
pub mod predictor;

pub use models::{socioeconomic_to_numeric, PredictionRequest, PredictionResponse};
pub use predictor::{Classifier, Prediction, RiskPredictor};
