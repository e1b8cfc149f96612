//! Wire DTOs for the prediction endpoint
//!
//! Field names on the wire are the Spanish labels the existing callers send;
//! struct fields stay English and are renamed through serde.

use serde::{Deserialize, Serialize};

/// Prediction request body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionRequest {
    /// Prior grades, 0-10
    #[serde(rename = "calificaciones")]
    pub grades: f64,

    /// Attendance percentage, 0-100
    #[serde(rename = "asistencia")]
    pub attendance: f64,

    /// Class participation on the 0-5 form scale (doubled to the engine's
    /// 0-10 universe before fuzzy evaluation)
    #[serde(rename = "participacion")]
    pub participation: f64,

    /// Weekly study hours; accepted for the statistical classifier, unused
    /// by the fuzzy engine
    #[serde(rename = "horas_estudio")]
    pub study_hours: f64,

    /// Categorical socioeconomic label: "Bajo", "Medio" or "Alto"
    #[serde(rename = "nivel_socioeconomico")]
    pub socioeconomic_level: String,
}

/// Prediction response body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionResponse {
    /// Classifier class label (1 = at risk)
    #[serde(rename = "prediccion")]
    pub prediction: i32,

    /// Classifier confidence for the at-risk class
    #[serde(rename = "confianza_riesgo")]
    pub risk_confidence: f64,

    /// Fuzzy risk score in [0, 10]
    #[serde(rename = "logica_difusa")]
    pub fuzzy_risk: Option<f64>,
}

/// Map a categorical socioeconomic label to the engine's numeric universe.
///
/// Contract preserved verbatim for caller compatibility: "Bajo" -> 3,
/// "Medio" -> 6, "Alto" -> 9, anything else -> 5.
pub fn socioeconomic_to_numeric(label: &str) -> f64 {
    match label {
        "Bajo" => 3.0,
        "Medio" => 6.0,
        "Alto" => 9.0,
        _ => 5.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_socioeconomic_mapping() {
        assert_eq!(socioeconomic_to_numeric("Bajo"), 3.0);
        assert_eq!(socioeconomic_to_numeric("Medio"), 6.0);
        assert_eq!(socioeconomic_to_numeric("Alto"), 9.0);
    }

    #[test]
    fn test_unmapped_labels_default() {
        assert_eq!(socioeconomic_to_numeric("bajo"), 5.0);
        assert_eq!(socioeconomic_to_numeric("ALTO"), 5.0);
        assert_eq!(socioeconomic_to_numeric(""), 5.0);
        assert_eq!(socioeconomic_to_numeric("Desconocido"), 5.0);
    }

    #[test]
    fn test_request_uses_wire_field_names() {
        let body = r#"{
            "calificaciones": 7.5,
            "asistencia": 85.0,
            "participacion": 4.0,
            "horas_estudio": 12.0,
            "nivel_socioeconomico": "Medio"
        }"#;

        let request: PredictionRequest = serde_json::from_str(body).unwrap();

        assert_eq!(request.grades, 7.5);
        assert_eq!(request.attendance, 85.0);
        assert_eq!(request.participation, 4.0);
        assert_eq!(request.study_hours, 12.0);
        assert_eq!(request.socioeconomic_level, "Medio");
    }

    #[test]
    fn test_response_uses_wire_field_names() {
        let response = PredictionResponse {
            prediction: 1,
            risk_confidence: 0.82,
            fuzzy_risk: Some(7.3),
        };

        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["prediccion"], 1);
        assert_eq!(json["confianza_riesgo"], 0.82);
        assert_eq!(json["logica_difusa"], 7.3);
    }
}
