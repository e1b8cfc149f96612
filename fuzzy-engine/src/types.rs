//! Core types for academic risk assessment

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Input linguistic variable identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Indicator {
    /// Socioeconomic level, universe [0, 10]
    SocioeconomicLevel,
    /// Class participation, universe [0, 10]
    ClassParticipation,
    /// Attendance percentage, universe [0, 100]
    Attendance,
    /// Prior grades, universe [0, 10]
    PriorGrades,
}

impl Indicator {
    /// All four input indicators, in fuzzification order
    pub const ALL: [Indicator; 4] = [
        Indicator::SocioeconomicLevel,
        Indicator::ClassParticipation,
        Indicator::Attendance,
        Indicator::PriorGrades,
    ];

    /// Position of this indicator in fuzzification arrays
    pub fn index(&self) -> usize {
        match self {
            Indicator::SocioeconomicLevel => 0,
            Indicator::ClassParticipation => 1,
            Indicator::Attendance => 2,
            Indicator::PriorGrades => 3,
        }
    }
}

/// Raw student readings handed to the evaluator
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StudentIndicators {
    /// Socioeconomic level, 0-10
    pub socioeconomic_level: f64,

    /// Class participation, 0-10
    pub class_participation: f64,

    /// Attendance percentage, 0-100
    pub attendance: f64,

    /// Prior grades, 0-10
    pub prior_grades: f64,
}

impl StudentIndicators {
    /// Create indicators from raw readings
    pub fn new(
        socioeconomic_level: f64,
        class_participation: f64,
        attendance: f64,
        prior_grades: f64,
    ) -> Self {
        Self {
            socioeconomic_level,
            class_participation,
            attendance,
            prior_grades,
        }
    }

    /// Clamp each reading into its variable's universe
    ///
    /// Out-of-range values are silently clamped, not rejected. NaN readings
    /// pass through unchanged and resolve later through the fallback branch.
    pub fn clamped(&self) -> Self {
        Self {
            socioeconomic_level: self.socioeconomic_level.clamp(0.0, 10.0),
            class_participation: self.class_participation.clamp(0.0, 10.0),
            attendance: self.attendance.clamp(0.0, 100.0),
            prior_grades: self.prior_grades.clamp(0.0, 10.0),
        }
    }

    /// Reading for a given indicator
    pub fn get(&self, indicator: Indicator) -> f64 {
        match indicator {
            Indicator::SocioeconomicLevel => self.socioeconomic_level,
            Indicator::ClassParticipation => self.class_participation,
            Indicator::Attendance => self.attendance,
            Indicator::PriorGrades => self.prior_grades,
        }
    }
}

/// Academic risk score (0-10, higher = more at-risk)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct RiskScore(f64);

impl RiskScore {
    /// Create new risk score, clamped to [0, 10]
    pub fn new(score: f64) -> Self {
        Self(score.clamp(0.0, 10.0))
    }

    /// Get raw score
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Check if high risk (> 6)
    pub fn is_high_risk(&self) -> bool {
        self.0 > 6.0
    }

    /// Check if medium risk (3-6]
    pub fn is_medium_risk(&self) -> bool {
        self.0 > 3.0 && self.0 <= 6.0
    }

    /// Check if low risk (<= 3)
    pub fn is_low_risk(&self) -> bool {
        self.0 <= 3.0
    }
}

/// Risk level band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    /// Low risk
    Low,
    /// Medium risk
    Medium,
    /// High risk
    High,
}

impl From<RiskScore> for RiskLevel {
    fn from(score: RiskScore) -> Self {
        if score.is_high_risk() {
            RiskLevel::High
        } else if score.is_medium_risk() {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }
}

/// Risk assessment result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskAssessment {
    /// Assessment ID
    pub assessment_id: Uuid,

    /// Clamped indicator readings the score was computed from
    pub indicators: StudentIndicators,

    /// Risk score
    pub score: RiskScore,

    /// Risk level band
    pub level: RiskLevel,

    /// Whether the heuristic fallback produced the score
    pub used_fallback: bool,

    /// Assessment timestamp
    pub assessed_at: DateTime<Utc>,
}
