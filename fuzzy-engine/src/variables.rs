//! Linguistic variables of the academic risk system
//!
//! Four input variables and one output variable, each partitioned into
//! low/medium/high triangular sets. The breakpoints are fixed: together the
//! three sets of a variable span its full universe, so no crisp input ever
//! has zero membership in all three bands (overlap is intentional and the
//! degrees are not required to sum to 1).

use crate::membership::{Term, TriangularMf};

/// A named numeric universe partitioned into three fuzzy sets
#[derive(Debug, Clone)]
pub struct LinguisticVariable {
    /// Variable name
    pub name: &'static str,

    /// Universe lower bound
    pub min: f64,

    /// Universe upper bound
    pub max: f64,

    /// Low/medium/high sets, in band order
    pub sets: [(Term, TriangularMf); 3],
}

impl LinguisticVariable {
    fn new(name: &'static str, min: f64, max: f64, breakpoints: [(f64, f64, f64); 3]) -> Self {
        let [low, medium, high] = breakpoints;
        Self {
            name,
            min,
            max,
            sets: [
                (Term::Low, TriangularMf { a: low.0, b: low.1, c: low.2 }),
                (Term::Medium, TriangularMf { a: medium.0, b: medium.1, c: medium.2 }),
                (Term::High, TriangularMf { a: high.0, b: high.1, c: high.2 }),
            ],
        }
    }

    /// Socioeconomic level over [0, 10]
    pub fn socioeconomic_level() -> Self {
        Self::new(
            "nivel_socioeconomico",
            0.0,
            10.0,
            [(0.0, 0.0, 4.0), (2.0, 5.0, 8.0), (6.0, 10.0, 10.0)],
        )
    }

    /// Class participation over [0, 10]
    pub fn class_participation() -> Self {
        Self::new(
            "participacion_clase",
            0.0,
            10.0,
            [(0.0, 0.0, 4.0), (2.0, 5.0, 8.0), (6.0, 10.0, 10.0)],
        )
    }

    /// Attendance percentage over [0, 100]
    pub fn attendance() -> Self {
        Self::new(
            "asistencia",
            0.0,
            100.0,
            [(0.0, 0.0, 60.0), (50.0, 70.0, 90.0), (80.0, 100.0, 100.0)],
        )
    }

    /// Prior grades over [0, 10]
    pub fn prior_grades() -> Self {
        Self::new(
            "calificaciones_anteriores",
            0.0,
            10.0,
            [(0.0, 0.0, 5.0), (4.0, 6.0, 8.0), (7.0, 10.0, 10.0)],
        )
    }

    /// Academic risk output over [0, 10]
    pub fn academic_risk() -> Self {
        Self::new(
            "riesgo_academico",
            0.0,
            10.0,
            [(0.0, 0.0, 4.0), (3.0, 5.0, 7.0), (6.0, 10.0, 10.0)],
        )
    }

    /// Clamp a reading into this variable's universe
    pub fn clamp(&self, x: f64) -> f64 {
        x.clamp(self.min, self.max)
    }

    /// Membership degree of `x` in the set for `term`
    pub fn membership(&self, term: Term, x: f64) -> f64 {
        self.sets
            .iter()
            .find(|(t, _)| *t == term)
            .map(|(_, mf)| mf.degree(x))
            .unwrap_or(0.0)
    }

    /// Fuzzify a crisp reading into all three bands
    pub fn fuzzify(&self, x: f64) -> [f64; 3] {
        [
            self.sets[0].1.degree(x),
            self.sets[1].1.degree(x),
            self.sets[2].1.degree(x),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_variables() -> Vec<LinguisticVariable> {
        vec![
            LinguisticVariable::socioeconomic_level(),
            LinguisticVariable::class_participation(),
            LinguisticVariable::attendance(),
            LinguisticVariable::prior_grades(),
            LinguisticVariable::academic_risk(),
        ]
    }

    #[test]
    fn test_sets_span_full_universe() {
        // Every point of every universe must belong to at least one band
        for var in all_variables() {
            let steps = 1000;
            for i in 0..=steps {
                let x = var.min + (var.max - var.min) * (i as f64) / (steps as f64);
                let total: f64 = var.fuzzify(x).iter().sum();
                assert!(
                    total > 0.0,
                    "{} has zero membership everywhere at x={}",
                    var.name,
                    x
                );
            }
        }
    }

    #[test]
    fn test_breakpoints_are_ordered() {
        for var in all_variables() {
            for (term, mf) in &var.sets {
                assert!(
                    mf.a <= mf.b && mf.b <= mf.c,
                    "{} {:?} breakpoints out of order",
                    var.name,
                    term
                );
            }
        }
    }

    #[test]
    fn test_attendance_overlap() {
        let att = LinguisticVariable::attendance();

        // 55% attendance sits in the low/medium overlap
        let low = att.membership(Term::Low, 55.0);
        let medium = att.membership(Term::Medium, 55.0);
        assert!(low > 0.0 && medium > 0.0);

        // Peaks
        assert_eq!(att.membership(Term::Low, 0.0), 1.0);
        assert_eq!(att.membership(Term::Medium, 70.0), 1.0);
        assert_eq!(att.membership(Term::High, 100.0), 1.0);
    }

    #[test]
    fn test_grades_breakpoints() {
        let grades = LinguisticVariable::prior_grades();

        assert_eq!(grades.membership(Term::Low, 2.5), 0.5);
        assert_eq!(grades.membership(Term::Medium, 6.0), 1.0);
        assert_eq!(grades.membership(Term::High, 8.5), 0.5);
    }
}
