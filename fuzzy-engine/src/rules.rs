//! Fixed rule base combining the four indicators
//!
//! Nine hand-authored rules mapping indicator bands to a risk band. The rule
//! base is built once and never mutated; rules are not mutually exclusive
//! (several can fire for the same inputs) and aggregation order does not
//! matter.

use crate::membership::Term;
use crate::types::Indicator;

/// Rule antecedent: a proposition tree over the input indicators
///
/// Fuzzy AND is min, fuzzy OR is max, evaluated recursively over the tree.
#[derive(Debug, Clone)]
pub enum Antecedent {
    /// A single (indicator, band) proposition
    Is(Indicator, Term),
    /// Conjunction of two sub-antecedents
    And(Box<Antecedent>, Box<Antecedent>),
    /// Disjunction of two sub-antecedents
    Or(Box<Antecedent>, Box<Antecedent>),
}

impl Antecedent {
    /// Combine with another antecedent via fuzzy AND
    pub fn and(self, rhs: Antecedent) -> Self {
        Antecedent::And(Box::new(self), Box::new(rhs))
    }

    /// Combine with another antecedent via fuzzy OR
    pub fn or(self, rhs: Antecedent) -> Self {
        Antecedent::Or(Box::new(self), Box::new(rhs))
    }

    /// Firing strength given the fuzzified inputs
    ///
    /// `memberships[indicator][term]` holds the membership degree of the
    /// crisp reading for that indicator in that band.
    pub fn firing_strength(&self, memberships: &[[f64; 3]; 4]) -> f64 {
        match self {
            Antecedent::Is(indicator, term) => {
                memberships[indicator.index()][term_index(*term)]
            }
            Antecedent::And(lhs, rhs) => f64::min(
                lhs.firing_strength(memberships),
                rhs.firing_strength(memberships),
            ),
            Antecedent::Or(lhs, rhs) => f64::max(
                lhs.firing_strength(memberships),
                rhs.firing_strength(memberships),
            ),
        }
    }
}

impl Indicator {
    /// Start an antecedent: this indicator is in the given band
    pub fn is(self, term: Term) -> Antecedent {
        Antecedent::Is(self, term)
    }
}

fn term_index(term: Term) -> usize {
    match term {
        Term::Low => 0,
        Term::Medium => 1,
        Term::High => 2,
    }
}

/// A fuzzy rule: antecedent plus the risk band it implies
#[derive(Debug, Clone)]
pub struct Rule {
    /// Condition over the input indicators
    pub antecedent: Antecedent,

    /// Risk band clipped by the firing strength
    pub consequent: Term,
}

impl Rule {
    /// Create a rule
    pub fn new(antecedent: Antecedent, consequent: Term) -> Self {
        Self {
            antecedent,
            consequent,
        }
    }
}

/// The fixed 9-rule base of the academic risk system
pub fn rule_base() -> Vec<Rule> {
    use Indicator::{Attendance, ClassParticipation, PriorGrades, SocioeconomicLevel};
    use Term::{High, Low, Medium};

    vec![
        // 1. Every factor low -> high risk
        Rule::new(
            SocioeconomicLevel
                .is(Low)
                .and(ClassParticipation.is(Low))
                .and(Attendance.is(Low))
                .and(PriorGrades.is(Low)),
            High,
        ),
        // 2. Every factor medium -> medium risk
        Rule::new(
            SocioeconomicLevel
                .is(Medium)
                .and(ClassParticipation.is(Medium))
                .and(Attendance.is(Medium))
                .and(PriorGrades.is(Medium)),
            Medium,
        ),
        // 3. Every factor high -> low risk
        Rule::new(
            SocioeconomicLevel
                .is(High)
                .and(ClassParticipation.is(High))
                .and(Attendance.is(High))
                .and(PriorGrades.is(High)),
            Low,
        ),
        // 4. Low attendance or low participation -> high risk
        Rule::new(Attendance.is(Low).or(ClassParticipation.is(Low)), High),
        // 5. Low grades -> high risk
        Rule::new(PriorGrades.is(Low), High),
        // 6. Low socioeconomic level -> medium risk
        Rule::new(SocioeconomicLevel.is(Low), Medium),
        // 7. High grades and high attendance -> low risk
        Rule::new(PriorGrades.is(High).and(Attendance.is(High)), Low),
        // 8. High participation and high grades -> low risk
        Rule::new(ClassParticipation.is(High).and(PriorGrades.is(High)), Low),
        // 9. Medium attendance and medium grades -> medium risk
        Rule::new(Attendance.is(Medium).and(PriorGrades.is(Medium)), Medium),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_base_has_nine_rules() {
        assert_eq!(rule_base().len(), 9);
    }

    #[test]
    fn test_and_takes_minimum() {
        let memberships = [[0.8, 0.0, 0.0], [0.3, 0.0, 0.0], [0.0; 3], [0.0; 3]];
        let antecedent = Indicator::SocioeconomicLevel
            .is(Term::Low)
            .and(Indicator::ClassParticipation.is(Term::Low));

        assert_eq!(antecedent.firing_strength(&memberships), 0.3);
    }

    #[test]
    fn test_or_takes_maximum() {
        let memberships = [[0.0; 3], [0.3, 0.0, 0.0], [0.8, 0.0, 0.0], [0.0; 3]];
        let antecedent = Indicator::Attendance
            .is(Term::Low)
            .or(Indicator::ClassParticipation.is(Term::Low));

        assert_eq!(antecedent.firing_strength(&memberships), 0.8);
    }

    #[test]
    fn test_nested_antecedent() {
        // (low AND low) OR high over mixed degrees
        let memberships = [
            [0.2, 0.0, 0.0],
            [0.6, 0.0, 0.0],
            [0.0, 0.0, 0.9],
            [0.0; 3],
        ];
        let antecedent = Indicator::SocioeconomicLevel
            .is(Term::Low)
            .and(Indicator::ClassParticipation.is(Term::Low))
            .or(Indicator::Attendance.is(Term::High));

        assert_eq!(antecedent.firing_strength(&memberships), 0.9);
    }

    #[test]
    fn test_all_low_fires_rule_one_fully() {
        let memberships = [
            [1.0, 0.0, 0.0],
            [1.0, 0.0, 0.0],
            [1.0, 0.0, 0.0],
            [1.0, 0.0, 0.0],
        ];
        let rules = rule_base();

        assert_eq!(rules[0].antecedent.firing_strength(&memberships), 1.0);
        assert_eq!(rules[0].consequent, Term::High);
        // Rule 3 (all high) must not fire at all
        assert_eq!(rules[2].antecedent.firing_strength(&memberships), 0.0);
    }
}
