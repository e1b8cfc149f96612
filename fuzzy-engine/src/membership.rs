//! Triangular membership functions and linguistic terms

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Linguistic term shared by every variable in the system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Term {
    /// Low band ("bajo"/"baja")
    Low,
    /// Medium band ("medio"/"media")
    Medium,
    /// High band ("alto"/"alta")
    High,
}

impl Term {
    /// All terms, in band order
    pub const ALL: [Term; 3] = [Term::Low, Term::Medium, Term::High];
}

/// Triangular membership function over breakpoints `a <= b <= c`
///
/// Membership is 0 outside `[a, c]`, rises linearly from `a` to the peak 1.0
/// at `b`, and falls linearly from `b` to `c`. Degenerate shoulders
/// (`a == b` or `b == c`) keep membership 1.0 at the shared breakpoint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TriangularMf {
    /// Left foot
    pub a: f64,
    /// Peak
    pub b: f64,
    /// Right foot
    pub c: f64,
}

impl TriangularMf {
    /// Create a validated triangular membership function
    pub fn new(a: f64, b: f64, c: f64) -> Result<Self> {
        if !(a <= b && b <= c) {
            return Err(Error::InvalidMembership(format!(
                "breakpoints must satisfy a <= b <= c, got ({}, {}, {})",
                a, b, c
            )));
        }
        Ok(Self { a, b, c })
    }

    /// Membership degree of `x`, in [0, 1]
    ///
    /// NaN input yields 0.0 (every comparison against NaN is false), which
    /// lets degenerate inputs fall through the pipeline to the fallback
    /// branch instead of poisoning the aggregate curve.
    pub fn degree(&self, x: f64) -> f64 {
        if !(x >= self.a && x <= self.c) {
            return 0.0;
        }
        if x == self.b {
            return 1.0;
        }
        if x < self.b {
            (x - self.a) / (self.b - self.a)
        } else {
            (self.c - x) / (self.c - self.b)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_peak_and_feet() {
        let mf = TriangularMf::new(2.0, 5.0, 8.0).unwrap();

        assert_eq!(mf.degree(5.0), 1.0);
        assert_eq!(mf.degree(2.0), 0.0);
        assert_eq!(mf.degree(8.0), 0.0);
        assert_eq!(mf.degree(3.5), 0.5);
        assert_eq!(mf.degree(6.5), 0.5);
    }

    #[test]
    fn test_outside_support() {
        let mf = TriangularMf::new(2.0, 5.0, 8.0).unwrap();

        assert_eq!(mf.degree(-1.0), 0.0);
        assert_eq!(mf.degree(100.0), 0.0);
    }

    #[test]
    fn test_degenerate_left_shoulder() {
        // Shape used by every "low" set: peak sits on the left foot
        let mf = TriangularMf::new(0.0, 0.0, 4.0).unwrap();

        assert_eq!(mf.degree(0.0), 1.0);
        assert_eq!(mf.degree(2.0), 0.5);
        assert_eq!(mf.degree(4.0), 0.0);
    }

    #[test]
    fn test_degenerate_right_shoulder() {
        // Shape used by every "high" set: peak sits on the right foot
        let mf = TriangularMf::new(6.0, 10.0, 10.0).unwrap();

        assert_eq!(mf.degree(10.0), 1.0);
        assert_eq!(mf.degree(8.0), 0.5);
        assert_eq!(mf.degree(6.0), 0.0);
    }

    #[test]
    fn test_invalid_breakpoints_rejected() {
        assert!(TriangularMf::new(5.0, 2.0, 8.0).is_err());
        assert!(TriangularMf::new(2.0, 8.0, 5.0).is_err());
    }

    #[test]
    fn test_nan_input_is_zero() {
        let mf = TriangularMf::new(0.0, 5.0, 10.0).unwrap();

        assert_eq!(mf.degree(f64::NAN), 0.0);
    }
}
