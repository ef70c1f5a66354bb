//! Points - credit-weighted grade points with i64 precision and ×100 scaling
//!
//! Averages are compared in this integer domain so accumulated rounding can
//! never flip a target between reachable and unreachable.

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Neg, Sub};

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

/// Scale factor for 2 decimal places of precision.
pub const SCALE: i64 = 100;

/// Grade points multiplied by credits, stored pre-scaled by [`SCALE`].
///
/// # Examples
///
/// ```
/// use gradeforge_core::{Grade, Points};
///
/// // A 4-credit course at grade B is worth 32 points.
/// let points = Points::weighted(Grade::B, 400);
/// assert_eq!(points.scaled(), 3200);
/// assert_eq!(format!("{}", points), "32");
///
/// let half = Points::of_scaled(1250);
/// assert_eq!(format!("{}", half), "12.5");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Points {
    scaled: i64,
}

impl Points {
    /// Zero points.
    pub const ZERO: Points = Points { scaled: 0 };

    /// Creates points from a pre-scaled value.
    #[inline]
    pub const fn of_scaled(scaled: i64) -> Self {
        Points { scaled }
    }

    /// Creates points from an unscaled whole value.
    #[inline]
    pub const fn of(points: i64) -> Self {
        Points {
            scaled: points * SCALE,
        }
    }

    /// Points earned by `grade` on a course of `centi_credits` (credits × 100).
    #[inline]
    pub const fn weighted(grade: crate::Grade, centi_credits: i64) -> Self {
        Points {
            scaled: grade.points() * centi_credits,
        }
    }

    /// Rounds an unscaled decimal up onto the scaled grid.
    ///
    /// Returns `None` when the value does not fit in i64.
    pub fn ceil_from_decimal(value: Decimal) -> Option<Self> {
        value
            .checked_mul(Decimal::from(SCALE))
            .map(|scaled| scaled.ceil())
            .and_then(|scaled| scaled.to_i64())
            .map(Points::of_scaled)
    }

    /// Returns the scaled value.
    #[inline]
    pub const fn scaled(&self) -> i64 {
        self.scaled
    }

    /// Returns the unscaled value as an exact decimal.
    pub fn to_decimal(&self) -> Decimal {
        Decimal::new(self.scaled, 2).normalize()
    }

    /// Returns true if strictly positive.
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.scaled > 0
    }
}

impl Add for Points {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Points::of_scaled(self.scaled + other.scaled)
    }
}

impl Sub for Points {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Points::of_scaled(self.scaled - other.scaled)
    }
}

impl Neg for Points {
    type Output = Self;

    fn neg(self) -> Self {
        Points::of_scaled(-self.scaled)
    }
}

impl Sum for Points {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Points::ZERO, Add::add)
    }
}

impl fmt::Debug for Points {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Points({})", self.to_decimal())
    }
}

impl fmt::Display for Points {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_decimal())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Grade;

    #[test]
    fn test_creation() {
        assert_eq!(Points::of(56).scaled(), 5600);
        assert_eq!(Points::of_scaled(-150).scaled(), -150);
        assert_eq!(Points::weighted(Grade::D, 400), Points::of(16));
        assert_eq!(Points::weighted(Grade::F, 300), Points::ZERO);
    }

    #[test]
    fn test_ceil_from_decimal() {
        assert_eq!(Points::ceil_from_decimal(Decimal::new(56, 0)), Some(Points::of(56)));
        // 12.341 -> 1234.1 -> 1235
        assert_eq!(
            Points::ceil_from_decimal(Decimal::new(12341, 3)),
            Some(Points::of_scaled(1235))
        );
        assert_eq!(Points::ceil_from_decimal(Decimal::MAX), None);
    }

    #[test]
    fn test_arithmetic() {
        let a = Points::of(10);
        let b = Points::of_scaled(250);

        assert_eq!(a + b, Points::of_scaled(1250));
        assert_eq!(a - b, Points::of_scaled(750));
        assert_eq!(-b, Points::of_scaled(-250));
        assert_eq!([a, b, b].into_iter().sum::<Points>(), Points::of(15));
    }

    #[test]
    fn test_comparison() {
        assert!(Points::of(1) > Points::ZERO);
        assert!(Points::of_scaled(-1) < Points::ZERO);
        assert!(!Points::ZERO.is_positive());
    }

    #[test]
    fn test_display() {
        assert_eq!(Points::of(40).to_string(), "40");
        assert_eq!(Points::of_scaled(5625).to_string(), "56.25");
        assert_eq!(format!("{:?}", Points::of_scaled(-10)), "Points(-0.1)");
    }
}
