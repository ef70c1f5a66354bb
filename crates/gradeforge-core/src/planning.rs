//! Validated planning sets.
//!
//! A [`PlanningSet`] bundles known courses, unknown courses and a target
//! average. Construction checks every precondition the solver relies on and
//! precomputes the fixed-point quantities, so solvers never re-validate.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;

use crate::course::{Course, GradedCourse};
use crate::error::{GradeForgeError, Result};
use crate::grade::Grade;
use crate::points::Points;

const MAX_GRADE_POINTS: i64 = Grade::AStar.points();

/// A non-negative target grade average.
///
/// # Examples
///
/// ```
/// use gradeforge_core::Target;
///
/// let target: Target = "8.25".parse().unwrap();
/// assert_eq!(target.to_string(), "8.25");
///
/// assert!(Target::from_f64(f64::NAN).is_err());
/// assert!("-1".parse::<Target>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Target(Decimal);

impl Target {
    /// Creates a target from an exact decimal.
    pub fn new(value: Decimal) -> Result<Self> {
        if value.is_sign_negative() && !value.is_zero() {
            return Err(GradeForgeError::InvalidTarget(format!(
                "target must be non-negative, got {value}"
            )));
        }
        Ok(Target(value))
    }

    /// Creates a target from a float, rejecting NaN and infinities.
    pub fn from_f64(value: f64) -> Result<Self> {
        if !value.is_finite() {
            return Err(GradeForgeError::InvalidTarget(format!(
                "target must be finite, got {value}"
            )));
        }
        let decimal = Decimal::from_f64(value).ok_or_else(|| {
            GradeForgeError::InvalidTarget(format!("target out of range: {value}"))
        })?;
        Target::new(decimal)
    }

    /// Returns the target as a decimal.
    #[inline]
    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl FromStr for Target {
    type Err = GradeForgeError;

    fn from_str(s: &str) -> Result<Self> {
        let value = Decimal::from_str(s.trim())
            .map_err(|e| GradeForgeError::InvalidTarget(format!("'{s}': {e}")))?;
        Target::new(value)
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Known courses, unknown courses and a target average, validated.
#[derive(Debug, Clone)]
pub struct PlanningSet {
    known: Vec<GradedCourse>,
    unknown: Vec<Course>,
    unknown_centi_credits: Vec<i64>,
    target: Target,
    total_centi_credits: i64,
    known_points: Points,
    required_points: Points,
}

impl PlanningSet {
    /// Validates inputs and precomputes fixed-point totals.
    ///
    /// # Errors
    ///
    /// - [`GradeForgeError::InvalidCredits`] for non-positive or over-precise credits,
///   or when the credit total is too large for fixed-point points
    /// - [`GradeForgeError::DuplicateCourse`] when a name appears twice
    /// - [`GradeForgeError::EmptyPlanningSet`] when there are no courses at all
    /// - [`GradeForgeError::InvalidTarget`] when the required total overflows
    ///
    /// # Examples
    ///
    /// ```
    /// use gradeforge_core::{Course, Grade, GradedCourse, PlanningSet, Points, Target};
    ///
    /// let set = PlanningSet::new(
    ///     vec![GradedCourse::new("A1", 4, Grade::A)],
    ///     vec![Course::new("B1", 4)],
    ///     "7".parse::<Target>().unwrap(),
    /// ).unwrap();
    ///
    /// assert_eq!(set.required_points(), Points::of(56));
    /// assert_eq!(set.known_points(), Points::of(40));
    /// assert_eq!(set.needed_points(), Points::of(16));
    /// ```
    pub fn new(known: Vec<GradedCourse>, unknown: Vec<Course>, target: Target) -> Result<Self> {
        let mut names = HashSet::with_capacity(known.len() + unknown.len());
        let known_names = known.iter().map(|c| c.name.as_str());
        let unknown_names = unknown.iter().map(|c| c.name.as_str());
        for name in known_names.chain(unknown_names) {
            if !names.insert(name) {
                return Err(GradeForgeError::DuplicateCourse(name.to_string()));
            }
        }

        if known.is_empty() && unknown.is_empty() {
            return Err(GradeForgeError::EmptyPlanningSet);
        }

        // Point totals never exceed MAX_GRADE_POINTS × total credits.
        let mut total_centi_credits: i64 = 0;
        let mut add_credits = |name: &str, credits: Decimal, centi: i64| -> Result<()> {
            total_centi_credits = total_centi_credits
                .checked_add(centi)
                .filter(|total| total.checked_mul(MAX_GRADE_POINTS).is_some())
                .ok_or_else(|| GradeForgeError::InvalidCredits {
                    course: name.to_string(),
                    credits,
                })?;
            Ok(())
        };

        let mut known_points = Points::ZERO;
        for course in &known {
            let centi = course.centi_credits()?;
            add_credits(&course.name, course.credits, centi)?;
            known_points = known_points + Points::weighted(course.grade, centi);
        }

        let mut unknown_centi_credits = Vec::with_capacity(unknown.len());
        for course in &unknown {
            let centi = course.centi_credits()?;
            add_credits(&course.name, course.credits, centi)?;
            unknown_centi_credits.push(centi);
        }

        let total_credits = Decimal::new(total_centi_credits, 2);
        let required_points = target
            .value()
            .checked_mul(total_credits)
            .and_then(Points::ceil_from_decimal)
            .ok_or_else(|| {
                GradeForgeError::InvalidTarget(format!("target {target} overflows point range"))
            })?;

        Ok(PlanningSet {
            known,
            unknown,
            unknown_centi_credits,
            target,
            total_centi_credits,
            known_points,
            required_points,
        })
    }

    /// Courses whose grades are fixed.
    pub fn known(&self) -> &[GradedCourse] {
        &self.known
    }

    /// Courses to be assigned a grade, in caller order.
    pub fn unknown(&self) -> &[Course] {
        &self.unknown
    }

    /// Credits × 100 of each unknown course, parallel to [`Self::unknown`].
    pub fn unknown_centi_credits(&self) -> &[i64] {
        &self.unknown_centi_credits
    }

    /// The target average.
    pub fn target(&self) -> Target {
        self.target
    }

    /// Credits × 100 over known and unknown courses.
    pub fn total_centi_credits(&self) -> i64 {
        self.total_centi_credits
    }

    /// Points contributed by the known courses.
    pub fn known_points(&self) -> Points {
        self.known_points
    }

    /// Points needed over all courses, rounded up onto the scaled grid.
    pub fn required_points(&self) -> Points {
        self.required_points
    }

    /// Points the unknown courses must still contribute.
    ///
    /// Zero or negative means the known courses already meet the target.
    pub fn needed_points(&self) -> Points {
        self.required_points - self.known_points
    }

    /// Average over all courses for a given unknown-side contribution.
    pub fn average_with(&self, unknown_points: Points) -> Decimal {
        let total = (self.known_points + unknown_points).to_decimal();
        let credits = Decimal::new(self.total_centi_credits, 2);
        total / credits
    }
}

#[cfg(test)]
mod tests;
