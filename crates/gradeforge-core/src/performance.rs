//! SPI and CPI arithmetic.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::course::{GradedCourse, Semester};

/// Credit-weighted grade point average of one set of courses.
///
/// Returns `None` when the courses carry no credits.
///
/// # Examples
///
/// ```
/// use gradeforge_core::{spi, Grade, GradedCourse};
/// use rust_decimal::Decimal;
///
/// let courses = [
///     GradedCourse::new("M1", 4, Grade::A),
///     GradedCourse::new("P1", 4, Grade::B),
/// ];
/// assert_eq!(spi(&courses), Some(Decimal::from(9)));
/// assert_eq!(spi(&[]), None);
/// ```
pub fn spi(courses: &[GradedCourse]) -> Option<Decimal> {
    weighted_average(courses.iter())
}

/// Credit-weighted grade point average across every semester.
///
/// Computed from raw grade points, not from rounded per-semester SPIs.
pub fn cpi(semesters: &[Semester]) -> Option<Decimal> {
    weighted_average(semesters.iter().flat_map(|s| s.courses.iter()))
}

/// Rounds an index to two decimal places, midpoint away from zero.
pub fn round_index(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Sums `(grade points × credits, credits)` over courses, unscaled.
pub fn totals<'a>(courses: impl IntoIterator<Item = &'a GradedCourse>) -> (Decimal, Decimal) {
    courses.into_iter().fold((Decimal::ZERO, Decimal::ZERO), |(points, credits), c| {
        (
            points + Decimal::from(c.grade.points()) * c.credits,
            credits + c.credits,
        )
    })
}

fn weighted_average<'a>(courses: impl Iterator<Item = &'a GradedCourse>) -> Option<Decimal> {
    let (points, credits) = totals(courses);
    if credits.is_zero() {
        return None;
    }
    points.checked_div(credits)
}
