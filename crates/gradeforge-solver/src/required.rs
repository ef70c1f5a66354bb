//! SPI required next semester to reach a target CPI.

use gradeforge_core::{totals, Course, GradeForgeError, Result, Semester, Target};
use rust_decimal::Decimal;

/// Returns the SPI the upcoming semester must average so that the CPI over
/// `history` plus `upcoming` equals `target_cpi`.
///
/// The value is exact and unrounded. It may exceed 10 (target unreachable)
/// or fall below zero (target already secured).
///
/// # Errors
///
/// [`GradeForgeError::NoUpcomingCredits`] if `upcoming` carries no credits.
///
/// # Examples
///
/// ```
/// use gradeforge_core::{Course, Grade, GradedCourse, Semester};
/// use gradeforge_solver::required_spi;
/// use rust_decimal::Decimal;
///
/// let history = [Semester::new(1, vec![GradedCourse::new("M1", 10, Grade::B)])];
/// let upcoming = [Course::new("M2", 10)];
///
/// // (9 × 20 - 80) / 10
/// let spi = required_spi(&history, &upcoming, "9".parse().unwrap()).unwrap();
/// assert_eq!(spi, Decimal::from(10));
/// ```
pub fn required_spi(
    history: &[Semester],
    upcoming: &[Course],
    target_cpi: Target,
) -> Result<Decimal> {
    let upcoming_credits: Decimal = upcoming.iter().map(|c| c.credits).sum();
    if upcoming_credits <= Decimal::ZERO {
        return Err(GradeForgeError::NoUpcomingCredits);
    }

    let (previous_points, previous_credits) =
        totals(history.iter().flat_map(|semester| semester.courses.iter()));

    let overflow = || GradeForgeError::InvalidTarget(format!("target {target_cpi} overflows"));
    let required_total = target_cpi
        .value()
        .checked_mul(previous_credits + upcoming_credits)
        .ok_or_else(overflow)?;

    (required_total - previous_points)
        .checked_div(upcoming_credits)
        .ok_or_else(overflow)
}
