//! Error types for GradeForge

use rust_decimal::Decimal;
use thiserror::Error;

/// Main error type for GradeForge operations.
///
/// Every variant describes a caller-side precondition violation. An
/// unreachable target is not an error; solvers report it as a value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GradeForgeError {
    /// Course credits were zero, negative, or finer than 0.01.
    #[error("Invalid credits for course '{course}': {credits}")]
    InvalidCredits { course: String, credits: Decimal },

    /// Target average was negative, non-finite, or unparsable.
    #[error("Invalid target: {0}")]
    InvalidTarget(String),

    /// Grade token is not part of the grade alphabet.
    #[error("Unknown grade '{0}'")]
    UnknownGrade(String),

    /// Planning set contains no courses at all.
    #[error("Planning set has no courses")]
    EmptyPlanningSet,

    /// The same course name appears twice in one planning set.
    #[error("Duplicate course '{0}' in planning set")]
    DuplicateCourse(String),

    /// More unknown courses than the configured search limit.
    #[error("Too many unknown courses: {unknown} (limit {limit})")]
    ProblemTooLarge { unknown: usize, limit: usize },

    /// No curriculum entry for the requested branch and semester.
    #[error("No curriculum for branch '{branch}' semester {semester}")]
    UnknownCurriculum { branch: String, semester: u32 },

    /// A grade was supplied for a course outside the planned semester.
    #[error("Course '{0}' is not part of the planned semester")]
    UnknownCourse(String),

    /// Required SPI is undefined because the upcoming semester has no credits.
    #[error("Upcoming semester has no credits")]
    NoUpcomingCredits,
}

/// Result type alias for GradeForge operations
pub type Result<T> = std::result::Result<T, GradeForgeError>;
