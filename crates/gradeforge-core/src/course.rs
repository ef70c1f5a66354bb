//! Course types shared by the solver, the planner and the curriculum table.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::error::{GradeForgeError, Result};
use crate::grade::Grade;
use crate::points::{Points, SCALE};

/// A course with a credit weight and no grade.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Course {
    pub name: String,
    pub credits: Decimal,
}

impl Course {
    /// Creates a new course.
    pub fn new(name: impl Into<String>, credits: impl Into<Decimal>) -> Self {
        Course {
            name: name.into(),
            credits: credits.into(),
        }
    }

    /// Attaches a grade, producing a graded course.
    pub fn graded(self, grade: Grade) -> GradedCourse {
        GradedCourse {
            name: self.name,
            credits: self.credits,
            grade,
        }
    }

    /// Returns credits × 100 as an integer.
    ///
    /// # Errors
    ///
    /// Fails if credits are not strictly positive or have more than two
    /// fractional digits.
    pub fn centi_credits(&self) -> Result<i64> {
        centi_credits(&self.name, self.credits)
    }
}

/// A course whose grade is already fixed.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GradedCourse {
    pub name: String,
    pub credits: Decimal,
    pub grade: Grade,
}

impl GradedCourse {
    /// Creates a new graded course.
    pub fn new(name: impl Into<String>, credits: impl Into<Decimal>, grade: Grade) -> Self {
        GradedCourse {
            name: name.into(),
            credits: credits.into(),
            grade,
        }
    }

    /// Returns credits × 100 as an integer.
    pub fn centi_credits(&self) -> Result<i64> {
        centi_credits(&self.name, self.credits)
    }

    /// Returns the fixed-point points this course contributes.
    pub fn points(&self) -> Result<Points> {
        self.grade
            .points()
            .checked_mul(self.centi_credits()?)
            .map(Points::of_scaled)
            .ok_or_else(|| GradeForgeError::InvalidCredits {
                course: self.name.clone(),
                credits: self.credits,
            })
    }

    /// Drops the grade.
    pub fn course(&self) -> Course {
        Course::new(self.name.clone(), self.credits)
    }
}

/// One completed semester of graded courses.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Semester {
    pub number: u32,
    pub courses: Vec<GradedCourse>,
}

impl Semester {
    /// Creates a new semester.
    pub fn new(number: u32, courses: Vec<GradedCourse>) -> Self {
        Semester { number, courses }
    }

    /// Total credits taken this semester.
    pub fn credits(&self) -> Decimal {
        self.courses.iter().map(|c| c.credits).sum()
    }
}

fn centi_credits(name: &str, credits: Decimal) -> Result<i64> {
    let invalid = || GradeForgeError::InvalidCredits {
        course: name.to_string(),
        credits,
    };

    if credits <= Decimal::ZERO {
        return Err(invalid());
    }
    let scaled = credits
        .checked_mul(Decimal::from(SCALE))
        .ok_or_else(invalid)?;
    if scaled.fract() != Decimal::ZERO {
        return Err(invalid());
    }
    scaled.to_i64().ok_or_else(invalid)
}
