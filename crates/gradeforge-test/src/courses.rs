//! Terse course and planning-set builders.

use gradeforge_core::{Course, Grade, GradedCourse, PlanningSet, Target};
use rust_decimal::Decimal;

/// Creates an ungraded course; credits given as a decimal string ("4", "1.5").
pub fn course(name: &str, credits: &str) -> Course {
    Course::new(name, decimal(credits))
}

/// Creates a graded course from a raw grade token ("A-", "9", "b").
pub fn graded(name: &str, credits: &str, grade: &str) -> GradedCourse {
    let grade: Grade = grade.parse().expect("valid grade token");
    GradedCourse::new(name, decimal(credits), grade)
}

/// Builds a validated planning set, panicking on invalid input.
pub fn planning_set(known: Vec<GradedCourse>, unknown: Vec<Course>, target: &str) -> PlanningSet {
    let target: Target = target.parse().expect("valid target");
    PlanningSet::new(known, unknown, target).expect("valid planning set")
}

/// Unknown courses named `U0`, `U1`, ... with the given credits.
pub fn unknown_courses(credits: &[&str]) -> Vec<Course> {
    credits
        .iter()
        .enumerate()
        .map(|(i, c)| course(&format!("U{i}"), c))
        .collect()
}

fn decimal(s: &str) -> Decimal {
    s.parse().expect("valid decimal")
}
