//! Solver results: a full grade plan or an infeasibility report.

use gradeforge_core::{Course, Grade, GradedCourse, PlanningSet, Points};
use rust_decimal::Decimal;
use thiserror::Error;

/// A grade assigned to one unknown course.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedGrade {
    pub course: Course,
    pub grade: Grade,
}

impl PlannedGrade {
    /// Converts into a graded course.
    pub fn into_graded(self) -> GradedCourse {
        self.course.graded(self.grade)
    }
}

/// A grade for every unknown course, in caller order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradePlan {
    assignments: Vec<PlannedGrade>,
    unknown_points: Points,
    average: Decimal,
}

impl GradePlan {
    pub(crate) fn new(set: &PlanningSet, grades: Vec<Grade>) -> Self {
        let unknown_points: Points = grades
            .iter()
            .zip(set.unknown_centi_credits())
            .map(|(&grade, &centi)| Points::weighted(grade, centi))
            .sum();
        let assignments = set
            .unknown()
            .iter()
            .cloned()
            .zip(grades)
            .map(|(course, grade)| PlannedGrade { course, grade })
            .collect();

        GradePlan {
            assignments,
            unknown_points,
            average: set.average_with(unknown_points),
        }
    }

    /// Assigned grades, one per unknown course.
    pub fn assignments(&self) -> &[PlannedGrade] {
        &self.assignments
    }

    /// Just the grades, in caller order.
    pub fn grades(&self) -> Vec<Grade> {
        self.assignments.iter().map(|a| a.grade).collect()
    }

    /// Points contributed by the unknown courses under this plan.
    pub fn unknown_points(&self) -> Points {
        self.unknown_points
    }

    /// Average over known and planned courses.
    pub fn average(&self) -> Decimal {
        self.average
    }

    /// Consumes the plan into graded courses.
    pub fn into_graded(self) -> Vec<GradedCourse> {
        self.assignments
            .into_iter()
            .map(PlannedGrade::into_graded)
            .collect()
    }
}

/// No grade assignment reaches the target.
///
/// This is an expected outcome, not a fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("target unreachable: unknown courses need {needed} points but at most {max_achievable} are achievable")]
pub struct Infeasible {
    /// Points the unknown courses would have to contribute.
    pub needed: Points,
    /// Best the unknown courses can contribute.
    pub max_achievable: Points,
}

impl Infeasible {
    /// How far the best assignment falls short.
    pub fn shortfall(&self) -> Points {
        self.needed - self.max_achievable
    }
}

/// Outcome of a solve: a plan or an infeasibility report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveOutcome {
    Feasible(GradePlan),
    Infeasible(Infeasible),
}

impl SolveOutcome {
    /// Returns true if a plan was found.
    pub fn is_feasible(&self) -> bool {
        matches!(self, SolveOutcome::Feasible(_))
    }

    /// Returns the plan, if any.
    pub fn plan(&self) -> Option<&GradePlan> {
        match self {
            SolveOutcome::Feasible(plan) => Some(plan),
            SolveOutcome::Infeasible(_) => None,
        }
    }

    /// Converts into a `Result` so `?` can propagate infeasibility.
    pub fn into_result(self) -> Result<GradePlan, Infeasible> {
        match self {
            SolveOutcome::Feasible(plan) => Ok(plan),
            SolveOutcome::Infeasible(infeasible) => Err(infeasible),
        }
    }
}
