//! Next-semester planning against a curriculum table.
//!
//! [`TargetPlanner`] chains the pieces a student-facing flow needs: find the
//! upcoming semester's courses, work out the SPI they must average, fix any
//! grades already known and let [`MinGradeSolver`] fill in the rest.

use std::collections::HashMap;

use gradeforge_config::{Curriculum, SolverSettings};
use gradeforge_core::{
    cpi, round_index, Course, Grade, GradeForgeError, GradedCourse, PlanningSet, Result, Semester,
    Target,
};
use rust_decimal::Decimal;
use tracing::info;

use crate::min_grade::MinGradeSolver;
use crate::plan::SolveOutcome;
use crate::required::required_spi;

/// Input to [`TargetPlanner::plan`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetRequest {
    /// Curriculum branch key, e.g. `"CSE"`.
    pub branch: String,
    /// Completed semesters.
    pub history: Vec<Semester>,
    /// CPI to reach after the upcoming semester.
    pub target_cpi: Target,
    /// Raw grade tokens for upcoming courses whose grade is already fixed.
    pub partial_grades: Vec<(String, String)>,
}

impl TargetRequest {
    pub fn new(branch: impl Into<String>, history: Vec<Semester>, target_cpi: Target) -> Self {
        Self {
            branch: branch.into(),
            history,
            target_cpi,
            partial_grades: Vec::new(),
        }
    }

    /// Fixes the grade of one upcoming course.
    pub fn with_partial_grade(
        mut self,
        course: impl Into<String>,
        grade: impl Into<String>,
    ) -> Self {
        self.partial_grades.push((course.into(), grade.into()));
        self
    }

    /// Semester that follows the latest one in the history.
    pub fn upcoming_semester(&self) -> u32 {
        self.history
            .iter()
            .map(|semester| semester.number)
            .max()
            .map_or(1, |latest| latest.saturating_add(1))
    }
}

/// Result of [`TargetPlanner::plan`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetPlan {
    /// The semester that was planned.
    pub semester: u32,
    /// CPI over the history, `None` without history.
    pub current_cpi: Option<Decimal>,
    /// Required SPI, rounded to two decimals. Values above 10 mean the
    /// target is out of reach; values at or below zero mean it is secured.
    pub required_spi: Decimal,
    pub outcome: SolveOutcome,
    /// Fixed grades first, then computed ones. Empty when infeasible.
    pub courses: Vec<GradedCourse>,
}

impl TargetPlan {
    pub fn is_feasible(&self) -> bool {
        self.outcome.is_feasible()
    }
}

/// Plans the upcoming semester for a target CPI.
#[derive(Debug, Clone)]
pub struct TargetPlanner<'a> {
    curriculum: &'a Curriculum,
    solver: MinGradeSolver,
}

impl<'a> TargetPlanner<'a> {
    pub fn new(curriculum: &'a Curriculum, settings: &SolverSettings) -> Self {
        Self {
            curriculum,
            solver: MinGradeSolver::new(*settings),
        }
    }

    /// Plans the semester after `request.history`.
    ///
    /// # Errors
    ///
    /// - [`GradeForgeError::UnknownCurriculum`] if the branch has no entry
    ///   for the upcoming semester
    /// - [`GradeForgeError::UnknownCourse`] / [`GradeForgeError::UnknownGrade`]
    ///   for bad partial grades
    /// - any error from [`required_spi`] or [`MinGradeSolver::solve`]
    pub fn plan(&self, request: &TargetRequest) -> Result<TargetPlan> {
        let semester = request.upcoming_semester();
        let upcoming = self
            .curriculum
            .courses(&request.branch, semester)
            .ok_or_else(|| GradeForgeError::UnknownCurriculum {
                branch: request.branch.clone(),
                semester,
            })?;

        let required = round_index(required_spi(&request.history, upcoming, request.target_cpi)?);
        let fixed = canonical_partials(upcoming, &request.partial_grades)?;

        let mut known = Vec::with_capacity(fixed.len());
        let mut unknown = Vec::with_capacity(upcoming.len() - fixed.len());
        for course in upcoming {
            match fixed.get(course.name.as_str()) {
                Some(&grade) => known.push(course.clone().graded(grade)),
                None => unknown.push(course.clone()),
            }
        }

        // A secured target still yields a plan: solve against zero.
        let target = Target::new(required.max(Decimal::ZERO))?;
        let set = PlanningSet::new(known, unknown, target)?;
        let outcome = self.solver.solve(&set)?;

        let courses = match outcome.plan() {
            Some(plan) => set
                .known()
                .iter()
                .cloned()
                .chain(plan.clone().into_graded())
                .collect(),
            None => Vec::new(),
        };

        info!(
            event = "plan",
            branch = %request.branch,
            semester = semester,
            required_spi = %required,
            known_count = set.known().len() as u64,
            unknown_count = set.unknown().len() as u64,
            feasible = outcome.is_feasible(),
        );

        Ok(TargetPlan {
            semester,
            current_cpi: cpi(&request.history),
            required_spi: required,
            outcome,
            courses,
        })
    }
}

fn canonical_partials<'c>(
    upcoming: &'c [Course],
    partials: &[(String, String)],
) -> Result<HashMap<&'c str, Grade>> {
    let mut fixed = HashMap::with_capacity(partials.len());
    for (name, token) in partials {
        let course = upcoming
            .iter()
            .find(|course| course.name == *name)
            .ok_or_else(|| GradeForgeError::UnknownCourse(name.clone()))?;
        let grade: Grade = token.parse()?;
        if fixed.insert(course.name.as_str(), grade).is_some() {
            return Err(GradeForgeError::DuplicateCourse(name.clone()));
        }
    }
    Ok(fixed)
}

#[cfg(test)]
mod tests;
