//! Static curriculum table: course lists keyed by branch and semester.

use std::collections::HashSet;

use gradeforge_core::Course;
use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Course lists for every (branch, semester) pair.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct Curriculum {
    /// One entry per branch and semester.
    #[serde(default)]
    pub semesters: Vec<CurriculumSemester>,
}

/// The courses offered to one branch in one semester.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct CurriculumSemester {
    pub branch: String,
    pub semester: u32,
    #[serde(default)]
    pub courses: Vec<Course>,
}

impl Curriculum {
    /// Creates an empty curriculum.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a semester entry.
    pub fn with_semester(
        mut self,
        branch: impl Into<String>,
        semester: u32,
        courses: Vec<Course>,
    ) -> Self {
        self.semesters.push(CurriculumSemester {
            branch: branch.into(),
            semester,
            courses,
        });
        self
    }

    /// Returns the courses for a branch and semester, in table order.
    pub fn courses(&self, branch: &str, semester: u32) -> Option<&[Course]> {
        self.semesters
            .iter()
            .find(|entry| entry.branch == branch && entry.semester == semester)
            .map(|entry| entry.courses.as_slice())
    }

    /// Returns every branch name, in first-seen order.
    pub fn branches(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.semesters
            .iter()
            .map(|entry| entry.branch.as_str())
            .filter(|branch| seen.insert(*branch))
            .collect()
    }

    /// Rejects duplicate entries, duplicate course names and invalid credits.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut keys = HashSet::new();
        for entry in &self.semesters {
            if !keys.insert((entry.branch.as_str(), entry.semester)) {
                return Err(ConfigError::Invalid(format!(
                    "duplicate curriculum entry for branch '{}' semester {}",
                    entry.branch, entry.semester
                )));
            }

            let mut names = HashSet::new();
            for course in &entry.courses {
                if !names.insert(course.name.as_str()) {
                    return Err(ConfigError::Invalid(format!(
                        "duplicate course '{}' in branch '{}' semester {}",
                        course.name, entry.branch, entry.semester
                    )));
                }
                course
                    .centi_credits()
                    .map_err(|e| ConfigError::Invalid(e.to_string()))?;
            }
        }
        Ok(())
    }
}
