//! Configuration system for GradeForge.
//!
//! Load solver limits and the curriculum table from TOML or YAML files.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use gradeforge_config::PlannerConfig;
//! use gradeforge_core::Grade;
//!
//! let config = PlannerConfig::from_toml_str(r#"
//!     [solver]
//!     max_unknown_courses = 12
//!
//!     [[curriculum.semesters]]
//!     branch = "CSE"
//!     semester = 3
//!     courses = [
//!         { name = "Data Structures", credits = 4 },
//!         { name = "Discrete Mathematics", credits = 3 },
//!     ]
//! "#).unwrap();
//!
//! assert_eq!(config.solver.max_unknown_courses, 12);
//! assert_eq!(config.solver.floor_grade, Grade::D);
//! assert_eq!(config.curriculum.courses("CSE", 3).unwrap().len(), 2);
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use gradeforge_config::PlannerConfig;
//!
//! let config = PlannerConfig::load("gradeforge.toml").unwrap_or_default();
//! // Proceeds with defaults if file doesn't exist
//! ```

mod curriculum;

use std::path::Path;

use gradeforge_core::Grade;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use curriculum::{Curriculum, CurriculumSemester};

/// Default cap on unknown courses per solve.
pub const DEFAULT_MAX_UNKNOWN_COURSES: usize = 15;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main planner configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct PlannerConfig {
    /// Solver limits and defaults.
    #[serde(default)]
    pub solver: SolverSettings,

    /// Course tables keyed by branch and semester.
    #[serde(default)]
    pub curriculum: Curriculum,
}

impl PlannerConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist, contains invalid TOML, or fails
    /// [`validate`](Self::validate).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Sets the unknown-course cap.
    pub fn with_max_unknown_courses(mut self, limit: usize) -> Self {
        self.solver.max_unknown_courses = limit;
        self
    }

    /// Sets the grade given to every unknown course when the target is
    /// already met.
    pub fn with_floor_grade(mut self, grade: Grade) -> Self {
        self.solver.floor_grade = grade;
        self
    }

    /// Replaces the curriculum table.
    pub fn with_curriculum(mut self, curriculum: Curriculum) -> Self {
        self.curriculum = curriculum;
        self
    }

    /// Checks limits and curriculum consistency.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.solver.max_unknown_courses == 0 {
            return Err(ConfigError::Invalid(
                "solver.max_unknown_courses must be at least 1".to_string(),
            ));
        }
        self.curriculum.validate()
    }
}

/// Solver limits and defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SolverSettings {
    /// Largest number of unknown courses accepted in one solve.
    #[serde(default = "default_max_unknown_courses")]
    pub max_unknown_courses: usize,

    /// Grade assigned to unknown courses when no search is needed.
    #[serde(default = "default_floor_grade")]
    pub floor_grade: Grade,
}

impl Default for SolverSettings {
    fn default() -> Self {
        Self {
            max_unknown_courses: DEFAULT_MAX_UNKNOWN_COURSES,
            floor_grade: default_floor_grade(),
        }
    }
}

fn default_max_unknown_courses() -> usize {
    DEFAULT_MAX_UNKNOWN_COURSES
}

fn default_floor_grade() -> Grade {
    Grade::D
}
