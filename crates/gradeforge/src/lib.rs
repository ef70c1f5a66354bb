//! GradeForge - minimum grade planning for GPA targets.
//!
//! Given the courses already graded and the ones still open, finds the least
//! generous grades that still lift the credit-weighted average to a target.
//!
//! # Example
//!
//! ```rust
//! use gradeforge::prelude::*;
//!
//! let outcome = solve_min_grades(
//!     vec![GradedCourse::new("A1", 4, Grade::A)],
//!     vec![Course::new("B1", 4)],
//!     "7".parse().unwrap(),
//! )
//! .unwrap();
//!
//! let plan = outcome.into_result().unwrap();
//! assert_eq!(plan.grades(), vec![Grade::D]);
//! ```

// Domain types
pub use gradeforge_core::{
    cpi, round_index, spi, Course, Grade, GradeForgeError, GradedCourse, PlanningSet, Points,
    Result, Semester, Target, SEARCH_GRADES,
};

// Configuration
pub use gradeforge_config::{
    ConfigError, Curriculum, CurriculumSemester, PlannerConfig, SolverSettings,
};

// Solver and planner
pub use gradeforge_solver::{
    required_spi, GradePlan, Infeasible, MinGradeSolver, PlannedGrade, SolveOutcome, TargetPlan,
    TargetPlanner, TargetRequest,
};

pub use rust_decimal::Decimal;

#[cfg(feature = "console")]
pub use gradeforge_console as console;

mod solver;
pub use solver::{load_config, plan_next_semester, solve_min_grades, CONFIG_FILE};

pub mod prelude {
    pub use super::Decimal;
    pub use super::{plan_next_semester, solve_min_grades, PlannerConfig};
    pub use super::{
        Course, Grade, GradeForgeError, GradedCourse, Semester, SolveOutcome, Target,
        TargetRequest,
    };
}
