//! GradeForge Solver
//!
//! This crate provides:
//! - [`MinGradeSolver`]: the minimum-grade feasibility solver
//! - [`required_spi`]: the SPI needed next semester for a target CPI
//! - [`TargetPlanner`]: curriculum lookup + required SPI + solver in one call
//!
//! Logging levels:
//! - **INFO**: solve start/end, planner results
//! - **DEBUG**: one event per search layer with reachable state counts

pub mod min_grade;
pub mod plan;
pub mod planner;
pub mod required;

pub use min_grade::MinGradeSolver;
pub use plan::{GradePlan, Infeasible, PlannedGrade, SolveOutcome};
pub use planner::{TargetPlan, TargetPlanner, TargetRequest};
pub use required::required_spi;
