//! GradeForge Core - Core types for grade planning
//!
//! This crate provides the fundamental building blocks for GradeForge:
//! - The fixed grade alphabet and its canonicalization
//! - Fixed-point grade points for exact average comparisons
//! - Course types and validated planning sets
//! - SPI / CPI arithmetic over graded semesters

pub mod course;
pub mod error;
pub mod grade;
pub mod performance;
pub mod planning;
pub mod points;

pub use course::{Course, GradedCourse, Semester};
pub use error::{GradeForgeError, Result};
pub use grade::{Grade, SEARCH_GRADES};
pub use performance::{cpi, round_index, spi, totals};
pub use planning::{PlanningSet, Target};
pub use points::{Points, SCALE};
