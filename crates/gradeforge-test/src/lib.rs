//! Shared test fixtures for GradeForge crates.
//!
//! This crate provides data builders and pure reference functions for testing.
//! It does NOT depend on `gradeforge-solver` so the solver can use it as a
//! dev-dependency without a cycle.
//!
//! - [`courses`] - Terse builders for courses, graded courses and planning sets
//! - [`brute_force`] - Exhaustive reference search for small planning sets
//! - [`curriculum`] - A sample curriculum table and grade history
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! gradeforge-test = { workspace = true }
//! ```
//!
//! Then import the fixtures you need:
//!
//! ```ignore
//! use gradeforge_test::courses::{course, graded, planning_set};
//! use gradeforge_test::brute_force::min_feasible_points;
//! ```

pub mod brute_force;
pub mod courses;
pub mod curriculum;

// Re-export commonly used builders at crate root for convenience
pub use courses::{course, graded, planning_set};
