//! Minimum-grade feasibility solver.
//!
//! Finds the least generous grade assignment to unknown courses that lifts
//! the overall credit-weighted average to a target.
//!
//! # Search
//!
//! Unknown courses are visited in ascending credit order (stable for equal
//! credits). Each layer maps a cumulative point total to the first
//! assignment path that reached it; later paths reaching the same total are
//! dropped. Deduplicating per layer keeps the state count bounded by the
//! number of distinct totals instead of `7^n`.
//!
//! After the last layer the smallest total that covers the needed points
//! wins. Because low-credit courses are assigned first and grades are
//! enumerated from `A` down, surplus points tend to land on light courses
//! while heavy courses keep low grades.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use gradeforge_config::SolverSettings;
use gradeforge_core::{Grade, GradeForgeError, PlanningSet, Points, Result, SEARCH_GRADES};
use smallvec::SmallVec;
use tracing::{debug, info};

use crate::plan::{GradePlan, Infeasible, SolveOutcome};

/// One unknown course's grade, tagged with the course's caller index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Assignment {
    index: usize,
    grade: Grade,
}

type Path = SmallVec<[Assignment; 16]>;

/// One search layer: point totals mapped to the first path reaching them.
///
/// Entries are kept in discovery order; `slots` only indexes them.
#[derive(Debug, Default)]
struct PointTable {
    entries: Vec<(Points, Path)>,
    slots: HashMap<Points, usize>,
}

impl PointTable {
    fn root() -> Self {
        let mut table = PointTable::default();
        table.insert_first(Points::ZERO, Path::new);
        table
    }

    fn with_capacity(capacity: usize) -> Self {
        PointTable {
            entries: Vec::with_capacity(capacity),
            slots: HashMap::with_capacity(capacity),
        }
    }

    /// Records `total` unless an earlier path already reached it.
    fn insert_first(&mut self, total: Points, path: impl FnOnce() -> Path) {
        if let Entry::Vacant(slot) = self.slots.entry(total) {
            slot.insert(self.entries.len());
            self.entries.push((total, path()));
        }
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn iter(&self) -> impl Iterator<Item = &(Points, Path)> {
        self.entries.iter()
    }

    fn smallest_at_least(&self, needed: Points) -> Option<&(Points, Path)> {
        self.entries
            .iter()
            .filter(|(total, _)| *total >= needed)
            .min_by_key(|(total, _)| *total)
    }

    fn max_total(&self) -> Points {
        self.entries
            .iter()
            .map(|(total, _)| *total)
            .max()
            .unwrap_or(Points::ZERO)
    }
}

/// Minimum-grade feasibility solver.
///
/// Stateless between calls; one instance can serve any number of solves.
///
/// # Examples
///
/// ```
/// use gradeforge_core::{Course, Grade, GradedCourse, PlanningSet};
/// use gradeforge_solver::MinGradeSolver;
///
/// let set = PlanningSet::new(
///     vec![GradedCourse::new("A1", 4, Grade::A)],
///     vec![Course::new("B1", 4)],
///     "7".parse().unwrap(),
/// ).unwrap();
///
/// let plan = MinGradeSolver::default().solve(&set).unwrap().into_result().unwrap();
/// assert_eq!(plan.grades(), vec![Grade::D]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct MinGradeSolver {
    settings: SolverSettings,
}

impl MinGradeSolver {
    /// Creates a solver with the given settings.
    pub fn new(settings: SolverSettings) -> Self {
        Self { settings }
    }

    /// Returns the solver settings.
    pub fn settings(&self) -> &SolverSettings {
        &self.settings
    }

    /// Solves one planning set.
    ///
    /// # Errors
    ///
    /// Returns [`GradeForgeError::ProblemTooLarge`] when the set has more
    /// unknown courses than `max_unknown_courses`. An unreachable target is
    /// reported as [`SolveOutcome::Infeasible`], not as an error.
    pub fn solve(&self, set: &PlanningSet) -> Result<SolveOutcome> {
        let unknown_count = set.unknown().len();
        let limit = self.settings.max_unknown_courses;
        if unknown_count > limit {
            return Err(GradeForgeError::ProblemTooLarge {
                unknown: unknown_count,
                limit,
            });
        }

        let needed = set.needed_points();
        info!(
            event = "solve_start",
            known_count = set.known().len() as u64,
            unknown_count = unknown_count as u64,
            target = %set.target(),
            needed = %needed,
        );

        if !needed.is_positive() {
            let plan = GradePlan::new(set, vec![self.settings.floor_grade; unknown_count]);
            info!(
                event = "solve_end",
                feasible = true,
                searched = false,
                unknown_points = %plan.unknown_points(),
                average = %plan.average(),
            );
            return Ok(SolveOutcome::Feasible(plan));
        }

        let table = search(set);
        let outcome = match table.smallest_at_least(needed) {
            Some((_, path)) => {
                let mut ordered = path.clone();
                ordered.sort_by_key(|assignment| assignment.index);
                let grades = ordered.iter().map(|assignment| assignment.grade).collect();
                SolveOutcome::Feasible(GradePlan::new(set, grades))
            }
            None => SolveOutcome::Infeasible(Infeasible {
                needed,
                max_achievable: table.max_total(),
            }),
        };

        match &outcome {
            SolveOutcome::Feasible(plan) => info!(
                event = "solve_end",
                feasible = true,
                searched = true,
                reachable = table.len() as u64,
                unknown_points = %plan.unknown_points(),
                average = %plan.average(),
            ),
            SolveOutcome::Infeasible(infeasible) => info!(
                event = "solve_end",
                feasible = false,
                searched = true,
                reachable = table.len() as u64,
                shortfall = %infeasible.shortfall(),
            ),
        }

        Ok(outcome)
    }
}

fn search(set: &PlanningSet) -> PointTable {
    let courses = set.unknown();
    let credits = set.unknown_centi_credits();

    let mut order: Vec<usize> = (0..credits.len()).collect();
    order.sort_by_key(|&index| credits[index]);

    let mut layer = PointTable::root();
    for (depth, &index) in order.iter().enumerate() {
        let centi = credits[index];
        let mut next = PointTable::with_capacity(layer.len() * SEARCH_GRADES.len());

        for (total, path) in layer.iter() {
            for grade in SEARCH_GRADES {
                next.insert_first(*total + Points::weighted(grade, centi), || {
                    let mut extended = path.clone();
                    extended.push(Assignment { index, grade });
                    extended
                });
            }
        }

        debug!(
            event = "layer",
            depth = depth as u64,
            course = %courses[index].name,
            credits = %courses[index].credits,
            reachable = next.len() as u64,
        );
        layer = next;
    }
    layer
}
