//! Solver entry points that hide config loading and wiring.

use gradeforge_config::PlannerConfig;
use gradeforge_core::{Course, GradedCourse, PlanningSet, Result, Target};
use gradeforge_solver::{MinGradeSolver, SolveOutcome, TargetPlan, TargetPlanner, TargetRequest};
use tracing::debug;

/// Config file read from the working directory.
pub const CONFIG_FILE: &str = "gradeforge.toml";

/// Loads [`CONFIG_FILE`], falling back to defaults when it is missing or invalid.
pub fn load_config() -> PlannerConfig {
    PlannerConfig::load(CONFIG_FILE).unwrap_or_else(|err| {
        debug!(event = "config_default", path = CONFIG_FILE, error = %err);
        PlannerConfig::default()
    })
}

/// Finds the minimum grades for `unknown` so the average over all courses
/// reaches `target`.
///
/// Solver settings come from [`load_config`].
pub fn solve_min_grades(
    known: Vec<GradedCourse>,
    unknown: Vec<Course>,
    target: Target,
) -> Result<SolveOutcome> {
    #[cfg(feature = "console")]
    gradeforge_console::init();

    let config = load_config();
    let set = PlanningSet::new(known, unknown, target)?;
    MinGradeSolver::new(config.solver).solve(&set)
}

/// Plans the semester after `request.history` against `config.curriculum`.
pub fn plan_next_semester(config: &PlannerConfig, request: &TargetRequest) -> Result<TargetPlan> {
    #[cfg(feature = "console")]
    gradeforge_console::init();

    TargetPlanner::new(&config.curriculum, &config.solver).plan(request)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gradeforge_core::Grade;
    use gradeforge_test::curriculum::{sample_config, sample_history};
    use gradeforge_test::{course, graded};

    #[test]
    fn test_solve_min_grades() {
        let outcome = solve_min_grades(
            vec![graded("K", "3", "F")],
            vec![course("U", "3")],
            "5".parse().unwrap(),
        )
        .unwrap();
        assert_eq!(outcome.into_result().unwrap().grades(), vec![Grade::A]);
    }

    #[test]
    fn test_invalid_input_is_an_error() {
        let result = solve_min_grades(vec![], vec![], "5".parse().unwrap());
        assert!(result.is_err());
    }

    #[test]
    fn test_plan_next_semester() {
        let config = sample_config();
        let request = TargetRequest::new("CSE", sample_history(), "8".parse().unwrap());
        let plan = plan_next_semester(&config, &request).unwrap();
        assert_eq!(plan.semester, 3);
        assert!(plan.is_feasible());
    }
}
