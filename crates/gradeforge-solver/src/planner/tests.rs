//! Tests for the target planner.

use super::*;
use gradeforge_core::Points;
use gradeforge_test::curriculum::{sample_config, sample_curriculum, sample_history};

fn target(s: &str) -> Target {
    s.parse().unwrap()
}

fn names(plan: &TargetPlan) -> Vec<&str> {
    plan.courses.iter().map(|c| c.name.as_str()).collect()
}

#[test]
fn test_plans_next_semester_from_history() {
    let config = sample_config();
    let planner = TargetPlanner::new(&config.curriculum, &config.solver);
    let request = TargetRequest::new("CSE", sample_history(), target("8"));

    let plan = planner.plan(&request).unwrap();
    assert_eq!(plan.semester, 3);
    assert_eq!(plan.required_spi, Decimal::new(729, 2));
    assert_eq!(plan.current_cpi.map(round_index), Some(Decimal::new(839, 2)));
    assert!(plan.is_feasible());
    assert_eq!(
        names(&plan),
        vec![
            "Algorithms",
            "Operating Systems",
            "Probability",
            "Systems Lab",
            "Humanities Elective",
        ]
    );

    let mut history = sample_history();
    history.push(Semester::new(3, plan.courses.clone()));
    assert!(cpi(&history).unwrap() >= Decimal::from(8));
}

#[test]
fn test_partial_grades_are_fixed_first() {
    let curriculum = sample_curriculum();
    let planner = TargetPlanner::new(&curriculum, &SolverSettings::default());
    let request = TargetRequest::new("CSE", sample_history(), target("8"))
        .with_partial_grade("Operating Systems", "9")
        .with_partial_grade("Algorithms", " a ");

    let plan = planner.plan(&request).unwrap();
    assert_eq!(plan.courses[0].name, "Algorithms");
    assert_eq!(plan.courses[0].grade, Grade::A);
    assert_eq!(plan.courses[1].name, "Operating Systems");
    assert_eq!(plan.courses[1].grade, Grade::AMinus);

    // 102.06 required, 76 fixed: the remaining 6 credits need 26.06 -> 27
    let solved = plan.outcome.plan().unwrap();
    assert_eq!(solved.assignments().len(), 3);
    assert_eq!(solved.unknown_points(), Points::of(27));
    assert_eq!(
        names(&plan)[2..],
        ["Probability", "Systems Lab", "Humanities Elective"]
    );
}

#[test]
fn test_secured_target_assigns_floor_grade() {
    let curriculum = sample_curriculum();
    let planner = TargetPlanner::new(&curriculum, &SolverSettings::default());
    let request = TargetRequest::new("CSE", sample_history(), target("1"));

    let plan = planner.plan(&request).unwrap();
    assert!(plan.required_spi < Decimal::ZERO);
    assert_eq!(plan.courses.len(), 5);
    assert!(plan.courses.iter().all(|c| c.grade == Grade::D));
}

#[test]
fn test_unreachable_target() {
    let curriculum = sample_curriculum();
    let planner = TargetPlanner::new(&curriculum, &SolverSettings::default());
    let request = TargetRequest::new("CSE", sample_history(), target("10"));

    let plan = planner.plan(&request).unwrap();
    assert_eq!(plan.required_spi, Decimal::new(1293, 2));
    assert!(!plan.is_feasible());
    assert!(plan.courses.is_empty());
}

#[test]
fn test_first_semester_without_history() {
    let curriculum = sample_curriculum();
    let planner = TargetPlanner::new(&curriculum, &SolverSettings::default());
    let request = TargetRequest::new("EE", vec![], target("8.5"));

    let plan = planner.plan(&request).unwrap();
    assert_eq!(plan.semester, 1);
    assert_eq!(plan.current_cpi, None);
    assert_eq!(plan.required_spi, Decimal::new(85, 1));

    let solved = plan.outcome.plan().unwrap();
    // 85 needed over even credits; 86 is the closest reachable total
    assert_eq!(solved.unknown_points(), Points::of(86));
    assert_eq!(solved.average(), Decimal::new(86, 1));
}

#[test]
fn test_missing_curriculum_entry() {
    let curriculum = sample_curriculum();
    let planner = TargetPlanner::new(&curriculum, &SolverSettings::default());

    let request = TargetRequest::new("ME", sample_history(), target("8"));
    assert_eq!(
        planner.plan(&request).unwrap_err(),
        GradeForgeError::UnknownCurriculum {
            branch: "ME".to_string(),
            semester: 3,
        }
    );

    let request = TargetRequest::new("EE", sample_history(), target("8"));
    assert!(matches!(
        planner.plan(&request),
        Err(GradeForgeError::UnknownCurriculum { semester: 3, .. })
    ));
}

#[test]
fn test_rejects_bad_partial_grades() {
    let curriculum = sample_curriculum();
    let planner = TargetPlanner::new(&curriculum, &SolverSettings::default());
    let base = TargetRequest::new("CSE", sample_history(), target("8"));

    let stray = base.clone().with_partial_grade("Basket Weaving", "A");
    assert_eq!(
        planner.plan(&stray).unwrap_err(),
        GradeForgeError::UnknownCourse("Basket Weaving".to_string())
    );

    let token = base.clone().with_partial_grade("Algorithms", "Z");
    assert_eq!(
        planner.plan(&token).unwrap_err(),
        GradeForgeError::UnknownGrade("Z".to_string())
    );

    let twice = base
        .with_partial_grade("Algorithms", "A")
        .with_partial_grade("Algorithms", "B");
    assert_eq!(
        planner.plan(&twice).unwrap_err(),
        GradeForgeError::DuplicateCourse("Algorithms".to_string())
    );
}

#[test]
fn test_upcoming_semester_follows_latest() {
    let request = TargetRequest::new(
        "CSE",
        vec![Semester::new(4, vec![]), Semester::new(2, vec![])],
        target("7"),
    );
    assert_eq!(request.upcoming_semester(), 5);
}
