//! Tests for planning-set validation and fixed-point totals.

use super::*;
use crate::Grade;

fn target(s: &str) -> Target {
    s.parse().unwrap()
}

#[test]
fn test_required_points_round_up() {
    // 7.333 × 3 credits = 21.999 -> 2199.9 scaled -> 2200
    let set = PlanningSet::new(vec![], vec![Course::new("X", 3)], target("7.333")).unwrap();
    assert_eq!(set.required_points(), Points::of_scaled(2200));
    assert_eq!(set.needed_points(), Points::of(22));
}

#[test]
fn test_fractional_credits() {
    let set = PlanningSet::new(
        vec![GradedCourse::new("Lab", Decimal::new(15, 1), Grade::B)],
        vec![Course::new("Theory", Decimal::new(25, 1))],
        target("6"),
    )
    .unwrap();
    assert_eq!(set.total_centi_credits(), 400);
    assert_eq!(set.known_points(), Points::of(12));
    assert_eq!(set.required_points(), Points::of(24));
    assert_eq!(set.unknown_centi_credits(), &[250]);
}

#[test]
fn test_known_only_set_is_valid() {
    let set = PlanningSet::new(
        vec![GradedCourse::new("A1", 4, Grade::C)],
        vec![],
        target("5"),
    )
    .unwrap();
    assert!(set.unknown().is_empty());
    assert!(!set.needed_points().is_positive());
}

#[test]
fn test_rejects_empty_set() {
    let err = PlanningSet::new(vec![], vec![], target("5")).unwrap_err();
    assert_eq!(err, GradeForgeError::EmptyPlanningSet);
}

#[test]
fn test_rejects_duplicate_names_across_sides() {
    let err = PlanningSet::new(
        vec![GradedCourse::new("Algo", 4, Grade::A)],
        vec![Course::new("Algo", 3)],
        target("8"),
    )
    .unwrap_err();
    assert_eq!(err, GradeForgeError::DuplicateCourse("Algo".to_string()));
}

#[test]
fn test_rejects_non_positive_credits() {
    let err = PlanningSet::new(vec![], vec![Course::new("Zero", 0)], target("8")).unwrap_err();
    assert!(matches!(err, GradeForgeError::InvalidCredits { ref course, .. } if course == "Zero"));
}

#[test]
fn test_rejects_credits_beyond_point_range() {
    let huge = Decimal::new(10_000_000_000_000_000, 0);
    let err = PlanningSet::new(
        vec![GradedCourse::new("K", huge, Grade::A)],
        vec![Course::new("U", 1)],
        target("5"),
    )
    .unwrap_err();
    assert_eq!(
        err,
        GradeForgeError::InvalidCredits {
            course: "K".to_string(),
            credits: huge,
        }
    );

    // each fits alone; together they do not
    let large = Decimal::new(5_000_000_000_000_000, 0);
    let err = PlanningSet::new(
        vec![],
        vec![Course::new("U", large), Course::new("V", large)],
        target("5"),
    )
    .unwrap_err();
    assert!(matches!(err, GradeForgeError::InvalidCredits { ref course, .. } if course == "V"));

    assert!(PlanningSet::new(vec![], vec![Course::new("U", large)], target("5")).is_ok());
}

#[test]
fn test_target_parsing() {
    assert_eq!(target(" 8.5 ").value(), Decimal::new(85, 1));
    assert!(matches!(
        "eight".parse::<Target>(),
        Err(GradeForgeError::InvalidTarget(_))
    ));
    assert!(Target::from_f64(f64::INFINITY).is_err());
    assert!(Target::from_f64(-0.5).is_err());
    assert_eq!(Target::from_f64(7.25).unwrap().value(), Decimal::new(725, 2));
}

#[test]
fn test_average_with() {
    let set = PlanningSet::new(
        vec![GradedCourse::new("A1", 4, Grade::A)],
        vec![Course::new("B1", 4)],
        target("7"),
    )
    .unwrap();
    assert_eq!(set.average_with(Points::of(16)), Decimal::from(7));
    assert_eq!(set.average_with(Points::of(40)), Decimal::from(10));
}
