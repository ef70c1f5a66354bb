//! Target Planner Example
//!
//! Two semesters of grades are on record. The student wants a CPI of at
//! least the target (first argument, default 8.5) after the third semester
//! and already knows one grade. The planner works out the SPI they need and
//! the least demanding grades that get there.

use std::error::Error;

use gradeforge::prelude::*;
use gradeforge::{round_index, TargetPlan};

const CURRICULUM: &str = include_str!("../curriculum.toml");

fn history() -> Vec<Semester> {
    vec![
        Semester::new(
            1,
            vec![
                GradedCourse::new("Calculus I", 4, Grade::AMinus),
                GradedCourse::new("Intro to Programming", 4, Grade::A),
                GradedCourse::new("Physics", 3, Grade::BMinus),
                GradedCourse::new("Engineering Drawing", Decimal::new(15, 1), Grade::B),
                GradedCourse::new("Physics Lab", Decimal::new(15, 1), Grade::A),
            ],
        ),
        Semester::new(
            2,
            vec![
                GradedCourse::new("Calculus II", 4, Grade::B),
                GradedCourse::new("Data Structures", 4, Grade::AMinus),
                GradedCourse::new("Discrete Mathematics", 3, Grade::C),
                GradedCourse::new("Basic Electronics", 3, Grade::BMinus),
                GradedCourse::new("Programming Lab", 2, Grade::A),
            ],
        ),
    ]
}

fn print_plan(plan: &TargetPlan) {
    println!("\nSemester {} plan", plan.semester);
    println!("{}", "-".repeat(44));
    for course in &plan.courses {
        println!(
            "{:<32} {:>5} {:>4}",
            course.name,
            course.credits.to_string(),
            course.grade.letter()
        );
    }
    println!("{}", "-".repeat(44));
}

fn main() -> Result<(), Box<dyn Error>> {
    let target: Target = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "8.5".to_string())
        .parse()?;

    let config = PlannerConfig::from_toml_str(CURRICULUM)?;
    let request = TargetRequest::new("CSE", history(), target)
        .with_partial_grade("Economics", "A-");

    let plan = plan_next_semester(&config, &request)?;

    if let Some(cpi) = plan.current_cpi {
        println!("\nCurrent CPI:  {}", round_index(cpi));
    }
    println!("Target CPI:   {target}");
    println!("Required SPI: {}", plan.required_spi);

    match &plan.outcome {
        SolveOutcome::Feasible(solved) => {
            print_plan(&plan);
            println!("Semester SPI under this plan: {}", round_index(solved.average()));
        }
        SolveOutcome::Infeasible(infeasible) => {
            println!("\n{infeasible}");
            println!("Try a target below {target}.");
        }
    }

    Ok(())
}
