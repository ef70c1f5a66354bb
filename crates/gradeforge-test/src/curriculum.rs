//! Sample curriculum table and grade history.

use gradeforge_config::{Curriculum, PlannerConfig};
use gradeforge_core::Semester;

use crate::courses::graded;

/// A small two-branch curriculum in config-file form.
pub const SAMPLE_CONFIG_TOML: &str = r#"
[solver]
max_unknown_courses = 12

[[curriculum.semesters]]
branch = "CSE"
semester = 1
courses = [
    { name = "Calculus", credits = 4 },
    { name = "Programming", credits = 4 },
    { name = "Physics", credits = 3 },
    { name = "Workshop", credits = 1.5 },
]

[[curriculum.semesters]]
branch = "CSE"
semester = 2
courses = [
    { name = "Linear Algebra", credits = 4 },
    { name = "Data Structures", credits = 4 },
    { name = "Digital Logic", credits = 3 },
    { name = "Communication Skills", credits = 2 },
]

[[curriculum.semesters]]
branch = "CSE"
semester = 3
courses = [
    { name = "Algorithms", credits = 4 },
    { name = "Operating Systems", credits = 4 },
    { name = "Probability", credits = 3 },
    { name = "Systems Lab", credits = 2 },
    { name = "Humanities Elective", credits = 1 },
]

[[curriculum.semesters]]
branch = "EE"
semester = 1
courses = [
    { name = "Calculus", credits = 4 },
    { name = "Circuits", credits = 4 },
    { name = "Electronics Lab", credits = 2 },
]
"#;

/// Parses [`SAMPLE_CONFIG_TOML`].
pub fn sample_config() -> PlannerConfig {
    PlannerConfig::from_toml_str(SAMPLE_CONFIG_TOML).expect("sample config parses")
}

/// The curriculum table from [`sample_config`].
pub fn sample_curriculum() -> Curriculum {
    sample_config().curriculum
}

/// Two graded CSE semesters.
///
/// Semester 1: 4×A + 4×B + 3×B- + 1.5×A = 40 + 32 + 21 + 15 = 108 over 12.5 credits.
/// Semester 2: 4×B + 4×A- + 3×C + 2×A = 32 + 36 + 18 + 20 = 106 over 13 credits.
/// CPI = 214 / 25.5.
pub fn sample_history() -> Vec<Semester> {
    vec![
        Semester::new(
            1,
            vec![
                graded("Calculus", "4", "A"),
                graded("Programming", "4", "B"),
                graded("Physics", "3", "B-"),
                graded("Workshop", "1.5", "A"),
            ],
        ),
        Semester::new(
            2,
            vec![
                graded("Linear Algebra", "4", "B"),
                graded("Data Structures", "4", "A-"),
                graded("Digital Logic", "3", "C"),
                graded("Communication Skills", "2", "A"),
            ],
        ),
    ]
}
