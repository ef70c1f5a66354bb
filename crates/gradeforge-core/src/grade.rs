//! Grade alphabet and canonicalization.
//!
//! Every grade token entering the system goes through [`Grade::from_str`]
//! exactly once. Letter grades and their numeric synonyms (`"9"` and `"A-"`
//! are the same grade) both land on one [`Grade`] value, so nothing
//! downstream ever compares raw strings.

use std::fmt;
use std::str::FromStr;

use crate::error::GradeForgeError;

/// A letter grade from the fixed alphabet.
///
/// Variants are declared from highest to lowest point value.
///
/// # Examples
///
/// ```
/// use gradeforge_core::Grade;
///
/// let grade: Grade = "a-".parse().unwrap();
/// assert_eq!(grade, Grade::AMinus);
/// assert_eq!(grade.points(), 9);
///
/// // Numeric synonyms canonicalize to letters.
/// assert_eq!("9".parse::<Grade>().unwrap(), Grade::AMinus);
/// assert_eq!("10".parse::<Grade>().unwrap(), Grade::A);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Grade {
    AStar,
    A,
    AMinus,
    B,
    BMinus,
    C,
    CMinus,
    D,
    F,
}

/// Grades the solver may propose for an unknown course, in enumeration order.
///
/// `A*` and `F` are valid on the known side but are never suggested.
pub const SEARCH_GRADES: [Grade; 7] = [
    Grade::A,
    Grade::AMinus,
    Grade::B,
    Grade::BMinus,
    Grade::C,
    Grade::CMinus,
    Grade::D,
];

impl Grade {
    /// All grades, highest first.
    pub const ALL: [Grade; 9] = [
        Grade::AStar,
        Grade::A,
        Grade::AMinus,
        Grade::B,
        Grade::BMinus,
        Grade::C,
        Grade::CMinus,
        Grade::D,
        Grade::F,
    ];

    /// Returns the grade point value (unscaled).
    #[inline]
    pub const fn points(self) -> i64 {
        match self {
            Grade::AStar | Grade::A => 10,
            Grade::AMinus => 9,
            Grade::B => 8,
            Grade::BMinus => 7,
            Grade::C => 6,
            Grade::CMinus => 5,
            Grade::D => 4,
            Grade::F => 0,
        }
    }

    /// Returns the canonical letter token.
    pub const fn letter(self) -> &'static str {
        match self {
            Grade::AStar => "A*",
            Grade::A => "A",
            Grade::AMinus => "A-",
            Grade::B => "B",
            Grade::BMinus => "B-",
            Grade::C => "C",
            Grade::CMinus => "C-",
            Grade::D => "D",
            Grade::F => "F",
        }
    }

    /// Returns the letter grade for a numeric point value, if one exists.
    ///
    /// `10` maps to `A`, not `A*`.
    pub const fn from_points(points: i64) -> Option<Grade> {
        match points {
            10 => Some(Grade::A),
            9 => Some(Grade::AMinus),
            8 => Some(Grade::B),
            7 => Some(Grade::BMinus),
            6 => Some(Grade::C),
            5 => Some(Grade::CMinus),
            4 => Some(Grade::D),
            0 => Some(Grade::F),
            _ => None,
        }
    }
}

impl FromStr for Grade {
    type Err = GradeForgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim().to_ascii_uppercase();
        let grade = match token.as_str() {
            "A*" => Some(Grade::AStar),
            "A" => Some(Grade::A),
            "A-" => Some(Grade::AMinus),
            "B" => Some(Grade::B),
            "B-" => Some(Grade::BMinus),
            "C" => Some(Grade::C),
            "C-" => Some(Grade::CMinus),
            "D" => Some(Grade::D),
            "F" => Some(Grade::F),
            numeric => numeric.parse::<i64>().ok().and_then(Grade::from_points),
        };
        grade.ok_or_else(|| GradeForgeError::UnknownGrade(s.to_string()))
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.letter())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Grade {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.letter())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Grade {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(serde::Deserialize)]
        #[serde(untagged)]
        enum Token {
            Text(String),
            Number(i64),
        }

        match Token::deserialize(deserializer)? {
            Token::Text(text) => text.parse().map_err(serde::de::Error::custom),
            Token::Number(n) => Grade::from_points(n).ok_or_else(|| {
                serde::de::Error::custom(GradeForgeError::UnknownGrade(n.to_string()))
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letters_parse_case_insensitively() {
        assert_eq!("a*".parse::<Grade>().unwrap(), Grade::AStar);
        assert_eq!(" b- ".parse::<Grade>().unwrap(), Grade::BMinus);
        assert_eq!("c".parse::<Grade>().unwrap(), Grade::C);
        assert_eq!("F".parse::<Grade>().unwrap(), Grade::F);
    }

    #[test]
    fn test_numeric_synonyms() {
        let expected = [
            ("10", Grade::A),
            ("9", Grade::AMinus),
            ("8", Grade::B),
            ("7", Grade::BMinus),
            ("6", Grade::C),
            ("5", Grade::CMinus),
            ("4", Grade::D),
            ("0", Grade::F),
        ];
        for (token, grade) in expected {
            let parsed: Grade = token.parse().unwrap();
            assert_eq!(parsed, grade, "token {token}");
            assert_eq!(parsed.points().to_string(), token);
        }
    }

    #[test]
    fn test_rejects_unknown_tokens() {
        for token in ["", "E", "3", "11", "A+", "B--", "-1"] {
            let err = token.parse::<Grade>().unwrap_err();
            assert_eq!(err, GradeForgeError::UnknownGrade(token.to_string()));
        }
    }

    #[test]
    fn test_points_are_shared_between_synonyms() {
        assert_eq!(Grade::AStar.points(), Grade::A.points());
        for grade in Grade::ALL {
            if grade == Grade::AStar {
                continue;
            }
            assert_eq!(Grade::from_points(grade.points()), Some(grade));
        }
    }

    #[test]
    fn test_search_grades_descend_and_skip_fail() {
        assert!(SEARCH_GRADES.windows(2).all(|w| w[0].points() > w[1].points()));
        assert!(!SEARCH_GRADES.contains(&Grade::F));
        assert!(!SEARCH_GRADES.contains(&Grade::AStar));
    }

    #[test]
    fn test_display_round_trips_letter() {
        for grade in Grade::ALL {
            assert_eq!(grade.to_string().parse::<Grade>().unwrap(), grade);
        }
    }
}
