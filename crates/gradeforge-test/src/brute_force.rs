//! Exhaustive reference search.
//!
//! Enumerates every grade combination, so only use it on small sets
//! (a handful of unknown courses).

use gradeforge_core::{Grade, PlanningSet, Points, SEARCH_GRADES};

/// Points the unknown courses earn under `grades` (caller order).
pub fn assignment_points(set: &PlanningSet, grades: &[Grade]) -> Points {
    grades
        .iter()
        .zip(set.unknown_centi_credits())
        .map(|(&grade, &centi)| Points::weighted(grade, centi))
        .sum()
}

/// Smallest unknown-side total that covers the needed points, over every
/// combination drawn from `alphabet`.
pub fn min_feasible_points_over(set: &PlanningSet, alphabet: &[Grade]) -> Option<Points> {
    let needed = set.needed_points();
    let count = set.unknown().len();
    let mut best: Option<Points> = None;
    let mut digits = vec![0usize; count];

    loop {
        let grades: Vec<Grade> = digits.iter().map(|&d| alphabet[d]).collect();
        let total = assignment_points(set, &grades);
        if total >= needed && best.map_or(true, |b| total < b) {
            best = Some(total);
        }

        // odometer increment
        let mut position = 0;
        loop {
            if position == count {
                return best;
            }
            digits[position] += 1;
            if digits[position] < alphabet.len() {
                break;
            }
            digits[position] = 0;
            position += 1;
        }
    }
}

/// [`min_feasible_points_over`] with the solver's search alphabet.
pub fn min_feasible_points(set: &PlanningSet) -> Option<Points> {
    min_feasible_points_over(set, &SEARCH_GRADES)
}
