//! Metric computation for ranking tiers.

use std::collections::HashSet;

use qtty::Quantity;

use crate::algorithms::Combination;
use crate::pool::SectionPool;
use crate::time::{DaySet, Minutes};

use super::candidate::ScoredCombination;

/// Preferred-faculty coverage of a combination: `(unique, total)`.
pub fn preferred_coverage<'a, I>(faculties: I, preferred: &HashSet<&str>) -> (usize, usize)
where
    I: IntoIterator<Item = &'a str>,
{
    let mut matched = HashSet::new();
    let mut total = 0;
    for faculty in faculties {
        if preferred.contains(faculty) {
            total += 1;
            matched.insert(faculty);
        }
    }
    (matched.len(), total)
}

/// Earliest start and latest end over the parsed `time1` of every pick.
pub fn time_span(pool: &SectionPool, combination: &Combination) -> (Minutes, Minutes) {
    combination.picks().iter().fold(
        (Quantity::new(f64::INFINITY), Quantity::new(f64::NEG_INFINITY)),
        |(earliest, latest), &idx| match pool.entry(idx).profile().primary() {
            Some(iv) => (
                Quantity::new(earliest.value().min(iv.start().value())),
                Quantity::new(latest.value().max(iv.end().value())),
            ),
            None => (earliest, latest),
        },
    )
}

/// Computes every tier metric of `combination`.
pub fn score<'p>(
    pool: &'p SectionPool,
    combination: Combination,
    preferred: &HashSet<&str>,
) -> ScoredCombination<'p> {
    let sections: Vec<_> = combination.sections(pool).collect();
    let identities: Vec<String> = sections.iter().map(|s| s.faculty()).collect();
    let (unique_preferred, total_preferred) =
        preferred_coverage(identities.iter().map(String::as_str), preferred);
    let days = combination
        .picks()
        .iter()
        .map(|&idx| pool.entry(idx).profile().days())
        .fold(DaySet::EMPTY, DaySet::union);
    let (earliest_start, latest_end) = time_span(pool, &combination);
    let total_credits = sections.iter().map(|s| s.credits()).sum();

    ScoredCombination {
        combination,
        sections,
        unique_preferred,
        total_preferred,
        days,
        earliest_start,
        latest_end,
        total_credits,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coverage_counts_unique_and_repeated_matches() {
        let preferred: HashSet<&str> = ["Dr. A (A)", "Dr. B (B)"].into_iter().collect();
        let faculties = ["Dr. A (A)", "Dr. A (A)", "Dr. C (C)"];
        assert_eq!(preferred_coverage(faculties, &preferred), (1, 2));
        assert_eq!(preferred_coverage(["Dr. B (B)", "Dr. A (A)"], &preferred), (2, 2));
        assert_eq!(preferred_coverage(faculties, &HashSet::new()), (0, 0));
    }
}
