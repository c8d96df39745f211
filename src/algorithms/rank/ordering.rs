//! Tier-by-tier comparison of scored combinations.

use std::cmp::Ordering;

use super::candidate::ScoredCombination;
use super::RankingMode;

/// Tiers 1 and 2: more distinct preferred faculties first, then more sections
/// taught by preferred faculties.
pub fn compare_faculty(a: &ScoredCombination<'_>, b: &ScoredCombination<'_>) -> Ordering {
    b.unique_preferred
        .cmp(&a.unique_preferred)
        .then_with(|| b.total_preferred.cmp(&a.total_preferred))
}

/// Tiers 3 to 6: fewer days, earlier start, later end, more credits.
pub fn compare_compactness(a: &ScoredCombination<'_>, b: &ScoredCombination<'_>) -> Ordering {
    a.days_used()
        .cmp(&b.days_used())
        .then_with(|| a.earliest_start.value().total_cmp(&b.earliest_start.value()))
        // Later end ranks higher.
        .then_with(|| b.latest_end.value().total_cmp(&a.latest_end.value()))
        .then_with(|| b.total_credits.cmp(&a.total_credits))
}

/// Case-insensitive first, then byte order so distinct strings never tie.
fn caseless(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
        .then_with(|| a.cmp(b))
}

fn first_code<'a>(c: &'a ScoredCombination<'_>) -> Option<&'a str> {
    c.sections.first().map(|s| s.course_code.as_str())
}

/// Tier 7: first course code, then every `(course_code, section)` in order.
pub fn compare_lexical(a: &ScoredCombination<'_>, b: &ScoredCombination<'_>) -> Ordering {
    let codes = match (first_code(a), first_code(b)) {
        (Some(x), Some(y)) => caseless(x, y),
        (x, y) => x.cmp(&y),
    };
    codes.then_with(|| {
        a.sections
            .iter()
            .zip(&b.sections)
            .map(|(x, y)| caseless(&x.course_code, &y.course_code).then_with(|| caseless(&x.section, &y.section)))
            .find(|o| o.is_ne())
            .unwrap_or_else(|| a.sections.len().cmp(&b.sections.len()))
    })
}

/// Main comparison function; `Less` ranks first.
pub fn compare_scored(a: &ScoredCombination<'_>, b: &ScoredCombination<'_>, mode: RankingMode) -> Ordering {
    let faculty = match mode {
        RankingMode::FacultyFirst => compare_faculty(a, b),
        RankingMode::EfficiencyOnly => Ordering::Equal,
    };
    faculty
        .then_with(|| compare_compactness(a, b))
        .then_with(|| compare_lexical(a, b))
}
