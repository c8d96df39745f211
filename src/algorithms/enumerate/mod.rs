//! Conflict-free combination enumeration.
//!
//! A combination picks exactly one candidate from every group of a
//! [`SectionPool`]. [`DepthFirstSearch`] walks the Cartesian product of the
//! groups and keeps the combinations in which:
//!
//! 1. no two picks conflict (looked up in a precomputed [`ConflictGraph`]),
//! 2. the distinct weekday count equals `exact_days`, when set,
//! 3. no weekday carries more than `max_classes_per_day` meetings, when set.
//!
//! # Module Structure
//!
//! - [`engine`] - the iterative descent and per-day load bookkeeping

mod engine;

use crate::catalog::CourseSection;
use crate::conflict::ConflictGraph;
use crate::pool::SectionPool;
use crate::request::DayLimits;
use crate::trace::{GenerationTrace, TraceEvent};

use super::CombinationSearch;

/// One candidate schedule: an arena index into the pool per requested course,
/// in course-key order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Combination {
    picks: Vec<usize>,
}

impl Combination {
    pub(crate) fn new(picks: Vec<usize>) -> Self {
        Self { picks }
    }

    pub fn picks(&self) -> &[usize] {
        &self.picks
    }

    pub fn len(&self) -> usize {
        self.picks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.picks.is_empty()
    }

    /// The chosen sections, in course-key order.
    pub fn sections<'a, 'p: 'a>(&'a self, pool: &'p SectionPool) -> impl Iterator<Item = &'p CourseSection> + 'a {
        self.picks.iter().map(move |&idx| pool.entry(idx).section())
    }
}

/// Counters describing one enumeration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnumerationStats {
    /// Candidates tried at any depth.
    pub nodes_visited: u64,
    /// Branches cut by a pairwise conflict.
    pub conflict_prunes: u64,
    /// Branches cut because the distinct-day count went past the limit.
    pub day_count_prunes: u64,
    /// Branches cut because one day had too many meetings.
    pub daily_load_prunes: u64,
    /// Complete combinations spanning fewer days than required.
    pub day_count_rejections: u64,
    pub accepted: usize,
    /// Conflicting candidate pairs in the pool.
    pub conflict_edges: usize,
    /// The search stopped at the combination limit; more may exist.
    pub truncated: bool,
}

/// Accepted combinations in discovery order, with statistics.
#[derive(Debug, Clone, Default)]
pub struct Enumeration {
    pub combinations: Vec<Combination>,
    pub stats: EnumerationStats,
}

impl Enumeration {
    pub fn len(&self) -> usize {
        self.combinations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.combinations.is_empty()
    }
}

/// Depth-first enumeration with early pruning.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DepthFirstSearch {
    max_combinations: Option<usize>,
}

impl DepthFirstSearch {
    /// Creates a search returning every valid combination.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a search that stops after `limit` valid combinations.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            max_combinations: Some(limit),
        }
    }

    pub fn max_combinations(&self) -> Option<usize> {
        self.max_combinations
    }
}

impl CombinationSearch for DepthFirstSearch {
    fn search(&self, pool: &SectionPool, limits: &DayLimits, trace: &mut dyn GenerationTrace) -> Enumeration {
        let graph = ConflictGraph::from_pool(pool);
        let (combinations, stats) = engine::depth_first(pool, &graph, limits, self.max_combinations);
        trace.record(TraceEvent::Enumerated(stats.clone()));
        Enumeration { combinations, stats }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, CourseKey};
    use crate::pool::{build_pool, PoolOutcome};
    use crate::request::TimeConstraints;
    use crate::time::DaySet;
    use crate::trace::{NoopTrace, RecordingTrace};

    fn pool_of(sections: Vec<CourseSection>, codes: &[&str]) -> SectionPool {
        let catalog = Catalog::new(sections);
        let keys: Vec<CourseKey> = codes.iter().map(|c| CourseKey::code(*c)).collect();
        match build_pool(&catalog, "P", &keys, &TimeConstraints::any()) {
            PoolOutcome::Ready(pool) => pool,
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    fn sec(code: &str, section: &str, day: &str, time: &str) -> CourseSection {
        CourseSection::new("P", code, code, section).with_meeting(day, time)
    }

    fn two_day(code: &str, section: &str, d1: &str, d2: &str, time: &str) -> CourseSection {
        CourseSection::new("P", code, code, section)
            .with_meeting(d1, time)
            .with_meeting(d2, time)
    }

    fn labels(pool: &SectionPool, e: &Enumeration) -> Vec<String> {
        e.combinations
            .iter()
            .map(|c| c.sections(pool).map(|s| s.section.as_str()).collect::<Vec<_>>().join(""))
            .collect()
    }

    fn scenario_a() -> SectionPool {
        pool_of(
            vec![
                sec("CSE101", "X", "Mon", "9:00AM-10:30AM"),
                sec("CSE101", "Y", "Tue", "9:00AM-10:30AM"),
                sec("CSE102", "Z", "Mon", "9:00AM-10:30AM"),
            ],
            &["CSE101", "CSE102"],
        )
    }

    #[test]
    fn keeps_only_conflict_free_combinations() {
        let pool = scenario_a();
        let e = DepthFirstSearch::new().search(&pool, &DayLimits::none(), &mut NoopTrace);
        assert_eq!(labels(&pool, &e), vec!["YZ"]);
        assert_eq!(e.stats.conflict_prunes, 1);
        assert_eq!(e.stats.conflict_edges, 1);
        assert_eq!(e.stats.accepted, 1);
        assert!(!e.stats.truncated);
    }

    #[test]
    fn chosen_sections_outlive_the_combination() {
        let pool = scenario_a();
        let chosen: Vec<&CourseSection> = {
            let combination = Combination::new(vec![1, 2]);
            combination.sections(&pool).collect()
        };
        let codes: Vec<&str> = chosen.iter().map(|s| s.course_code.as_str()).collect();
        assert_eq!(codes, vec!["CSE101", "CSE102"]);
    }

    #[test]
    fn full_product_without_conflicts_in_pool_order() {
        let pool = pool_of(
            vec![
                sec("A", "1", "Sun", "8:00 AM - 9:00 AM"),
                sec("A", "2", "Mon", "8:00 AM - 9:00 AM"),
                sec("B", "1", "Tue", "8:00 AM - 9:00 AM"),
                sec("B", "2", "Wed", "8:00 AM - 9:00 AM"),
                sec("B", "3", "Thu", "8:00 AM - 9:00 AM"),
            ],
            &["A", "B"],
        );
        let e = enumerate_all(&pool);
        assert_eq!(labels(&pool, &e), vec!["11", "12", "13", "21", "22", "23"]);
        // Two first-level nodes plus three second-level nodes under each.
        assert_eq!(e.stats.nodes_visited, 8);
        assert!(e.combinations.iter().all(|c| c.len() == 2));
    }

    fn enumerate_all(pool: &SectionPool) -> Enumeration {
        DepthFirstSearch::new().search(pool, &DayLimits::none(), &mut NoopTrace)
    }

    #[test]
    fn exact_day_count_is_enforced() {
        let pool = pool_of(
            vec![
                two_day("A", "1", "Sun", "Tue", "8:00 AM - 9:00 AM"),
                two_day("A", "2", "Mon", "Wed", "8:00 AM - 9:00 AM"),
                sec("B", "1", "Sun", "10:00 AM - 11:00 AM"),
                sec("B", "2", "Thu", "10:00 AM - 11:00 AM"),
            ],
            &["A", "B"],
        );
        let limits = DayLimits {
            exact_days: Some(3),
            max_classes_per_day: None,
        };
        let e = DepthFirstSearch::new().search(&pool, &limits, &mut NoopTrace);
        assert_eq!(labels(&pool, &e), vec!["12", "21", "22"]);
        assert_eq!(e.stats.day_count_rejections, 1);

        for combo in &e.combinations {
            let days: DaySet = combo
                .sections(&pool)
                .map(CourseSection::days)
                .fold(DaySet::EMPTY, DaySet::union);
            assert_eq!(days.len(), 3);
        }
    }

    #[test]
    fn partial_combinations_exceeding_day_count_are_pruned() {
        let pool = pool_of(
            vec![
                two_day("A", "1", "Sun", "Tue", "8:00 AM - 9:00 AM"),
                sec("B", "1", "Mon", "10:00 AM - 11:00 AM"),
                sec("C", "1", "Sun", "1:00 PM - 2:00 PM"),
            ],
            &["A", "B", "C"],
        );
        let limits = DayLimits {
            exact_days: Some(2),
            max_classes_per_day: None,
        };
        let e = DepthFirstSearch::new().search(&pool, &limits, &mut NoopTrace);
        assert!(e.is_empty());
        assert_eq!(e.stats.day_count_prunes, 1);
        // C is never tried because A+B already span three days.
        assert_eq!(e.stats.nodes_visited, 2);
    }

    #[test]
    fn classes_per_day_counts_each_meeting_day() {
        let pool = pool_of(
            vec![
                two_day("A", "1", "Sun", "Tue", "8:00 AM - 9:00 AM"),
                sec("B", "1", "Sun", "10:00 AM - 11:00 AM"),
                sec("B", "2", "Mon", "10:00 AM - 11:00 AM"),
            ],
            &["A", "B"],
        );
        let limits = DayLimits {
            exact_days: None,
            max_classes_per_day: Some(1),
        };
        let e = DepthFirstSearch::new().search(&pool, &limits, &mut NoopTrace);
        assert_eq!(labels(&pool, &e), vec!["12"]);
        assert_eq!(e.stats.daily_load_prunes, 1);
    }

    #[test]
    fn limit_stops_the_search_and_marks_truncation() {
        let pool = pool_of(
            vec![
                sec("A", "1", "Sun", "8:00 AM - 9:00 AM"),
                sec("A", "2", "Mon", "8:00 AM - 9:00 AM"),
                sec("B", "1", "Tue", "8:00 AM - 9:00 AM"),
                sec("B", "2", "Wed", "8:00 AM - 9:00 AM"),
            ],
            &["A", "B"],
        );
        let e = DepthFirstSearch::with_limit(3).search(&pool, &DayLimits::none(), &mut NoopTrace);
        assert_eq!(labels(&pool, &e), vec!["11", "12", "21"]);
        assert!(e.stats.truncated);
        assert_eq!(e.stats.accepted, 3);
    }

    #[test]
    fn deep_selections_do_not_need_recursion() {
        let sections: Vec<CourseSection> = (0..40)
            .map(|i| sec(&format!("C{i:02}"), "1", "Sat", "TBA"))
            .collect();
        let codes: Vec<String> = (0..40).map(|i| format!("C{i:02}")).collect();
        let refs: Vec<&str> = codes.iter().map(String::as_str).collect();
        let pool = pool_of(sections, &refs);
        let e = enumerate_all(&pool);
        assert_eq!(e.len(), 1);
        assert_eq!(e.combinations[0].len(), 40);
    }

    #[test]
    fn records_statistics_on_the_trace() {
        let pool = scenario_a();
        let mut trace = RecordingTrace::new();
        let e = DepthFirstSearch::new().search(&pool, &DayLimits::none(), &mut trace);
        assert_eq!(trace.enumeration(), Some(&e.stats));
    }
}
