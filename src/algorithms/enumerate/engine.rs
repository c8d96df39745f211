//! Iterative depth-first descent over the per-course candidate groups.

use crate::conflict::ConflictGraph;
use crate::pool::SectionPool;
use crate::request::DayLimits;
use crate::time::DaySet;

use super::{Combination, EnumerationStats};

/// Class meetings per weekday of a partial combination.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct DailyLoad([u16; 7]);

impl DailyLoad {
    pub fn add(&mut self, days: DaySet) {
        for day in days.iter() {
            self.0[day.index()] += 1;
        }
    }

    pub fn remove(&mut self, days: DaySet) {
        for day in days.iter() {
            self.0[day.index()] -= 1;
        }
    }

    /// Distinct weekdays with at least one meeting.
    pub fn days_used(&self) -> usize {
        self.0.iter().filter(|&&n| n > 0).count()
    }

    /// Meetings on the busiest weekday.
    pub fn busiest(&self) -> usize {
        self.0.iter().copied().max().map_or(0, usize::from)
    }
}

/// Outcome of testing one candidate against the current partial combination.
enum Step {
    Conflict,
    TooManyDays,
    TooManyClasses,
    WrongDayCount,
    Descend,
    Accept,
}

/// Walks the Cartesian product of `pool` depth first and collects every
/// conflict-free combination satisfying `limits`.
///
/// The descent keeps one cursor per depth on an explicit stack, so stack use
/// does not grow with the number of courses. A branch is cut as soon as the
/// newest pick conflicts with an earlier one, or pushes the distinct-day count
/// or any day's load past its limit. The exact day count can only be judged on
/// complete combinations. Candidates are tried in pool order, which makes the
/// output order deterministic.
pub(crate) fn depth_first(
    pool: &SectionPool,
    graph: &ConflictGraph,
    limits: &DayLimits,
    max_combinations: Option<usize>,
) -> (Vec<Combination>, EnumerationStats) {
    let mut stats = EnumerationStats {
        conflict_edges: graph.edge_count(),
        ..EnumerationStats::default()
    };
    let mut accepted = Vec::new();

    let depth_limit = pool.group_count();
    if depth_limit == 0 {
        return (accepted, stats);
    }

    let mut cursors = vec![pool.group(0).start];
    let mut picks: Vec<usize> = Vec::with_capacity(depth_limit);
    let mut load = DailyLoad::default();

    loop {
        let depth = picks.len();
        let candidate = cursors[depth];

        if candidate >= pool.group(depth).end {
            cursors.pop();
            match picks.pop() {
                Some(idx) => load.remove(pool.entry(idx).profile().days()),
                None => break,
            }
            continue;
        }
        cursors[depth] += 1;
        stats.nodes_visited += 1;

        let days = pool.entry(candidate).profile().days();
        let step = if picks.iter().any(|&p| graph.conflicts(p, candidate)) {
            Step::Conflict
        } else {
            load.add(days);
            let step = if limits.exact_days.is_some_and(|n| load.days_used() > n) {
                Step::TooManyDays
            } else if limits.max_classes_per_day.is_some_and(|n| load.busiest() > n) {
                Step::TooManyClasses
            } else if depth + 1 < depth_limit {
                Step::Descend
            } else if limits.exact_days.is_some_and(|n| load.days_used() != n) {
                Step::WrongDayCount
            } else {
                Step::Accept
            };
            if !matches!(step, Step::Descend) {
                load.remove(days);
            }
            step
        };

        match step {
            Step::Conflict => stats.conflict_prunes += 1,
            Step::TooManyDays => stats.day_count_prunes += 1,
            Step::TooManyClasses => stats.daily_load_prunes += 1,
            Step::WrongDayCount => stats.day_count_rejections += 1,
            Step::Descend => {
                picks.push(candidate);
                cursors.push(pool.group(depth + 1).start);
            }
            Step::Accept => {
                let mut chosen = picks.clone();
                chosen.push(candidate);
                accepted.push(Combination::new(chosen));
                if max_combinations.is_some_and(|limit| accepted.len() >= limit) {
                    stats.truncated = true;
                    break;
                }
            }
        }
    }

    stats.accepted = accepted.len();
    (accepted, stats)
}
