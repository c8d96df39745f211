pub mod enumerate;
pub mod rank;

pub use enumerate::{Combination, DepthFirstSearch, Enumeration, EnumerationStats};
pub use rank::{RankingMode, RankingStats, ScoredCombination, TierBucket, TieredRanking};

use crate::pool::SectionPool;
use crate::request::DayLimits;
use crate::trace::{GenerationTrace, NoopTrace};

/// Strategy producing the valid combinations of a section pool.
pub trait CombinationSearch {
    /// Enumerate the combinations of `pool` that are conflict free and satisfy `limits`.
    ///
    /// # Arguments
    ///
    /// * `pool` - Non-empty candidate groups, one per requested course
    /// * `limits` - Day-count and classes-per-day limits
    /// * `trace` - Receives an [`Enumerated`](crate::trace::TraceEvent::Enumerated) event
    ///
    /// # Returns
    ///
    /// The accepted combinations in discovery order
    fn search(&self, pool: &SectionPool, limits: &DayLimits, trace: &mut dyn GenerationTrace) -> Enumeration;
}

/// Every valid combination of `pool`, using [`DepthFirstSearch`].
pub fn enumerate(pool: &SectionPool, limits: &DayLimits) -> Enumeration {
    DepthFirstSearch::new().search(pool, limits, &mut NoopTrace)
}

/// Ranks `combinations` with [`TieredRanking`], best first.
pub fn rank<'p>(
    pool: &'p SectionPool,
    combinations: Vec<Combination>,
    preferred_faculties: &[String],
) -> Vec<ScoredCombination<'p>> {
    TieredRanking::new(preferred_faculties.iter().cloned()).rank(pool, combinations, &mut NoopTrace)
}
