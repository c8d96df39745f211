//! Seven-tier ranking of valid combinations.
//!
//! Combinations are ordered by, in turn:
//!
//! 1. distinct preferred faculties covered (more first)
//! 2. sections taught by a preferred faculty (more first)
//! 3. distinct class days (fewer first)
//! 4. earliest start over all `time1` intervals (earlier first)
//! 5. latest end over all `time1` intervals (later first)
//! 6. total credits (more first)
//! 7. first course code, then the full `(course_code, section)` sequence
//!
//! Without preferred faculties the first two tiers are skipped and the
//! ranking runs in [`RankingMode::EfficiencyOnly`].
//!
//! # Module Structure
//!
//! - [`candidate`] - combination with its computed tier values
//! - [`metrics`] - tier value computation
//! - [`ordering`] - the tier comparator

mod candidate;
mod metrics;
mod ordering;

use std::collections::HashSet;

pub use candidate::ScoredCombination;

use crate::pool::SectionPool;
use crate::trace::{GenerationTrace, TraceEvent};

use super::Combination;

/// Which tiers take part in the comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RankingMode {
    /// All seven tiers.
    FacultyFirst,
    /// Tiers 3 to 7; used when no faculty is preferred.
    EfficiencyOnly,
}

/// Combinations sharing the same faculty tiers.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TierBucket {
    pub unique_preferred: usize,
    pub total_preferred: usize,
    pub count: usize,
}

/// Outcome of one ranking pass.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RankingStats {
    pub mode: RankingMode,
    pub ranked: usize,
    /// Faculty-tier buckets, best first. Empty in efficiency mode.
    pub buckets: Vec<TierBucket>,
}

/// Ranks combinations against a list of preferred faculty identities.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TieredRanking {
    preferred: Vec<String>,
}

impl TieredRanking {
    pub fn new<I, S>(preferred: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            preferred: preferred.into_iter().map(Into::into).collect(),
        }
    }

    pub fn preferred(&self) -> &[String] {
        &self.preferred
    }

    pub fn mode(&self) -> RankingMode {
        if self.preferred.is_empty() {
            RankingMode::EfficiencyOnly
        } else {
            RankingMode::FacultyFirst
        }
    }

    /// Scores and sorts `combinations`, best first.
    ///
    /// The sort is stable and the comparator is total, so equal input always
    /// yields the same order.
    pub fn rank<'p>(
        &self,
        pool: &'p SectionPool,
        combinations: Vec<Combination>,
        trace: &mut dyn GenerationTrace,
    ) -> Vec<ScoredCombination<'p>> {
        let preferred: HashSet<&str> = self.preferred.iter().map(String::as_str).collect();
        let mode = self.mode();

        let mut scored: Vec<ScoredCombination<'p>> = combinations
            .into_iter()
            .map(|c| metrics::score(pool, c, &preferred))
            .collect();
        scored.sort_by(|a, b| ordering::compare_scored(a, b, mode));

        trace.record(TraceEvent::Ranked(RankingStats {
            mode,
            ranked: scored.len(),
            buckets: match mode {
                RankingMode::FacultyFirst => buckets(&scored),
                RankingMode::EfficiencyOnly => Vec::new(),
            },
        }));
        scored
    }
}

/// Groups consecutive entries of a faculty-ranked list by their faculty tiers.
fn buckets(scored: &[ScoredCombination<'_>]) -> Vec<TierBucket> {
    let mut out: Vec<TierBucket> = Vec::new();
    for s in scored {
        match out.last_mut() {
            Some(b) if b.unique_preferred == s.unique_preferred && b.total_preferred == s.total_preferred => {
                b.count += 1
            }
            _ => out.push(TierBucket {
                unique_preferred: s.unique_preferred,
                total_preferred: s.total_preferred,
                count: 1,
            }),
        }
    }
    out
}
