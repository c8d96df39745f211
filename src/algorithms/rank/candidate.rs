//! A combination together with the values its ranking tiers compare.

use crate::catalog::CourseSection;
use crate::time::{DaySet, Minutes};

use crate::algorithms::Combination;

/// A valid combination with computed ranking metrics.
///
/// `earliest_start` is `+inf` and `latest_end` is `-inf` when no chosen
/// section has a parseable `time1`, so such combinations sort last on the time
/// tiers.
#[derive(Debug, Clone)]
pub struct ScoredCombination<'p> {
    pub(crate) combination: Combination,
    pub(crate) sections: Vec<&'p CourseSection>,
    pub(crate) unique_preferred: usize,
    pub(crate) total_preferred: usize,
    pub(crate) days: DaySet,
    pub(crate) earliest_start: Minutes,
    pub(crate) latest_end: Minutes,
    pub(crate) total_credits: u32,
}

impl<'p> ScoredCombination<'p> {
    pub fn combination(&self) -> &Combination {
        &self.combination
    }

    /// Chosen sections, in course-key order.
    pub fn sections(&self) -> &[&'p CourseSection] {
        &self.sections
    }

    /// Distinct preferred faculties teaching at least one chosen section.
    pub fn unique_preferred(&self) -> usize {
        self.unique_preferred
    }

    /// Chosen sections taught by a preferred faculty.
    pub fn total_preferred(&self) -> usize {
        self.total_preferred
    }

    pub fn days(&self) -> DaySet {
        self.days
    }

    pub fn days_used(&self) -> usize {
        self.days.len()
    }

    pub fn earliest_start(&self) -> Minutes {
        self.earliest_start
    }

    pub fn latest_end(&self) -> Minutes {
        self.latest_end
    }

    pub fn total_credits(&self) -> u32 {
        self.total_credits
    }
}
