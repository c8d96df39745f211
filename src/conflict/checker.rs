//! Pairwise section conflict detection.

use crate::catalog::CourseSection;
use crate::time::{DaySet, TimeInterval};

/// Pre-parsed meeting pattern of a section.
///
/// Days and times are independent sets: a two-day section usually shares one
/// time block across both days, so any shared day combined with any overlapping
/// pair of times is a clash. Times that fail to parse are absent from the
/// profile and therefore never clash.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionProfile {
    days: DaySet,
    times: Vec<TimeInterval>,
    primary: Option<TimeInterval>,
}

impl SectionProfile {
    pub fn of(section: &CourseSection) -> Self {
        Self {
            days: section.days(),
            times: section.times(),
            primary: section.primary_time(),
        }
    }

    pub fn days(&self) -> DaySet {
        self.days
    }

    pub fn times(&self) -> &[TimeInterval] {
        &self.times
    }

    /// Parsed `time1`.
    pub fn primary(&self) -> Option<TimeInterval> {
        self.primary
    }

    /// True if the two meeting patterns share a day and some pair of times overlaps.
    pub fn clashes_with(&self, other: &SectionProfile) -> bool {
        self.days.intersects(other.days)
            && self
                .times
                .iter()
                .any(|a| other.times.iter().any(|b| a.overlaps(b)))
    }
}

/// True if `a` and `b` cannot both be taken.
///
/// The same `(course_code, section)` never conflicts with itself.
pub fn conflicts(a: &CourseSection, b: &CourseSection) -> bool {
    if a.same_section(b) {
        return false;
    }
    SectionProfile::of(a).clashes_with(&SectionProfile::of(b))
}

/// Sections of `existing` that conflict with `candidate`, in order.
pub fn conflicting_sections<'a, I>(candidate: &CourseSection, existing: I) -> Vec<&'a CourseSection>
where
    I: IntoIterator<Item = &'a CourseSection>,
{
    let profile = SectionProfile::of(candidate);
    existing
        .into_iter()
        .filter(|s| !s.same_section(candidate) && profile.clashes_with(&SectionProfile::of(s)))
        .collect()
}
