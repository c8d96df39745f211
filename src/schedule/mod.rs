//! Ranked output records and their per-day views.
//!
//! # Module Structure
//!
//! - [`pages`] - batch-wise hand-out of ranked schedules

use crate::algorithms::ScoredCombination;
use crate::catalog::CourseSection;
use crate::time::{DaySet, TimeInterval, Weekday};
use crate::Id;
use std::collections::{BTreeMap, HashSet};

pub mod pages;

pub use pages::Paginator;

#[cfg(test)]
mod tests;

/// One ranked, conflict-free selection of sections.
///
/// A `Schedule` holds exactly one section per requested course, in the order
/// the courses were requested, plus the derived views the presentation layer
/// needs: which preferred faculties it honours, which days it uses and what
/// each of those days looks like.
///
/// # Internal Structure
/// - `courses`: chosen sections, course-key order
/// - `daily_schedule`: `BTreeMap` from weekday to the sections meeting that
///   day, ordered by start time (sections without a parseable time last)
///
/// # Examples
///
/// ```
/// use classplan::catalog::{Catalog, CourseSection};
/// use classplan::planner::Planner;
/// use classplan::request::SelectionRequest;
/// use classplan::time::Weekday;
///
/// let catalog = Catalog::new(vec![
///     CourseSection::new("BSCSE", "CSE101", "Intro", "1")
///         .with_faculty("Dr. A", "A")
///         .with_meeting("Sun", "9:00 AM - 10:30 AM")
///         .with_meeting("Tue", "9:00 AM - 10:30 AM")
///         .with_credit("3"),
///     CourseSection::new("BSCSE", "MAT101", "Calculus", "1")
///         .with_faculty("Dr. B", "B")
///         .with_meeting("Sun", "11:00 AM - 12:30 PM")
///         .with_credit("3"),
/// ]);
/// let request = SelectionRequest::new("BSCSE")
///     .with_courses(["CSE101", "MAT101"])
///     .prefer_faculty("Dr. C (C)");
///
/// let schedules = Planner::default().generate(&catalog, &request).unwrap();
/// let best = &schedules[0];
///
/// assert_eq!(best.id(), "schedule-1");
/// assert_eq!(best.days_used(), 2);
/// assert_eq!(best.total_credits(), 6);
/// assert_eq!(best.sections_on(Weekday::Sun).len(), 2);
/// assert_eq!(best.missing_preferred_faculties(), ["Dr. C (C)".to_string()]);
/// assert!(!best.meets_all_preferences());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Schedule {
    id: Id,
    rank: usize,
    courses: Vec<CourseSection>,
    matched_preferred_faculties: Vec<String>,
    missing_preferred_faculties: Vec<String>,
    days: Vec<Weekday>,
    total_credits: u32,
    daily_schedule: BTreeMap<Weekday, Vec<CourseSection>>,
}

impl Schedule {
    /// Builds the output record for the combination ranked at `rank` (1-based).
    pub fn from_scored(rank: usize, scored: &ScoredCombination<'_>, preferred_faculties: &[String]) -> Self {
        let courses: Vec<CourseSection> = scored.sections().iter().map(|s| (*s).clone()).collect();
        Self::from_courses(rank, courses, preferred_faculties)
    }

    /// Builds a schedule from already chosen sections.
    pub fn from_courses(rank: usize, courses: Vec<CourseSection>, preferred_faculties: &[String]) -> Self {
        let taught: HashSet<String> = courses.iter().map(CourseSection::faculty).collect();
        let (matched, missing): (Vec<String>, Vec<String>) = dedup(preferred_faculties)
            .into_iter()
            .partition(|f| taught.contains(f));

        let days: Vec<Weekday> = courses
            .iter()
            .map(CourseSection::days)
            .fold(DaySet::EMPTY, DaySet::union)
            .iter()
            .collect();

        Self {
            id: format!("schedule-{rank}"),
            rank,
            total_credits: courses.iter().map(CourseSection::credits).sum(),
            daily_schedule: daily_schedule(&courses),
            matched_preferred_faculties: matched,
            missing_preferred_faculties: missing,
            days,
            courses,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Position in the ranked output, starting at 1.
    pub fn rank(&self) -> usize {
        self.rank
    }

    pub fn courses(&self) -> &[CourseSection] {
        &self.courses
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    pub fn matched_preferred_faculties(&self) -> &[String] {
        &self.matched_preferred_faculties
    }

    /// Preferred faculties teaching none of the chosen sections.
    pub fn missing_preferred_faculties(&self) -> &[String] {
        &self.missing_preferred_faculties
    }

    pub fn meets_all_preferences(&self) -> bool {
        self.missing_preferred_faculties.is_empty()
    }

    /// Weekdays with at least one class, `Sun` first.
    pub fn days(&self) -> &[Weekday] {
        &self.days
    }

    pub fn days_used(&self) -> usize {
        self.days.len()
    }

    pub fn total_credits(&self) -> u32 {
        self.total_credits
    }

    pub fn daily_schedule(&self) -> &BTreeMap<Weekday, Vec<CourseSection>> {
        &self.daily_schedule
    }

    /// Sections meeting on `day`, earliest first.
    pub fn sections_on(&self, day: Weekday) -> &[CourseSection] {
        self.daily_schedule.get(&day).map(Vec::as_slice).unwrap_or(&[])
    }
}

fn dedup(items: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    items.iter().filter(|i| seen.insert(i.as_str())).cloned().collect()
}

/// Time block a section uses on `day`: `time2` if `day` is its second
/// meeting day and `time2` parses, otherwise `time1`.
fn meeting_on(section: &CourseSection, day: Weekday) -> Option<TimeInterval> {
    let second_day = section.day2.parse::<Weekday>().ok() == Some(day)
        && section.day1.parse::<Weekday>().ok() != Some(day);
    if second_day {
        if let Ok(iv) = TimeInterval::parse(&section.time2) {
            return Some(iv);
        }
    }
    section.primary_time()
}

fn daily_schedule(courses: &[CourseSection]) -> BTreeMap<Weekday, Vec<CourseSection>> {
    let mut by_day: BTreeMap<Weekday, Vec<(f64, CourseSection)>> = BTreeMap::new();
    for section in courses {
        for day in section.days().iter() {
            let start = meeting_on(section, day).map_or(f64::INFINITY, |iv| iv.start().value());
            by_day.entry(day).or_default().push((start, section.clone()));
        }
    }
    by_day
        .into_iter()
        .map(|(day, mut entries)| {
            entries.sort_by(|a, b| a.0.total_cmp(&b.0));
            (day, entries.into_iter().map(|(_, s)| s).collect())
        })
        .collect()
}
