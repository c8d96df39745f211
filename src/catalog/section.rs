//! Course-section records and course keys.

use std::fmt;
use std::str::FromStr;

use crate::time::{DaySet, TimeInterval, Weekday};

/// Faculty sentinel meaning "not yet assigned".
pub const TBA: &str = "TBA";

/// One offered instance of a course, as produced by the document parser.
///
/// All fields are raw strings; optional ones (`day2`, `time2`, `room2`) are
/// empty when absent. `(course_code, section)` identifies a section within a
/// program.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct CourseSection {
    pub program: String,
    pub course_code: String,
    pub title: String,
    pub section: String,
    pub faculty_name: String,
    pub faculty_initial: String,
    pub day1: String,
    pub day2: String,
    pub time1: String,
    pub time2: String,
    pub room1: String,
    pub room2: String,
    pub credit: String,
}

impl CourseSection {
    /// Creates a section with no meetings, faculty `TBA` and zero credit.
    pub fn new(
        program: impl Into<String>,
        course_code: impl Into<String>,
        title: impl Into<String>,
        section: impl Into<String>,
    ) -> Self {
        Self {
            program: program.into(),
            course_code: course_code.into(),
            title: title.into(),
            section: section.into(),
            faculty_name: TBA.to_string(),
            faculty_initial: TBA.to_string(),
            credit: "0".to_string(),
            ..Self::default()
        }
    }

    pub fn with_faculty(mut self, name: impl Into<String>, initial: impl Into<String>) -> Self {
        self.faculty_name = name.into();
        self.faculty_initial = initial.into();
        self
    }

    /// Fills the first free `(day, time)` slot; a third meeting is ignored.
    pub fn with_meeting(mut self, day: impl Into<String>, time: impl Into<String>) -> Self {
        if self.day1.is_empty() && self.time1.is_empty() {
            self.day1 = day.into();
            self.time1 = time.into();
        } else if self.day2.is_empty() && self.time2.is_empty() {
            self.day2 = day.into();
            self.time2 = time.into();
        }
        self
    }

    pub fn with_rooms(mut self, room1: impl Into<String>, room2: impl Into<String>) -> Self {
        self.room1 = room1.into();
        self.room2 = room2.into();
        self
    }

    pub fn with_credit(mut self, credit: impl Into<String>) -> Self {
        self.credit = credit.into();
        self
    }

    /// `(course_code, section)`.
    pub fn identity(&self) -> (&str, &str) {
        (&self.course_code, &self.section)
    }

    /// True if both records denote the same section.
    pub fn same_section(&self, other: &CourseSection) -> bool {
        self.identity() == other.identity()
    }

    /// `"Name (Initial)"`, the form used for faculty preferences.
    pub fn faculty(&self) -> String {
        format!("{} ({})", self.faculty_name, self.faculty_initial)
    }

    pub fn is_faculty_tba(&self) -> bool {
        self.faculty_name.trim().eq_ignore_ascii_case(TBA)
    }

    /// `"CODE - Title"`.
    pub fn course_label(&self) -> String {
        format!("{} - {}", self.course_code, self.title)
    }

    /// Non-empty day tokens that name a weekday. `day2` counts even when `day1` is empty.
    pub fn days(&self) -> DaySet {
        [&self.day1, &self.day2]
            .into_iter()
            .filter(|d| !d.trim().is_empty())
            .filter_map(|d| d.parse::<Weekday>().ok())
            .collect()
    }

    /// Intervals of `time1`/`time2` that parse; malformed or empty strings are skipped.
    pub fn times(&self) -> Vec<TimeInterval> {
        [&self.time1, &self.time2]
            .into_iter()
            .filter(|t| !t.trim().is_empty())
            .filter_map(|t| TimeInterval::parse(t).ok())
            .collect()
    }

    /// Parsed `time1`, the interval used for time limits and ranking.
    pub fn primary_time(&self) -> Option<TimeInterval> {
        TimeInterval::parse(&self.time1).ok()
    }

    /// Leading digits of `credit`, or 0.
    pub fn credits(&self) -> u32 {
        let trimmed = self.credit.trim();
        let digits: &str = trimmed
            .find(|c: char| !c.is_ascii_digit())
            .map_or(trimmed, |end| &trimmed[..end]);
        digits.parse().unwrap_or(0)
    }
}

impl fmt::Display for CourseSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.course_code, self.section)
    }
}

/// A course the student wants: a code, optionally narrowed by title.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CourseKey {
    code: String,
    title: Option<String>,
}

impl CourseKey {
    pub fn code(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            title: None,
        }
    }

    pub fn with_title(code: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            title: Some(title.into()),
        }
    }

    pub fn course_code(&self) -> &str {
        &self.code
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn matches(&self, section: &CourseSection) -> bool {
        section.course_code == self.code
            && self.title.as_deref().map_or(true, |t| section.title == t)
    }
}

impl FromStr for CourseKey {
    type Err = std::convert::Infallible;

    /// `"CSE101"` or `"CSE101 - Structured Programming"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.split_once(" - ") {
            Some((code, title)) => CourseKey::with_title(code.trim(), title.trim()),
            None => CourseKey::code(s.trim()),
        })
    }
}

impl From<&str> for CourseKey {
    fn from(s: &str) -> Self {
        match s.parse() {
            Ok(key) => key,
            Err(never) => match never {},
        }
    }
}

impl fmt::Display for CourseKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.title {
            Some(title) => write!(f, "{} - {}", self.code, title),
            None => f.write_str(&self.code),
        }
    }
}
