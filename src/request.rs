//! Per-run selection input: program, wanted courses, faculty preferences and limits.

use crate::catalog::{CourseKey, CourseSection};
use crate::error::PlannerError;
use crate::time::{parse_clock, Minutes, TimeInterval};

/// Form value meaning "no limit".
pub const ANY: &str = "Any";

fn is_any(value: &str) -> bool {
    let v = value.trim();
    v.is_empty() || v.eq_ignore_ascii_case(ANY)
}

/// Optional limits on when classes happen. Every limit is independent.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TimeConstraints {
    /// No section may start before this.
    pub earliest_start: Option<Minutes>,
    /// No section may end after this.
    pub latest_end: Option<Minutes>,
    /// Exact number of distinct class days a combination must span.
    pub max_days_per_week: Option<usize>,
    /// Upper bound of class meetings on any one day.
    pub max_classes_per_day: Option<usize>,
}

impl TimeConstraints {
    /// No limits.
    pub fn any() -> Self {
        Self::default()
    }

    /// Reads the four form values; `"Any"` (or blank) leaves a limit unset.
    pub fn from_form(
        earliest_start: &str,
        latest_end: &str,
        days_per_week: &str,
        classes_per_day: &str,
    ) -> Result<Self, PlannerError> {
        Ok(Self {
            earliest_start: clock_limit("earliest start", earliest_start)?,
            latest_end: clock_limit("latest end", latest_end)?,
            max_days_per_week: count_limit("days per week", days_per_week)?,
            max_classes_per_day: count_limit("classes per day", classes_per_day)?,
        })
    }

    pub fn with_earliest_start(mut self, minutes: u32) -> Self {
        self.earliest_start = Some(Minutes::new(f64::from(minutes)));
        self
    }

    pub fn with_latest_end(mut self, minutes: u32) -> Self {
        self.latest_end = Some(Minutes::new(f64::from(minutes)));
        self
    }

    pub fn with_days_per_week(mut self, days: usize) -> Self {
        self.max_days_per_week = Some(days);
        self
    }

    pub fn with_classes_per_day(mut self, classes: usize) -> Self {
        self.max_classes_per_day = Some(classes);
        self
    }

    pub fn has_time_window(&self) -> bool {
        self.earliest_start.is_some() || self.latest_end.is_some()
    }

    /// True if `section` may enter a pool under these limits.
    ///
    /// A section with a blank `time1` never enters. With no time window any
    /// other section is admitted. With one, `time1` must parse and lie inside
    /// the window.
    pub fn admits(&self, section: &CourseSection) -> bool {
        if section.time1.trim().is_empty() {
            return false;
        }
        if !self.has_time_window() {
            return true;
        }
        section
            .primary_time()
            .is_some_and(|iv: TimeInterval| iv.within(self.earliest_start, self.latest_end))
    }

    /// The day-based part, applied by the enumerator.
    pub fn day_limits(&self) -> DayLimits {
        DayLimits {
            exact_days: self.max_days_per_week,
            max_classes_per_day: self.max_classes_per_day,
        }
    }
}

fn clock_limit(field: &'static str, value: &str) -> Result<Option<Minutes>, PlannerError> {
    if is_any(value) {
        return Ok(None);
    }
    parse_clock(value)
        .map(Some)
        .map_err(|source| PlannerError::InvalidTimeLimit {
            field,
            value: value.to_string(),
            source,
        })
}

fn count_limit(field: &'static str, value: &str) -> Result<Option<usize>, PlannerError> {
    if is_any(value) {
        return Ok(None);
    }
    value
        .trim()
        .parse()
        .map(Some)
        .map_err(|_| PlannerError::InvalidCount {
            field,
            value: value.to_string(),
        })
}

/// Day-count limits checked on whole combinations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DayLimits {
    /// A combination must span exactly this many distinct weekdays.
    pub exact_days: Option<usize>,
    /// No weekday may carry more meetings than this.
    pub max_classes_per_day: Option<usize>,
}

impl DayLimits {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn is_unbounded(&self) -> bool {
        self.exact_days.is_none() && self.max_classes_per_day.is_none()
    }
}

/// Everything one generation run needs from the caller.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionRequest {
    pub program: String,
    /// One entry per wanted course. A key whose sections an earlier key
    /// already names is skipped when the pool is built.
    pub course_keys: Vec<CourseKey>,
    /// `"Name (Initial)"` identities used only for ranking.
    pub preferred_faculties: Vec<String>,
    pub constraints: TimeConstraints,
}

impl SelectionRequest {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            ..Self::default()
        }
    }

    pub fn with_course(mut self, key: impl Into<CourseKey>) -> Self {
        let key = key.into();
        if !self.course_keys.contains(&key) {
            self.course_keys.push(key);
        }
        self
    }

    pub fn with_courses<I, K>(self, keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<CourseKey>,
    {
        keys.into_iter().fold(self, |req, key| req.with_course(key))
    }

    pub fn prefer_faculty(mut self, faculty: impl Into<String>) -> Self {
        let faculty = faculty.into();
        if !self.preferred_faculties.contains(&faculty) {
            self.preferred_faculties.push(faculty);
        }
        self
    }

    pub fn with_constraints(mut self, constraints: TimeConstraints) -> Self {
        self.constraints = constraints;
        self
    }

    /// Rejects requests that cannot name a catalog slice.
    pub fn validate(&self) -> Result<(), PlannerError> {
        if self.program.trim().is_empty() {
            return Err(PlannerError::EmptyProgram);
        }
        Ok(())
    }
}
