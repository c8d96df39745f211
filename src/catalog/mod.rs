//! Read-only course catalog loaded once per offering document.

mod search;
mod section;

use std::collections::{BTreeSet, HashSet};

pub use section::{CourseKey, CourseSection, TBA};

use crate::time::parse_clock;

/// Distinct course of a program (code plus title).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CourseSummary {
    pub course_code: String,
    pub title: String,
}

impl CourseSummary {
    /// Key selecting every section of this course.
    pub fn key(&self) -> CourseKey {
        CourseKey::with_title(self.course_code.clone(), self.title.clone())
    }
}

/// Every section of every program in one offering document.
///
/// Sections keep the order the parser produced them in. A repeated
/// `(program, course_code, section)` is dropped on construction.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    sections: Vec<CourseSection>,
}

impl Catalog {
    pub fn new(sections: Vec<CourseSection>) -> Self {
        let mut seen: HashSet<(String, String, String)> = HashSet::with_capacity(sections.len());
        let mut kept = Vec::with_capacity(sections.len());
        for section in sections {
            let key = (
                section.program.clone(),
                section.course_code.clone(),
                section.section.clone(),
            );
            if seen.insert(key) {
                kept.push(section);
            } else {
                log::warn!(
                    "Dropping duplicate section {} in program {}",
                    section,
                    section.program
                );
            }
        }
        Self { sections: kept }
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn sections(&self) -> &[CourseSection] {
        &self.sections
    }

    /// Program names, sorted.
    pub fn programs(&self) -> Vec<&str> {
        self.sections
            .iter()
            .map(|s| s.program.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Sections belonging to `program`, in catalog order.
    pub fn program_sections<'a>(
        &'a self,
        program: &'a str,
    ) -> impl Iterator<Item = &'a CourseSection> + 'a {
        self.sections.iter().filter(move |s| s.program == program)
    }

    /// Distinct courses of `program` in first-seen order.
    pub fn courses(&self, program: &str) -> Vec<CourseSummary> {
        let mut seen = HashSet::new();
        self.program_sections(program)
            .filter(|s| seen.insert((s.course_code.as_str(), s.title.as_str())))
            .map(|s| CourseSummary {
                course_code: s.course_code.clone(),
                title: s.title.clone(),
            })
            .collect()
    }

    /// Courses of `program` found by `term`; see [`search::matches`].
    pub fn search_courses(&self, program: &str, term: &str) -> Vec<CourseSummary> {
        self.courses(program)
            .into_iter()
            .filter(|c| search::matches(c, term))
            .collect()
    }

    /// Faculty identities (`"Name (Initial)"`) teaching any of `keys`, first-seen order.
    pub fn faculties_for(&self, program: &str, keys: &[CourseKey]) -> Vec<String> {
        let mut seen = HashSet::new();
        self.program_sections(program)
            .filter(|s| keys.iter().any(|k| k.matches(s)))
            .map(CourseSection::faculty)
            .filter(|f| seen.insert(f.clone()))
            .collect()
    }

    /// Distinct start halves of `time1` offered in `program`, earliest first.
    pub fn start_times(&self, program: &str) -> Vec<String> {
        self.clock_options(program, |time| time.split_once('-').map(|(start, _)| start))
    }

    /// Distinct end halves of `time1` offered in `program`, earliest first.
    pub fn end_times(&self, program: &str) -> Vec<String> {
        self.clock_options(program, |time| time.split_once('-').map(|(_, end)| end))
    }

    fn clock_options<'a, F>(&'a self, program: &'a str, half: F) -> Vec<String>
    where
        F: Fn(&'a str) -> Option<&'a str>,
    {
        let mut options: Vec<String> = self
            .program_sections(program)
            .filter_map(|s| half(&s.time1))
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        // Unparseable options sort after every real clock time.
        options.sort_by(|a, b| {
            let key = |t: &str| parse_clock(t).map_or(f64::INFINITY, |m| m.value());
            key(a).total_cmp(&key(b)).then_with(|| a.cmp(b))
        });
        options
    }

    /// Looks a section up by identity.
    pub fn find_section(&self, program: &str, course_code: &str, section: &str) -> Option<&CourseSection> {
        self.sections
            .iter()
            .find(|s| s.program == program && s.course_code == course_code && s.section == section)
    }
}

impl From<Vec<CourseSection>> for Catalog {
    fn from(sections: Vec<CourseSection>) -> Self {
        Self::new(sections)
    }
}

impl FromIterator<CourseSection> for Catalog {
    fn from_iter<I: IntoIterator<Item = CourseSection>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
