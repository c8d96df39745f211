//! Named, hand-picked section lists.

use thiserror::Error;

use crate::catalog::CourseSection;
use crate::conflict::conflicting_sections;
use crate::{generate_id, Id};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PlanError {
    #[error("Section {course_code}({section}) is already in plan {plan}")]
    DuplicateSection {
        plan: String,
        course_code: String,
        section: String,
    },

    #[error("Section {course_code}({section}) is not in plan {plan}")]
    SectionNotFound {
        plan: String,
        course_code: String,
        section: String,
    },
}

/// A section of a plan that clashes with a candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlanConflict {
    pub section: CourseSection,
    pub plan_id: Id,
    pub plan_name: String,
}

/// What [`SectionPlan::toggle`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Toggle {
    /// The section was added; it clashes with these sections already in the plan.
    Added(Vec<PlanConflict>),
    /// The section was in the plan and has been removed.
    Removed(CourseSection),
}

/// Sections a student picked by hand.
///
/// Sections are unique by `(course_code, section)`. Conflicts are reported on
/// insertion but never refused.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SectionPlan {
    id: Id,
    name: String,
    sections: Vec<CourseSection>,
}

impl SectionPlan {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: generate_id(),
            name: name.into(),
            sections: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn sections(&self) -> &[CourseSection] {
        &self.sections
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn contains(&self, section: &CourseSection) -> bool {
        self.sections.iter().any(|s| s.same_section(section))
    }

    pub fn total_credits(&self) -> u32 {
        self.sections.iter().map(CourseSection::credits).sum()
    }

    /// Sections of this plan that would clash with `candidate`.
    pub fn conflicts_with(&self, candidate: &CourseSection) -> Vec<PlanConflict> {
        conflicting_sections(candidate, &self.sections)
            .into_iter()
            .map(|s| PlanConflict {
                section: s.clone(),
                plan_id: self.id.clone(),
                plan_name: self.name.clone(),
            })
            .collect()
    }

    /// Adds `section` and returns the clashes it introduces.
    pub fn add(&mut self, section: CourseSection) -> Result<Vec<PlanConflict>, PlanError> {
        if self.contains(&section) {
            return Err(PlanError::DuplicateSection {
                plan: self.name.clone(),
                course_code: section.course_code,
                section: section.section,
            });
        }
        let clashes = self.conflicts_with(&section);
        if !clashes.is_empty() {
            log::debug!("{} clashes with {} section(s) of plan {}", section, clashes.len(), self.name);
        }
        self.sections.push(section);
        Ok(clashes)
    }

    pub fn remove(&mut self, section: &CourseSection) -> Result<CourseSection, PlanError> {
        match self.sections.iter().position(|s| s.same_section(section)) {
            Some(idx) => Ok(self.sections.remove(idx)),
            None => Err(PlanError::SectionNotFound {
                plan: self.name.clone(),
                course_code: section.course_code.clone(),
                section: section.section.clone(),
            }),
        }
    }

    /// Removes `section` if present, adds it otherwise.
    pub fn toggle(&mut self, section: CourseSection) -> Toggle {
        match self.sections.iter().position(|s| s.same_section(&section)) {
            Some(idx) => Toggle::Removed(self.sections.remove(idx)),
            None => {
                let clashes = self.conflicts_with(&section);
                self.sections.push(section);
                Toggle::Added(clashes)
            }
        }
    }

    pub fn clear(&mut self) {
        self.sections.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sec(code: &str, section: &str, day: &str, time: &str) -> CourseSection {
        CourseSection::new("BSCSE", code, code, section)
            .with_meeting(day, time)
            .with_credit("3")
    }

    #[test]
    fn plans_get_unique_ids() {
        let a = SectionPlan::new("Plan A");
        let b = SectionPlan::new("Plan A");
        assert_ne!(a.id(), b.id());
        assert!(a.is_empty());
    }

    #[test]
    fn add_reports_conflicts_without_refusing() {
        let mut plan = SectionPlan::new("Main");
        assert!(plan.add(sec("CSE101", "1", "Mon", "9:00 AM - 10:30 AM")).unwrap().is_empty());

        let clashes = plan.add(sec("MAT101", "2", "Mon", "10:00 AM - 11:00 AM")).unwrap();
        assert_eq!(clashes.len(), 1);
        assert_eq!(clashes[0].section.course_code, "CSE101");
        assert_eq!(clashes[0].plan_name, "Main");
        assert_eq!(clashes[0].plan_id, plan.id());
        assert_eq!(plan.len(), 2);
        assert_eq!(plan.total_credits(), 6);
    }

    #[test]
    fn duplicate_identity_is_an_error() {
        let mut plan = SectionPlan::new("Main");
        plan.add(sec("CSE101", "1", "Mon", "9:00 AM - 10:30 AM")).unwrap();
        let err = plan.add(sec("CSE101", "1", "Tue", "1:00 PM - 2:00 PM")).unwrap_err();
        assert_eq!(
            err,
            PlanError::DuplicateSection {
                plan: "Main".to_string(),
                course_code: "CSE101".to_string(),
                section: "1".to_string(),
            }
        );
        assert_eq!(err.to_string(), "Section CSE101(1) is already in plan Main");
    }

    #[test]
    fn toggle_adds_then_removes() {
        let mut plan = SectionPlan::new("Main");
        let s = sec("CSE101", "1", "Mon", "9:00 AM - 10:30 AM");
        assert_eq!(plan.toggle(s.clone()), Toggle::Added(Vec::new()));
        assert!(plan.contains(&s));
        assert_eq!(plan.toggle(s.clone()), Toggle::Removed(s.clone()));
        assert!(!plan.contains(&s));
    }

    #[test]
    fn remove_unknown_section_fails() {
        let mut plan = SectionPlan::new("Main");
        let s = sec("CSE101", "1", "Mon", "9:00 AM - 10:30 AM");
        assert!(matches!(plan.remove(&s), Err(PlanError::SectionNotFound { .. })));
        plan.add(s.clone()).unwrap();
        assert_eq!(plan.remove(&s), Ok(s));
        plan.rename("Backup");
        assert_eq!(plan.name(), "Backup");
    }

    #[test]
    fn same_section_is_not_a_conflict_with_itself() {
        let mut plan = SectionPlan::new("Main");
        let s = sec("CSE101", "1", "Mon", "9:00 AM - 10:30 AM");
        plan.add(s.clone()).unwrap();
        assert!(plan.conflicts_with(&s).is_empty());
        plan.clear();
        assert!(plan.is_empty());
    }
}
