//! Per-course candidate groups ready for Cartesian expansion.

use std::collections::HashSet;
use std::ops::Range;

use crate::catalog::{Catalog, CourseKey, CourseSection};
use crate::conflict::SectionProfile;
use crate::request::TimeConstraints;

/// One candidate section together with its parsed meeting pattern.
#[derive(Debug, Clone)]
pub struct PoolEntry {
    section: CourseSection,
    profile: SectionProfile,
    group: usize,
}

impl PoolEntry {
    pub fn section(&self) -> &CourseSection {
        &self.section
    }

    pub fn profile(&self) -> &SectionProfile {
        &self.profile
    }

    /// Index of the course key this candidate answers.
    pub fn group(&self) -> usize {
        self.group
    }
}

/// Candidates of every requested course, stored in one arena.
///
/// Group `g` holds the candidates for `keys()[g]` at arena indices
/// `group(g)`, in catalog order. Every group is non-empty.
#[derive(Debug, Clone)]
pub struct SectionPool {
    keys: Vec<CourseKey>,
    entries: Vec<PoolEntry>,
    groups: Vec<Range<usize>>,
    stats: Vec<GroupStats>,
}

impl SectionPool {
    pub fn keys(&self) -> &[CourseKey] {
        &self.keys
    }

    pub fn entries(&self) -> &[PoolEntry] {
        &self.entries
    }

    pub fn entry(&self, idx: usize) -> &PoolEntry {
        &self.entries[idx]
    }

    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Arena range of group `g`.
    pub fn group(&self, g: usize) -> Range<usize> {
        self.groups[g].clone()
    }

    pub fn group_sizes(&self) -> Vec<usize> {
        self.groups.iter().map(|r| r.len()).collect()
    }

    /// Size of the unpruned Cartesian product, saturating.
    pub fn product_size(&self) -> u64 {
        self.groups
            .iter()
            .fold(1u64, |acc, r| acc.saturating_mul(r.len() as u64))
    }

    /// Candidate counts gathered while the pool was built.
    pub fn stats(&self) -> PoolStats {
        PoolStats {
            groups: self.stats.clone(),
            candidates: self.entries.len(),
            product: self.product_size(),
        }
    }
}

/// Candidate counts for one requested course.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GroupStats {
    pub key: String,
    /// Sections of the course in the program.
    pub offered: usize,
    /// Sections left after the time window.
    pub eligible: usize,
}

/// Summary of a built pool.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PoolStats {
    pub groups: Vec<GroupStats>,
    /// Candidates across every group.
    pub candidates: usize,
    /// Unpruned Cartesian product size.
    pub product: u64,
}

/// Result of [`build_pool`].
#[derive(Debug, Clone)]
pub enum PoolOutcome {
    /// Every requested course has at least one candidate.
    Ready(SectionPool),
    /// Some courses have no eligible section; no combination can exist.
    Unsatisfiable {
        missing: Vec<CourseKey>,
        stats: Vec<GroupStats>,
    },
    /// The request named no course.
    NothingRequested,
}

impl PoolOutcome {
    pub fn is_ready(&self) -> bool {
        matches!(self, PoolOutcome::Ready(_))
    }
}

/// Groups the sections of `program` per requested course and applies the time window.
///
/// A key that names a section already claimed by an earlier key (a repeated
/// key, or `CODE` next to `CODE - Title`) is skipped, so no section can be
/// picked twice.
pub fn build_pool(
    catalog: &Catalog,
    program: &str,
    keys: &[CourseKey],
    constraints: &TimeConstraints,
) -> PoolOutcome {
    if keys.is_empty() {
        return PoolOutcome::NothingRequested;
    }

    let mut kept: Vec<CourseKey> = Vec::with_capacity(keys.len());
    let mut entries = Vec::new();
    let mut groups = Vec::with_capacity(keys.len());
    let mut stats = Vec::with_capacity(keys.len());
    let mut missing = Vec::new();
    let mut claimed: HashSet<(&str, &str)> = HashSet::new();

    for key in keys {
        let offered: Vec<&CourseSection> = catalog.program_sections(program).filter(|s| key.matches(s)).collect();
        if kept.contains(key) || offered.iter().any(|s| claimed.contains(&s.identity())) {
            log::debug!("Skipping {key}: its sections are already requested");
            continue;
        }
        claimed.extend(offered.iter().map(|s| s.identity()));

        let g = kept.len();
        let start = entries.len();
        for section in offered.iter().copied().filter(|s| constraints.admits(s)) {
            entries.push(PoolEntry {
                section: section.clone(),
                profile: SectionProfile::of(section),
                group: g,
            });
        }
        let range = start..entries.len();
        stats.push(GroupStats {
            key: key.to_string(),
            offered: offered.len(),
            eligible: range.len(),
        });
        if range.is_empty() {
            log::debug!("No eligible section for {key} ({} offered)", offered.len());
            missing.push(key.clone());
        }
        groups.push(range);
        kept.push(key.clone());
    }

    if !missing.is_empty() {
        return PoolOutcome::Unsatisfiable { missing, stats };
    }

    PoolOutcome::Ready(SectionPool {
        keys: kept,
        entries,
        groups,
        stats,
    })
}
