//! Conflict checking between course sections.
//!
//! [`conflicts`] answers the question for any two catalog records.
//! [`ConflictGraph`] precomputes the answer for every pair of candidates in a
//! section pool so the enumerator only does edge lookups while descending.

mod checker;
mod graph;

pub use checker::{conflicting_sections, conflicts, SectionProfile};
pub use graph::ConflictGraph;
