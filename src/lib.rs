//! classplan - conflict-free class schedule generation
//!
//! Builds every way of taking one section of each wanted course without two
//! sections meeting at the same time on the same day, filtered by time-of-day
//! and day-count limits, and ranks the results by preferred-faculty coverage
//! and schedule compactness.
//!
//! The pipeline is pure and synchronous: a read-only [`Catalog`] and a
//! [`SelectionRequest`] go in, an ordered list of [`Schedule`]s comes out.

pub mod algorithms;
pub mod catalog;
pub mod config;
pub mod conflict;
pub mod error;
pub mod plan;
pub mod planner;
pub mod pool;
pub mod request;
pub mod schedule;
pub mod time;
pub mod trace;

pub use catalog::{Catalog, CourseKey, CourseSection};
pub use config::PlannerConfig;
pub use error::PlannerError;
pub use planner::Planner;
pub use request::{SelectionRequest, TimeConstraints};
pub use schedule::{Paginator, Schedule};

/// Identifier type used for generation runs and section plans.
pub type Id = String;

/// Generates a new unique identifier (UUID v4).
pub fn generate_id() -> Id {
    uuid::Uuid::new_v4().to_string()
}
