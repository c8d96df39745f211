//! Structured diagnostics emitted during a generation run.
//!
//! The enumerator and the ranker report what they did as [`TraceEvent`]s
//! through an injected [`GenerationTrace`]. [`LogTrace`] forwards events to
//! the `log` facade, [`RecordingTrace`] keeps them for inspection.

use crate::algorithms::{EnumerationStats, RankingStats};
use crate::catalog::CourseKey;
use crate::pool::PoolStats;
use crate::Id;

/// One step of a generation run, as data.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TraceEvent {
    RunStarted {
        run_id: Id,
        program: String,
        courses: Vec<String>,
        preferred_faculties: Vec<String>,
    },
    PoolBuilt(PoolStats),
    PoolUnsatisfiable {
        missing: Vec<String>,
    },
    Enumerated(EnumerationStats),
    Ranked(RankingStats),
    RunFinished {
        run_id: Id,
        schedules: usize,
    },
}

impl TraceEvent {
    pub(crate) fn pool_unsatisfiable(missing: &[CourseKey]) -> Self {
        TraceEvent::PoolUnsatisfiable {
            missing: missing.iter().map(ToString::to_string).collect(),
        }
    }
}

/// Sink for [`TraceEvent`]s.
pub trait GenerationTrace {
    fn record(&mut self, event: TraceEvent);
}

/// Discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopTrace;

impl GenerationTrace for NoopTrace {
    fn record(&mut self, _event: TraceEvent) {}
}

/// Writes events to the `log` facade.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogTrace;

impl GenerationTrace for LogTrace {
    fn record(&mut self, event: TraceEvent) {
        match event {
            TraceEvent::RunStarted {
                run_id,
                program,
                courses,
                preferred_faculties,
            } => log::info!(
                "[{run_id}] Generating schedules for {program}: courses {courses:?}, preferred faculties {preferred_faculties:?}"
            ),
            TraceEvent::PoolBuilt(stats) => log::debug!(
                "Pool ready: {} candidates over {} courses, {} raw combinations",
                stats.candidates,
                stats.groups.len(),
                stats.product
            ),
            TraceEvent::PoolUnsatisfiable { missing } => {
                log::info!("No eligible sections for {missing:?}")
            }
            TraceEvent::Enumerated(stats) => {
                log::debug!(
                    "Enumeration visited {} nodes, accepted {} (conflict prunes {}, day prunes {}, load prunes {}, day rejections {})",
                    stats.nodes_visited,
                    stats.accepted,
                    stats.conflict_prunes,
                    stats.day_count_prunes,
                    stats.daily_load_prunes,
                    stats.day_count_rejections
                );
                if stats.truncated {
                    log::warn!("Enumeration stopped at the combination limit");
                }
            }
            TraceEvent::Ranked(stats) => {
                log::debug!("Ranked {} combinations ({:?})", stats.ranked, stats.mode);
                for bucket in &stats.buckets {
                    log::debug!(
                        "  {} unique / {} total preferred: {} combinations",
                        bucket.unique_preferred,
                        bucket.total_preferred,
                        bucket.count
                    );
                }
            }
            TraceEvent::RunFinished { run_id, schedules } => {
                log::info!("[{run_id}] Generated {schedules} schedules")
            }
        }
    }
}

/// Keeps every event in arrival order.
#[derive(Debug, Clone, Default)]
pub struct RecordingTrace {
    events: Vec<TraceEvent>,
}

impl RecordingTrace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[TraceEvent] {
        &self.events
    }

    pub fn into_events(self) -> Vec<TraceEvent> {
        self.events
    }

    /// The last enumeration statistics recorded, if any.
    pub fn enumeration(&self) -> Option<&EnumerationStats> {
        self.events.iter().rev().find_map(|e| match e {
            TraceEvent::Enumerated(stats) => Some(stats),
            _ => None,
        })
    }

    /// The last ranking statistics recorded, if any.
    pub fn ranking(&self) -> Option<&RankingStats> {
        self.events.iter().rev().find_map(|e| match e {
            TraceEvent::Ranked(stats) => Some(stats),
            _ => None,
        })
    }
}

impl GenerationTrace for RecordingTrace {
    fn record(&mut self, event: TraceEvent) {
        self.events.push(event);
    }
}

impl<T: GenerationTrace + ?Sized> GenerationTrace for &mut T {
    fn record(&mut self, event: TraceEvent) {
        (**self).record(event);
    }
}
