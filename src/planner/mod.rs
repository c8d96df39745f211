//! End-to-end schedule generation.
//!
//! [`Planner::generate`] runs the whole pipeline for one [`SelectionRequest`]:
//!
//! 1. **Pool**: group the program's sections per requested course and drop the
//!    ones outside the time window. A course with no eligible section ends the
//!    run with no results.
//! 2. **Enumerate**: walk the Cartesian product of the groups with the
//!    configured [`CombinationSearch`], keeping conflict-free combinations that
//!    satisfy the day limits.
//! 3. **Rank**: order the survivors with [`TieredRanking`] against the preferred
//!    faculties and wrap each one in a [`Schedule`].
//!
//! "No combination" is an empty `Ok` vector, never an error.

use crate::algorithms::{CombinationSearch, DepthFirstSearch, TieredRanking};
use crate::catalog::Catalog;
use crate::config::PlannerConfig;
use crate::error::PlannerError;
use crate::generate_id;
use crate::pool::{build_pool, PoolOutcome};
use crate::request::SelectionRequest;
use crate::schedule::{Paginator, Schedule};
use crate::trace::{GenerationTrace, NoopTrace, TraceEvent};


/// Generates ranked schedules from a catalog.
///
/// Holds no per-run state, so one planner can serve any number of runs over
/// the same catalog, from any number of threads.
#[derive(Debug, Clone)]
pub struct Planner<S = DepthFirstSearch> {
    config: PlannerConfig,
    search: S,
}

impl Planner {
    /// Creates a planner using depth-first enumeration capped by
    /// `config.max_combinations`.
    pub fn new(config: PlannerConfig) -> Result<Self, PlannerError> {
        config.validate()?;
        let search = match config.max_combinations {
            Some(limit) => DepthFirstSearch::with_limit(limit),
            None => DepthFirstSearch::new(),
        };
        Ok(Self { config, search })
    }
}

impl Default for Planner {
    fn default() -> Self {
        Self {
            config: PlannerConfig::default(),
            search: DepthFirstSearch::new(),
        }
    }
}

impl<S: CombinationSearch> Planner<S> {
    /// Replaces the enumeration strategy.
    ///
    /// `config.max_combinations` still applies: runs keep at most that many
    /// of the combinations the new strategy returns.
    pub fn with_search<T: CombinationSearch>(self, search: T) -> Planner<T> {
        Planner {
            config: self.config,
            search,
        }
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    pub fn search(&self) -> &S {
        &self.search
    }

    /// Ranked schedules for `request`, best first.
    pub fn generate(&self, catalog: &Catalog, request: &SelectionRequest) -> Result<Vec<Schedule>, PlannerError> {
        self.generate_traced(catalog, request, &mut NoopTrace)
    }

    /// Like [`generate`](Self::generate), reporting each stage to `trace`.
    pub fn generate_traced(
        &self,
        catalog: &Catalog,
        request: &SelectionRequest,
        trace: &mut dyn GenerationTrace,
    ) -> Result<Vec<Schedule>, PlannerError> {
        request.validate()?;

        let run_id = generate_id();
        trace.record(TraceEvent::RunStarted {
            run_id: run_id.clone(),
            program: request.program.clone(),
            courses: request.course_keys.iter().map(ToString::to_string).collect(),
            preferred_faculties: request.preferred_faculties.clone(),
        });

        let schedules = match build_pool(catalog, &request.program, &request.course_keys, &request.constraints) {
            PoolOutcome::NothingRequested => {
                log::debug!("[{run_id}] No course selected, nothing to generate");
                Vec::new()
            }
            PoolOutcome::Unsatisfiable { missing, .. } => {
                trace.record(TraceEvent::pool_unsatisfiable(&missing));
                Vec::new()
            }
            PoolOutcome::Ready(pool) => {
                trace.record(TraceEvent::PoolBuilt(pool.stats()));
                let mut combinations = self
                    .search
                    .search(&pool, &request.constraints.day_limits(), trace)
                    .combinations;
                if let Some(limit) = self.config.max_combinations {
                    if combinations.len() > limit {
                        log::debug!("[{run_id}] Keeping the first {limit} of {} combinations", combinations.len());
                        combinations.truncate(limit);
                    }
                }
                let ranked = TieredRanking::new(request.preferred_faculties.iter().cloned()).rank(
                    &pool,
                    combinations,
                    trace,
                );
                ranked
                    .iter()
                    .enumerate()
                    .map(|(i, scored)| Schedule::from_scored(i + 1, scored, &request.preferred_faculties))
                    .collect()
            }
        };

        trace.record(TraceEvent::RunFinished {
            run_id,
            schedules: schedules.len(),
        });
        Ok(schedules)
    }

    /// Pages over `schedules` using the configured batch size.
    pub fn paginate<'a>(&self, schedules: &'a [Schedule]) -> Paginator<'a, Schedule> {
        Paginator::new(schedules, self.config.batch_size)
    }
}
