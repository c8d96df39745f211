//! Planner configuration.

use crate::error::PlannerError;

/// Tuning knobs of a [`Planner`](crate::planner::Planner).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlannerConfig {
    /// Schedules handed out per page.
    pub batch_size: usize,
    /// Stop enumerating after this many valid combinations.
    pub max_combinations: Option<usize>,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            batch_size: 10,
            max_combinations: None,
        }
    }
}

impl PlannerConfig {
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    pub fn with_max_combinations(mut self, limit: usize) -> Self {
        self.max_combinations = Some(limit);
        self
    }

    pub fn validate(&self) -> Result<(), PlannerError> {
        if self.batch_size == 0 {
            return Err(PlannerError::ZeroBatchSize);
        }
        if self.max_combinations == Some(0) {
            return Err(PlannerError::ZeroCombinationLimit);
        }
        Ok(())
    }
}
