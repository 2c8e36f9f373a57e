//! Simulation clock: the month counter for a run.

use crate::types::{Month, RunId, MONTHS_PER_YEAR};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SimClock {
    pub run_id:        RunId,
    pub current_month: Month,
}

impl SimClock {
    pub fn new(run_id: RunId) -> Self {
        Self { run_id, current_month: 0 }
    }

    /// Advance one month. Returns the new month number.
    pub fn advance(&mut self) -> Month {
        self.current_month += 1;
        self.current_month
    }

    /// Simulated time elapsed since month 0, in years.
    pub fn elapsed_years(&self) -> f64 {
        self.current_month as f64 / MONTHS_PER_YEAR
    }
}
