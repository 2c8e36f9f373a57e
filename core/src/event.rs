//! The run event log.
//!
//! The engine records what happened each month here. Nothing in the
//! model reads events back; they exist for tooling and tests.

use crate::{
    projection::DevelopmentPhase,
    types::{Month, RunId},
};
use serde::{Deserialize, Serialize};

/// Every event emitted during a run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SimEvent {
    // ── Engine events ──────────────────────────────
    RunInitialized {
        run_id:  RunId,
        seed:    Option<u64>,
        players: usize,
    },
    MonthStarted {
        month: Month,
    },
    MonthCompleted {
        month: Month,
    },

    // ── Player events ──────────────────────────────
    PhaseChanged {
        month:  Month,
        player: String,
        age:    f64,
        from:   DevelopmentPhase,
        to:     DevelopmentPhase,
    },
}

impl SimEvent {
    /// Stable string name of the variant.
    pub fn type_name(&self) -> &'static str {
        match self {
            SimEvent::RunInitialized { .. } => "run_initialized",
            SimEvent::MonthStarted { .. }   => "month_started",
            SimEvent::MonthCompleted { .. } => "month_completed",
            SimEvent::PhaseChanged { .. }   => "phase_changed",
        }
    }
}
