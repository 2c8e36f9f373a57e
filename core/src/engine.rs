//! The scouting simulation engine.
//!
//! RULES:
//!   - One PlayerProjection per input record, in input order.
//!   - Every month advances every projection exactly once.
//!   - Projections never read each other's state.
//!   - All randomness flows through each projection's own RandomSource.
//!   - Rankings are computed from the state at the moment result() is called.

use crate::{
    clock::SimClock,
    config::ModelConfig,
    error::{SimError, SimResult},
    event::SimEvent,
    player::PlayerRecord,
    projection::PlayerProjection,
    ranking::{ProjectedPlayer, SimulationResult},
    rng::{PlayerRng, RandomSource, RngBank},
    types::{Month, RunId},
};

pub struct ScoutingSimulation<R: RandomSource = PlayerRng> {
    pub run_id:  RunId,
    pub clock:   SimClock,
    seed:        Option<u64>,
    projections: Vec<PlayerProjection<R>>,
    event_log:   Vec<SimEvent>,
}

impl ScoutingSimulation<PlayerRng> {
    /// Build a seeded engine. Roster slot i draws from stream i of the
    /// master seed.
    pub fn build(
        run_id: RunId,
        seed: u64,
        players: &[PlayerRecord],
        model: &ModelConfig,
    ) -> SimResult<Self> {
        let bank = RngBank::new(seed);
        Self::assemble(run_id, Some(seed), players, model, |slot| bank.for_player(slot))
    }
}

impl<R: RandomSource> ScoutingSimulation<R> {
    /// Build an engine whose projections draw from caller-supplied sources.
    /// `source_for` is called once per roster slot, in order.
    pub fn with_sources(
        run_id: RunId,
        players: &[PlayerRecord],
        model: &ModelConfig,
        source_for: impl FnMut(usize) -> R,
    ) -> SimResult<Self> {
        Self::assemble(run_id, None, players, model, source_for)
    }

    fn assemble(
        run_id: RunId,
        seed: Option<u64>,
        players: &[PlayerRecord],
        model: &ModelConfig,
        mut source_for: impl FnMut(usize) -> R,
    ) -> SimResult<Self> {
        if players.is_empty() {
            return Err(SimError::EmptyRoster);
        }
        model.validate()?;
        for record in players {
            record.validate()?;
        }

        let projections = players
            .iter()
            .enumerate()
            .map(|(slot, record)| PlayerProjection::new(record, model, source_for(slot)))
            .collect();

        log::info!("run {run_id}: {} players, seed {seed:?}", players.len());

        Ok(Self {
            clock: SimClock::new(run_id.clone()),
            event_log: vec![SimEvent::RunInitialized {
                run_id: run_id.clone(),
                seed,
                players: players.len(),
            }],
            run_id,
            seed,
            projections,
        })
    }

    /// Advance every player by one month. Returns this month's events.
    pub fn step(&mut self) -> Vec<SimEvent> {
        let month = self.clock.advance();
        let mut events = vec![SimEvent::MonthStarted { month }];

        for projection in &mut self.projections {
            let before = projection.phase();
            let draws = projection.advance();
            log::debug!(
                "month={month} {}: dev={:.4} goals={:.3} assists={:.3} pass={:.1} dist={:.2}",
                projection.name,
                draws.development_factor,
                projection.stats.goals,
                projection.stats.assists,
                projection.stats.pass_accuracy,
                projection.stats.distance
            );
            if draws.phase != before {
                log::debug!(
                    "month={month} {}: {before:?} -> {:?} at age {:.2}",
                    projection.name,
                    draws.phase,
                    draws.age
                );
                events.push(SimEvent::PhaseChanged {
                    month,
                    player: projection.name.clone(),
                    age:    draws.age,
                    from:   before,
                    to:     draws.phase,
                });
            }
        }

        events.push(SimEvent::MonthCompleted { month });
        self.event_log.extend(events.iter().cloned());
        events
    }

    /// Run n months in a loop.
    pub fn run_months(&mut self, n: Month) {
        for _ in 0..n {
            self.step();
        }
        log::debug!(
            "run {}: now at month {} ({:.2} years simulated)",
            self.run_id,
            self.clock.current_month,
            self.clock.elapsed_years()
        );
    }

    /// Rank the current state of every player.
    pub fn result(&self) -> SimResult<SimulationResult> {
        let players = self
            .projections
            .iter()
            .map(ProjectedPlayer::from_projection)
            .collect();
        SimulationResult::rank(
            self.run_id.clone(),
            self.clock.current_month,
            self.seed,
            players,
        )
        .ok_or(SimError::EmptyRoster)
    }

    pub fn projections(&self) -> &[PlayerProjection<R>] {
        &self.projections
    }

    pub fn events(&self) -> &[SimEvent] {
        &self.event_log
    }
}

/// Project `players` forward `months` months from a master seed and rank them.
/// `months == 0` ranks the initial states unchanged.
pub fn run(
    players: &[PlayerRecord],
    months: Month,
    seed: u64,
    model: &ModelConfig,
) -> SimResult<SimulationResult> {
    let mut sim = ScoutingSimulation::build(format!("run-{seed}"), seed, players, model)?;
    sim.run_months(months);
    let result = sim.result()?;
    log::info!(
        "run {}: best prospect after {months} months is {}",
        result.run_id,
        result.best_prospect.name
    );
    Ok(result)
}

/// As [`run`], drawing from caller-supplied sources instead of a seed.
pub fn run_with_sources<R: RandomSource>(
    players: &[PlayerRecord],
    months: Month,
    model: &ModelConfig,
    source_for: impl FnMut(usize) -> R,
) -> SimResult<SimulationResult> {
    let mut sim = ScoutingSimulation::with_sources("run-injected".into(), players, model, source_for)?;
    sim.run_months(months);
    sim.result()
}
