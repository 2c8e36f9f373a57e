//! One player's trajectory through simulated time.
//!
//! A projection owns its state and its random stream exclusively.
//! `advance()` is the only way the state changes; each call is one month.
//!
//! Draw order within a month (fixed, relied on by seeded replays):
//!   1. development factor  (uniform, range by development phase)
//!   2. technical noise     (normal)
//!   3. physical noise      (normal)
//!   4. pass-accuracy delta (uniform, range by veteran threshold)

use crate::{
    config::{GrowthCurve, ModelConfig, ScoreWeights, UniformRange},
    player::{PlayerRecord, PlayerStats, PASS_ACCURACY_MAX},
    rng::{PlayerRng, RandomSource},
    types::{Month, MONTHS_PER_YEAR},
};
use serde::{Deserialize, Serialize};

/// Where a player sits on the growth curve.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DevelopmentPhase {
    Growth,
    Peak,
    Decline,
}

impl DevelopmentPhase {
    pub fn for_age(age: f64, curve: &GrowthCurve) -> Self {
        if age < curve.growth_until_age {
            Self::Growth
        } else if age <= curve.peak_until_age {
            Self::Peak
        } else {
            Self::Decline
        }
    }

    pub fn factor_range(&self, curve: &GrowthCurve) -> UniformRange {
        match self {
            Self::Growth  => curve.growth_factor,
            Self::Peak    => curve.peak_factor,
            Self::Decline => curve.decline_factor,
        }
    }
}

/// Everything drawn during one month, for diagnostics.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MonthlyDraws {
    pub month:              Month,
    pub age:                f64,
    pub phase:              DevelopmentPhase,
    pub development_factor: f64,
    pub technical_noise:    f64,
    pub physical_noise:     f64,
    pub pass_delta:         f64,
}

pub struct PlayerProjection<R: RandomSource = PlayerRng> {
    pub name:        String,
    pub initial_age: f64,
    pub age:         f64,
    pub stats:       PlayerStats,
    /// Pre-update snapshots; entry k is the state before month k+1.
    history:         Vec<PlayerStats>,
    months_elapsed:  Month,
    growth:          GrowthCurve,
    scoring:         ScoreWeights,
    rng:             R,
}

impl<R: RandomSource> PlayerProjection<R> {
    pub fn new(record: &PlayerRecord, model: &ModelConfig, rng: R) -> Self {
        Self {
            name:           record.name.clone(),
            initial_age:    record.age,
            age:            record.age,
            stats:          record.stats,
            history:        Vec::new(),
            months_elapsed: 0,
            growth:         model.growth.clone(),
            scoring:        model.scoring.clone(),
            rng,
        }
    }

    /// Simulate one month.
    pub fn advance(&mut self) -> MonthlyDraws {
        self.history.push(self.stats);
        self.months_elapsed += 1;
        self.age += 1.0 / MONTHS_PER_YEAR;

        let curve = &self.growth;
        let phase = DevelopmentPhase::for_age(self.age, curve);
        let range = phase.factor_range(curve);
        let development_factor = self.rng.uniform(range.low, range.high);
        let technical_noise = self.rng.normal(0.0, curve.technical_noise_std);
        let physical_noise = self.rng.normal(0.0, curve.physical_noise_std);

        // Goals and assists move together on the same draw.
        let technical_factor = development_factor + technical_noise;
        self.stats.goals *= technical_factor;
        self.stats.assists *= technical_factor;

        let veteran = self.age >= curve.veteran_age;
        let pass_range = if veteran { curve.veteran_pass_delta } else { curve.young_pass_delta };
        let pass_delta = self.rng.uniform(pass_range.low, pass_range.high);
        self.stats.pass_accuracy =
            (self.stats.pass_accuracy + pass_delta).clamp(0.0, PASS_ACCURACY_MAX);

        // Distance is not clamped; it may drift below zero over long horizons.
        let physical_factor = if veteran {
            development_factor - curve.veteran_physical_erosion
        } else {
            development_factor
        };
        self.stats.distance *= physical_factor + physical_noise * curve.physical_noise_damping;

        MonthlyDraws {
            month: self.months_elapsed,
            age: self.age,
            phase,
            development_factor,
            technical_noise,
            physical_noise,
            pass_delta,
        }
    }

    /// Weighted prospect rating of the current state.
    pub fn composite_score(&self) -> f64 {
        composite_score(&self.stats, self.age, &self.scoring)
    }

    pub fn phase(&self) -> DevelopmentPhase {
        DevelopmentPhase::for_age(self.age, &self.growth)
    }

    pub fn history(&self) -> &[PlayerStats] {
        &self.history
    }

    pub fn months_elapsed(&self) -> Month {
        self.months_elapsed
    }
}

/// Score a stat block at a given age. The age penalty applies once,
/// only when `age` is strictly above the penalty age.
pub fn composite_score(stats: &PlayerStats, age: f64, weights: &ScoreWeights) -> f64 {
    let score = stats.goals * weights.goals
        + stats.assists * weights.assists
        + stats.pass_accuracy * weights.pass_accuracy
        + stats.distance * weights.distance;
    if age > weights.penalty_age {
        score * weights.age_penalty
    } else {
        score
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::MidpointSource;

    fn stats() -> PlayerStats {
        PlayerStats { goals: 0.5, assists: 0.3, pass_accuracy: 80.0, distance: 10.0 }
    }

    #[test]
    fn phase_brackets_follow_the_curve() {
        let curve = GrowthCurve::default();
        assert_eq!(DevelopmentPhase::for_age(23.99, &curve), DevelopmentPhase::Growth);
        assert_eq!(DevelopmentPhase::for_age(24.0, &curve), DevelopmentPhase::Peak);
        assert_eq!(DevelopmentPhase::for_age(29.0, &curve), DevelopmentPhase::Peak);
        assert_eq!(DevelopmentPhase::for_age(29.01, &curve), DevelopmentPhase::Decline);
    }

    #[test]
    fn score_penalty_starts_strictly_above_thirty() {
        let weights = ScoreWeights::default();
        let base = 0.5 * 40.0 + 0.3 * 30.0 + 80.0 * 0.5 + 10.0 * 3.0;

        assert_eq!(composite_score(&stats(), 30.0, &weights), base);
        assert_eq!(composite_score(&stats(), 30.01, &weights), base * 0.9);
    }

    #[test]
    fn veteran_threshold_erodes_distance() {
        let model = ModelConfig::default();
        let record = PlayerRecord::new("V", 28.0, stats());
        let mut p = PlayerProjection::new(&record, &model, MidpointSource);
        let draws = p.advance();

        assert_eq!(draws.phase, DevelopmentPhase::Peak);
        assert!((draws.development_factor - 1.0).abs() < 1e-12);
        assert!((draws.pass_delta - (-0.5)).abs() < 1e-12);
        assert!((p.stats.distance - 10.0 * 0.995).abs() < 1e-9);
    }

    #[test]
    fn pass_accuracy_clamps_at_the_top() {
        let model = ModelConfig::default();
        let record = PlayerRecord::new(
            "P",
            19.0,
            PlayerStats { pass_accuracy: 99.9, ..stats() },
        );
        let mut p = PlayerProjection::new(&record, &model, MidpointSource);
        for _ in 0..5 {
            p.advance();
        }
        assert_eq!(p.stats.pass_accuracy, 100.0);
    }

    #[test]
    fn wide_pass_delta_never_exceeds_a_hundred() {
        let mut model = ModelConfig::default();
        model.growth.young_pass_delta = UniformRange::new(2.0, 4.0);
        let record = PlayerRecord::new(
            "P",
            19.0,
            PlayerStats { pass_accuracy: 99.9, ..stats() },
        );
        let mut p = PlayerProjection::new(&record, &model, MidpointSource);
        for _ in 0..12 {
            p.advance();
            assert!(p.stats.pass_accuracy <= PASS_ACCURACY_MAX);
        }
        assert_eq!(p.stats.pass_accuracy, PASS_ACCURACY_MAX);
    }
}
