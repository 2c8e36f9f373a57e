//! Model constants and run configuration.
//!
//! `ModelConfig::default()` reproduces the built-in growth curve exactly.
//! A JSON model file may override any subset of fields; anything missing
//! falls back to the default.

use crate::{
    error::{SimError, SimResult},
    types::Month,
};
use serde::{Deserialize, Serialize};

pub const DEFAULT_SEED: u64 = 42;
pub const DEFAULT_MONTHS: Month = 12;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct UniformRange {
    pub low:  f64,
    pub high: f64,
}

impl UniformRange {
    pub const fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    fn check(&self, field: &str) -> SimResult<()> {
        if !self.low.is_finite() || !self.high.is_finite() || self.low > self.high {
            return Err(SimError::config(format!(
                "{field}: range [{}, {}] is not a valid interval",
                self.low, self.high
            )));
        }
        Ok(())
    }
}

/// Age-dependent growth curve and noise parameters.
///
/// Pass accuracy is a percentage and always clamps to [0, 100]; that bound
/// is not part of the curve.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct GrowthCurve {
    /// Players strictly younger than this are still growing.
    pub growth_until_age:         f64,
    /// Players up to and including this age are at their peak.
    pub peak_until_age:           f64,
    pub growth_factor:            UniformRange,
    pub peak_factor:              UniformRange,
    pub decline_factor:           UniformRange,
    pub technical_noise_std:      f64,
    pub physical_noise_std:       f64,
    /// Scale applied to physical noise before it touches distance.
    pub physical_noise_damping:   f64,
    /// From this age on, passing skews negative and distance erodes faster.
    pub veteran_age:              f64,
    pub young_pass_delta:         UniformRange,
    pub veteran_pass_delta:       UniformRange,
    pub veteran_physical_erosion: f64,
}

impl Default for GrowthCurve {
    fn default() -> Self {
        Self {
            growth_until_age:         24.0,
            peak_until_age:           29.0,
            growth_factor:            UniformRange::new(1.001, 1.015),
            peak_factor:              UniformRange::new(0.995, 1.005),
            decline_factor:           UniformRange::new(0.980, 1.000),
            technical_noise_std:      0.02,
            physical_noise_std:       0.05,
            physical_noise_damping:   0.1,
            veteran_age:              28.0,
            young_pass_delta:         UniformRange::new(-1.0, 1.5),
            veteran_pass_delta:       UniformRange::new(-1.5, 0.5),
            veteran_physical_erosion: 0.005,
        }
    }
}

/// Weights of the composite prospect score.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ScoreWeights {
    pub goals:         f64,
    pub assists:       f64,
    pub pass_accuracy: f64,
    pub distance:      f64,
    /// Players strictly older than this take the age penalty.
    pub penalty_age:   f64,
    pub age_penalty:   f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            goals:         40.0,
            assists:       30.0,
            pass_accuracy: 0.5,
            distance:      3.0,
            penalty_age:   30.0,
            age_penalty:   0.9,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ModelConfig {
    pub growth:  GrowthCurve,
    pub scoring: ScoreWeights,
}

impl ModelConfig {
    /// Load a model file. Missing fields take their default values.
    pub fn load(path: &str) -> SimResult<Self> {
        let content = read_file(path)?;
        let config: ModelConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> SimResult<()> {
        let g = &self.growth;
        g.growth_factor.check("growth.growth_factor")?;
        g.peak_factor.check("growth.peak_factor")?;
        g.decline_factor.check("growth.decline_factor")?;
        g.young_pass_delta.check("growth.young_pass_delta")?;
        g.veteran_pass_delta.check("growth.veteran_pass_delta")?;

        for (field, std) in [
            ("growth.technical_noise_std", g.technical_noise_std),
            ("growth.physical_noise_std", g.physical_noise_std),
        ] {
            if !std.is_finite() || std < 0.0 {
                return Err(SimError::config(format!("{field} must be a non-negative number")));
            }
        }
        if g.growth_until_age > g.peak_until_age {
            return Err(SimError::config(
                "growth.growth_until_age must not exceed growth.peak_until_age",
            ));
        }
        Ok(())
    }
}

/// Read a data file, keeping the path in the error.
pub(crate) fn read_file(path: &str) -> SimResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| SimError::Other(anyhow::anyhow!("Cannot read {path}: {e}")))
}

/// Parameters of a single projection run.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct RunConfig {
    pub months: Month,
    pub seed:   u64,
}

impl RunConfig {
    /// A run must simulate at least one month.
    pub fn new(months: Month, seed: u64) -> SimResult<Self> {
        if months == 0 {
            return Err(SimError::config("months must be a positive integer"));
        }
        Ok(Self { months, seed })
    }

    /// Parse a user-supplied month count.
    pub fn parse_months(raw: &str) -> SimResult<Month> {
        let raw = raw.trim();
        let months: i64 = raw.parse().map_err(|_| {
            SimError::config(format!("months must be a whole number, got '{raw}'"))
        })?;
        if months <= 0 {
            return Err(SimError::config(format!(
                "months must be a positive integer, got {months}"
            )));
        }
        Ok(months as Month)
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self { months: DEFAULT_MONTHS, seed: DEFAULT_SEED }
    }
}
