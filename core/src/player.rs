//! Player input records and the stat block the model evolves.

use crate::error::{SimError, SimResult};
use serde::{Deserialize, Serialize};

/// Pass accuracy is a percentage.
pub const PASS_ACCURACY_MAX: f64 = 100.0;

/// The four projected statistics.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct PlayerStats {
    /// Goals per 90 minutes.
    pub goals:         f64,
    /// Assists per 90 minutes.
    pub assists:       f64,
    /// Pass completion, percent.
    pub pass_accuracy: f64,
    /// Distance covered per match, km.
    pub distance:      f64,
}

/// A player's initial attributes as handed to the simulation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlayerRecord {
    pub name:  String,
    pub age:   f64,
    #[serde(flatten)]
    pub stats: PlayerStats,
}

impl PlayerRecord {
    pub fn new(name: impl Into<String>, age: f64, stats: PlayerStats) -> Self {
        Self { name: name.into(), age, stats }
    }

    /// Check every field, stopping at the first offending one.
    pub fn validate(&self) -> SimResult<()> {
        if self.name.trim().is_empty() {
            return Err(SimError::validation("name", "must not be empty"));
        }
        if !self.age.is_finite() || self.age <= 0.0 {
            return Err(SimError::validation(
                "age",
                format!("must be a positive number, got {}", self.age),
            ));
        }
        non_negative("goals", self.stats.goals)?;
        non_negative("assists", self.stats.assists)?;
        let pass = self.stats.pass_accuracy;
        if !pass.is_finite() || !(0.0..=PASS_ACCURACY_MAX).contains(&pass) {
            return Err(SimError::validation(
                "pass_accuracy",
                format!("must be between 0 and 100, got {pass}"),
            ));
        }
        non_negative("distance", self.stats.distance)?;
        Ok(())
    }
}

fn non_negative(field: &'static str, value: f64) -> SimResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(SimError::validation(
            field,
            format!("must be a non-negative number, got {value}"),
        ));
    }
    Ok(())
}

/// Unparsed form fields, as typed by a user.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawPlayerEntry {
    pub name:          String,
    pub age:           String,
    pub goals:         String,
    pub assists:       String,
    pub pass_accuracy: String,
    pub distance:      String,
}

impl RawPlayerEntry {
    /// Parse and validate into a record.
    pub fn parse(&self) -> SimResult<PlayerRecord> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(SimError::validation("name", "must not be empty"));
        }
        let record = PlayerRecord {
            name:  name.to_string(),
            age:   parse_number("age", &self.age)?,
            stats: PlayerStats {
                goals:         parse_number("goals", &self.goals)?,
                assists:       parse_number("assists", &self.assists)?,
                pass_accuracy: parse_number("pass_accuracy", &self.pass_accuracy)?,
                distance:      parse_number("distance", &self.distance)?,
            },
        };
        record.validate()?;
        Ok(record)
    }
}

fn parse_number(field: &'static str, raw: &str) -> SimResult<f64> {
    let raw = raw.trim();
    raw.parse::<f64>()
        .map_err(|_| SimError::validation(field, format!("expected a number, got '{raw}'")))
}
