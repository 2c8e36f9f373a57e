//! The list of players under analysis.
//!
//! Only validated records enter a roster. Order is insertion order and is
//! preserved all the way through to the report.

use crate::{
    config::read_file,
    error::SimResult,
    player::{PlayerRecord, RawPlayerEntry},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Roster {
    players: Vec<PlayerRecord>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a roster from records, rejecting the first invalid one.
    pub fn from_records(records: Vec<PlayerRecord>) -> SimResult<Self> {
        let mut roster = Self::new();
        for record in records {
            roster.add(record)?;
        }
        Ok(roster)
    }

    /// Load a roster file of the form `{"players": [...]}`.
    pub fn load(path: &str) -> SimResult<Self> {
        let content = read_file(path)?;
        let file: Roster = serde_json::from_str(&content)?;
        Self::from_records(file.players)
    }

    pub fn add(&mut self, record: PlayerRecord) -> SimResult<()> {
        record.validate()?;
        log::debug!("roster: added {} (age {:.1})", record.name, record.age);
        self.players.push(record);
        Ok(())
    }

    pub fn add_entry(&mut self, entry: &RawPlayerEntry) -> SimResult<()> {
        let record = entry.parse()?;
        self.add(record)
    }

    pub fn clear(&mut self) {
        self.players.clear();
    }

    pub fn players(&self) -> &[PlayerRecord] {
        &self.players
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::SimError, player::PlayerStats};

    fn record(name: &str, age: f64) -> PlayerRecord {
        PlayerRecord::new(
            name,
            age,
            PlayerStats { goals: 0.4, assists: 0.2, pass_accuracy: 80.0, distance: 10.0 },
        )
    }

    #[test]
    fn invalid_record_leaves_roster_untouched() {
        let mut roster = Roster::new();
        roster.add(record("A", 20.0)).unwrap();

        let err = roster.add(record("B", 0.0)).unwrap_err();
        assert!(matches!(err, SimError::Validation { field: "age", .. }));
        assert_eq!(roster.len(), 1);
    }

    #[test]
    fn clear_empties_the_roster() {
        let mut roster = Roster::from_records(vec![record("A", 20.0), record("B", 31.0)]).unwrap();
        assert_eq!(roster.players()[1].name, "B");

        roster.clear();
        assert!(roster.is_empty());
    }
}
