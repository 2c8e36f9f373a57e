#![allow(dead_code)]

use scouting_core::{
    player::{PlayerRecord, PlayerStats},
    rng::RandomSource,
};
use std::collections::VecDeque;

/// Replays fixed draws in order. Panics when a queue runs dry so a test
/// that draws more than it scripted fails loudly.
#[derive(Debug, Default)]
pub struct ScriptedSource {
    pub uniforms: VecDeque<f64>,
    pub normals:  VecDeque<f64>,
}

impl ScriptedSource {
    pub fn new(uniforms: &[f64], normals: &[f64]) -> Self {
        Self {
            uniforms: uniforms.iter().copied().collect(),
            normals:  normals.iter().copied().collect(),
        }
    }
}

impl RandomSource for ScriptedSource {
    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        let x = self.uniforms.pop_front().expect("scripted uniform draws exhausted");
        assert!(x >= low && x <= high, "scripted draw {x} outside [{low}, {high}]");
        x
    }

    fn normal(&mut self, _mean: f64, _std_dev: f64) -> f64 {
        self.normals.pop_front().expect("scripted normal draws exhausted")
    }
}

pub fn player(name: &str, age: f64, goals: f64, assists: f64, pass: f64, distance: f64) -> PlayerRecord {
    PlayerRecord::new(
        name,
        age,
        PlayerStats { goals, assists, pass_accuracy: pass, distance },
    )
}

/// Route engine logs through the test harness; `RUST_LOG=debug` shows them.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A small mixed-age roster: a teenager, a peak-age player, a veteran.
pub fn sample_roster() -> Vec<PlayerRecord> {
    vec![
        player("Alvarez", 19.0, 0.35, 0.20, 78.0, 10.8),
        player("Benítez", 26.0, 0.55, 0.25, 84.0, 10.2),
        player("Castro",  32.0, 0.60, 0.35, 88.5,  9.4),
    ]
}
