//! Stochastic month-by-month projection of football player statistics,
//! and the ranking that turns projected rosters into scouting targets.

pub mod clock;
pub mod config;
pub mod engine;
pub mod error;
pub mod event;
pub mod player;
pub mod projection;
pub mod ranking;
pub mod rng;
pub mod roster;
pub mod types;
