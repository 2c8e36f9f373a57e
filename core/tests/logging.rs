//! The engine emits one debug line per player per month.

mod common;

use common::sample_roster;
use log::{Level, LevelFilter, Log, Metadata, Record};
use scouting_core::{config::ModelConfig, engine::ScoutingSimulation};
use std::sync::Mutex;

struct CaptureLogger {
    lines: Mutex<Vec<String>>,
}

impl Log for CaptureLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Debug
    }

    fn log(&self, record: &Record) {
        if record.level() == Level::Debug {
            self.lines.lock().unwrap().push(record.args().to_string());
        }
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger { lines: Mutex::new(Vec::new()) };

#[test]
fn every_month_logs_each_player() {
    log::set_logger(&LOGGER).unwrap();
    log::set_max_level(LevelFilter::Debug);

    let roster = sample_roster();
    let mut sim =
        ScoutingSimulation::build("run-log".into(), 7, &roster, &ModelConfig::default()).unwrap();
    sim.step();
    sim.step();

    let lines = LOGGER.lines.lock().unwrap();
    for month in 1..=2 {
        for record in &roster {
            let prefix = format!("month={month} {}: dev=", record.name);
            assert!(
                lines.iter().any(|l| l.starts_with(&prefix)),
                "no progress line for {} in month {month}: {lines:?}",
                record.name
            );
        }
    }
}
