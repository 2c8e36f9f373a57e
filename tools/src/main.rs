//! sim-runner: headless scouting projection runner.
//!
//! Usage:
//!   sim-runner --roster data/roster.json --months 12 --seed 42
//!   sim-runner --roster data/roster.json --months 24 --json
//!   sim-runner --roster data/roster.json --expected
//!   sim-runner --ipc-mode

use anyhow::Result;
use chrono::{DateTime, Utc};
use scouting_core::{
    config::{ModelConfig, RunConfig, DEFAULT_MONTHS, DEFAULT_SEED},
    engine::ScoutingSimulation,
    error::{SimError, SimResult},
    player::RawPlayerEntry,
    ranking::SimulationResult,
    rng::MidpointSource,
    roster::Roster,
    types::Month,
};
use std::env;
use std::io::{self, BufRead, Write};

#[derive(serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum IpcCommand {
    AddPlayer {
        player: RawPlayerEntry,
    },
    ClearRoster,
    GetRoster,
    Run {
        months: serde_json::Value,
        #[serde(default)]
        seed: Option<u64>,
    },
    Quit,
}

#[derive(serde::Serialize)]
struct Report<'a> {
    generated_at: DateTime<Utc>,
    #[serde(flatten)]
    result:       &'a SimulationResult,
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let seed = parse_arg(&args, "--seed", DEFAULT_SEED);
    let ipc_mode = has_flag(&args, "--ipc-mode");
    let json = has_flag(&args, "--json");
    let expected = has_flag(&args, "--expected");
    let roster_path = arg_value(&args, "--roster").unwrap_or("./data/roster.json");
    let model = match arg_value(&args, "--model") {
        Some(path) => ModelConfig::load(path)?,
        None => ModelConfig::default(),
    };

    if ipc_mode {
        return run_ipc_loop(&model, seed);
    }

    let months = match arg_value(&args, "--months") {
        Some(raw) => RunConfig::parse_months(raw)?,
        None => DEFAULT_MONTHS,
    };
    let config = RunConfig::new(months, seed)?;
    let roster = Roster::load(roster_path)?;

    if !json {
        println!("Scouting projection — sim-runner");
        println!("  roster:    {roster_path} ({} players)", roster.len());
        println!("  months:    {}", config.months);
        if expected {
            println!("  mode:      expected path (no noise)");
        } else {
            println!("  seed:      {}", config.seed);
        }
        println!();
    }

    let result = simulate(&roster, &model, config, expected)?;

    if json {
        let report = Report { generated_at: Utc::now(), result: &result };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&result);
    }
    Ok(())
}

fn simulate(
    roster: &Roster,
    model: &ModelConfig,
    config: RunConfig,
    expected: bool,
) -> SimResult<SimulationResult> {
    let run_id = format!("run-{}-{}", config.seed, Utc::now().timestamp());
    let result = if expected {
        let mut sim =
            ScoutingSimulation::with_sources(run_id, roster.players(), model, |_| MidpointSource)?;
        sim.run_months(config.months);
        sim.result()?
    } else {
        let mut sim = ScoutingSimulation::build(run_id, config.seed, roster.players(), model)?;
        sim.run_months(config.months);
        sim.result()?
    };
    Ok(result)
}

fn run_ipc_loop(model: &ModelConfig, default_seed: u64) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut handle = stdin.lock();
    let mut buffer = String::new();
    let mut roster = Roster::new();

    loop {
        buffer.clear();
        let bytes_read = handle.read_line(&mut buffer)?;
        if bytes_read == 0 {
            break; // EOF
        }
        if buffer.trim().is_empty() {
            continue;
        }

        let cmd: IpcCommand = match serde_json::from_str(&buffer) {
            Ok(c) => c,
            Err(e) => {
                log::warn!("Unparseable command: {}", buffer.trim());
                write_line(&mut stdout, &serde_json::json!({ "error": e.to_string() }))?;
                continue;
            }
        };

        if matches!(cmd, IpcCommand::Quit) {
            break;
        }
        let response = handle_command(cmd, &mut roster, model, default_seed);
        write_line(&mut stdout, &response)?;
    }
    Ok(())
}

/// Apply one IPC command to the session roster and build its reply.
fn handle_command(
    cmd: IpcCommand,
    roster: &mut Roster,
    model: &ModelConfig,
    default_seed: u64,
) -> serde_json::Value {
    let reply = match cmd {
        IpcCommand::Quit => Ok(serde_json::json!({ "ok": true })),
        IpcCommand::AddPlayer { player } => roster
            .add_entry(&player)
            .map(|()| serde_json::json!({ "ok": true, "players": roster.len() })),
        IpcCommand::ClearRoster => {
            roster.clear();
            Ok(serde_json::json!({ "ok": true, "players": 0 }))
        }
        IpcCommand::GetRoster => Ok(serde_json::json!({ "players": roster.players() })),
        IpcCommand::Run { months, seed } => {
            ipc_run(roster, model, &months, seed.unwrap_or(default_seed)).and_then(|result| {
                let report = Report { generated_at: Utc::now(), result: &result };
                Ok(serde_json::to_value(report)?)
            })
        }
    };
    reply.unwrap_or_else(|e| {
        log::warn!("IPC command failed: {e}");
        error_reply(&e)
    })
}

fn error_reply(err: &SimError) -> serde_json::Value {
    let kind = match err {
        SimError::Validation { .. } => "validation",
        SimError::EmptyRoster => "empty_roster",
        SimError::InvalidConfiguration { .. } => "invalid_configuration",
        SimError::Serialization(_) => "serialization",
        SimError::Other(_) => "other",
    };
    let mut reply = serde_json::json!({ "error": err.to_string(), "kind": kind });
    if let SimError::Validation { field, .. } = err {
        reply["field"] = serde_json::json!(field);
    }
    reply
}

fn ipc_run(
    roster: &Roster,
    model: &ModelConfig,
    months: &serde_json::Value,
    seed: u64,
) -> SimResult<SimulationResult> {
    let raw = match months {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    };
    let months: Month = RunConfig::parse_months(&raw)?;
    let config = RunConfig::new(months, seed)?;
    simulate(roster, model, config, false)
}

fn write_line(out: &mut impl Write, value: &serde_json::Value) -> Result<()> {
    writeln!(out, "{value}")?;
    out.flush()?;
    Ok(())
}

fn print_report(result: &SimulationResult) {
    println!("--- SCOUTING REPORT --- (projection over {} months)", result.months);
    println!("Note: based on a stochastic growth/decline simulation.");
    println!();

    let scorer = &result.best_scorer;
    println!("IF YOU NEED GOALS: sign {}", scorer.name);
    println!(
        "   - Projection: {:.2} goals/90min (future age: {:.1})",
        scorer.value, scorer.final_age
    );
    println!();

    println!("IF YOU NEED ASSISTS: sign {}", result.best_assister.name);
    println!("   - Projection: {:.2} assists/90min", result.best_assister.value);
    println!();

    println!("IF YOU NEED POSSESSION (PASSING): sign {}", result.best_passer.name);
    println!("   - Projection: {:.1}% completion", result.best_passer.value);
    println!();

    println!("IF YOU NEED INTENSITY (PHYSICAL): sign {}", result.best_physical.name);
    println!("   - Projection: {:.2} km/match", result.best_physical.value);
    println!();

    println!(
        "BEST OVERALL PROSPECT (quality/age balance): {}",
        result.best_prospect.name
    );
    println!(
        "   - Composite score {:.1}: best return given their development curve.",
        result.best_prospect.value
    );

    println!();
    println!("{}", "=".repeat(60));
    println!("FINAL DETAIL FOR ALL PLAYERS:");
    for p in &result.players {
        println!(
            "> {} ({:.1} yrs): G:{:.2} | A:{:.2} | P:{:.1}% | D:{:.2}km",
            p.name,
            p.final_age,
            p.stats.goals,
            p.stats.assists,
            p.stats.pass_accuracy,
            p.stats.distance
        );
    }
}

fn parse_arg<T: std::str::FromStr + Copy>(args: &[String], flag: &str, default: T) -> T {
    arg_value(args, flag)
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn arg_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].as_str())
}

fn has_flag(args: &[String], flag: &str) -> bool {
    args.iter().any(|a| a == flag)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command(json: &str) -> IpcCommand {
        serde_json::from_str(json).unwrap()
    }

    fn add(roster: &mut Roster, name: &str, age: &str, pass: &str) -> serde_json::Value {
        let json = format!(
            r#"{{"type":"add_player","player":{{"name":"{name}","age":"{age}","goals":"0.4","assists":"0.2","pass_accuracy":"{pass}","distance":"10.5"}}}}"#
        );
        handle_command(command(&json), roster, &ModelConfig::default(), 42)
    }

    fn run(roster: &mut Roster, months: &str) -> serde_json::Value {
        let json = format!(r#"{{"type":"run","months":{months},"seed":7}}"#);
        handle_command(command(&json), roster, &ModelConfig::default(), 42)
    }

    #[test]
    fn add_player_reports_the_offending_field() {
        let mut roster = Roster::new();
        assert_eq!(add(&mut roster, "Ana", "20", "80")["players"], 1);

        let reply = add(&mut roster, "Bea", "21", "104");
        assert_eq!(reply["kind"], "validation");
        assert_eq!(reply["field"], "pass_accuracy");
        assert_eq!(roster.len(), 1);
    }

    #[test]
    fn run_after_clear_is_an_empty_roster() {
        let mut roster = Roster::new();
        add(&mut roster, "Ana", "20", "80");
        let cleared =
            handle_command(command(r#"{"type":"clear_roster"}"#), &mut roster, &ModelConfig::default(), 42);
        assert_eq!(cleared["players"], 0);

        assert_eq!(run(&mut roster, "12")["kind"], "empty_roster");
    }

    #[test]
    fn bad_month_counts_are_invalid_configuration() {
        let mut roster = Roster::new();
        add(&mut roster, "Ana", "20", "80");
        for months in ["0", "-3", "12.5", r#""1.5""#, r#""soon""#] {
            let reply = run(&mut roster, months);
            assert_eq!(reply["kind"], "invalid_configuration", "months = {months}");
        }
    }

    #[test]
    fn run_returns_a_full_report() {
        let mut roster = Roster::new();
        add(&mut roster, "Ana", "20", "80");
        add(&mut roster, "Bea", "31", "88");

        let reply = run(&mut roster, r#""6""#);
        assert!(reply.get("error").is_none(), "unexpected error: {reply}");
        assert_eq!(reply["months"], 6);
        assert_eq!(reply["seed"], 7);
        assert_eq!(reply["players"].as_array().map(Vec::len), Some(2));
        assert!(reply["best_prospect"]["name"].is_string());
        assert!(reply["generated_at"].is_string());
    }

    #[test]
    fn get_roster_lists_players_in_order() {
        let mut roster = Roster::new();
        add(&mut roster, "Ana", "20", "80");
        add(&mut roster, "Bea", "31", "88");

        let reply =
            handle_command(command(r#"{"type":"get_roster"}"#), &mut roster, &ModelConfig::default(), 42);
        assert_eq!(reply["players"][0]["name"], "Ana");
        assert_eq!(reply["players"][1]["name"], "Bea");
    }
}
