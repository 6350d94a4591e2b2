//! Run a simulation until it repeats, printing analysis along the way.
//!
//! Usage:
//!   RUST_LOG=info cargo run --example cycle_detection -- [pattern] [config.json] [log.csv]
//!
//! `pattern` is a preset name ("glider", "blinker", "r-pentomino",
//! "gosper glider gun") or "random" for a seeded soup.

use anyhow::{bail, Context};
use lifescope::{Pattern, Simulation, SimulationConfig, TickOutcome};

const MAX_TICKS: usize = 5000;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let pattern_name = args.next().unwrap_or_else(|| "r-pentomino".to_string());
    let config = match args.next() {
        Some(path) => SimulationConfig::from_json_file(&path)
            .with_context(|| format!("loading config from {}", path))?,
        None => SimulationConfig {
            width: 120,
            height: 90,
            ..Default::default()
        },
    };
    let log_path = args.next();

    let mut sim = Simulation::new(config)?;
    if pattern_name != "random" {
        let Some(pattern) = Pattern::preset(&pattern_name) else {
            bail!("unknown pattern '{}'", pattern_name);
        };
        sim.load_pattern(&pattern);
    }

    println!("{} on {}x{}", lifescope::version(), sim.engine().width(), sim.engine().height());
    sim.start_recording();

    for _ in 0..MAX_TICKS {
        match sim.tick()? {
            TickOutcome::Stepped { generation, population } => {
                if sim.analysis_due() {
                    let frame = sim.analysis();
                    println!(
                        "gen {:>5}  pop {:>6}  entropy {:.4}  dimension {:.4}",
                        generation, population, frame.entropy, frame.dimension
                    );
                }
            }
            TickOutcome::CycleDetected(cycle) if cycle.is_still_life() => {
                println!("stable state reached at generation {}", cycle.detected_at);
                break;
            }
            TickOutcome::CycleDetected(cycle) => {
                println!(
                    "cycle of period {} (state of generation {} repeated at {})",
                    cycle.period, cycle.first_seen, cycle.detected_at
                );
                break;
            }
            TickOutcome::Halted => break,
        }
    }

    if let (Some(log), Some(path)) = (sim.stop_recording(), log_path) {
        log.write_delimited(&path, ';')
            .with_context(|| format!("writing analysis log to {}", path))?;
        println!("wrote {} rows to {}", log.len(), path);
    }
    Ok(())
}
