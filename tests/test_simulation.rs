// Integration tests for the simulation driver: cycle detection, history
// bounds and analysis recording.

use approx::assert_relative_eq;
use lifescope::analysis::fingerprint;
use lifescope::{
    AnalysisLog, GenerationHistory, LifeEngine, Pattern, Result, Simulation, SimulationConfig,
    TickOutcome,
};

fn empty_config(width: usize, height: usize) -> SimulationConfig {
    SimulationConfig {
        width,
        height,
        initial_density: None,
        ..Default::default()
    }
}

#[test]
fn test_blinker_reports_period_two() -> Result<()> {
    let mut sim = Simulation::new(empty_config(20, 20))?;
    sim.load_pattern(&Pattern::blinker());

    assert!(matches!(sim.tick()?, TickOutcome::Stepped { generation: 1, population: 3 }));
    assert!(matches!(sim.tick()?, TickOutcome::Stepped { generation: 2, population: 3 }));

    let TickOutcome::CycleDetected(cycle) = sim.tick()? else {
        panic!("expected the blinker to repeat at generation 3");
    };
    assert_eq!(cycle.period, 2);
    assert_eq!(cycle.first_seen, 1);
    assert_eq!(cycle.detected_at, 3);
    assert!(!cycle.is_still_life());
    Ok(())
}

#[test]
fn test_block_reports_still_life() -> Result<()> {
    let mut sim = Simulation::new(empty_config(20, 20))?;
    sim.load_pattern(&Pattern::new("Block", vec![(0, 0), (1, 0), (0, 1), (1, 1)]));

    let cycle = sim.run(10)?.expect("block is stable");
    assert!(cycle.is_still_life());
    assert_eq!(sim.cycle(), Some(cycle));
    Ok(())
}

#[test]
fn test_halted_simulation_does_not_step() -> Result<()> {
    let mut sim = Simulation::new(empty_config(20, 20))?;
    sim.load_pattern(&Pattern::blinker());
    sim.run(10)?;
    let generation = sim.engine().generation();

    assert_eq!(sim.tick()?, TickOutcome::Halted);
    assert_eq!(sim.run(5)?, sim.cycle());
    assert_eq!(sim.engine().generation(), generation);
    Ok(())
}

#[test]
fn test_glider_cycle_on_small_torus() -> Result<()> {
    // On a 10x10 torus the glider returns to its own state after 40 steps.
    let mut sim = Simulation::new(empty_config(10, 10))?;
    sim.load_pattern(&Pattern::glider());

    let cycle = sim.run(200)?.expect("glider laps the torus");
    assert_eq!(cycle.period, 40);
    Ok(())
}

#[test]
fn test_run_respects_limit() -> Result<()> {
    let mut sim = Simulation::new(empty_config(64, 64))?;
    sim.load_pattern(&Pattern::gosper_glider_gun());

    assert_eq!(sim.run(25)?, None);
    assert_eq!(sim.engine().generation(), 25);
    Ok(())
}

#[test]
fn test_reset_uses_seeded_density() -> Result<()> {
    let config = SimulationConfig {
        width: 30,
        height: 30,
        seed: 17,
        initial_density: Some(0.5),
        ..Default::default()
    };
    let sim_a = Simulation::new(config.clone())?;
    let sim_b = Simulation::new(config)?;
    assert_eq!(sim_a.engine().grid(), sim_b.engine().grid());
    assert!(sim_a.engine().population() > 0);
    Ok(())
}

#[test]
fn test_clear_forgets_history() -> Result<()> {
    let mut sim = Simulation::new(SimulationConfig {
        width: 32,
        height: 32,
        ..Default::default()
    })?;
    sim.run(5)?;
    assert!(!sim.history().is_empty());

    sim.clear();
    assert!(sim.history().is_empty());
    assert_eq!(sim.engine().population(), 0);
    assert_eq!(sim.engine().generation(), 0);
    Ok(())
}

#[test]
fn test_history_flush_loses_long_cycle() -> Result<()> {
    // Capacity 5 flushes before the glider's 40-step lap can be matched.
    let mut engine = LifeEngine::new(10, 10)?;
    engine.load_pattern(&Pattern::glider(), 0, 0);
    let mut history = GenerationHistory::new(5);

    for _ in 0..200 {
        engine.step();
        assert!(history
            .observe(fingerprint(engine.grid()), engine.generation())
            .is_none());
        assert!(history.len() <= 6);
    }
    Ok(())
}

// =============================================================================
// Recording
// =============================================================================

#[test]
fn test_recording_one_frame_per_tick() -> Result<()> {
    let mut sim = Simulation::new(SimulationConfig {
        width: 64,
        height: 64,
        seed: 4,
        initial_density: Some(0.3),
        ..Default::default()
    })?;

    sim.start_recording();
    assert!(sim.is_recording());
    for _ in 0..5 {
        sim.tick()?;
    }
    let log = sim.stop_recording().expect("recording was started");
    assert!(!sim.is_recording());

    assert_eq!(log.len(), 5);
    assert_eq!(log.box_sizes, vec![2, 4, 8, 16, 32]);
    for (i, frame) in log.frames.iter().enumerate() {
        assert_eq!(frame.generation, i as u64 + 1);
        assert_eq!(frame.box_counts.len(), 5);
    }
    let last = log.frames.last().unwrap();
    assert_eq!(last.population, sim.engine().population());
    assert_eq!(last, &sim.analysis());
    Ok(())
}

#[test]
fn test_no_frames_without_recording() -> Result<()> {
    let mut sim = Simulation::new(empty_config(16, 16))?;
    sim.load_pattern(&Pattern::glider());
    sim.run(3)?;
    assert!(sim.stop_recording().is_none());
    Ok(())
}

#[test]
fn test_delimited_export_to_file() -> Result<()> {
    let mut sim = Simulation::new(empty_config(32, 32))?;
    sim.load_pattern(&Pattern::r_pentomino());
    sim.start_recording();
    sim.run(3)?;
    let log = sim.stop_recording().unwrap();

    let path = std::env::temp_dir().join(format!("lifescope_log_{}.csv", std::process::id()));
    log.write_delimited(&path, ';')?;
    let text = std::fs::read_to_string(&path)?;
    std::fs::remove_file(&path)?;

    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(
        lines[0],
        "Generation;Population;Entropy_2x2;Dimension;BoxCount_s2;BoxCount_s4;BoxCount_s8;BoxCount_s16;BoxCount_s32"
    );
    assert!(lines[1].starts_with("1;"));
    assert_eq!(lines[3].split(';').count(), 9);
    Ok(())
}

#[test]
fn test_log_json_round_trip() -> Result<()> {
    let mut sim = Simulation::new(empty_config(24, 24))?;
    sim.load_pattern(&Pattern::glider());
    sim.start_recording();
    sim.run(4)?;
    let log = sim.stop_recording().unwrap();

    let restored = AnalysisLog::from_json(&log.to_json()?)?;
    assert_eq!(restored.box_sizes, log.box_sizes);
    assert_eq!(restored.len(), log.len());
    for (a, b) in restored.frames.iter().zip(&log.frames) {
        assert_eq!((a.generation, a.population), (b.generation, b.population));
        assert_eq!(a.box_counts, b.box_counts);
        assert_relative_eq!(a.entropy, b.entropy, epsilon = 1e-12);
        assert_relative_eq!(a.dimension, b.dimension, epsilon = 1e-12);
    }
    Ok(())
}
