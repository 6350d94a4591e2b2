//! Simulation - The driver loop around a `LifeEngine`.
//!
//! A `Simulation` owns the engine, the cycle history and an optional
//! analysis recorder, and advances them together one tick at a time:
//!
//! 1. step the engine
//! 2. record an analysis frame (while recording)
//! 3. fingerprint the new generation and look it up in the history
//!
//! Once a repetition is found the simulation halts: further ticks return
//! `TickOutcome::Halted` until the state is edited, cleared, reset or
//! replaced by a pattern, all of which also forget the history.
//!
//! # Example
//!
//! ```
//! use lifescope::{Pattern, Simulation, SimulationConfig, TickOutcome};
//!
//! # fn main() -> lifescope::Result<()> {
//! let config = SimulationConfig {
//!     width: 32,
//!     height: 32,
//!     initial_density: None,
//!     ..Default::default()
//! };
//! let mut sim = Simulation::new(config)?;
//! sim.load_pattern(&Pattern::blinker());
//!
//! let cycle = sim.run(100)?.expect("blinker oscillates");
//! assert_eq!(cycle.period, 2);
//! assert_eq!(sim.tick()?, TickOutcome::Halted);
//! # Ok(())
//! # }
//! ```

use crate::analysis::fingerprint;
use crate::analysis_log::{AnalysisFrame, AnalysisLog, AnalysisRecorder};
use crate::config::SimulationConfig;
use crate::engine::LifeEngine;
use crate::history::{Cycle, GenerationHistory};
use crate::pattern::Pattern;
use crate::Result;
use log::{debug, info};

/// Result of one `Simulation::tick`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// A new generation was computed and has not been seen before
    Stepped { generation: u64, population: usize },
    /// The new generation repeats an earlier one; the simulation halts
    CycleDetected(Cycle),
    /// A cycle was already detected; nothing was computed
    Halted,
}

/// Engine + cycle history + analysis recorder driven as one unit.
#[derive(Debug, Clone)]
pub struct Simulation {
    config: SimulationConfig,
    engine: LifeEngine,
    history: GenerationHistory,
    recorder: AnalysisRecorder,
    cycle: Option<Cycle>,
}

impl Simulation {
    /// Validate `config`, build the engine and apply the initial density.
    pub fn new(config: SimulationConfig) -> Result<Self> {
        config.validate()?;
        let engine = LifeEngine::with_seed(config.width, config.height, config.seed)?;
        let history = GenerationHistory::new(config.history_capacity);

        let mut sim = Self {
            config,
            engine,
            history,
            recorder: AnalysisRecorder::new(),
            cycle: None,
        };
        sim.reset()?;
        Ok(sim)
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn engine(&self) -> &LifeEngine {
        &self.engine
    }

    /// The detected cycle, if the simulation has halted.
    pub fn cycle(&self) -> Option<Cycle> {
        self.cycle
    }

    pub fn history(&self) -> &GenerationHistory {
        &self.history
    }

    fn reset_analysis_state(&mut self) {
        self.history.clear();
        self.cycle = None;
    }

    // =========================================================================
    // State Changes
    // =========================================================================

    /// Return to the configured initial state: randomized with
    /// `initial_density`, or empty if there is none.
    pub fn reset(&mut self) -> Result<()> {
        match self.config.initial_density {
            Some(p) => self.engine.randomize(p)?,
            None => self.engine.clear(),
        }
        self.reset_analysis_state();
        Ok(())
    }

    /// Kill every cell.
    pub fn clear(&mut self) {
        self.engine.clear();
        self.reset_analysis_state();
    }

    /// Replace the grid with `pattern` stamped at the configured anchor.
    pub fn load_pattern(&mut self, pattern: &Pattern) {
        let (x, y) = self.config.anchor();
        self.engine.load_pattern(pattern, x, y);
        self.reset_analysis_state();
    }

    /// Edit one cell; out-of-range coordinates leave the grid untouched.
    pub fn set_cell(&mut self, x: i64, y: i64, alive: bool) {
        self.engine.set_cell(x, y, alive);
        self.reset_analysis_state();
    }

    // =========================================================================
    // Driving
    // =========================================================================

    /// Advance one generation and check it for repetition.
    pub fn tick(&mut self) -> Result<TickOutcome> {
        if self.cycle.is_some() {
            return Ok(TickOutcome::Halted);
        }

        self.engine.step();

        if self.recorder.is_recording() {
            let frame = self.analysis();
            self.recorder.record(frame);
        }

        let generation = self.engine.generation();
        if let Some(cycle) = self.history.observe(fingerprint(self.engine.grid()), generation) {
            if cycle.is_still_life() {
                info!("still life reached at generation {}", generation);
            } else {
                info!(
                    "cycle of period {} detected at generation {} (first seen at {})",
                    cycle.period, generation, cycle.first_seen
                );
            }
            self.cycle = Some(cycle);
            return Ok(TickOutcome::CycleDetected(cycle));
        }

        Ok(TickOutcome::Stepped {
            generation,
            population: self.engine.population(),
        })
    }

    /// Tick until a cycle is detected or `max_ticks` generations have run.
    pub fn run(&mut self, max_ticks: usize) -> Result<Option<Cycle>> {
        for _ in 0..max_ticks {
            match self.tick()? {
                TickOutcome::Stepped { .. } => {}
                TickOutcome::CycleDetected(cycle) => return Ok(Some(cycle)),
                TickOutcome::Halted => break,
            }
        }
        Ok(self.cycle)
    }

    // =========================================================================
    // Analysis
    // =========================================================================

    /// Measure the current generation with the configured parameters.
    pub fn analysis(&self) -> AnalysisFrame {
        AnalysisFrame::capture(
            &self.engine,
            self.config.entropy_block_size,
            &self.config.box_sizes,
        )
    }

    /// True on generations where displayed analysis should be refreshed.
    pub fn analysis_due(&self) -> bool {
        self.engine.generation() % self.config.analysis_interval == 0
    }

    /// Start recording one frame per tick into a fresh log.
    pub fn start_recording(&mut self) {
        debug!("analysis recording started");
        self.recorder.start(
            self.config.entropy_block_size,
            self.config.box_sizes.clone(),
        );
    }

    /// Stop recording and return the log.
    pub fn stop_recording(&mut self) -> Option<AnalysisLog> {
        let log = self.recorder.stop();
        if let Some(log) = &log {
            debug!("analysis recording stopped after {} frames", log.len());
        }
        log
    }

    pub fn is_recording(&self) -> bool {
        self.recorder.is_recording()
    }
}
