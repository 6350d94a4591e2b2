//! Lifescope - Toroidal Game of Life Engine with Structural Analysis
//!
//! Lifescope runs Conway's Game of Life (B3/S23) on a fixed-size grid whose
//! edges wrap around, and measures the structure of each generation:
//! population, block-pattern entropy, box-counting fractal dimension, and a
//! content fingerprint used to detect when the simulation starts repeating.
//!
//! # Architecture
//!
//! - **Grid**: fixed-size row-major cell buffer with toroidal neighbor counts
//! - **LifeEngine**: double-buffered generation stepping, parallel across rows
//! - **analysis**: stateless measures over a `&Grid` snapshot
//! - **GenerationHistory**: bounded fingerprint map for cycle detection
//! - **Simulation**: driver tying engine, history and analysis recording together
//!
//! # Examples
//!
//! ## Stepping and Measuring
//!
//! ```
//! use lifescope::analysis::{fractal_dimension, shannon_entropy};
//! use lifescope::LifeEngine;
//!
//! let mut engine = LifeEngine::with_seed(128, 128, 42).unwrap();
//! engine.randomize(0.3).unwrap();
//!
//! for _ in 0..10 {
//!     engine.step();
//! }
//! assert_eq!(engine.generation(), 10);
//!
//! let entropy = shannon_entropy(engine.grid(), 2);
//! let dimension = fractal_dimension(engine.grid());
//! assert!(entropy >= 0.0 && entropy <= 4.0); // at most 15 distinct non-empty 2x2 blocks
//! assert!(dimension >= 0.0);
//! ```
//!
//! ## Detecting Cycles
//!
//! ```
//! use lifescope::analysis::fingerprint;
//! use lifescope::{LifeEngine, Pattern};
//!
//! let mut engine = LifeEngine::new(12, 12).unwrap();
//! engine.load_pattern(&Pattern::blinker(), 4, 4);
//!
//! let gen0 = fingerprint(engine.grid());
//! engine.step();
//! engine.step();
//! assert_eq!(fingerprint(engine.grid()), gen0);
//! ```
//!
//! # Concurrency
//!
//! A single caller drives the engine one generation at a time. Inside
//! `LifeEngine::step` rows are evaluated on the rayon thread pool; the call
//! returns only after every row is done, so callers always observe a
//! complete generation.

// Module declarations
pub mod error;
pub mod utils;

pub mod engine;
pub mod grid;
pub mod pattern;

pub mod analysis;
pub mod analysis_log;
pub mod history;

pub mod config;
pub mod simulation;

// Re-exports for convenient access
pub use error::{LifeError, Result};

pub use engine::LifeEngine;
pub use grid::Grid;
pub use pattern::Pattern;

pub use analysis::Fingerprint;
pub use analysis_log::{AnalysisFrame, AnalysisLog, AnalysisRecorder};
pub use history::{Cycle, GenerationHistory};

pub use config::SimulationConfig;
pub use simulation::{Simulation, TickOutcome};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = "Lifescope";

/// Get version string
pub fn version() -> String {
    format!("{} v{}", NAME, VERSION)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        let ver = version();
        assert!(ver.contains("Lifescope"));
        assert!(ver.contains("1.0.0"));
    }

    #[test]
    fn test_re_exports() {
        let _grid = Grid::new(4, 4).unwrap();
        let _result: Result<()> = Ok(());
        assert_eq!(analysis::DEFAULT_BOX_SIZES.len(), 5);
    }
}
