//! Simulation configuration.
//!
//! `SimulationConfig` holds every tunable of a simulation session: grid
//! size, RNG seed, initial density, analysis parameters and the history
//! bound. It serializes with serde, so sessions can be configured from a
//! JSON file; missing fields fall back to the defaults.
//!
//! # Example
//!
//! ```
//! use lifescope::SimulationConfig;
//!
//! let config = SimulationConfig::from_json_str(r#"{ "width": 64, "height": 48, "seed": 9 }"#).unwrap();
//! assert_eq!(config.width, 64);
//! assert_eq!(config.entropy_block_size, 2);
//! assert_eq!(config.box_sizes, vec![2, 4, 8, 16, 32]);
//! ```

use crate::analysis::DEFAULT_BOX_SIZES;
use crate::history::DEFAULT_HISTORY_CAPACITY;
use crate::{LifeError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Parameters of a simulation session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub width: usize,
    pub height: usize,
    /// Seed of the engine's RNG
    pub seed: u64,
    /// Live-cell probability for the initial (and reset) state; `None`
    /// starts from an empty grid
    pub initial_density: Option<f64>,
    /// Block side for `shannon_entropy`
    pub entropy_block_size: usize,
    /// Box sides for the fractal dimension and the logged box counts
    pub box_sizes: Vec<usize>,
    /// Fingerprints kept before the history is flushed
    pub history_capacity: usize,
    /// Displayed analysis is refreshed every this many generations
    pub analysis_interval: u64,
    /// Where patterns are stamped; `None` uses `(width / 3, height / 3)`
    pub pattern_anchor: Option<(i64, i64)>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            width: 400,
            height: 300,
            seed: 0,
            initial_density: Some(0.5),
            entropy_block_size: 2,
            box_sizes: DEFAULT_BOX_SIZES.to_vec(),
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            analysis_interval: 10,
            pattern_anchor: None,
        }
    }
}

impl SimulationConfig {
    /// Check every field, reporting the first problem found.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 || self.width.checked_mul(self.height).is_none() {
            return Err(LifeError::InvalidDimension {
                width: self.width,
                height: self.height,
            });
        }
        if let Some(p) = self.initial_density {
            if !(0.0..=1.0).contains(&p) {
                return Err(LifeError::InvalidProbability(p));
            }
        }
        if self.entropy_block_size == 0 {
            return Err(LifeError::InvalidParameter(
                "entropy_block_size must be at least 1".into(),
            ));
        }
        if self.box_sizes.contains(&0) {
            return Err(LifeError::InvalidParameter(
                "box_sizes must all be at least 1".into(),
            ));
        }
        if self.history_capacity == 0 {
            return Err(LifeError::InvalidParameter(
                "history_capacity must be at least 1".into(),
            ));
        }
        if self.analysis_interval == 0 {
            return Err(LifeError::InvalidParameter(
                "analysis_interval must be at least 1".into(),
            ));
        }
        Ok(())
    }

    /// Anchor used by `Simulation::load_pattern`.
    pub fn anchor(&self) -> (i64, i64) {
        self.pattern_anchor
            .unwrap_or((self.width as i64 / 3, self.height as i64 / 3))
    }

    /// Parse and validate a JSON configuration.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON configuration file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
