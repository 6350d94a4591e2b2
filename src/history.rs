//! GenerationHistory - Bounded fingerprint map for cycle detection.
//!
//! The driver fingerprints every generation and asks the history whether the
//! state has been seen before. A hit at generation `g_prev` means the grid
//! repeats with period `current - g_prev`; period 1 is a still life.
//!
//! # Eviction
//!
//! Memory is bounded by flushing the whole map once it holds more than
//! `capacity` entries. A cycle whose first occurrence was flushed goes
//! unnoticed until it has repeated within one window, so very long
//! transients may never be reported.
//!
//! # Examples
//!
//! ```
//! use lifescope::analysis::fingerprint;
//! use lifescope::{GenerationHistory, LifeEngine, Pattern};
//!
//! let mut engine = LifeEngine::new(10, 10).unwrap();
//! engine.load_pattern(&Pattern::blinker(), 3, 3);
//! let mut history = GenerationHistory::new(2000);
//!
//! let mut cycle = None;
//! while cycle.is_none() {
//!     engine.step();
//!     cycle = history.observe(fingerprint(engine.grid()), engine.generation());
//! }
//! assert_eq!(cycle.unwrap().period, 2);
//! ```

use crate::analysis::Fingerprint;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Default number of fingerprints kept before the map is flushed.
pub const DEFAULT_HISTORY_CAPACITY: usize = 2000;

/// A detected repetition of grid state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cycle {
    /// Generations between the two occurrences
    pub period: u64,
    /// Generation at which the state was first recorded
    pub first_seen: u64,
    /// Generation at which the repeat was observed
    pub detected_at: u64,
}

impl Cycle {
    /// True for a fixed point (the grid no longer changes).
    pub fn is_still_life(&self) -> bool {
        self.period == 1
    }
}

/// Map from fingerprint to the generation it was first observed at.
#[derive(Clone, Debug)]
pub struct GenerationHistory {
    capacity: usize,
    seen: HashMap<Fingerprint, u64>,
}

impl GenerationHistory {
    /// Create an empty history that flushes after `capacity` entries.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            seen: HashMap::new(),
        }
    }

    /// Look up `fingerprint`; record it at `generation` if unseen.
    ///
    /// Returns the cycle on a hit and leaves the map unchanged. On a miss
    /// the map is cleared first if it already exceeds its capacity.
    pub fn observe(&mut self, fingerprint: Fingerprint, generation: u64) -> Option<Cycle> {
        if let Some(&first_seen) = self.seen.get(&fingerprint) {
            return Some(Cycle {
                period: generation.saturating_sub(first_seen),
                first_seen,
                detected_at: generation,
            });
        }

        if self.seen.len() > self.capacity {
            debug!(
                "history exceeded {} entries at generation {}, flushing",
                self.capacity, generation
            );
            self.seen.clear();
        }
        self.seen.insert(fingerprint, generation);
        None
    }

    /// Forget every recorded fingerprint.
    pub fn clear(&mut self) {
        self.seen.clear();
    }

    /// Number of recorded fingerprints.
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    /// Returns true if nothing is recorded.
    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }

    /// Flush threshold.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for GenerationHistory {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_CAPACITY)
    }
}
