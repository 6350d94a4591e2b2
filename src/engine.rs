//! LifeEngine - Double-buffered B3/S23 Game of Life on a toroidal grid.
//!
//! The engine owns two `Grid` buffers of identical size. `step()` evaluates
//! every cell of the active buffer into the scratch buffer, then swaps the
//! two in O(1). The active buffer is only ever read during a step, so cells
//! never see partially updated neighbors.
//!
//! # Parallel Step
//!
//! The scratch buffer is split into disjoint rows with rayon's
//! `par_chunks_mut`. Each worker reads the shared immutable active buffer,
//! writes only its own row, and returns that row's live count. The per-row
//! counts are summed after the parallel pass, so no counter is shared
//! between workers.
//!
//! # Examples
//!
//! ```
//! use lifescope::{LifeEngine, Pattern};
//!
//! let mut engine = LifeEngine::new(16, 16).unwrap();
//! engine.load_pattern(&Pattern::blinker(), 4, 4);
//!
//! engine.step();
//! assert_eq!(engine.generation(), 1);
//! assert_eq!(engine.population(), 3);
//! assert!(engine.grid().get(5, 3) && engine.grid().get(5, 5));
//! ```

use crate::error::{LifeError, Result};
use crate::grid::Grid;
use crate::pattern::Pattern;
use crate::utils::{checked_coords, wrap};
use log::{debug, trace};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

/// B3/S23: a live cell survives with 2 or 3 neighbors, a dead cell is born
/// with exactly 3.
#[inline(always)]
fn next_state(alive: bool, neighbors: u8) -> bool {
    matches!((alive, neighbors), (true, 2) | (_, 3))
}

/// Grid Engine: owns the cell state and advances it one generation at a time.
#[derive(Clone, Debug)]
pub struct LifeEngine {
    /// Active generation
    current: Grid,
    /// Scratch buffer for the next generation
    next: Grid,

    generation: u64,
    population: usize,

    /// Seeded random number generator for `randomize`
    rng: StdRng,
    seed: u64,
}

impl LifeEngine {
    /// Create an all-dead engine seeded with 0.
    ///
    /// # Errors
    ///
    /// Returns `LifeError::InvalidDimension` if `width` or `height` is zero.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        Self::with_seed(width, height, 0)
    }

    /// Create an all-dead engine whose `randomize` draws from `seed`.
    ///
    /// # Examples
    ///
    /// ```
    /// use lifescope::LifeEngine;
    ///
    /// let mut a = LifeEngine::with_seed(32, 32, 7).unwrap();
    /// let mut b = LifeEngine::with_seed(32, 32, 7).unwrap();
    /// a.randomize(0.3).unwrap();
    /// b.randomize(0.3).unwrap();
    /// assert_eq!(a.grid(), b.grid());
    /// ```
    pub fn with_seed(width: usize, height: usize, seed: u64) -> Result<Self> {
        let current = Grid::new(width, height)?;
        let next = current.clone();
        debug!("created {}x{} engine (seed {})", width, height, seed);

        Ok(Self {
            current,
            next,
            generation: 0,
            population: 0,
            rng: StdRng::seed_from_u64(seed),
            seed,
        })
    }

    /// Grid width.
    #[inline]
    pub fn width(&self) -> usize {
        self.current.width()
    }

    /// Grid height.
    #[inline]
    pub fn height(&self) -> usize {
        self.current.height()
    }

    /// Number of steps since construction, `clear`, `randomize` or
    /// `load_pattern`.
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Live cells in the active generation.
    #[inline]
    pub fn population(&self) -> usize {
        self.population
    }

    /// Seed the RNG was last created from.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Read-only snapshot of the active generation.
    ///
    /// The borrow ends before the next mutating call, so the snapshot can't
    /// observe a buffer being rewritten.
    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.current
    }

    /// State of an in-range cell, `None` outside the grid.
    pub fn cell(&self, x: i64, y: i64) -> Option<bool> {
        checked_coords(x, y, self.width(), self.height()).map(|(x, y)| self.current.get(x, y))
    }

    /// Recreate the RNG from a new seed.
    pub fn reseed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
        self.seed = seed;
    }

    fn recount_population(&mut self) {
        self.population = self.current.population();
    }

    // =========================================================================
    // Mutation
    // =========================================================================

    /// Set one cell. Coordinates outside the grid are ignored.
    pub fn set_cell(&mut self, x: i64, y: i64, alive: bool) {
        let Some((x, y)) = checked_coords(x, y, self.width(), self.height()) else {
            trace!("ignoring out-of-bounds edit at ({}, {})", x, y);
            return;
        };
        self.current.set(x, y, alive);
        self.recount_population();
    }

    /// Kill every cell in both buffers and reset the counters.
    pub fn clear(&mut self) {
        self.current.clear();
        self.next.clear();
        self.generation = 0;
        self.population = 0;
        debug!("cleared grid");
    }

    /// Make each cell alive independently with the given probability.
    ///
    /// Resets the generation counter; population is recounted from the new
    /// state.
    ///
    /// # Errors
    ///
    /// Returns `LifeError::InvalidProbability` if `probability` is NaN or
    /// outside `[0, 1]`. The grid is left untouched in that case.
    pub fn randomize(&mut self, probability: f64) -> Result<()> {
        if !(0.0..=1.0).contains(&probability) {
            return Err(LifeError::InvalidProbability(probability));
        }

        self.generation = 0;
        let rng = &mut self.rng;
        for cell in self.current.cells_mut() {
            *cell = rng.gen_bool(probability);
        }
        self.recount_population();

        debug!(
            "randomized grid with p={} -> population {}",
            probability, self.population
        );
        Ok(())
    }

    /// Clear the grid, then stamp `pattern` with its anchor at
    /// `(offset_x, offset_y)`, wrapping toroidally.
    pub fn load_pattern(&mut self, pattern: &Pattern, offset_x: i64, offset_y: i64) {
        self.clear();
        let (width, height) = (self.width(), self.height());
        for &(dx, dy) in pattern.cells() {
            let x = wrap(offset_x.saturating_add(dx), width);
            let y = wrap(offset_y.saturating_add(dy), height);
            self.current.set(x, y, true);
        }
        self.recount_population();

        debug!(
            "loaded pattern '{}' at ({}, {}) -> population {}",
            pattern.name(),
            offset_x,
            offset_y,
            self.population
        );
    }

    // =========================================================================
    // Generation Step
    // =========================================================================

    /// Advance one generation.
    ///
    /// Blocks until every row has been evaluated; on return the new
    /// generation is active and `population()` matches it.
    pub fn step(&mut self) {
        let width = self.width();
        let current = &self.current;

        let live: usize = self
            .next
            .cells_mut()
            .par_chunks_mut(width)
            .enumerate()
            .map(|(y, row)| {
                let mut row_live = 0;
                for (x, cell) in row.iter_mut().enumerate() {
                    *cell = next_state(current.get(x, y), current.live_neighbors(x, y));
                    row_live += *cell as usize;
                }
                row_live
            })
            .sum();

        std::mem::swap(&mut self.current, &mut self.next);
        self.generation += 1;
        self.population = live;

        trace!(
            "generation {} -> population {}",
            self.generation,
            self.population
        );
    }

    /// Advance `n` generations.
    pub fn step_n(&mut self, n: usize) {
        for _ in 0..n {
            self.step();
        }
    }
}
