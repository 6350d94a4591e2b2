//! Grid - Fixed-size toroidal boolean cell buffer.
//!
//! This module provides the `Grid` type used both as the engine's double
//! buffer and as the read-only snapshot handed to the analysis measures.
//!
//! # Design
//!
//! - Row-major `Vec<bool>` storage: cell `(x, y)` lives at `y * width + x`
//! - Dimensions are fixed at construction and never change
//! - Rows are contiguous so the engine can split the buffer into disjoint
//!   row slices for parallel evaluation
//! - `to_bits()` packs the cells row-major into a dense `BitVec` for
//!   fingerprinting
//!
//! # Examples
//!
//! ```
//! use lifescope::Grid;
//!
//! let mut grid = Grid::new(8, 8).unwrap();
//! grid.set(1, 0, true);
//! grid.set(1, 1, true);
//! grid.set(1, 2, true);
//!
//! assert_eq!(grid.population(), 3);
//! assert_eq!(grid.live_neighbors(0, 1), 3);
//! assert_eq!(grid.live_neighbors(1, 1), 2);
//! // Wraparound: row 7 sits directly above row 0
//! assert_eq!(grid.live_neighbors(1, 7), 1);
//! ```

use crate::error::{LifeError, Result};
use crate::utils::{wrap, wrap_dec, wrap_inc};
use bitvec::prelude::*;
use std::fmt;

/// A `width x height` toroidal grid of live/dead cells.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// Create an all-dead grid.
    ///
    /// # Errors
    ///
    /// Returns `LifeError::InvalidDimension` if either dimension is zero or
    /// `width * height` overflows.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        let len = width
            .checked_mul(height)
            .filter(|&len| len > 0)
            .ok_or(LifeError::InvalidDimension { width, height })?;

        Ok(Self {
            width,
            height,
            cells: vec![false; len],
        })
    }

    /// Grid width in cells.
    #[inline(always)]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height in cells.
    #[inline(always)]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells (`width * height`).
    #[inline(always)]
    pub fn num_cells(&self) -> usize {
        self.cells.len()
    }

    #[inline(always)]
    fn index(&self, x: usize, y: usize) -> usize {
        assert!(
            x < self.width && y < self.height,
            "cell ({}, {}) out of bounds ({}x{})",
            x,
            y,
            self.width,
            self.height
        );
        y * self.width + x
    }

    /// Get the state of an in-range cell.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> bool {
        self.cells[self.index(x, y)]
    }

    /// Get the state of a cell with toroidal wraparound on both axes.
    #[inline]
    pub fn get_wrapped(&self, x: i64, y: i64) -> bool {
        self.get(wrap(x, self.width), wrap(y, self.height))
    }

    /// Set the state of an in-range cell.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, alive: bool) {
        let idx = self.index(x, y);
        self.cells[idx] = alive;
    }

    /// Kill every cell.
    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    /// Row-major view of all cells.
    #[inline]
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// Mutable row-major view, used by the engine for in-place rewrites.
    #[inline]
    pub(crate) fn cells_mut(&mut self) -> &mut [bool] {
        &mut self.cells
    }

    /// One row of cells.
    #[inline]
    pub fn row(&self, y: usize) -> &[bool] {
        let start = y * self.width;
        &self.cells[start..start + self.width]
    }

    /// Count live cells by full scan.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// Returns true if no cell is alive.
    pub fn is_extinct(&self) -> bool {
        !self.cells.iter().any(|&alive| alive)
    }

    /// Iterate over the coordinates of live cells in row-major order.
    pub fn live_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &alive)| alive)
            .map(move |(i, _)| (i % width, i / width))
    }

    /// Count the live cells among the 8 toroidal neighbors of `(x, y)`.
    ///
    /// On axes of length 1 or 2 the same cell is visited more than once; a
    /// 1x1 grid's only cell is its own neighbor eight times.
    #[inline]
    pub fn live_neighbors(&self, x: usize, y: usize) -> u8 {
        let rows = [
            wrap_dec(y, self.height),
            y,
            wrap_inc(y, self.height),
        ];
        let cols = [wrap_dec(x, self.width), x, wrap_inc(x, self.width)];

        let mut count = 0u8;
        for (ri, &ny) in rows.iter().enumerate() {
            let row = self.row(ny);
            for (ci, &nx) in cols.iter().enumerate() {
                if ri == 1 && ci == 1 {
                    continue;
                }
                count += row[nx] as u8;
            }
        }
        count
    }

    /// Pack every cell row-major into a dense bit sequence (LSB-first bytes).
    ///
    /// Padding bits in the last byte are always zero, so the raw bytes are a
    /// stable encoding of the grid state.
    pub fn to_bits(&self) -> BitVec<u8, Lsb0> {
        let mut bits = BitVec::<u8, Lsb0>::repeat(false, self.cells.len());
        for (i, _) in self.cells.iter().enumerate().filter(|(_, &alive)| alive) {
            bits.set(i, true);
        }
        bits
    }
}

impl fmt::Display for Grid {
    /// Render as rows of `#` (alive) and `.` (dead).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            for &alive in self.row(y) {
                f.write_str(if alive { "#" } else { "." })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
