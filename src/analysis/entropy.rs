//! Block-pattern Shannon entropy.

use crate::grid::Grid;
use bitvec::prelude::*;
use itertools::iproduct;
use std::collections::HashMap;

/// Shannon entropy (bits) of the distribution of `block_size x block_size`
/// cell patterns.
///
/// The grid is tiled with non-overlapping blocks starting at `(0, 0)`;
/// blocks that run past the right/bottom edge sample wrapped cells. Each
/// block is keyed by its row-major bit sequence. Blocks without any live
/// cell are skipped entirely, so the distribution covers active regions
/// only.
///
/// Returns `0.0` for an extinct grid, a zero block size, or when every
/// non-empty block shows the same pattern.
///
/// A block wider or taller than the grid repeats itself along that axis, so
/// its key only needs one period of columns or rows; blocks compare equal
/// exactly when their truncated keys do.
///
/// # Examples
///
/// ```
/// use lifescope::analysis::shannon_entropy;
/// use lifescope::Grid;
///
/// let mut grid = Grid::new(4, 4).unwrap();
/// grid.set(0, 0, true); // pattern "1000"
/// grid.set(3, 3, true); // pattern "0001"
/// assert_eq!(shannon_entropy(&grid, 2), 1.0);
/// ```
pub fn shannon_entropy(grid: &Grid, block_size: usize) -> f64 {
    if block_size == 0 || grid.is_extinct() {
        return 0.0;
    }

    let (width, height) = (grid.width(), grid.height());
    if block_size >= width && block_size >= height {
        // One block covering the whole torus.
        return 0.0;
    }

    let (key_cols, key_rows) = (block_size.min(width), block_size.min(height));
    let mut counts: HashMap<BitVec<u64, Lsb0>, usize> = HashMap::new();
    let mut active_blocks = 0usize;

    for (by, bx) in iproduct!(
        (0..height).step_by(block_size),
        (0..width).step_by(block_size)
    ) {
        let mut key: BitVec<u64, Lsb0> = BitVec::with_capacity(key_cols * key_rows);
        for j in 0..key_rows {
            let row = grid.row((by + j) % height);
            for i in 0..key_cols {
                key.push(row[(bx + i) % width]);
            }
        }

        if key.not_any() {
            continue;
        }
        active_blocks += 1;
        *counts.entry(key).or_insert(0) += 1;
    }

    if active_blocks == 0 {
        return 0.0;
    }

    let total = active_blocks as f64;
    -counts
        .values()
        .map(|&count| {
            let p = count as f64 / total;
            p * p.log2()
        })
        .sum::<f64>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_empty_grid() {
        let grid = Grid::new(8, 8).unwrap();
        assert_eq!(shannon_entropy(&grid, 2), 0.0);
    }

    #[test]
    fn test_zero_block_size() {
        let mut grid = Grid::new(8, 8).unwrap();
        grid.set(1, 1, true);
        assert_eq!(shannon_entropy(&grid, 0), 0.0);
    }

    #[test]
    fn test_block_larger_than_grid() {
        let mut grid = Grid::new(4, 4).unwrap();
        grid.set(2, 1, true);
        assert_eq!(shannon_entropy(&grid, 4), 0.0);
        assert_eq!(shannon_entropy(&grid, 1usize << 33), 0.0);
        assert_eq!(shannon_entropy(&grid, usize::MAX), 0.0);
    }

    #[test]
    fn test_block_wider_than_grid() {
        // 4x16 grid, 8x8 blocks: one column of blocks at y = 0 and y = 8,
        // each sampling the 4 columns twice.
        let mut grid = Grid::new(4, 16).unwrap();
        grid.set(1, 1, true);
        grid.set(2, 10, true);
        assert_abs_diff_eq!(shannon_entropy(&grid, 8), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(shannon_entropy(&grid, 1usize << 33), 0.0);

        // Same pattern in both blocks
        let mut grid = Grid::new(4, 16).unwrap();
        grid.set(1, 1, true);
        grid.set(1, 9, true);
        assert_abs_diff_eq!(shannon_entropy(&grid, 8), 0.0);
    }

    #[test]
    fn test_identical_blocks_have_zero_entropy() {
        let mut grid = Grid::new(8, 8).unwrap();
        for (x, y) in [(0, 0), (2, 2), (4, 6), (6, 0)] {
            grid.set(x, y, true);
        }
        assert_abs_diff_eq!(shannon_entropy(&grid, 2), 0.0);
    }

    #[test]
    fn test_empty_blocks_are_excluded() {
        // Two distinct patterns, one block each, surrounded by empty blocks.
        let mut grid = Grid::new(16, 16).unwrap();
        grid.set(0, 0, true);
        grid.set(9, 9, true);
        assert_abs_diff_eq!(shannon_entropy(&grid, 2), 1.0);
    }

    #[test]
    fn test_uneven_distribution() {
        // Patterns with counts 2:1:1 -> H = 1.5 bits
        let mut grid = Grid::new(8, 2).unwrap();
        grid.set(0, 0, true);
        grid.set(2, 0, true);
        grid.set(5, 0, true);
        grid.set(6, 1, true);
        assert_abs_diff_eq!(shannon_entropy(&grid, 2), 1.5, epsilon = 1e-12);
    }

    #[test]
    fn test_blocks_wrap_past_edge() {
        // 3x3 grid, 2x2 blocks: the block at (2, 2) samples (0, 0).
        let mut grid = Grid::new(3, 3).unwrap();
        grid.set(0, 0, true);
        // Blocks: (0,0) "1000", (2,0) "0100", (0,2) "0010", (2,2) "0001"
        assert_abs_diff_eq!(shannon_entropy(&grid, 2), 2.0, epsilon = 1e-12);
    }
}
