//! Box counting and box-counting fractal dimension.
//!
//! For each box size `s` the grid is covered by non-overlapping `s x s`
//! boxes (truncated at the right/bottom edge, no wraparound) and the number
//! of boxes holding at least one live cell, `N(s)`, is counted. The
//! dimension estimate is the absolute slope of the least-squares line
//! through the points `(ln(1/s), ln(N(s)))`.

use crate::grid::Grid;
use itertools::iproduct;

/// Box sizes used by `fractal_dimension`.
pub const DEFAULT_BOX_SIZES: [usize; 5] = [2, 4, 8, 16, 32];

/// Regression denominators smaller than this are treated as degenerate.
const MIN_DENOMINATOR: f64 = 1e-9;

/// Count the `box_size x box_size` boxes that contain at least one live cell.
///
/// Boxes along the right and bottom edges are truncated to the grid. A box
/// size of zero counts nothing.
///
/// # Examples
///
/// ```
/// use lifescope::analysis::count_active_boxes;
/// use lifescope::Grid;
///
/// let mut grid = Grid::new(10, 10).unwrap();
/// grid.set(0, 0, true);
/// grid.set(1, 1, true);
/// grid.set(9, 9, true); // lands in a truncated 2x2 corner box
///
/// assert_eq!(count_active_boxes(&grid, 1), 3);
/// assert_eq!(count_active_boxes(&grid, 4), 2);
/// ```
pub fn count_active_boxes(grid: &Grid, box_size: usize) -> usize {
    if box_size == 0 {
        return 0;
    }

    let (width, height) = (grid.width(), grid.height());
    iproduct!((0..height).step_by(box_size), (0..width).step_by(box_size))
        .filter(|&(by, bx)| {
            let x_end = bx.saturating_add(box_size).min(width);
            let y_end = by.saturating_add(box_size).min(height);
            (by..y_end).any(|y| grid.row(y)[bx..x_end].contains(&true))
        })
        .count()
}

/// Least-squares slope through `points`.
///
/// Returns `None` with fewer than two points or when every point shares
/// (nearly) the same x, i.e. `|n*Σx² - (Σx)²| < 1e-9`.
///
/// # Examples
///
/// ```
/// use lifescope::analysis::regression_slope;
///
/// let slope = regression_slope(&[(0.0, 1.0), (1.0, 3.0), (2.0, 5.0)]).unwrap();
/// assert!((slope - 2.0).abs() < 1e-12);
/// assert_eq!(regression_slope(&[(1.0, 1.0), (1.0, 2.0)]), None);
/// ```
pub fn regression_slope(points: &[(f64, f64)]) -> Option<f64> {
    if points.len() < 2 {
        return None;
    }

    let n = points.len() as f64;
    let (sum_x, sum_y, sum_xy, sum_x2) = points.iter().fold(
        (0.0, 0.0, 0.0, 0.0),
        |(sx, sy, sxy, sx2), &(x, y)| (sx + x, sy + y, sxy + x * y, sx2 + x * x),
    );

    let denominator = n * sum_x2 - sum_x * sum_x;
    if denominator.abs() < MIN_DENOMINATOR {
        return None;
    }

    Some((n * sum_xy - sum_x * sum_y) / denominator)
}

/// Box-counting dimension over `DEFAULT_BOX_SIZES`.
pub fn fractal_dimension(grid: &Grid) -> f64 {
    fractal_dimension_with(grid, &DEFAULT_BOX_SIZES)
}

/// Box-counting dimension over the given box sizes.
///
/// Box sizes with no active box (or a size of zero) contribute no point.
/// Returns `0.0` when fewer than two points remain or the fit is
/// degenerate.
pub fn fractal_dimension_with(grid: &Grid, box_sizes: &[usize]) -> f64 {
    let points: Vec<(f64, f64)> = box_sizes
        .iter()
        .filter(|&&s| s > 0)
        .filter_map(|&s| {
            let active = count_active_boxes(grid, s);
            (active > 0).then(|| ((1.0 / s as f64).ln(), (active as f64).ln()))
        })
        .collect();

    regression_slope(&points).map_or(0.0, f64::abs)
}
