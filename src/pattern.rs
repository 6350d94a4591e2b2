//! Pattern - Named shapes stamped onto the grid.
//!
//! A `Pattern` is an ordered list of `(dx, dy)` offsets relative to an anchor.
//! `LifeEngine::load_pattern` clears the grid and sets each
//! `(anchor_x + dx, anchor_y + dy)` alive, wrapping toroidally.
//!
//! # Examples
//!
//! ```
//! use lifescope::{LifeEngine, Pattern};
//!
//! let mut engine = LifeEngine::new(20, 20).unwrap();
//! engine.load_pattern(&Pattern::glider(), 5, 5);
//! assert_eq!(engine.population(), 5);
//! ```

use itertools::{Itertools, MinMaxResult};
use serde::{Deserialize, Serialize};

/// A named set of cell offsets.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pattern {
    name: String,
    cells: Vec<(i64, i64)>,
}

impl Pattern {
    /// Create a pattern from a name and a list of `(dx, dy)` offsets.
    pub fn new(name: impl Into<String>, cells: Vec<(i64, i64)>) -> Self {
        Self {
            name: name.into(),
            cells,
        }
    }

    /// Pattern name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Cell offsets relative to the anchor.
    pub fn cells(&self) -> &[(i64, i64)] {
        &self.cells
    }

    /// Number of offsets.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns true if the pattern has no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Width and height of the offsets' bounding box, `(0, 0)` if empty.
    pub fn bounds(&self) -> (usize, usize) {
        let span = |values: MinMaxResult<i64>| match values.into_option() {
            Some((lo, hi)) => (hi.abs_diff(lo) as usize).saturating_add(1),
            None => 0,
        };
        (
            span(self.cells.iter().map(|c| c.0).minmax()),
            span(self.cells.iter().map(|c| c.1).minmax()),
        )
    }

    // =========================================================================
    // Presets
    // =========================================================================

    /// Period-4 spaceship travelling diagonally down-right.
    pub fn glider() -> Self {
        Self::new("Glider", vec![(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)])
    }

    /// Period-2 oscillator: three cells in a horizontal row.
    pub fn blinker() -> Self {
        Self::new("Blinker", vec![(0, 0), (1, 0), (2, 0)])
    }

    /// Methuselah that stabilizes after 1103 generations on an unbounded plane.
    pub fn r_pentomino() -> Self {
        Self::new("R-pentomino", vec![(1, 0), (2, 0), (0, 1), (1, 1), (1, 2)])
    }

    /// Gosper glider gun, emitting one glider every 30 generations.
    pub fn gosper_glider_gun() -> Self {
        Self::new(
            "Gosper glider gun",
            vec![
                (24, 0),
                (22, 1),
                (24, 1),
                (12, 2),
                (13, 2),
                (20, 2),
                (21, 2),
                (34, 2),
                (35, 2),
                (11, 3),
                (15, 3),
                (20, 3),
                (21, 3),
                (34, 3),
                (35, 3),
                (0, 4),
                (1, 4),
                (10, 4),
                (16, 4),
                (20, 4),
                (21, 4),
                (0, 5),
                (1, 5),
                (10, 5),
                (14, 5),
                (16, 5),
                (17, 5),
                (22, 5),
                (24, 5),
                (10, 6),
                (16, 6),
                (24, 6),
                (11, 7),
                (15, 7),
                (12, 8),
                (13, 8),
            ],
        )
    }

    /// All built-in presets.
    pub fn presets() -> Vec<Self> {
        vec![
            Self::glider(),
            Self::blinker(),
            Self::r_pentomino(),
            Self::gosper_glider_gun(),
        ]
    }

    /// Look up a preset by case-insensitive name.
    pub fn preset(name: &str) -> Option<Self> {
        Self::presets()
            .into_iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_sizes() {
        assert_eq!(Pattern::glider().len(), 5);
        assert_eq!(Pattern::blinker().len(), 3);
        assert_eq!(Pattern::r_pentomino().len(), 5);
        assert_eq!(Pattern::gosper_glider_gun().len(), 36);
    }

    #[test]
    fn test_bounds() {
        assert_eq!(Pattern::glider().bounds(), (3, 3));
        assert_eq!(Pattern::blinker().bounds(), (3, 1));
        assert_eq!(Pattern::gosper_glider_gun().bounds(), (36, 9));
        assert_eq!(Pattern::new("empty", vec![]).bounds(), (0, 0));
        assert_eq!(Pattern::new("neg", vec![(-2, -1), (1, 3)]).bounds(), (4, 5));
    }

    #[test]
    fn test_bounds_extreme_offsets() {
        let wide = Pattern::new("wide", vec![(i64::MIN, 0), (i64::MAX, 0)]);
        assert_eq!(wide.bounds(), (usize::MAX, 1));
    }

    #[test]
    fn test_preset_lookup() {
        assert_eq!(Pattern::preset("glider"), Some(Pattern::glider()));
        assert_eq!(Pattern::preset("R-PENTOMINO"), Some(Pattern::r_pentomino()));
        assert!(Pattern::preset("spaceship").is_none());
    }
}
