//! Structural analysis measures over a grid snapshot.
//!
//! Every function here takes a read-only `&Grid` and owns no state:
//!
//! - **shannon_entropy**: block-pattern entropy over non-empty blocks
//! - **count_active_boxes**: occupied boxes at one box size
//! - **fractal_dimension**: box-counting dimension via log-log regression
//! - **fingerprint**: SHA-256 digest of the packed cell state, used as an
//!   equality proxy for cycle detection
//!
//! All measures are total: an empty grid or a scale with no activity yields
//! `0` rather than an error.
//!
//! # Examples
//!
//! ```
//! use lifescope::analysis::{count_active_boxes, fingerprint, shannon_entropy};
//! use lifescope::{LifeEngine, Pattern};
//!
//! let mut engine = LifeEngine::new(32, 32).unwrap();
//! engine.load_pattern(&Pattern::glider(), 4, 4);
//!
//! assert_eq!(count_active_boxes(engine.grid(), 1), engine.population());
//! assert!(shannon_entropy(engine.grid(), 2) > 0.0);
//!
//! let before = fingerprint(engine.grid());
//! engine.step();
//! assert_ne!(before, fingerprint(engine.grid()));
//! ```

mod entropy;
mod fingerprint;
mod fractal;

pub use entropy::shannon_entropy;
pub use fingerprint::{fingerprint, Fingerprint};
pub use fractal::{
    count_active_boxes, fractal_dimension, fractal_dimension_with, regression_slope,
    DEFAULT_BOX_SIZES,
};
