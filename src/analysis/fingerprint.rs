//! Grid fingerprints for exact-state repetition detection.

use crate::error::{LifeError, Result};
use crate::grid::Grid;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;
use std::str::FromStr;

/// SHA-256 digest of a grid's full cell state.
///
/// Only used as an equality proxy: two grids with the same dimensions and
/// the same live cells always produce the same fingerprint. Displays and
/// parses as 64 lowercase hex characters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Fingerprint([u8; 32]);

impl Fingerprint {
    /// Raw digest bytes.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Canonical hex encoding.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Fingerprint {
    type Err = LifeError;

    fn from_str(s: &str) -> Result<Self> {
        let mut bytes = [0u8; 32];
        hex::decode_to_slice(s, &mut bytes)
            .map_err(|e| LifeError::InvalidParameter(format!("bad fingerprint '{}': {}", s, e)))?;
        Ok(Self(bytes))
    }
}

/// Fingerprint the grid.
///
/// Cells are packed row-major into LSB-first bytes (see `Grid::to_bits`)
/// and hashed together with the grid dimensions.
///
/// # Examples
///
/// ```
/// use lifescope::analysis::fingerprint;
/// use lifescope::Grid;
///
/// let mut a = Grid::new(8, 8).unwrap();
/// let b = a.clone();
/// assert_eq!(fingerprint(&a), fingerprint(&b));
///
/// a.set(3, 3, true);
/// assert_ne!(fingerprint(&a), fingerprint(&b));
/// ```
pub fn fingerprint(grid: &Grid) -> Fingerprint {
    let bits = grid.to_bits();

    let mut hasher = Sha256::new();
    hasher.update((grid.width() as u64).to_le_bytes());
    hasher.update((grid.height() as u64).to_le_bytes());
    hasher.update(bits.as_raw_slice());

    let digest = hasher.finalize();
    let mut bytes = [0u8; 32];
    bytes.copy_from_slice(&digest);
    Fingerprint(bytes)
}
