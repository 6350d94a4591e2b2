//! Utility functions for toroidal coordinate handling.
//!
//! Every neighbor lookup, pattern stamp and entropy block sample goes through
//! these helpers so wraparound is applied uniformly, including for negative
//! offsets.

/// Normalize a signed coordinate onto `[0, n)` with toroidal wraparound.
///
/// Handles negative operands correctly (`-1` maps to `n - 1`).
///
/// # Examples
///
/// ```
/// use lifescope::utils::wrap;
///
/// assert_eq!(wrap(-1, 10), 9);
/// assert_eq!(wrap(10, 10), 0);
/// assert_eq!(wrap(23, 10), 3);
/// ```
#[inline]
pub fn wrap(i: i64, n: usize) -> usize {
    debug_assert!(n > 0, "cannot wrap onto an empty axis");
    i.rem_euclid(n as i64) as usize
}

/// Step one cell left/up on a wrapped axis of length `n`.
#[inline(always)]
pub fn wrap_dec(i: usize, n: usize) -> usize {
    if i == 0 {
        n - 1
    } else {
        i - 1
    }
}

/// Step one cell right/down on a wrapped axis of length `n`.
#[inline(always)]
pub fn wrap_inc(i: usize, n: usize) -> usize {
    if i + 1 == n {
        0
    } else {
        i + 1
    }
}

/// Convert signed coordinates into in-range indices, or `None` if either
/// lies outside `[0, width) x [0, height)`.
///
/// # Examples
///
/// ```
/// use lifescope::utils::checked_coords;
///
/// assert_eq!(checked_coords(3, 4, 10, 10), Some((3, 4)));
/// assert_eq!(checked_coords(-1, 4, 10, 10), None);
/// assert_eq!(checked_coords(3, 10, 10, 10), None);
/// ```
#[inline]
pub fn checked_coords(x: i64, y: i64, width: usize, height: usize) -> Option<(usize, usize)> {
    let x = usize::try_from(x).ok()?;
    let y = usize::try_from(y).ok()?;
    (x < width && y < height).then_some((x, y))
}
