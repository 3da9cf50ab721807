//! Interval subtraction.
//!
//! Removes one interval from another and returns what is left of the
//! minuend: nothing, one piece, or a left and a right piece.

use crate::error::Result;
use crate::models::{resolve_cidr, to_u32, Interval};

/// Subtract `subtrahend` from `minuend`.
///
/// Output is ordered left remainder first, then right remainder. Every
/// returned interval is valid (`min <= max`). No bound is ever computed by
/// wrapping: a subtrahend starting at `0.0.0.0` has no left side and one
/// ending at `255.255.255.255` has no right side.
///
/// A degenerate minuend yields nothing; a degenerate subtrahend removes
/// nothing.
///
/// # Examples
/// ```
/// use iprange::models::resolve_cidr;
/// use iprange::processing::subtract;
/// let left = subtract(
///     resolve_cidr("10.0.0.0/24").unwrap(),
///     resolve_cidr("10.0.0.128/25").unwrap(),
/// );
/// assert_eq!(left.len(), 1);
/// assert_eq!(left[0].to_string(), "10.0.0.0 - 10.0.0.127");
/// ```
pub fn subtract(minuend: Interval, subtrahend: Interval) -> Vec<Interval> {
    if !minuend.is_valid() {
        log::debug!("subtract() degenerate minuend {minuend:?}");
        return vec![];
    }
    if !subtrahend.is_valid() {
        return vec![minuend];
    }

    let (m_min, m_max) = (to_u32(minuend.min), to_u32(minuend.max));
    let (lo, hi) = (to_u32(subtrahend.min), to_u32(subtrahend.max));

    if hi < m_min || lo > m_max {
        log::trace!("subtract() {subtrahend} does not touch {minuend}");
        return vec![minuend];
    }

    let mut difference = Vec::with_capacity(2);
    if let Some(left) = left_remainder(m_min, lo) {
        difference.push(left);
    }
    if let Some(right) = right_remainder(hi, m_max) {
        difference.push(right);
    }
    log::trace!("subtract() {minuend} - {subtrahend} = {difference:?}");
    difference
}

/// `[m_min, lo - 1]`, if the subtrahend starts above the minuend.
fn left_remainder(m_min: u32, lo: u32) -> Option<Interval> {
    if lo <= m_min {
        return None;
    }
    // lo > m_min >= 0, so lo - 1 cannot wrap
    let top = lo.checked_sub(1)?;
    Some(Interval::from_u32(m_min, top))
}

/// `[hi + 1, m_max]`, if the subtrahend ends below the minuend.
fn right_remainder(hi: u32, m_max: u32) -> Option<Interval> {
    if hi >= m_max {
        return None;
    }
    let bottom = hi.checked_add(1)?;
    Some(Interval::from_u32(bottom, m_max))
}

/// Resolve two CIDR strings and subtract the second from the first.
pub fn subtract_cidrs(minuend: &str, subtrahend: &str) -> Result<Vec<Interval>> {
    let minuend = resolve_cidr(minuend)?;
    let subtrahend = resolve_cidr(subtrahend)?;
    Ok(subtract(minuend, subtrahend))
}
