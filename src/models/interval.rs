//! Inclusive address interval.

use super::ipv4::to_u32;
use serde::{Deserialize, Serialize};
use std::net::Ipv4Addr;

/// Inclusive range `[min, max]` of IPv4 addresses.
///
/// Construction does not validate the bounds: an interval with
/// `min > max` is degenerate, contains nothing and must not be printed.
#[derive(Serialize, Deserialize, Eq, PartialEq, Debug, Copy, Clone, Hash)]
pub struct Interval {
    /// Lowest address in the range.
    pub min: Ipv4Addr,
    /// Highest address in the range.
    pub max: Ipv4Addr,
}

impl Interval {
    pub fn new(min: Ipv4Addr, max: Ipv4Addr) -> Interval {
        Interval { min, max }
    }

    /// Build an interval from integer bounds.
    pub fn from_u32(min: u32, max: u32) -> Interval {
        Interval {
            min: Ipv4Addr::from(min),
            max: Ipv4Addr::from(max),
        }
    }

    /// Returns true if min is less than or equal to max.
    pub fn is_valid(&self) -> bool {
        to_u32(self.min) <= to_u32(self.max)
    }

    pub fn contains(&self, addr: Ipv4Addr) -> bool {
        let n = to_u32(addr);
        to_u32(self.min) <= n && n <= to_u32(self.max)
    }

    /// Number of addresses covered, 0 for a degenerate interval.
    pub fn len(&self) -> u64 {
        if self.is_valid() {
            (to_u32(self.max) - to_u32(self.min)) as u64 + 1
        } else {
            0
        }
    }

    pub fn is_empty(&self) -> bool {
        !self.is_valid()
    }
}

impl std::fmt::Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} - {}", self.min, self.max)
    }
}
