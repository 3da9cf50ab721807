//! Point-in-range checks.

use crate::models::{Cidr, Interval};
use std::net::Ipv4Addr;

/// Outcome of a range check. Not being in range is a normal answer.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Membership {
    InRange,
    NotInRange,
}

impl Membership {
    pub fn is_in_range(&self) -> bool {
        *self == Membership::InRange
    }
}

impl From<bool> for Membership {
    fn from(in_range: bool) -> Self {
        if in_range {
            Membership::InRange
        } else {
            Membership::NotInRange
        }
    }
}

impl std::fmt::Display for Membership {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Membership::InRange => write!(f, "IP in range"),
            Membership::NotInRange => write!(f, "IP not in range"),
        }
    }
}

/// Check whether `addr` lies within the inclusive `interval`.
///
/// A degenerate interval (`min > max`) contains nothing.
pub fn check_membership(interval: &Interval, addr: Ipv4Addr) -> Membership {
    let membership = Membership::from(interval.contains(addr));
    log::debug!("check_membership({interval}, {addr}) = {membership:?}");
    membership
}

/// Check whether `addr` lies within the CIDR block.
pub fn check_cidr_membership(cidr: &Cidr, addr: Ipv4Addr) -> Membership {
    check_membership(&cidr.to_interval(), addr)
}
