//! CIDR notation (`A.B.C.D/N`) and its resolution to an address interval.

use super::interval::Interval;
use super::ipv4::{from_u32, parse_address, to_u32, MAX_LENGTH};
use crate::error::{IpRangeError, Result};
use lazy_static::lazy_static;
use regex::Regex;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::net::Ipv4Addr;

lazy_static! {
    static ref CIDR_RE: Regex =
        Regex::new(r"^([0-9.]+)/([0-9]{1,2})$").expect("Invalid Regex?");
}

/// IPv4 network in CIDR notation.
///
/// `addr` keeps whatever host bits were given; [`Cidr::lo`] masks them off.
/// Only [`Cidr::new`] and [`Cidr::from_parts`] build one, so `mask` is
/// always in 0..=32.
#[derive(Eq, Ord, PartialEq, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Cidr {
    addr: Ipv4Addr,
    mask: u8,
}

impl Cidr {
    /// Create a new [`Cidr`] from a string such as "10.0.0.0/24".
    pub fn new(addr_cidr: &str) -> Result<Cidr> {
        let addr_cidr = addr_cidr.trim();
        let caps = CIDR_RE
            .captures(addr_cidr)
            .ok_or_else(|| IpRangeError::invalid_cidr(addr_cidr, "expected address/prefix"))?;

        let addr = parse_address(&caps[1]).map_err(|_| {
            IpRangeError::invalid_cidr(addr_cidr, format!("Invalid address {}", &caps[1]))
        })?;
        let mask: u8 = caps[2]
            .parse()
            .map_err(|_| IpRangeError::invalid_cidr(addr_cidr, "Invalid prefix length"))?;
        if mask > MAX_LENGTH {
            return Err(IpRangeError::invalid_cidr(
                addr_cidr,
                "Network length is too long",
            ));
        }
        Ok(Cidr { addr, mask })
    }

    /// Build from an address and a prefix length, rejecting prefixes over 32.
    pub fn from_parts(addr: Ipv4Addr, mask: u8) -> Result<Cidr> {
        if mask > MAX_LENGTH {
            return Err(IpRangeError::invalid_cidr(
                &format!("{addr}/{mask}"),
                "Network length is too long",
            ));
        }
        Ok(Cidr { addr, mask })
    }

    /// The address as written, host bits included.
    pub fn addr(&self) -> Ipv4Addr {
        self.addr
    }

    /// The prefix length (0-32).
    pub fn mask(&self) -> u8 {
        self.mask
    }

    fn host_mask(&self) -> u32 {
        // mask <= MAX_LENGTH holds for every constructed Cidr
        u32::MAX.checked_shr(self.mask as u32).unwrap_or(0)
    }

    /// Lowest (network) address of the block.
    pub fn lo(&self) -> Ipv4Addr {
        from_u32(to_u32(self.addr) & !self.host_mask())
    }

    /// Highest (broadcast) address of the block.
    pub fn hi(&self) -> Ipv4Addr {
        from_u32(to_u32(self.addr) | self.host_mask())
    }

    pub fn to_interval(&self) -> Interval {
        Interval::new(self.lo(), self.hi())
    }

    pub fn contains(&self, addr: Ipv4Addr) -> bool {
        self.to_interval().contains(addr)
    }
}

/// Parse `cidr_text` and return the inclusive `[network, broadcast]` interval.
///
/// # Examples
/// ```
/// use iprange::models::resolve_cidr;
/// let range = resolve_cidr("10.0.0.0/24").unwrap();
/// assert_eq!(range.to_string(), "10.0.0.0 - 10.0.0.255");
/// ```
pub fn resolve_cidr(cidr_text: &str) -> Result<Interval> {
    let cidr = Cidr::new(cidr_text)?;
    log::trace!("resolve_cidr({cidr_text}) lo={} hi={}", cidr.lo(), cidr.hi());
    Ok(cidr.to_interval())
}

/// Resolve every CIDR independently, stopping at the first invalid one.
pub fn convert_cidrs<S: AsRef<str>>(cidrs: &[S]) -> Result<Vec<Interval>> {
    cidrs.iter().map(|c| resolve_cidr(c.as_ref())).collect()
}

impl std::fmt::Display for Cidr {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.mask)
    }
}

impl std::str::FromStr for Cidr {
    type Err = IpRangeError;

    fn from_str(s: &str) -> Result<Cidr> {
        Cidr::new(s)
    }
}

impl Serialize for Cidr {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Cidr {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Cidr, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Cidr::new(&s).map_err(de::Error::custom)
    }
}
