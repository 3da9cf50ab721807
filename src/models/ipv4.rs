//! IPv4 address codec and prefix mask arithmetic.
//!
//! Addresses are plain [`Ipv4Addr`] values; their integer form is the
//! big-endian `u32` (first octet in bits 31..24).

use crate::error::{IpRangeError, Result};
use std::net::Ipv4Addr;

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Parse a dotted-quad address such as `192.168.1.42`.
///
/// The text must be exactly four decimal octets; surrounding whitespace is
/// rejected.
///
/// # Examples
/// ```
/// use iprange::models::parse_address;
/// assert_eq!(parse_address("10.0.0.1").unwrap().octets(), [10, 0, 0, 1]);
/// assert!(parse_address("10.0.0.256").is_err());
/// ```
pub fn parse_address(text: &str) -> Result<Ipv4Addr> {
    text.parse::<Ipv4Addr>()
        .map_err(|_| IpRangeError::InvalidAddress(text.to_string()))
}

/// Big-endian packing of the four octets.
pub fn to_u32(addr: Ipv4Addr) -> u32 {
    u32::from(addr)
}

/// Inverse of [`to_u32`]; every `u32` is a valid address.
pub fn from_u32(n: u32) -> Ipv4Addr {
    Ipv4Addr::from(n)
}

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use iprange::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
/// ```
pub fn get_cidr_mask(len: u8) -> Result<u32> {
    if len > MAX_LENGTH {
        Err(IpRangeError::InvalidPrefixLength(len))
    } else {
        let right_len = MAX_LENGTH - len;
        let all_bits = u32::MAX as u64;

        // u64 so that a shift by 32 (prefix /0) is defined
        let mask = (all_bits >> right_len) << right_len;

        Ok(mask as u32)
    }
}

/// Get the network address for a given IP and prefix length.
pub fn cut_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr> {
    let mask = get_cidr_mask(len)?;
    Ok(from_u32(to_u32(addr) & mask))
}

/// Calculate the broadcast (highest) address for a given IP and prefix length.
///
/// Network address plus the host mask, i.e. every host bit set.
pub fn broadcast_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr> {
    let mask = get_cidr_mask(len)?;
    let network_bits = to_u32(addr) & mask;
    let broadcast_bits = network_bits | (!mask);
    Ok(from_u32(broadcast_bits))
}
