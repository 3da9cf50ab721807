//! Address and range value types.
//!
//! - [`ipv4`] - dotted-quad codec and prefix mask arithmetic
//! - [`Cidr`] - `A.B.C.D/N` notation and its resolution to a range
//! - [`Interval`] - inclusive `[min, max]` address range

mod cidr;
mod interval;
mod ipv4;

// Re-export public types
pub use cidr::{convert_cidrs, resolve_cidr, Cidr};
pub use interval::Interval;
pub use ipv4::{
    broadcast_addr, cut_addr, from_u32, get_cidr_mask, parse_address, to_u32, MAX_LENGTH,
};
