// cargo watch -x 'fmt' -x 'test'

//! IPv4 range arithmetic: range and CIDR membership checks, CIDR to
//! `[min, max]` conversion, and subtraction of one CIDR from another.
//!
//! ```
//! use iprange::{format_all, resolve_cidr, subtract, OutputMode};
//! let left = subtract(
//!     resolve_cidr("10.0.0.0/24").unwrap(),
//!     resolve_cidr("10.0.0.64/26").unwrap(),
//! );
//! assert_eq!(
//!     format_all(&left, OutputMode::Pair),
//!     "10.0.0.0 - 10.0.0.63\n10.0.0.128 - 10.0.0.255"
//! );
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod models;
pub mod output;
pub mod processing;

pub use error::{IpRangeError, Result};
pub use models::{parse_address, resolve_cidr, Cidr, Interval};
pub use output::{format, format_all, OutputMode};
pub use processing::{check_membership, subtract, Membership};
