//! Range algebra.
//!
//! - `membership` - point-in-range and point-in-CIDR checks
//! - `subtract` - removing one interval from another

mod membership;
mod subtract;

// Re-export public functions
pub use membership::{check_cidr_membership, check_membership, Membership};
pub use subtract::{subtract, subtract_cidrs};
