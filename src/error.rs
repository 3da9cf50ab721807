//! Error types for address and CIDR parsing.
//!
//! A range check that comes back negative is not an error, see
//! [`crate::processing::Membership`].

use thiserror::Error;

/// Input errors. All of them are terminal: nothing is partially computed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IpRangeError {
    /// The text is not a dotted-quad IPv4 address.
    #[error("invalid IPv4 address: {0}")]
    InvalidAddress(String),
    /// The text is not `A.B.C.D/N` with N in 0..=32.
    #[error("invalid CIDR {cidr}: {reason}")]
    InvalidCidr { cidr: String, reason: String },
    /// A bare prefix length over 32, with no CIDR text to report.
    #[error("invalid prefix length {0}: Network length is too long")]
    InvalidPrefixLength(u8),
}

impl IpRangeError {
    pub(crate) fn invalid_cidr(cidr: &str, reason: impl Into<String>) -> Self {
        IpRangeError::InvalidCidr {
            cidr: cidr.to_string(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, IpRangeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let e = IpRangeError::InvalidAddress("1.2.3".to_string());
        assert_eq!(e.to_string(), "invalid IPv4 address: 1.2.3");

        let e = IpRangeError::invalid_cidr("10.0.0.0/33", "Network length is too long");
        assert_eq!(
            e.to_string(),
            "invalid CIDR 10.0.0.0/33: Network length is too long"
        );
    }
}
