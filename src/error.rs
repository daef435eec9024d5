//! Error types for the subnet calculator.

use thiserror::Error;

/// Errors raised while turning user text into subnet values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SubnetError {
    /// Text is not four dot-separated integers in 0..=255.
    #[error("invalid dotted-decimal address: {0:?}")]
    InvalidAddressFormat(String),

    /// Mask bits are not a run of 1s followed by a run of 0s.
    /// Only raised by the strict mask parser.
    #[error("subnet mask is not a contiguous prefix: {0}")]
    NonContiguousMask(String),

    /// Binary form is not exactly 32 characters of '0'/'1'.
    #[error("binary address must be 32 bits of 0/1, got {0:?}")]
    InvalidBinary(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            SubnetError::InvalidAddressFormat("300.1.1.1".to_string()).to_string(),
            "invalid dotted-decimal address: \"300.1.1.1\""
        );
        assert_eq!(
            SubnetError::NonContiguousMask("255.255.0.255".to_string()).to_string(),
            "subnet mask is not a contiguous prefix: 255.255.0.255"
        );
    }
}
