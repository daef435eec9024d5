//! IPv4 subnet calculator.
//!
//! Validates a dotted-decimal address and mask, then derives the network
//! and broadcast addresses, the usable range and the host count.

pub mod config;
pub mod error;
pub mod interactive;
pub mod models;
pub mod output;
pub mod processing;

pub use error::SubnetError;
pub use models::SubnetResult;

use models::{Ipv4Address, SubnetMask};

/// Validate `ip` and `mask` then derive the subnet.
///
/// Any valid dotted-decimal mask is accepted, see [`calculate_with`].
///
/// # Examples
/// ```
/// let result = subnet_calculator::calculate("192.168.1.10", "255.255.255.0").unwrap();
/// assert_eq!(result.prefix_len, 24);
/// assert_eq!(result.host_count, 254);
/// ```
pub fn calculate(ip: &str, mask: &str) -> Result<SubnetResult, SubnetError> {
    calculate_with(ip, mask, false)
}

/// Validate `ip` and `mask` then derive the subnet.
///
/// With `strict_mask` a mask whose bits are not a contiguous prefix is
/// rejected with [`SubnetError::NonContiguousMask`]. Without it such a mask
/// is used as is and only logged.
pub fn calculate_with(
    ip: &str,
    mask: &str,
    strict_mask: bool,
) -> Result<SubnetResult, SubnetError> {
    let ip = Ipv4Address::new(ip)?;
    let mask = if strict_mask {
        SubnetMask::parse_strict(mask)?
    } else {
        SubnetMask::new(mask)?
    };
    if !mask.is_contiguous() {
        log::info!(
            "Mask {mask} is not contiguous, using /{} from its bit count",
            mask.prefix_len()
        );
    }

    let result = processing::derive_subnet(&ip, &mask);
    log::info!(
        "{ip} {mask} -> network={} broadcast={} hosts={}",
        result.network,
        result.broadcast,
        result.host_count
    );
    match serde_json::to_string(&result) {
        Ok(json) => log::debug!("result={json}"),
        Err(e) => log::debug!("result not serializable: {e}"),
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculate_invalid_ip() {
        assert_eq!(
            calculate("300.1.1.1", "255.255.255.0").unwrap_err(),
            SubnetError::InvalidAddressFormat("300.1.1.1".to_string())
        );
    }

    #[test]
    fn test_calculate_invalid_mask() {
        assert!(matches!(
            calculate("10.0.0.1", "255.255.255"),
            Err(SubnetError::InvalidAddressFormat(_))
        ));
    }

    #[test]
    fn test_calculate_with_strict_mask() {
        assert!(calculate_with("192.168.1.1", "255.255.0.255", false).is_ok());
        assert_eq!(
            calculate_with("192.168.1.1", "255.255.0.255", true).unwrap_err(),
            SubnetError::NonContiguousMask("255.255.0.255".to_string())
        );
        assert!(calculate_with("192.168.1.1", "255.255.255.0", true).is_ok());
    }
}
