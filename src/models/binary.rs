//! 32-bit binary form of an address.
//!
//! [`BinaryAddress`] is the intermediate form all subnet derivation goes
//! through. Its text form is always exactly 32 characters of `0`/`1`,
//! most significant bit first.

use super::address::{Ipv4Address, MAX_LENGTH};
use crate::error::SubnetError;
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Convert a prefix length to a mask with the top `len` bits set.
///
/// # Examples
/// ```
/// use subnet_calculator::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24), 0xFFFFFF00);
/// ```
pub fn get_cidr_mask(len: u8) -> u32 {
    debug_assert!(len <= MAX_LENGTH, "prefix length {len} is over 32");
    let right_len = MAX_LENGTH.saturating_sub(len);
    let all_bits = u32::MAX as u64;

    let mask = (all_bits >> right_len) << right_len;

    mask as u32
}

/// Render a validated address as its 32-character binary string.
pub fn to_binary(address: &Ipv4Address) -> String {
    BinaryAddress::from(address).to_string()
}

/// Parse a 32-character binary string back to a dotted-decimal address.
///
/// Anything other than exactly 32 `0`/`1` characters is an error.
pub fn from_binary(bits: &str) -> Result<Ipv4Address, SubnetError> {
    Ok(bits.parse::<BinaryAddress>()?.to_address())
}

/// Fixed width 32-bit address value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BinaryAddress(u32);

impl BinaryAddress {
    pub fn new(bits: u32) -> BinaryAddress {
        BinaryAddress(bits)
    }

    pub fn bits(&self) -> u32 {
        self.0
    }

    /// Number of `1` bits.
    pub fn count_ones(&self) -> u8 {
        self.0.count_ones() as u8
    }

    /// Keep the first `len` bits and set every remaining bit to `fill`.
    pub fn keep_prefix(&self, len: u8, fill: bool) -> BinaryAddress {
        let mask = get_cidr_mask(len);
        let prefix = self.0 & mask;
        if fill {
            BinaryAddress(prefix | !mask)
        } else {
            BinaryAddress(prefix)
        }
    }

    /// Force the last bit to `set`, leaving the other 31 bits alone.
    pub fn with_last_bit(&self, set: bool) -> BinaryAddress {
        if set {
            BinaryAddress(self.0 | 1)
        } else {
            BinaryAddress(self.0 & !1)
        }
    }

    pub fn to_address(&self) -> Ipv4Address {
        Ipv4Address::from_addr(Ipv4Addr::from(self.0))
    }

    /// Binary string with a `.` between octets, e.g. `11000000.10101000.00000001.00000000`.
    pub fn dotted(&self) -> String {
        self.0
            .to_be_bytes()
            .iter()
            .map(|octet| format!("{octet:08b}"))
            .collect::<Vec<String>>()
            .join(".")
    }
}

impl From<&Ipv4Address> for BinaryAddress {
    fn from(address: &Ipv4Address) -> Self {
        BinaryAddress(address.bits())
    }
}

impl FromStr for BinaryAddress {
    type Err = SubnetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != MAX_LENGTH as usize || !s.bytes().all(|b| b == b'0' || b == b'1') {
            return Err(SubnetError::InvalidBinary(s.to_string()));
        }
        let bits =
            u32::from_str_radix(s, 2).map_err(|_| SubnetError::InvalidBinary(s.to_string()))?;
        Ok(BinaryAddress(bits))
    }
}

impl std::fmt::Display for BinaryAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:032b}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_cidr_mask() {
        assert_eq!(get_cidr_mask(0), 0x00000000);
        assert_eq!(get_cidr_mask(8), 0xFF000000);
        assert_eq!(get_cidr_mask(16), 0xFFFF0000);
        assert_eq!(get_cidr_mask(30), 0xFFFFFFFC);
        assert_eq!(get_cidr_mask(32), 0xFFFFFFFF);
    }

    #[test]
    fn test_to_binary() {
        let ip = Ipv4Address::new("192.168.1.10").unwrap();
        assert_eq!(to_binary(&ip), "11000000101010000000000100001010");
        assert_eq!(to_binary(&ip).len(), 32);

        let zero = Ipv4Address::new("0.0.0.0").unwrap();
        assert_eq!(to_binary(&zero), "0".repeat(32));
    }

    #[test]
    fn test_from_binary() {
        let ip = from_binary("00001010111111111111111111111110").unwrap();
        assert_eq!(ip.to_string(), "10.255.255.254");
        assert_eq!(from_binary(&"1".repeat(32)).unwrap().to_string(), "255.255.255.255");
    }

    #[test]
    fn test_from_binary_rejects_bad_input() {
        assert!(from_binary("1010").is_err());
        assert!(from_binary(&"0".repeat(33)).is_err());
        assert!(from_binary("+1111111111111111111111111111111").is_err());
        assert_eq!(
            from_binary("0000000000000000000000000000000x").unwrap_err(),
            SubnetError::InvalidBinary("0000000000000000000000000000000x".to_string())
        );
    }

    #[test]
    fn test_round_trip() {
        for text in ["0.0.0.0", "1.2.3.4", "172.16.5.200", "255.255.255.255"] {
            let ip = Ipv4Address::new(text).unwrap();
            let back = from_binary(&to_binary(&ip)).unwrap();
            assert_eq!(back, ip);
            assert_eq!(back.to_string(), text);
        }
    }

    #[test]
    fn test_keep_prefix() {
        let bin = BinaryAddress::from(&Ipv4Address::new("192.168.1.10").unwrap());
        assert_eq!(bin.keep_prefix(24, false).to_address().to_string(), "192.168.1.0");
        assert_eq!(bin.keep_prefix(24, true).to_address().to_string(), "192.168.1.255");
        assert_eq!(bin.keep_prefix(32, true), bin);
        assert_eq!(bin.keep_prefix(0, false).bits(), 0);
        assert_eq!(bin.keep_prefix(0, true).bits(), u32::MAX);
    }

    #[test]
    fn test_with_last_bit() {
        let bin = BinaryAddress::new(0b1000);
        assert_eq!(bin.with_last_bit(true).bits(), 0b1001);
        assert_eq!(bin.with_last_bit(false).bits(), 0b1000);
        // a flip, not an increment
        assert_eq!(BinaryAddress::new(0b1011).with_last_bit(true).bits(), 0b1011);
        assert_eq!(BinaryAddress::new(0b1011).with_last_bit(false).bits(), 0b1010);
    }

    #[test]
    fn test_dotted() {
        let bin = BinaryAddress::from(&Ipv4Address::new("192.168.1.0").unwrap());
        assert_eq!(bin.dotted(), "11000000.10101000.00000001.00000000");
    }
}
