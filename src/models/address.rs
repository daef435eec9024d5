//! Dotted-decimal IPv4 addresses and subnet masks.
//!
//! Provides [`validate_ip`] for checking user text, plus the validated
//! [`Ipv4Address`] and [`SubnetMask`] types that the deriver works on.

use crate::error::SubnetError;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Number of bits in an IPv4 address.
pub const MAX_LENGTH: u8 = 32;

/// Check whether `ip_str` is a dotted-decimal IPv4 address.
///
/// The text must split on `.` into exactly 4 segments, each a base-10
/// integer in `0..=255`. Leading zeros are accepted. Whitespace is not
/// trimmed, callers trim before validating.
///
/// # Examples
/// ```
/// use subnet_calculator::models::validate_ip;
/// assert!(validate_ip("192.168.1.10"));
/// assert!(!validate_ip("300.1.1.1"));
/// ```
pub fn validate_ip(ip_str: &str) -> bool {
    parse_octets(ip_str).is_some()
}

fn parse_octets(ip_str: &str) -> Option<[u8; 4]> {
    let parts: Vec<&str> = ip_str.split('.').collect();
    if parts.len() != 4 {
        return None;
    }
    let mut octets = [0u8; 4];
    for (octet, part) in octets.iter_mut().zip(parts) {
        // Parse wide so "-0" and "256" go through the range check instead of failing as u8
        let value: i64 = part.parse().ok()?;
        if !(0..=255).contains(&value) {
            return None;
        }
        *octet = value as u8;
    }
    Some(octets)
}

/// A validated IPv4 address, remembering the text it was entered as.
#[derive(Debug, Clone, Eq)]
pub struct Ipv4Address {
    /// The parsed address.
    pub addr: Ipv4Addr,
    text: String,
}

impl Ipv4Address {
    /// Parse and validate a dotted-decimal string.
    pub fn new(text: &str) -> Result<Ipv4Address, SubnetError> {
        let octets = parse_octets(text)
            .ok_or_else(|| SubnetError::InvalidAddressFormat(text.to_string()))?;
        Ok(Ipv4Address {
            addr: Ipv4Addr::from(octets),
            text: text.to_string(),
        })
    }

    /// Build from an already parsed address, using its canonical text.
    pub fn from_addr(addr: Ipv4Addr) -> Ipv4Address {
        Ipv4Address {
            addr,
            text: addr.to_string(),
        }
    }

    /// The address as a 32-bit integer, most significant octet first.
    pub fn bits(&self) -> u32 {
        u32::from(self.addr)
    }
}

impl FromStr for Ipv4Address {
    type Err = SubnetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ipv4Address::new(s)
    }
}

impl std::fmt::Display for Ipv4Address {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl PartialEq for Ipv4Address {
    fn eq(&self, other: &Ipv4Address) -> bool {
        self.addr == other.addr
    }
}

impl Serialize for Ipv4Address {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.text)
    }
}

impl<'de> Deserialize<'de> for Ipv4Address {
    fn deserialize<D>(deserializer: D) -> Result<Ipv4Address, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ipv4Address::new(&s).map_err(de::Error::custom)
    }
}

/// A subnet mask in dotted-decimal form.
///
/// Any valid address is accepted as a mask. The prefix length is the
/// number of set bits, so a non-contiguous mask still yields a length.
/// Use [`SubnetMask::parse_strict`] to reject those.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubnetMask(Ipv4Address);

impl SubnetMask {
    /// Parse a mask, accepting any valid dotted-decimal text.
    pub fn new(text: &str) -> Result<SubnetMask, SubnetError> {
        Ok(SubnetMask(Ipv4Address::new(text)?))
    }

    /// Parse a mask and require its bits to be a contiguous prefix.
    pub fn parse_strict(text: &str) -> Result<SubnetMask, SubnetError> {
        let mask = SubnetMask::new(text)?;
        if !mask.is_contiguous() {
            return Err(SubnetError::NonContiguousMask(text.to_string()));
        }
        Ok(mask)
    }

    /// Count of 1 bits in the mask.
    pub fn prefix_len(&self) -> u8 {
        self.0.bits().count_ones() as u8
    }

    /// True when the mask is a run of 1s followed by a run of 0s.
    pub fn is_contiguous(&self) -> bool {
        let bits = self.0.bits();
        bits.leading_ones() + bits.trailing_zeros() == MAX_LENGTH as u32
    }

    pub fn address(&self) -> &Ipv4Address {
        &self.0
    }
}

impl FromStr for SubnetMask {
    type Err = SubnetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SubnetMask::new(s)
    }
}

impl std::fmt::Display for SubnetMask {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
