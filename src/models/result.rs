//! Result record of one subnet calculation.

use serde::Serialize;
use std::net::Ipv4Addr;

/// Everything derived from one (address, mask) pair.
///
/// `ip` and `mask` keep the text as entered. `host_count` follows
/// `2^(32 - prefix) - 2` without clamping, so it is `0` at /31 and `-1` at /32.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SubnetResult {
    /// Address as entered.
    pub ip: String,
    /// Mask as entered.
    pub mask: String,
    /// Count of 1 bits in the mask.
    pub prefix_len: u8,
    /// Host bits all 0.
    pub network: Ipv4Addr,
    /// Host bits all 1.
    pub broadcast: Ipv4Addr,
    /// Network address with its last bit set.
    pub first_usable: Ipv4Addr,
    /// Broadcast address with its last bit cleared.
    pub last_usable: Ipv4Addr,
    /// Usable host capacity.
    pub host_count: i64,
}
