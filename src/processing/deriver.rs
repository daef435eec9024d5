//! Subnet derivation.
//!
//! Turns a validated address and mask into a [`SubnetResult`] using bit
//! operations on the 32-bit form of both.

use crate::models::{BinaryAddress, Ipv4Address, SubnetMask, SubnetResult, MAX_LENGTH};

/// Number of usable hosts for a prefix length: `2^(32 - len) - 2`.
///
/// Not clamped, /31 gives `0` and /32 gives `-1`.
pub fn num_hosts(len: u8) -> i64 {
    let host_bits = MAX_LENGTH.saturating_sub(len);
    (1i64 << host_bits) - 2
}

/// Derive network, broadcast, usable range and host count.
///
/// The prefix length is the number of 1 bits in the mask. The network
/// and broadcast addresses keep that many leading bits of the address,
/// so a non-contiguous mask behaves like the contiguous mask of the same
/// popcount. First and last usable addresses are the network and
/// broadcast addresses with their last bit set or cleared, at every
/// prefix length.
pub fn derive_subnet(ip: &Ipv4Address, mask: &SubnetMask) -> SubnetResult {
    let ip_bin = BinaryAddress::from(ip);
    let mask_bin = BinaryAddress::from(mask.address());
    let prefix_len = mask_bin.count_ones();

    let network_bin = ip_bin.keep_prefix(prefix_len, false);
    let broadcast_bin = ip_bin.keep_prefix(prefix_len, true);
    let first_bin = network_bin.with_last_bit(true);
    let last_bin = broadcast_bin.with_last_bit(false);

    log::debug!(
        "derive_subnet({ip}, {mask}) ip={} mask={} network={} broadcast={}",
        ip_bin.dotted(),
        mask_bin.dotted(),
        network_bin.dotted(),
        broadcast_bin.dotted(),
    );

    SubnetResult {
        ip: ip.to_string(),
        mask: mask.to_string(),
        prefix_len,
        network: network_bin.to_address().addr,
        broadcast: broadcast_bin.to_address().addr,
        first_usable: first_bin.to_address().addr,
        last_usable: last_bin.to_address().addr,
        host_count: num_hosts(prefix_len),
    }
}
