//! Domain models for the subnet calculator.
//!
//! This module contains the core data structures:
//! - [`Ipv4Address`] and [`SubnetMask`] - validated dotted-decimal input
//! - [`BinaryAddress`] - 32-bit form used for derivation
//! - [`SubnetResult`] - the derived subnet parameters

mod address;
mod binary;
mod result;

// Re-export public types
pub use address::{validate_ip, Ipv4Address, SubnetMask, MAX_LENGTH};
pub use binary::{from_binary, get_cidr_mask, to_binary, BinaryAddress};
pub use result::SubnetResult;
