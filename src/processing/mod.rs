//! Subnet calculation logic.
//!
//! This module contains the business logic:
//! - [`deriver`] - network, broadcast, usable range and host count

mod deriver;

// Re-export public functions
pub use deriver::{derive_subnet, num_hosts};
