//! Output formatting for subnet results.
//!
//! This module handles presenting a [`crate::models::SubnetResult`]:
//! - [`terminal`] - colored report, banner and error line
//! - [`json`] - JSON rendering

mod json;
mod terminal;

pub use json::subnet_json;
pub use terminal::{format_report, write_banner, write_invalid_input, write_report};
