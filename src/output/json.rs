//! JSON output for subnet results.

use crate::models::SubnetResult;
use std::error::Error;

/// Render a result as pretty printed JSON.
pub fn subnet_json(result: &SubnetResult) -> Result<String, Box<dyn Error>> {
    serde_json::to_string_pretty(result).map_err(|e| format!("Error serializing JSON: {e}").into())
}
