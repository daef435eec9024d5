//! Command-line configuration.

use clap::Parser;

/// Default log4rs configuration file.
pub const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";

/// Compute network, broadcast, usable range and host count of an IPv4 subnet.
///
/// Without arguments the address and mask are asked for interactively.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// IPv4 address, e.g. 192.168.1.0
    #[arg(requires = "mask")]
    pub ip: Option<String>,

    /// Subnet mask, e.g. 255.255.255.0
    pub mask: Option<String>,

    /// Reject masks whose bits are not a contiguous prefix
    #[arg(long, default_value_t = false)]
    pub strict_mask: bool,

    /// Print the result as JSON instead of the colored report, needs IP and MASK
    #[arg(long, default_value_t = false, requires = "ip")]
    pub json: bool,

    /// log4rs YAML configuration file
    #[arg(long, default_value = DEFAULT_LOG_CONFIG)]
    pub log_config: String,
}

impl Config {
    /// Address and mask from the command line, when both were given.
    pub fn inputs(&self) -> Option<(&str, &str)> {
        match (&self.ip, &self.mask) {
            (Some(ip), Some(mask)) => Some((ip.trim(), mask.trim())),
            _ => None,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            ip: None,
            mask: None,
            strict_mask: false,
            json: false,
            log_config: DEFAULT_LOG_CONFIG.to_string(),
        }
    }
}
