//! Console prompt loop.
//!
//! Reads an address and a mask, re-prompts until both validate, then
//! prints one report. Input and output are generic so the loop runs the
//! same against stdin/stdout and in-memory buffers.

use crate::calculate_with;
use crate::config::Config;
use crate::models::SubnetResult;
use crate::output::{subnet_json, write_banner, write_invalid_input, write_report};
use std::error::Error;
use std::io::{BufRead, Write};

const IP_PROMPT: &str = "Entrez une adresse IP (ex: 192.168.1.0) : ";
const MASK_PROMPT: &str = "Entrez un masque de sous-réseau (ex: 255.255.255.0) : ";

/// Run one calculation and print its result.
///
/// When the config carries an address and mask they are used directly
/// and invalid input is returned as an error. Otherwise the user is
/// prompted until valid input is entered. JSON output needs the address
/// and mask up front so that `out` holds nothing but the JSON document.
///
/// # Returns
/// * `Ok(SubnetResult)` - The result that was printed
/// * `Err` - On invalid command-line input, closed input or a write failure
pub fn run<R: BufRead, W: Write>(
    config: &Config,
    input: &mut R,
    out: &mut W,
) -> Result<SubnetResult, Box<dyn Error>> {
    let result = match config.inputs() {
        Some((ip, mask)) => {
            log::info!("Using address and mask from the command line");
            calculate_with(ip, mask, config.strict_mask)?
        }
        None if config.json => {
            return Err("JSON output needs the address and mask as arguments".into());
        }
        None => {
            write_banner(out)?;
            prompt_until_valid(input, out, config.strict_mask)?
        }
    };

    if config.json {
        writeln!(out, "{}", subnet_json(&result)?)?;
    } else {
        write_report(out, &result)?;
    }
    Ok(result)
}

/// Ask for an address and a mask until both are accepted.
///
/// There is no retry limit. End of input is an error.
pub fn prompt_until_valid<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    strict_mask: bool,
) -> Result<SubnetResult, Box<dyn Error>> {
    let mut attempt = 0;
    loop {
        attempt += 1;
        let ip = prompt(input, out, IP_PROMPT)?;
        let mask = prompt(input, out, MASK_PROMPT)?;

        match calculate_with(&ip, &mask, strict_mask) {
            Ok(result) => return Ok(result),
            Err(e) => {
                log::info!("Attempt {attempt} rejected: {e}");
                write_invalid_input(out)?;
            }
        }
    }
}

fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    text: &str,
) -> Result<String, Box<dyn Error>> {
    write!(out, "{text}")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err("Input closed before a valid address and mask were entered".into());
    }
    log::trace!("read line={line:?}");
    Ok(line.trim().to_string())
}
