//! Terminal output with colors.
//!
//! Every line is styled on its own with [`colored`], nothing is left set on
//! the terminal between writes.

use crate::models::SubnetResult;
use colored::Colorize;
use std::io::{self, Write};

const BANNER: &str = "=== Calculateur de sous-réseau IPv4 ===";
const INVALID_INPUT: &str = "❌ Adresse IP ou masque invalide. Veuillez réessayer.";

/// Write the program banner.
pub fn write_banner<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", BANNER.cyan())
}

/// Write the error shown when the address or mask does not validate.
pub fn write_invalid_input<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}\n", INVALID_INPUT.red())
}

/// Build the report lines for a result, in display order.
pub fn format_report(result: &SubnetResult) -> Vec<String> {
    vec![
        String::new(),
        "===== Résultats du calcul =====".cyan().to_string(),
        format!("Adresse IP saisie : {}", result.ip)
            .green()
            .to_string(),
        format!(
            "Masque de sous-réseau : {mask} (/{prefix})",
            mask = result.mask,
            prefix = result.prefix_len
        )
        .green()
        .to_string(),
        format!("Adresse réseau : {}", result.network)
            .yellow()
            .to_string(),
        format!("Adresse de broadcast : {}", result.broadcast)
            .yellow()
            .to_string(),
        format!(
            "Plage d'adresses utilisables : {first} - {last}",
            first = result.first_usable,
            last = result.last_usable
        )
        .magenta()
        .to_string(),
        format!("Nombre d'hôtes possibles : {}", result.host_count)
            .blue()
            .to_string(),
        String::new(),
    ]
}

/// Write the colored report for a result.
pub fn write_report<W: Write>(out: &mut W, result: &SubnetResult) -> io::Result<()> {
    for line in format_report(result) {
        writeln!(out, "{line}")?;
    }
    out.flush()
}
