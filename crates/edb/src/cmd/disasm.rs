//! Disasm command - print the listing of a piece of bytecode

use edb_inspect_common::parse_hex_bytes;
use edb_inspect_engine::disassemble;
use eyre::{Context, Result};
use std::{fs, path::Path};

/// Disassemble hex encoded bytecode given inline or in a file
pub fn disasm(code: Option<&str>, file: Option<&Path>) -> Result<String> {
    let text = match (code, file) {
        (Some(code), _) => code.to_string(),
        (None, Some(path)) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read bytecode file: {path:?}"))?,
        (None, None) => eyre::bail!("No bytecode given"),
    };

    let bytes = parse_hex_bytes(&text)?;
    let listing = disassemble(&bytes);
    tracing::debug!(bytes = bytes.len(), lines = listing.len(), "Disassembled bytecode");

    let mut output = String::new();
    for line in listing.lines() {
        output.push_str(line);
        output.push('\n');
    }
    Ok(output)
}
