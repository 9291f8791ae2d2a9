// EDB - Ethereum Debugger
// Copyright (C) 2024 Zhuo Zhang and Wuqi Zhang
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

//! Errors raised while turning user supplied text into bytes or words.
//!
//! Only the input edge can fail; every renderer in the engine is total.

use alloy_primitives::U256;
use thiserror::Error;

/// Errors that can occur while parsing hex encoded input
#[derive(Debug, Error)]
pub enum InputError {
    /// The text is not valid hexadecimal
    #[error("invalid hex input: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    /// A 256-bit word was given more than 32 bytes
    #[error("word is {0} bytes long, at most 32 are allowed")]
    WordTooLong(usize),
}

/// Strip surrounding whitespace and an optional `0x` prefix
fn strip_hex_prefix(input: &str) -> &str {
    let trimmed = input.trim();
    trimmed.strip_prefix("0x").or_else(|| trimmed.strip_prefix("0X")).unwrap_or(trimmed)
}

/// Parse hex text (with or without `0x`) into raw bytes.
///
/// An odd number of digits is accepted by assuming a leading zero nibble.
pub fn parse_hex_bytes(input: &str) -> Result<Vec<u8>, InputError> {
    let digits = strip_hex_prefix(input);
    if digits.len() % 2 == 1 {
        Ok(hex::decode(format!("0{digits}"))?)
    } else {
        Ok(hex::decode(digits)?)
    }
}

/// Parse hex text into a 256-bit word, left-padding short input with zeros.
pub fn parse_word(input: &str) -> Result<U256, InputError> {
    let bytes = parse_hex_bytes(input)?;
    if bytes.len() > 32 {
        return Err(InputError::WordTooLong(bytes.len()));
    }
    Ok(U256::from_be_slice(&bytes))
}
