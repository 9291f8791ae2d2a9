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

//! Dense opcode table for the EVM instruction set.
//!
//! The table maps every byte value to its mnemonic in O(1). It is built once
//! from revm's opcode metadata and cached for the lifetime of the process.
//! Bytes that revm does not define map to `None`; the disassembler treats
//! that as the end of executable code.

use revm::bytecode::{opcode, OpCode};
use std::sync::OnceLock;

/// `STOP`, also the synthetic terminator appended to every listing
pub const STOP: u8 = opcode::STOP;
/// `RETURN`
pub const RETURN: u8 = opcode::RETURN;
/// `SELFDESTRUCT` (historically `SUICIDE`)
pub const SELFDESTRUCT: u8 = opcode::SELFDESTRUCT;
/// First opcode of the push family carrying an immediate operand
pub const PUSH1: u8 = opcode::PUSH1;
/// Last opcode of the push family carrying an immediate operand
pub const PUSH32: u8 = opcode::PUSH32;

/// Get the cached byte -> mnemonic table
fn mnemonic_table() -> &'static [Option<&'static str>; 256] {
    static TABLE: OnceLock<[Option<&'static str>; 256]> = OnceLock::new();
    TABLE.get_or_init(|| std::array::from_fn(|byte| OpCode::new(byte as u8).map(OpCode::as_str)))
}

/// Look up the mnemonic of an opcode byte.
///
/// Returns `None` when the byte is not a defined instruction.
///
/// # Example
/// ```rust
/// use edb_inspect_common::mnemonic;
///
/// assert_eq!(mnemonic(0x01), Some("ADD"));
/// assert_eq!(mnemonic(0x0c), None);
/// ```
pub fn mnemonic(byte: u8) -> Option<&'static str> {
    mnemonic_table()[byte as usize]
}

/// Name of an opcode byte for display code that must always produce text.
///
/// Undefined bytes render as `UNKNOWN(0x..)`.
pub fn instruction_name(byte: u8) -> String {
    match mnemonic(byte) {
        Some(name) => name.to_string(),
        None => format!("UNKNOWN({byte:#04x})"),
    }
}

/// Number of immediate bytes following a push opcode.
///
/// Returns `Some(1..=32)` for `PUSH1..=PUSH32` and `None` for every other
/// byte, including `PUSH0` which carries no immediate.
pub fn push_size(byte: u8) -> Option<usize> {
    (PUSH1..=PUSH32).contains(&byte).then(|| (byte - PUSH1) as usize + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::ensure_test_logging;

    #[test]
    fn test_known_mnemonics() {
        ensure_test_logging(None);

        assert_eq!(mnemonic(STOP), Some("STOP"));
        assert_eq!(mnemonic(0x01), Some("ADD"));
        assert_eq!(mnemonic(0x55), Some("SSTORE"));
        assert_eq!(mnemonic(PUSH1), Some("PUSH1"));
        assert_eq!(mnemonic(PUSH32), Some("PUSH32"));
        assert_eq!(mnemonic(RETURN), Some("RETURN"));
        assert_eq!(mnemonic(SELFDESTRUCT), Some("SELFDESTRUCT"));
    }

    #[test]
    fn test_undefined_bytes() {
        ensure_test_logging(None);

        for byte in [0x0c, 0x0d, 0x0e, 0x0f, 0x21, 0x2f] {
            assert_eq!(mnemonic(byte), None, "byte {byte:#04x} should be undefined");
        }
        assert_eq!(instruction_name(0x0c), "UNKNOWN(0x0c)");
        // 0xfe is defined, and revm names it INVALID
        assert_eq!(instruction_name(0xfe), "INVALID");
        assert_eq!(instruction_name(0x80), "DUP1");
    }

    #[test]
    fn test_push_sizes() {
        ensure_test_logging(None);

        assert_eq!(push_size(0x5f), None); // PUSH0
        assert_eq!(push_size(PUSH1), Some(1));
        assert_eq!(push_size(0x61), Some(2));
        assert_eq!(push_size(PUSH32), Some(32));
        assert_eq!(push_size(0x80), None);
        assert_eq!(push_size(STOP), None);
    }
}
