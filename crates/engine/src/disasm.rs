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

//! EVM bytecode disassembly
//!
//! This module turns raw bytecode into the listing shown by the debugger's
//! code view, together with the byte offset -> line mapping used to place
//! breakpoints and the execution cursor.
//!
//! The scan handles:
//! - All opcodes known to the opcode table
//! - PUSH1 through PUSH32 with their immediate operands, truncated to the
//!   bytes actually present when the code ends early
//! - A synthetic `STOP` at one past the end of the code, which closes every
//!   complete listing
//! - Undefined opcodes, which end the listing: whatever follows is data
//!   (constructor arguments, metadata) rather than instructions

use edb_inspect_common::{mnemonic, push_size, STOP};
use std::collections::BTreeMap;
use tracing::debug;

/// A single decoded instruction, borrowed from the code it was read from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instruction<'a> {
    /// Byte offset of the opcode
    pub offset: usize,
    /// The opcode byte
    pub opcode: u8,
    /// Mnemonic from the opcode table
    pub mnemonic: &'static str,
    /// Immediate operand, possibly shorter than declared at the end of the code
    pub immediate: &'a [u8],
    /// Immediate length declared by the opcode
    declared_immediate: usize,
}

impl<'a> Instruction<'a> {
    /// Decode the instruction starting at `offset`.
    ///
    /// Offsets at or past the end of `code` read as `STOP`. Returns `None`
    /// when the byte is not a defined opcode.
    pub fn decode(code: &'a [u8], offset: usize) -> Option<Self> {
        let opcode = code.get(offset).copied().unwrap_or(STOP);
        let mnemonic = mnemonic(opcode)?;

        let declared_immediate = push_size(opcode).unwrap_or(0);
        let start = offset.saturating_add(1).min(code.len());
        let end = start.saturating_add(declared_immediate).min(code.len());

        Some(Self { offset, opcode, mnemonic, immediate: &code[start..end], declared_immediate })
    }

    /// Distance to the next instruction, as declared by the opcode
    pub fn stride(&self) -> usize {
        1 + self.declared_immediate
    }

    /// Bytes this instruction actually occupies in the code
    pub fn size(&self, code_len: usize) -> usize {
        if self.offset >= code_len {
            0
        } else {
            1 + self.immediate.len()
        }
    }

    /// Render as a listing line: `<offset>  <MNEMONIC>[ 0x<immediate>]`
    pub fn render(&self) -> String {
        if self.immediate.is_empty() {
            format!("{:04x}  {}", self.offset, self.mnemonic)
        } else {
            format!("{:04x}  {} 0x{}", self.offset, self.mnemonic, hex::encode(self.immediate))
        }
    }
}

/// One line of the listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisassemblyEntry {
    /// Byte offset of the opcode
    pub offset: usize,
    /// Bytes covered by the instruction (opcode and immediate)
    pub size: usize,
    /// Display text
    pub text: String,
}

/// Complete disassembly of a piece of bytecode
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Disassembly {
    /// Listing lines in code order
    pub entries: Vec<DisassemblyEntry>,
    /// Offset of every real instruction start -> its line in `entries`
    pub offsets: BTreeMap<usize, usize>,
}

impl Disassembly {
    /// Number of listing lines
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the listing is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Listing line of the instruction starting exactly at `pc`
    pub fn line_of(&self, pc: usize) -> Option<usize> {
        self.offsets.get(&pc).copied()
    }

    /// Listing line of the instruction whose opcode or immediate covers `pc`
    ///
    /// This is useful when the PC might point into the middle of a PUSH
    /// instruction's data.
    pub fn line_containing(&self, pc: usize) -> Option<usize> {
        let (&start, &line) = self.offsets.range(..=pc).next_back()?;
        let entry = self.entries.get(line)?;
        (pc < start + entry.size).then_some(line)
    }

    /// Listing lines as plain strings
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.text.as_str())
    }
}

/// Disassemble EVM bytecode into a listing and its offset index.
///
/// The scan visits offsets `0..=code.len()`; the extra position reads as a
/// synthetic `STOP` that terminates the listing. The terminator gets a line
/// but no entry in [`Disassembly::offsets`], since no instruction starts
/// there. An undefined opcode stops the scan and everything decoded so far is
/// returned.
///
/// # Examples
/// ```rust
/// use edb_inspect_engine::disassemble;
///
/// let listing = disassemble(&[0x60, 0x42, 0x80]); // PUSH1 0x42, DUP1
/// assert_eq!(listing.entries[0].text, "0000  PUSH1 0x42");
/// assert_eq!(listing.entries[1].text, "0002  DUP1");
/// assert_eq!(listing.entries[2].text, "0003  STOP");
/// assert_eq!(listing.line_of(2), Some(1));
/// ```
pub fn disassemble(code: &[u8]) -> Disassembly {
    let mut disassembly = Disassembly::default();
    let mut pc = 0;

    while pc <= code.len() {
        let Some(instruction) = Instruction::decode(code, pc) else {
            debug!(
                pc,
                opcode = ?code.get(pc),
                "Undefined opcode, treating the remaining code as data"
            );
            break;
        };

        if pc < code.len() {
            disassembly.offsets.insert(pc, disassembly.entries.len());
        }
        disassembly.entries.push(DisassemblyEntry {
            offset: pc,
            size: instruction.size(code.len()),
            text: instruction.render(),
        });

        pc += instruction.stride();
    }

    disassembly
}

#[cfg(test)]
mod tests {
    use super::*;
    use edb_inspect_common::logging::ensure_test_logging;

    #[test]
    fn test_disassemble_simple() {
        ensure_test_logging(None);

        let result = disassemble(&[0x80, 0x81, 0x82]); // DUP1, DUP2, DUP3

        assert_eq!(
            result.lines().collect::<Vec<_>>(),
            vec!["0000  DUP1", "0001  DUP2", "0002  DUP3", "0003  STOP"]
        );
        assert_eq!(result.offsets, BTreeMap::from([(0, 0), (1, 1), (2, 2)]));
    }

    #[test]
    fn test_disassemble_push_instructions() {
        ensure_test_logging(None);

        let result = disassemble(&[
            0x60, 0x42, // PUSH1 0x42
            0x61, 0x12, 0x34, // PUSH2 0x1234
            0x80, // DUP1
        ]);

        assert_eq!(result.len(), 4);
        assert_eq!(result.entries[0].text, "0000  PUSH1 0x42");
        assert_eq!(result.entries[1].text, "0002  PUSH2 0x1234");
        assert_eq!(result.entries[1].size, 3);
        assert_eq!(result.entries[2].text, "0005  DUP1");
        assert_eq!(result.entries[3].text, "0006  STOP");

        // Offsets inside immediates are never instruction starts
        assert_eq!(result.line_of(1), None);
        assert_eq!(result.line_of(3), None);
        assert_eq!(result.line_of(5), Some(2));
    }

    #[test]
    fn test_empty_code() {
        ensure_test_logging(None);

        let result = disassemble(&[]);
        assert_eq!(result.lines().collect::<Vec<_>>(), vec!["0000  STOP"]);
        assert!(result.offsets.is_empty());
    }

    #[test]
    fn test_undefined_opcode_ends_listing() {
        ensure_test_logging(None);

        assert!(disassemble(&[0x0c]).is_empty());

        // PUSH1 0x01, STOP, then data that is not code
        let result = disassemble(&[0x60, 0x01, 0x00, 0x0c, 0x60]);
        assert_eq!(result.lines().collect::<Vec<_>>(), vec!["0000  PUSH1 0x01", "0002  STOP"]);
        assert_eq!(result.offsets.len(), 2);
    }

    #[test]
    fn test_truncated_push_instruction() {
        ensure_test_logging(None);

        // PUSH2 with only one byte of data: no padding, no terminator
        let result = disassemble(&[0x61, 0x12]);
        assert_eq!(result.lines().collect::<Vec<_>>(), vec!["0000  PUSH2 0x12"]);
        assert_eq!(result.entries[0].size, 2);

        // PUSH1 with nothing after it
        let result = disassemble(&[0x60]);
        assert_eq!(result.lines().collect::<Vec<_>>(), vec!["0000  PUSH1"]);
    }

    #[test]
    fn test_push32_operand() {
        ensure_test_logging(None);

        let mut code = vec![0x7f];
        code.extend((0u8..32).map(|b| b.wrapping_mul(7)));
        code.push(0x01); // ADD

        let result = disassemble(&code);
        assert_eq!(result.entries[0].text, format!("0000  PUSH32 0x{}", hex::encode(&code[1..33])));
        assert_eq!(result.entries[1].offset, 33);
        assert_eq!(result.entries[1].text, "0021  ADD");
    }

    #[test]
    fn test_line_containing() {
        ensure_test_logging(None);

        let result = disassemble(&[
            0x60, 0x42, // PUSH1 0x42 (PC 0-1)
            0x61, 0x12, 0x34, // PUSH2 0x1234 (PC 2-4)
            0x80, // DUP1 (PC 5)
        ]);

        assert_eq!(result.line_containing(0), Some(0));
        assert_eq!(result.line_containing(1), Some(0));
        assert_eq!(result.line_containing(2), Some(1));
        assert_eq!(result.line_containing(4), Some(1));
        assert_eq!(result.line_containing(5), Some(2));

        // The terminator is not part of the code
        assert_eq!(result.line_containing(6), None);
    }

    #[test]
    fn test_instruction_decode() {
        ensure_test_logging(None);

        let code = [0x62, 0xaa, 0xbb];
        let instruction = Instruction::decode(&code, 0).unwrap();
        assert_eq!(instruction.mnemonic, "PUSH3");
        assert_eq!(instruction.immediate, &[0xaa, 0xbb]);
        assert_eq!(instruction.stride(), 4);
        assert_eq!(instruction.size(code.len()), 3);

        let terminator = Instruction::decode(&code, 3).unwrap();
        assert_eq!(terminator.opcode, STOP);
        assert_eq!(terminator.size(code.len()), 0);

        assert!(Instruction::decode(&[0x21], 0).is_none());
    }
}
