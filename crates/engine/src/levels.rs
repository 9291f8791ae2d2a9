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

//! Call stack rendering.

use crate::pretty::abridged;
use edb_inspect_common::{instruction_name, ExecutionSnapshot};

/// Render the call stack, current frame first and outermost caller last.
///
/// The first line is the abridged address of the executing account. Each
/// caller frame renders as `<abridged caller address> <MNEMONIC> @0x<pc>`.
///
/// Note that the mnemonic and PC shown for every caller frame are those of
/// the *current* step, not the caller's own suspended instruction.
pub fn levels(snapshot: &ExecutionSnapshot) -> Vec<String> {
    let mut levels = Vec::with_capacity(snapshot.depth());
    levels.push(abridged(&snapshot.address));

    let name = instruction_name(snapshot.instruction);
    for caller in snapshot.levels.iter().rev() {
        levels.push(format!("{} {} @0x{:x}", abridged(&caller.address), name, snapshot.pc));
    }

    levels
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::Address;
    use edb_inspect_common::logging::ensure_test_logging;

    #[test]
    fn test_single_frame() {
        ensure_test_logging(None);

        let snapshot =
            ExecutionSnapshot { address: Address::from_slice(&[0xab; 20]), ..Default::default() };
        assert_eq!(levels(&snapshot), vec!["abab…abab"]);
    }

    #[test]
    fn test_nested_frames() {
        ensure_test_logging(None);

        let outer = ExecutionSnapshot {
            address: Address::from_slice(&[0x11; 20]),
            pc: 0x99,
            instruction: 0xf1, // CALL
            ..Default::default()
        };
        let middle = ExecutionSnapshot {
            address: Address::from_slice(&[0x22; 20]),
            pc: 0x42,
            instruction: 0xf4, // DELEGATECALL
            ..Default::default()
        };
        let current = ExecutionSnapshot {
            address: Address::from_slice(&[0x33; 20]),
            pc: 0x1f,
            instruction: 0x54, // SLOAD
            levels: vec![outer, middle],
            ..Default::default()
        };

        assert_eq!(
            levels(&current),
            vec!["3333…3333", "2222…2222 SLOAD @0x1f", "1111…1111 SLOAD @0x1f"]
        );
    }
}
