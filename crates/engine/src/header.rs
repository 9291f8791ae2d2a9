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

//! One-line status header for the current step.

use edb_inspect_common::{instruction_name, ExecutionSnapshot};

/// Render the status header of the current step
///
/// ```text
///  STEP: 12  |  PC: 0x1f  :  SLOAD  |  ADDMEM: 0 words  |  COST: 2100  |  GAS: 29000
/// ```
pub fn header(snapshot: &ExecutionSnapshot) -> String {
    format!(
        " STEP: {}  |  PC: 0x{:x}  :  {}  |  ADDMEM: {} words  |  COST: {}  |  GAS: {}",
        snapshot.steps,
        snapshot.pc,
        instruction_name(snapshot.instruction),
        snapshot.new_mem_size,
        snapshot.gas_cost,
        snapshot.gas,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use edb_inspect_common::logging::ensure_test_logging;

    #[test]
    fn test_header() {
        ensure_test_logging(None);

        let snapshot = ExecutionSnapshot {
            steps: 12,
            pc: 0x1f,
            instruction: 0x54,
            gas_cost: 2100,
            gas: 29000,
            ..Default::default()
        };
        assert_eq!(
            header(&snapshot),
            " STEP: 12  |  PC: 0x1f  :  SLOAD  |  ADDMEM: 0 words  |  COST: 2100  |  GAS: 29000"
        );
    }

    #[test]
    fn test_header_with_undefined_instruction() {
        ensure_test_logging(None);

        let snapshot = ExecutionSnapshot { instruction: 0x0c, new_mem_size: 2, ..Default::default() };
        assert!(header(&snapshot).contains(":  UNKNOWN(0x0c)  |  ADDMEM: 2 words"));
    }
}
