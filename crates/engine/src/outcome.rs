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

//! How the step under the cursor ends an execution.

use crate::{dump::hex_dump, pretty::word_to_address};
use alloy_primitives::{Address, U256};
use edb_inspect_common::{ExecutionSnapshot, RETURN, SELFDESTRUCT, STOP};
use std::fmt;

/// Terminal classification of a step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// The step costs more gas than is left
    OutOfGas,
    /// `RETURN` with the returned memory bytes
    Return(Vec<u8>),
    /// `STOP`
    Stop,
    /// `SELFDESTRUCT` with the beneficiary
    SelfDestruct(Address),
    /// Anything else
    Exception,
}

impl StepOutcome {
    /// Classify the current step of `snapshot`.
    ///
    /// Checks run in order: out of gas, `RETURN` with an offset and size on
    /// the stack, `STOP`, `SELFDESTRUCT` with a beneficiary on the stack,
    /// and finally the exception catch-all.
    pub fn evaluate(snapshot: &ExecutionSnapshot) -> Self {
        if snapshot.gas_cost > snapshot.gas {
            return Self::OutOfGas;
        }

        match (snapshot.instruction, snapshot.stack_peek(0), snapshot.stack_peek(1)) {
            (RETURN, Some(offset), Some(size)) => {
                Self::Return(read_memory(&snapshot.memory, *offset, *size))
            }
            (STOP, _, _) => Self::Stop,
            (SELFDESTRUCT, Some(beneficiary), _) => Self::SelfDestruct(word_to_address(*beneficiary)),
            _ => Self::Exception,
        }
    }
}

impl fmt::Display for StepOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfGas => write!(f, "OUT-OF-GAS"),
            Self::Return(data) => write!(f, "RETURN {}", hex_dump(data)),
            Self::Stop => write!(f, "STOP"),
            Self::SelfDestruct(beneficiary) => write!(f, "SUICIDE 0x{}", hex::encode(beneficiary)),
            Self::Exception => write!(f, "EXCEPTION"),
        }
    }
}

/// Copy `memory[offset..offset + size]`, stopping at the end of memory.
///
/// The shortfall is not zero-filled, so the result may be shorter than `size`.
fn read_memory(memory: &[u8], offset: U256, size: U256) -> Vec<u8> {
    let offset = offset.saturating_to::<usize>();
    let size = size.saturating_to::<usize>();

    let start = offset.min(memory.len());
    let end = offset.saturating_add(size).min(memory.len());
    memory[start..end].to_vec()
}
