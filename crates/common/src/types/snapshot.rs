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

//! The execution snapshot observed by the formatters.
//!
//! A snapshot captures the VM state *before* `instruction` executes. The
//! inspection core never mutates it; every formatter borrows it for the
//! duration of a single call.

use alloy_primitives::{Address, Bytes, U256};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// VM state at one debugger step
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExecutionSnapshot {
    /// Program counter of `instruction`
    pub pc: u64,
    /// Opcode byte about to execute
    pub instruction: u8,
    /// Gas available before the step
    pub gas: u64,
    /// Gas the step costs
    pub gas_cost: u64,
    /// Number of steps executed so far
    pub steps: u64,
    /// Memory growth caused by the step, in 32-byte words
    pub new_mem_size: u64,
    /// Stack words, top of stack last
    pub stack: Vec<U256>,
    /// Storage of the executing account
    pub storage: HashMap<U256, U256>,
    /// Memory contents
    pub memory: Bytes,
    /// Call data of the current frame
    pub call_data: Bytes,
    /// Address of the executing account
    pub address: Address,
    /// Caller frames, innermost last
    pub levels: Vec<ExecutionSnapshot>,
}

impl ExecutionSnapshot {
    /// Peek at the stack, `0` being the top.
    ///
    /// Returns `None` when the stack is shallower than `depth + 1`.
    pub fn stack_peek(&self, depth: usize) -> Option<&U256> {
        self.stack.iter().rev().nth(depth)
    }

    /// Number of frames including this one
    pub fn depth(&self) -> usize {
        self.levels.len() + 1
    }
}
