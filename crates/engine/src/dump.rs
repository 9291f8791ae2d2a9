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

//! Text dumps of stack, storage, memory and call data.

use crate::ValueRenderer;
use alloy_primitives::U256;
use std::collections::HashMap;

/// Bytes per hex dump row
pub const HEX_DUMP_WIDTH: usize = 16;

/// Render the stack, one word per line, top of stack first
pub fn stack(stack: &[U256], renderer: &ValueRenderer<'_>) -> String {
    let mut out = String::new();
    for word in stack.iter().rev() {
        out.push_str(&renderer.render(*word));
        out.push('\n');
    }
    out
}

/// Render every storage slot as `@<key><gap><value>`, ordered by key
pub fn storage(storage: &HashMap<U256, U256>, renderer: &ValueRenderer<'_>) -> String {
    let gap = renderer.surface().column_gap();
    let mut slots: Vec<_> = storage.iter().collect();
    slots.sort_unstable_by_key(|(key, _)| **key);

    slots
        .into_iter()
        .map(|(key, value)| format!("@{}{gap}{}", renderer.render(*key), renderer.render(*value)))
        .collect()
}

/// Hex dump with [`HEX_DUMP_WIDTH`] bytes per row and no ASCII column.
///
/// Each row is `<offset:04x> ` followed by `<byte:02x> ` per byte and a
/// newline. An empty buffer renders as an empty string.
pub fn hex_dump(bytes: &[u8]) -> String {
    let mut out = String::new();
    for (row, chunk) in bytes.chunks(HEX_DUMP_WIDTH).enumerate() {
        out.push_str(&format!("{:04x} ", row * HEX_DUMP_WIDTH));
        for byte in chunk {
            out.push_str(&format!("{byte:02x} "));
        }
        out.push('\n');
    }
    out
}

/// Render memory as a hex dump
pub fn memory(memory: &[u8]) -> String {
    hex_dump(memory)
}

/// Render call data as a hex dump
pub fn call_data(call_data: &[u8]) -> String {
    hex_dump(call_data)
}
