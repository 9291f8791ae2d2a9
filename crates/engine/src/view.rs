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

//! Per-step rendering facade over one borrowed snapshot.

use crate::{dump, header, levels, StepOutcome, ValueRenderer};
use edb_inspect_common::ExecutionSnapshot;

/// Everything a debugger panel needs to show for one step.
///
/// The view borrows the snapshot and never outlives it. Every method is a
/// pure function of the snapshot and the renderer.
#[derive(Debug, Clone, Copy)]
pub struct SnapshotView<'a> {
    snapshot: &'a ExecutionSnapshot,
    renderer: ValueRenderer<'a>,
}

impl<'a> SnapshotView<'a> {
    /// Create a view over `snapshot`
    pub fn new(snapshot: &'a ExecutionSnapshot, renderer: ValueRenderer<'a>) -> Self {
        Self { snapshot, renderer }
    }

    /// The underlying snapshot
    pub fn snapshot(&self) -> &'a ExecutionSnapshot {
        self.snapshot
    }

    /// Status header line
    pub fn header(&self) -> String {
        header::header(self.snapshot)
    }

    /// Stack, top first
    pub fn stack(&self) -> String {
        dump::stack(&self.snapshot.stack, &self.renderer)
    }

    /// Storage slots
    pub fn storage(&self) -> String {
        dump::storage(&self.snapshot.storage, &self.renderer)
    }

    /// Memory hex dump
    pub fn memory(&self) -> String {
        dump::memory(&self.snapshot.memory)
    }

    /// Call data hex dump
    pub fn call_data(&self) -> String {
        dump::call_data(&self.snapshot.call_data)
    }

    /// Call stack lines
    pub fn levels(&self) -> Vec<String> {
        levels::levels(self.snapshot)
    }

    /// How the current step terminates the execution
    pub fn outcome(&self) -> StepOutcome {
        StepOutcome::evaluate(self.snapshot)
    }
}
