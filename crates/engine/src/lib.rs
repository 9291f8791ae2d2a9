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

//! EDB Inspect Engine - bytecode listings and step snapshots as text
//!
//! This crate is the analytical core behind a step debugger's code, stack,
//! storage, memory and call stack panels:
//!
//! - [`disasm`] turns raw bytecode into a listing plus the byte offset ->
//!   line index used for breakpoints and the cursor
//! - [`pretty`] guesses what a 256-bit word is and renders it
//! - [`dump`] renders stack, storage, memory and call data
//! - [`outcome`] tells how the current step ends an execution
//! - [`levels`] renders the call stack
//! - [`header`] renders the one-line step status
//! - [`view`] bundles all per-step renderings over one borrowed snapshot
//!
//! Every function here is total: malformed input degrades to a fallback
//! rendering instead of an error.

pub mod disasm;
pub mod dump;
pub mod header;
pub mod levels;
pub mod outcome;
pub mod pretty;
pub mod view;

pub use disasm::{disassemble, Disassembly, DisassemblyEntry, Instruction};
pub use outcome::StepOutcome;
pub use pretty::{abridged, decode_packed_string, ClassifiedValue, ValueRenderer};
pub use view::SnapshotView;
