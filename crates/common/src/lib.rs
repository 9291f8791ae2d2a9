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

//! EDB Inspect Common - Shared building blocks for the inspection core
//!
//! This crate provides the pieces shared by the engine and the `edb-inspect`
//! binary: the execution snapshot model, the opcode table, display surface
//! helpers, address naming, configuration and logging setup.

/// Snapshot and display types shared between the engine and its hosts
pub mod types;

/// Configuration file handling (display surface and known address names)
pub mod config;
/// Input parsing errors for hex encoded code and words
pub mod error;
/// Logging setup and utilities for consistent logging across components
pub mod logging;
/// Known-name resolution for addresses
pub mod names;
/// Dense opcode table with mnemonic and immediate-size lookup
pub mod opcode;

pub use config::*;
pub use error::*;
pub use names::*;
pub use opcode::*;
pub use types::*;
