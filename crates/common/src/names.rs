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

//! Known-name resolution for addresses.

use alloy_primitives::Address;
use std::collections::{BTreeMap, HashMap};

/// Resolves addresses to human readable labels.
///
/// The value renderer consults an address book, when one is supplied, before
/// falling back to the full hex form of an address.
pub trait AddressBook {
    /// Get the label registered for `address`, if any
    fn name_of(&self, address: &Address) -> Option<&str>;
}

impl AddressBook for HashMap<Address, String> {
    fn name_of(&self, address: &Address) -> Option<&str> {
        self.get(address).map(String::as_str)
    }
}

impl AddressBook for BTreeMap<Address, String> {
    fn name_of(&self, address: &Address) -> Option<&str> {
        self.get(address).map(String::as_str)
    }
}
