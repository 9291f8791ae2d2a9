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

//! Heuristic rendering of 256-bit words.
//!
//! A stack slot or storage word carries no type information, so the
//! renderer guesses. The checks run in a fixed order and the first match
//! wins:
//!
//! 1. high 192 bits clear: unsigned 64-bit integer
//! 2. high 192 bits set: negative 64-bit integer
//! 3. fits in 160 bits: address
//! 4. left-packed printable ASCII, optionally with a trailing counter byte
//! 5. anything else: raw hex

use alloy_primitives::{Address, B256, U256};
use edb_inspect_common::{AddressBook, DisplaySurface};
use std::fmt;

/// What a word was recognized as
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassifiedValue {
    /// Fits in 64 bits
    Unsigned(u64),
    /// Sign-extended 64-bit negative number
    Signed(i64),
    /// Fits in 160 bits
    Address(Address),
    /// Left-packed ASCII string
    Text {
        /// The decoded characters
        text: String,
        /// Trailing counter byte, zero when absent
        increment: u8,
    },
    /// No heuristic matched
    Raw(B256),
}

impl ClassifiedValue {
    /// Classify a word
    pub fn classify(word: U256) -> Self {
        let limbs = word.as_limbs();
        let high = &limbs[1..];

        if high.iter().all(|&limb| limb == 0) {
            return Self::Unsigned(limbs[0]);
        }
        if high.iter().all(|&limb| limb == u64::MAX) {
            return Self::Signed(limbs[0] as i64);
        }

        if word.bit_len() <= 160 {
            return Self::Address(word_to_address(word));
        }
        let bytes = word.to_be_bytes::<32>();
        if let Some((text, increment)) = decode_packed_string(&bytes) {
            return Self::Text { text, increment };
        }
        Self::Raw(B256::from(bytes))
    }
}

/// Decode a left-packed ASCII string from the raw bytes of a word.
///
/// The string runs up to the first zero byte. Past that, only the last byte
/// of the word may be non-zero; it is returned as the increment counter.
/// A word without any zero byte is a 32-character string with no counter.
/// Every character must be in `0x20..=0x7f`.
///
/// Returns `None` for a word starting with a zero byte, for non-zero bytes
/// between the string and the last byte, and for unprintable characters.
pub fn decode_packed_string(bytes: &[u8; 32]) -> Option<(String, u8)> {
    let (candidate, increment) = match bytes.iter().position(|&b| b == 0) {
        Some(0) => return None,
        None => (&bytes[..], 0),
        Some(len) => match bytes[len..].iter().position(|&b| b != 0).map(|p| p + len) {
            None => (&bytes[..len], 0),
            Some(31) => (&bytes[..len], bytes[31]),
            Some(_) => return None,
        },
    };

    if !candidate.iter().all(|b| (0x20..=0x7f).contains(b)) {
        return None;
    }
    Some((candidate.iter().map(|&b| b as char).collect(), increment))
}

/// Interpret the low 160 bits of a word as an address
pub fn word_to_address(word: U256) -> Address {
    Address::from_slice(&word.to_be_bytes::<32>()[12..])
}

/// Short form of an address: first and last two bytes around an ellipsis
pub fn abridged(address: &Address) -> String {
    format!("{}…{}", hex::encode(&address[..2]), hex::encode(&address[18..]))
}

/// Renders words for one display surface, optionally resolving address names
#[derive(Clone, Copy, Default)]
pub struct ValueRenderer<'a> {
    surface: DisplaySurface,
    names: Option<&'a dyn AddressBook>,
}

impl fmt::Debug for ValueRenderer<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValueRenderer")
            .field("surface", &self.surface)
            .field("names", &self.names.map(|_| "<address book>"))
            .finish()
    }
}

impl<'a> ValueRenderer<'a> {
    /// Create a renderer for `surface` without name resolution
    pub fn new(surface: DisplaySurface) -> Self {
        Self { surface, names: None }
    }

    /// Resolve addresses through `names`
    pub fn with_names(mut self, names: &'a dyn AddressBook) -> Self {
        self.names = Some(names);
        self
    }

    /// The surface this renderer escapes for
    pub fn surface(&self) -> DisplaySurface {
        self.surface
    }

    /// Classify and render a word
    ///
    /// # Examples
    /// ```rust
    /// use alloy_primitives::U256;
    /// use edb_inspect_engine::ValueRenderer;
    ///
    /// let renderer = ValueRenderer::default();
    /// assert_eq!(renderer.render(U256::from(42)), " 42 (0x2a)");
    /// ```
    pub fn render(&self, word: U256) -> String {
        self.render_classified(&ClassifiedValue::classify(word))
    }

    /// Render an already classified word
    pub fn render_classified(&self, value: &ClassifiedValue) -> String {
        match value {
            ClassifiedValue::Unsigned(n) => format!(" {n} ({n:#x})"),
            ClassifiedValue::Signed(n) => format!(" {n} (0x{n:x})"),
            ClassifiedValue::Address(address) => self.render_address(address),
            ClassifiedValue::Text { text, increment } => {
                let text = self.surface.escape(text);
                if *increment == 0 {
                    format!("\"{text}\"")
                } else {
                    format!("\"{text}\" + {increment}")
                }
            }
            ClassifiedValue::Raw(raw) => hex::encode(raw),
        }
    }

    /// Render an address, by name when the address book knows it
    pub fn render_address(&self, address: &Address) -> String {
        match self.names.and_then(|names| names.name_of(address)) {
            Some(name) => format!("{}(0x{})", self.surface.escape(name), abridged(address)),
            None => format!("0x{}", hex::encode(address)),
        }
    }
}
