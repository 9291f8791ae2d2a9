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

//! Display surfaces and the escaping they require.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Where rendered text ends up
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplaySurface {
    /// Plain text, no escaping
    #[default]
    Plain,
    /// HTML-capable widget; markup characters are escaped
    Html,
}

impl DisplaySurface {
    /// Escape `text` for this surface.
    ///
    /// On [`DisplaySurface::Html`] the characters `&`, `<`, `>`, `"` and `'`
    /// become entities. On [`DisplaySurface::Plain`] the text is returned as is.
    pub fn escape(self, text: &str) -> String {
        match self {
            Self::Plain => text.to_string(),
            Self::Html => {
                let mut escaped = String::with_capacity(text.len());
                for c in text.chars() {
                    match c {
                        '&' => escaped.push_str("&amp;"),
                        '<' => escaped.push_str("&lt;"),
                        '>' => escaped.push_str("&gt;"),
                        '"' => escaped.push_str("&quot;"),
                        '\'' => escaped.push_str("&#39;"),
                        _ => escaped.push(c),
                    }
                }
                escaped
            }
        }
    }

    /// Gap between a storage key and its value
    pub fn column_gap(self) -> &'static str {
        match self {
            Self::Plain => "    ",
            Self::Html => "&nbsp;&nbsp;&nbsp;&nbsp;",
        }
    }
}

impl fmt::Display for DisplaySurface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plain => write!(f, "plain"),
            Self::Html => write!(f, "html"),
        }
    }
}
