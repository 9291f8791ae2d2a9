//! Value command - classify and render one word

use edb_inspect_common::parse_word;
use edb_inspect_engine::ValueRenderer;
use eyre::Result;

/// Render a hex encoded word the way the stack and storage panels do
pub fn value(word: &str, renderer: &ValueRenderer<'_>) -> Result<String> {
    let word = parse_word(word)?;
    Ok(format!("{}\n", renderer.render(word)))
}
