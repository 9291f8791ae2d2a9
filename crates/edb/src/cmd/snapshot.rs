//! Snapshot command - render every panel of a JSON execution snapshot

use edb_inspect_common::ExecutionSnapshot;
use edb_inspect_engine::{SnapshotView, ValueRenderer};
use eyre::{Context, Result};
use std::{fs, path::Path};

/// Load a snapshot from `path` and render all of its panels
pub fn snapshot(path: &Path, renderer: &ValueRenderer<'_>) -> Result<String> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read snapshot file: {path:?}"))?;
    let snapshot: ExecutionSnapshot = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse snapshot file: {path:?}"))?;
    tracing::debug!(depth = snapshot.depth(), pc = snapshot.pc, "Loaded snapshot");

    Ok(render_panels(&SnapshotView::new(&snapshot, *renderer)))
}

/// Render the panels of a view, each under a bracketed title
fn render_panels(view: &SnapshotView<'_>) -> String {
    let mut output = String::new();

    output.push_str(&view.header());
    output.push('\n');

    let panels = [
        ("stack", view.stack()),
        ("storage", view.storage()),
        ("memory", view.memory()),
        ("call data", view.call_data()),
        ("levels", view.levels().join("\n")),
        ("outcome", view.outcome().to_string()),
    ];
    for (title, body) in panels {
        output.push_str(&format!("[{title}]\n{body}"));
        if !body.ends_with('\n') {
            output.push('\n');
        }
    }

    output
}
