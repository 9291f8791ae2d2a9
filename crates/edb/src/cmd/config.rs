//! Config command - show, and optionally create, the configuration file

use edb_inspect_common::InspectConfig;
use eyre::{Context, Result};
use std::path::Path;

/// Render the effective configuration as TOML, headed by its path
///
/// With `init`, the configuration is first written to `path` unless a file
/// already exists there.
pub fn show_config(config: &InspectConfig, path: &Path, init: bool) -> Result<String> {
    if init && !path.exists() {
        config.save_to(path)?;
        tracing::info!("Wrote default configuration to {:?}", path);
    }

    let content =
        toml::to_string_pretty(config).with_context(|| "Failed to serialize config to TOML")?;
    Ok(format!("# {}\n{content}", path.display()))
}
