use super::types::Config;

use anyhow::Context;
use std::fs;
use std::path::Path;

/// Load configuration from a TOML file
pub fn load_config<P: AsRef<Path>>(path: P) -> anyhow::Result<Config> {
    let content = fs::read_to_string(path.as_ref())
        .with_context(|| format!("reading '{}'", path.as_ref().display()))?;
    load_config_from_string(&content)
}

/// Load configuration from a string
pub fn load_config_from_string(content: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(content).context("parsing TOML configuration")?;
    Ok(config)
}
