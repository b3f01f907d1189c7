/* src/cli/core/src/config/loader.rs */

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

use super::types::OrmanConfig;

pub const CONFIG_FILE: &str = "orman.toml";

pub fn find_orman_config(start: &Path) -> Result<PathBuf> {
  let mut dir =
    start.canonicalize().with_context(|| format!("failed to canonicalize {}", start.display()))?;
  loop {
    let candidate = dir.join(CONFIG_FILE);
    if candidate.is_file() {
      return Ok(candidate);
    }
    if !dir.pop() {
      bail!("{CONFIG_FILE} not found (searched upward from {})", start.display());
    }
  }
}

pub fn parse_orman_config(content: &str) -> Result<OrmanConfig> {
  let config: OrmanConfig = toml::from_str(content)?;
  config.validate()?;
  Ok(config)
}

pub fn load_orman_config(path: &Path) -> Result<OrmanConfig> {
  let content =
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
  parse_orman_config(&content).with_context(|| format!("failed to load {}", path.display()))
}
