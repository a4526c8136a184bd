use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Overrides the settings directory (useful for tests and portable setups)
pub const CONFIG_DIR_ENV: &str = "BOILERPLATE_COMPANION_CONFIG_DIR";

/// Overrides the generator executable for a single environment
pub const GENERATOR_ENV: &str = "BOILERPLATE_COMPANION_GENERATOR";

/// Generator executable expected on PATH when nothing else is configured
pub const DEFAULT_GENERATOR_COMMAND: &str = "boilerplate-gen";

/// Get the settings directory for this tool
///
/// Honors the `BOILERPLATE_COMPANION_CONFIG_DIR` override, otherwise uses the
/// platform config directory (`~/.config/boilerplate-companion` on Linux).
pub fn get_config_dir() -> Result<PathBuf> {
    if let Ok(dir) = env::var(CONFIG_DIR_ENV)
        && !dir.is_empty()
    {
        return Ok(PathBuf::from(dir));
    }

    let base = dirs::config_dir().context("Failed to determine platform config directory")?;
    Ok(base.join("boilerplate-companion"))
}

/// Generator executable from the environment, if overridden
pub fn generator_override() -> Option<String> {
    env::var(GENERATOR_ENV).ok().filter(|v| !v.is_empty())
}
