//! Per-project settings persistence
//!
//! Stores the registered project list and per-project folder configuration in
//! one JSON document under flat dotted keys:
//!
//! - `boilerplate-companion.project.<root>.basePath` - source folder for a project
//! - `boilerplate-companion.project.<root>.testPath` - test folder for a project
//! - `boilerplate-companion.generatorPath` - generator executable override
//!
//! Settings location: `$BOILERPLATE_COMPANION_CONFIG_DIR/settings.json` when
//! overridden, otherwise the platform config directory
//! - macOS: `~/Library/Application Support/boilerplate-companion/`
//! - Linux: `~/.config/boilerplate-companion/`
//! - Windows: `%APPDATA%\boilerplate-companion\`

pub mod keys;
pub mod store;

pub use keys::{
    BASE_PATH_KEY, CONFIG_NAMESPACE, GENERATOR_PATH_KEY, TEST_PATH_KEY, project_config_key,
};
pub use store::{ProjectSettings, SettingsStore};
