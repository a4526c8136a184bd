//! Settings persistence: load/save with atomic writes

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::keys::{CONFIG_NAMESPACE, project_config_key};
use crate::utils::environment::get_config_dir;
use crate::workspace::{ProjectRegistry, ProjectRoot};

const SETTINGS_FILENAME: &str = "settings.json";

/// Per-project settings reads and writes
///
/// Handlers call through this trait so tests can substitute an in-memory
/// store. An `Err` from `set` is the "store rejected the write" case.
pub trait ProjectSettings {
    fn get(&self, root: &Path, key: &str) -> Option<String>;
    fn set(&mut self, root: &Path, key: &str, value: &str) -> Result<()>;
}

/// On-disk settings document
#[derive(Debug, Default, Serialize, Deserialize)]
struct SettingsFile {
    /// Registered project roots, registration order preserved
    #[serde(default)]
    projects: Vec<PathBuf>,
    /// Flat dotted-key settings map; values are opaque JSON
    #[serde(default)]
    settings: BTreeMap<String, Value>,
}

/// File-backed settings store
///
/// Every write persists the whole document atomically (temp file + rename).
/// Last write wins; no read-modify-write coordination across processes.
#[derive(Debug)]
pub struct SettingsStore {
    path: PathBuf,
    file: SettingsFile,
}

impl SettingsStore {
    /// Load the store from its default location
    pub fn load_default() -> Result<Self> {
        Self::load(&get_config_dir()?.join(SETTINGS_FILENAME))
    }

    /// Load the store from `path`; a missing file is an empty store
    pub fn load(path: &Path) -> Result<Self> {
        let file = if path.exists() {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("Failed to read settings file: {}", path.display()))?;
            serde_json::from_str(&raw)
                .with_context(|| format!("Failed to parse settings file: {}", path.display()))?
        } else {
            SettingsFile::default()
        };

        Ok(Self { path: path.to_path_buf(), file })
    }

    /// Location of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read a top-level (non-project) setting, e.g. `generatorPath`
    pub fn get_global(&self, key: &str) -> Option<&str> {
        self.file.settings.get(&format!("{}.{}", CONFIG_NAMESPACE, key)).and_then(Value::as_str)
    }

    /// Write a top-level (non-project) setting and persist
    pub fn set_global(&mut self, key: &str, value: &str) -> Result<()> {
        self.file
            .settings
            .insert(format!("{}.{}", CONFIG_NAMESPACE, key), Value::String(value.to_string()));
        self.save()
    }

    /// Register a project root, preserving registration order
    ///
    /// Returns `false` without persisting when the root is already registered.
    pub fn register_root(&mut self, path: &Path) -> Result<bool> {
        if self.file.projects.iter().any(|p| p == path) {
            return Ok(false);
        }

        self.file.projects.push(path.to_path_buf());
        self.save()?;
        Ok(true)
    }

    /// Persist the document atomically (temp file + rename)
    fn save(&self) -> Result<()> {
        let dir = self
            .path
            .parent()
            .with_context(|| format!("Settings path has no parent: {}", self.path.display()))?;
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create settings directory: {}", dir.display()))?;

        let raw = serde_json::to_string_pretty(&self.file).context("Failed to serialize settings")?;
        let temp = self.path.with_extension("json.tmp");
        fs::write(&temp, raw).context("Failed to write settings temp file")?;
        fs::rename(&temp, &self.path).context("Failed to rename settings temp file")?;

        Ok(())
    }
}

impl ProjectRegistry for SettingsStore {
    fn roots(&self) -> Vec<ProjectRoot> {
        self.file.projects.iter().cloned().map(ProjectRoot::new).collect()
    }
}

impl ProjectSettings for SettingsStore {
    fn get(&self, root: &Path, key: &str) -> Option<String> {
        self.file
            .settings
            .get(&project_config_key(root, key))
            .and_then(Value::as_str)
            .map(str::to_string)
    }

    fn set(&mut self, root: &Path, key: &str, value: &str) -> Result<()> {
        self.file
            .settings
            .insert(project_config_key(root, key), Value::String(value.to_string()));
        self.save()
    }
}
