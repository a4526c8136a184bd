//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;
use std::process::Command;

use boilerplate_companion::settings::{ProjectSettings, SettingsStore};
use tempfile::TempDir;

pub const CONFIG_DIR_ENV: &str = "BOILERPLATE_COMPANION_CONFIG_DIR";
pub const GENERATOR_ENV: &str = "BOILERPLATE_COMPANION_GENERATOR";

/// Separator line the fake generator writes between recorded invocations
const INVOCATION_SEPARATOR: &str = "====";

/// Builder for a temporary workspace: an isolated config dir, a project tree,
/// and optionally a fake generator script recording its arguments
pub struct WorkspaceFixture {
    temp: TempDir,
}

impl WorkspaceFixture {
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp dir");
        fs::create_dir(temp.path().join("config")).expect("Failed to create config dir");
        fs::create_dir_all(temp.path().join("project/src")).expect("Failed to create src dir");
        fs::create_dir_all(temp.path().join("project/tests")).expect("Failed to create tests dir");
        Self { temp }
    }

    pub fn config_dir(&self) -> PathBuf {
        self.temp.path().join("config")
    }

    pub fn project_dir(&self) -> PathBuf {
        self.temp.path().join("project")
    }

    pub fn source_dir(&self) -> PathBuf {
        self.project_dir().join("src")
    }

    pub fn test_dir(&self) -> PathBuf {
        self.project_dir().join("tests")
    }

    /// Create a source file inside the project and return its path
    pub fn source_file(&self, name: &str) -> PathBuf {
        let path = self.source_dir().join(name);
        fs::write(&path, "// source under test\n").expect("Failed to write source file");
        path
    }

    fn settings_path(&self) -> PathBuf {
        self.config_dir().join("settings.json")
    }

    fn store(&self) -> SettingsStore {
        SettingsStore::load(&self.settings_path()).expect("Failed to load settings store")
    }

    /// Register the fixture project root
    pub fn register_project(&self) {
        let mut store = self.store();
        store.register_root(&self.project_dir()).expect("Failed to register project");
    }

    /// Configure base and test folders for the fixture project
    pub fn configure_folders(&self) {
        let mut store = self.store();
        store
            .set(&self.project_dir(), "basePath", &self.source_dir().display().to_string())
            .expect("Failed to set basePath");
        store
            .set(&self.project_dir(), "testPath", &self.test_dir().display().to_string())
            .expect("Failed to set testPath");
    }

    /// Point the persisted `generatorPath` setting at `command`
    pub fn set_generator_path(&self, command: &str) {
        let mut store = self.store();
        store.set_global("generatorPath", command).expect("Failed to set generatorPath");
    }

    /// Raw settings document, empty string when nothing was written yet
    pub fn settings_raw(&self) -> String {
        fs::read_to_string(self.settings_path()).unwrap_or_default()
    }

    /// Command against the built binary, isolated from the real environment
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_boilerplate-companion"));
        cmd.env(CONFIG_DIR_ENV, self.config_dir());
        cmd.env_remove(GENERATOR_ENV);
        cmd.env_remove("VISUAL");
        cmd.env_remove("EDITOR");
        cmd
    }

    /// File the fake generator records its argv into
    pub fn args_file(&self) -> PathBuf {
        self.temp.path().join("generator-args.txt")
    }

    /// Write a fake generator script; `body` runs after argument recording
    #[cfg(unix)]
    pub fn write_generator(&self, body: &str) -> String {
        use std::os::unix::fs::PermissionsExt;

        let script = self.temp.path().join("fake-gen");
        let content = format!(
            "#!/bin/sh\nprintf '%s\\n' \"$@\" >> \"{args}\"\nprintf '{sep}\\n' >> \"{args}\"\n{body}\n",
            args = self.args_file().display(),
            sep = INVOCATION_SEPARATOR,
        );
        fs::write(&script, content).expect("Failed to write fake generator");
        fs::set_permissions(&script, fs::Permissions::from_mode(0o755))
            .expect("Failed to mark fake generator executable");
        script.display().to_string()
    }

    /// Recorded generator invocations, one argv list per run
    pub fn generator_invocations(&self) -> Vec<Vec<String>> {
        let raw = fs::read_to_string(self.args_file()).unwrap_or_default();
        raw.split(&format!("{INVOCATION_SEPARATOR}\n"))
            .filter(|chunk| !chunk.trim().is_empty())
            .map(|chunk| chunk.lines().map(str::to_string).collect())
            .collect()
    }
}

impl Default for WorkspaceFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Fake generator body emitting two file names after the marker, preceded by
/// one empty entry
#[cfg(unix)]
pub const GENERATOR_SUCCESS: &str =
    r"printf 'Scanning sources...\nWriting boilerplate files...\n\nwidget.spec.js\nhelper.spec.js'";

/// Fake generator body reporting a conflict unless invoked with `--force`
#[cfg(unix)]
pub const GENERATOR_CONFLICT_UNLESS_FORCED: &str = r#"for arg in "$@"; do
  if [ "$arg" = "--force" ]; then
    printf 'Writing boilerplate files...\nwidget.spec.js'
    exit 0
  fi
done
printf 'Writing boilerplate files...\nwidget.spec.js already exists'"#;

/// Fake generator body failing with a diagnostic on stderr
#[cfg(unix)]
pub const GENERATOR_FAILURE: &str = r"printf 'template engine exploded\n' >&2
exit 3";

/// Fake generator body whose stdout never contains the marker
#[cfg(unix)]
pub const GENERATOR_NO_MARKER: &str = r"printf 'unexpected chatter'";
