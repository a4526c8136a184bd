use std::path::PathBuf;
use std::process::{Command, ExitStatus};

use thiserror::Error;

use super::output::parse_generator_stdout;
use crate::settings::{GENERATOR_PATH_KEY, SettingsStore};
use crate::utils::environment::{DEFAULT_GENERATOR_COMMAND, generator_override};

/// Arguments for one generator run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub base_path: PathBuf,
    pub test_path: PathBuf,
    pub file_path: PathBuf,
    pub force: bool,
}

/// Failures crossing the subprocess boundary
#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("failed to spawn generator `{command}`")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("generator exited with {status}")]
    CommandFailed {
        status: ExitStatus,
        stdout: String,
        stderr: String,
    },

    #[error("generator output did not contain the file-list marker")]
    MissingMarker { stdout: String },
}

impl GeneratorError {
    /// Full diagnostic for the stderr log; notifications stay generic
    pub fn diagnostic(&self) -> String {
        match self {
            Self::Spawn { command, source } => {
                format!("failed to spawn generator `{command}`: {source}")
            }
            Self::CommandFailed { status, stdout, stderr } => format!(
                "generator exited with {status}\n--- stdout ---\n{stdout}\n--- stderr ---\n{stderr}"
            ),
            Self::MissingMarker { stdout } => format!(
                "generator output did not contain the file-list marker\n--- stdout ---\n{stdout}"
            ),
        }
    }
}

/// Synchronous boundary to the external generation tool
///
/// Handlers call through this trait so tests can substitute scripted results.
pub trait BoilerplateGenerator {
    /// Run the generator and return the emitted file-name list
    fn generate(&self, request: &GenerationRequest) -> Result<Vec<String>, GeneratorError>;
}

/// Generator executable for this run
///
/// Resolution order: environment override, then the `generatorPath` setting,
/// then the default executable on PATH.
pub fn generator_command(store: &SettingsStore) -> String {
    generator_override()
        .or_else(|| store.get_global(GENERATOR_PATH_KEY).map(str::to_string))
        .unwrap_or_else(|| DEFAULT_GENERATOR_COMMAND.to_string())
}

/// Real implementation spawning the configured executable
#[derive(Debug, Clone)]
pub struct CommandGenerator {
    command: String,
}

impl CommandGenerator {
    pub fn new(command: impl Into<String>) -> Self {
        Self { command: command.into() }
    }

    /// Build one with the executable resolved from settings and environment
    pub fn from_settings(store: &SettingsStore) -> Self {
        Self::new(generator_command(store))
    }

    fn build_args(request: &GenerationRequest) -> Vec<String> {
        let mut args = vec![
            format!("--base-path={}", request.base_path.display()),
            format!("--test-path={}", request.test_path.display()),
            "--non-interactive".to_string(),
        ];
        if request.force {
            args.push("--force".to_string());
        }
        args.push(request.file_path.display().to_string());
        args
    }
}

impl BoilerplateGenerator for CommandGenerator {
    /// Blocks the calling thread until the subprocess exits
    fn generate(&self, request: &GenerationRequest) -> Result<Vec<String>, GeneratorError> {
        let output = Command::new(&self.command)
            .args(Self::build_args(request))
            .output()
            .map_err(|source| GeneratorError::Spawn { command: self.command.clone(), source })?;

        if !output.status.success() {
            return Err(GeneratorError::CommandFailed {
                status: output.status,
                stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }

        parse_generator_stdout(&String::from_utf8_lossy(&output.stdout))
    }
}
