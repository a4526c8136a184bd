//! Terminal implementations of the UI surfaces

use std::env;
use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{Context, Result, bail};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input};

use super::{ConfirmDialog, FileOpener, FolderPicker, Notifier};

/// Notifications on the terminal: successes to stdout, errors to stderr
#[derive(Debug, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn success(&self, message: &str) {
        println!("{message}");
    }

    fn error(&self, message: &str) {
        eprintln!("Error: {message}");
    }
}

/// Interactive overwrite confirmation
#[derive(Debug, Default)]
pub struct TerminalConfirm;

impl ConfirmDialog for TerminalConfirm {
    fn confirm_overwrite(&self, message: &str) -> Result<bool> {
        Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(format!("{message} Overwrite?"))
            .default(false)
            .interact()
            .context("Failed to read overwrite confirmation")
    }
}

/// Pre-confirmed variant backing the `--force` flag
#[derive(Debug, Default)]
pub struct AutoConfirm;

impl ConfirmDialog for AutoConfirm {
    fn confirm_overwrite(&self, _message: &str) -> Result<bool> {
        Ok(true)
    }
}

/// Folder selection from command-line arguments, falling back to an
/// interactive path prompt when none were given
///
/// An empty prompt answer is a cancel, mirroring a dismissed picker dialog.
#[derive(Debug)]
pub struct TerminalFolderPicker {
    args: Vec<PathBuf>,
}

impl TerminalFolderPicker {
    pub fn new(args: Vec<PathBuf>) -> Self {
        Self { args }
    }
}

impl FolderPicker for TerminalFolderPicker {
    fn pick_folders(&self) -> Result<Option<Vec<PathBuf>>> {
        if !self.args.is_empty() {
            return Ok(Some(self.args.clone()));
        }

        let raw: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt("Folder path (leave empty to cancel)")
            .allow_empty(true)
            .interact_text()
            .context("Failed to read folder path")?;

        if raw.trim().is_empty() {
            return Ok(None);
        }
        Ok(Some(vec![PathBuf::from(raw.trim())]))
    }
}

/// Opens files in `$VISUAL`/`$EDITOR` when set; prints the path otherwise
#[derive(Debug, Default)]
pub struct EditorOpener;

impl EditorOpener {
    fn editor() -> Option<String> {
        env::var("VISUAL")
            .ok()
            .filter(|v| !v.is_empty())
            .or_else(|| env::var("EDITOR").ok().filter(|v| !v.is_empty()))
    }
}

impl FileOpener for EditorOpener {
    fn open(&self, path: &Path) -> Result<()> {
        let Some(editor) = Self::editor() else {
            // No editor configured; the path itself is still useful output
            println!("{}", path.display());
            return Ok(());
        };

        let status = Command::new(&editor)
            .arg(path)
            .status()
            .with_context(|| format!("Failed to launch editor `{editor}`"))?;
        if !status.success() {
            bail!("Editor `{editor}` exited with {status}");
        }
        Ok(())
    }
}
