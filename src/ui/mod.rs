//! Narrow user-facing surfaces
//!
//! Handlers talk to the user only through these traits, keeping the command
//! logic testable with recording fakes. Terminal implementations live in
//! `console`.

pub mod console;

use std::path::{Path, PathBuf};

use anyhow::Result;

pub use console::{
    AutoConfirm, ConsoleNotifier, EditorOpener, TerminalConfirm, TerminalFolderPicker,
};

/// User-visible notifications (message only)
pub trait Notifier {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
}

/// Two-action overwrite confirmation: Overwrite / Cancel
pub trait ConfirmDialog {
    fn confirm_overwrite(&self, message: &str) -> Result<bool>;
}

/// Folder selection; `None` means the user cancelled
pub trait FolderPicker {
    fn pick_folders(&self) -> Result<Option<Vec<PathBuf>>>;
}

/// Opens a generated file for the user
pub trait FileOpener {
    fn open(&self, path: &Path) -> Result<()>;
}
