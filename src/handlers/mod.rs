//! Command handlers composing the resolver, settings store, and generator
//!
//! # Error Handling Strategy
//!
//! Every user-facing failure is absorbed at this boundary: the handler emits
//! exactly one notification and returns [`CommandOutcome::Failed`]. Nothing is
//! retried automatically; the overwrite retry in `generate` is the only
//! deliberate, user-confirmed re-attempt. Infrastructure failures (unreadable
//! terminal, broken settings file) still propagate as `anyhow` errors.

pub mod generate;
pub mod projects;
pub mod set_folder;

pub use generate::generate;
pub use projects::{add_project, list_projects};
pub use set_folder::{FolderKind, set_folder};

/// How a command invocation ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    /// The command ran to completion (including a user-cancelled overwrite)
    Completed,
    /// Nothing to do (no target file, cancelled selection); silent
    Skipped,
    /// An error was reported to the user
    Failed,
}
