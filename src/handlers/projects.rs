use std::path::Path;

use anyhow::Result;

use super::CommandOutcome;
use crate::settings::{BASE_PATH_KEY, ProjectSettings, SettingsStore, TEST_PATH_KEY};
use crate::ui::Notifier;
use crate::utils::paths::absolutize;
use crate::workspace::ProjectRegistry;

/// Register a project root with the workspace
///
/// Registration order is what later resolution ties-break on, so roots are
/// only ever appended.
pub fn add_project(
    dir: &Path,
    store: &mut SettingsStore,
    notifier: &dyn Notifier,
) -> Result<CommandOutcome> {
    let dir = absolutize(dir)?;

    if !dir.is_dir() {
        notifier.error(&format!("\"{}\" is not a directory.", dir.display()));
        return Ok(CommandOutcome::Failed);
    }

    match store.register_root(&dir) {
        Ok(true) => {
            notifier.success(&format!("Project \"{}\" registered.", dir.display()));
            Ok(CommandOutcome::Completed)
        }
        Ok(false) => {
            notifier.success(&format!("Project \"{}\" is already registered.", dir.display()));
            Ok(CommandOutcome::Completed)
        }
        Err(err) => {
            eprintln!("Warning: Failed to persist project registration: {err}");
            notifier.error("Unable to register project.");
            Ok(CommandOutcome::Failed)
        }
    }
}

/// Print registered projects and their configured folders
pub fn list_projects(store: &SettingsStore) -> Result<CommandOutcome> {
    let roots = store.roots();
    if roots.is_empty() {
        println!("No projects registered.");
        return Ok(CommandOutcome::Completed);
    }

    for root in roots {
        println!("{}", root.path.display());
        if let Some(base) = store.get(&root.path, BASE_PATH_KEY) {
            println!("  base: {base}");
        }
        if let Some(test) = store.get(&root.path, TEST_PATH_KEY) {
            println!("  test: {test}");
        }
    }

    Ok(CommandOutcome::Completed)
}
