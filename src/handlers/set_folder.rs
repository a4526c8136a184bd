use anyhow::Result;

use super::CommandOutcome;
use crate::settings::{BASE_PATH_KEY, ProjectSettings, TEST_PATH_KEY};
use crate::ui::{FolderPicker, Notifier};
use crate::utils::paths::{absolutize, display_relative_to};
use crate::workspace::{ProjectRegistry, resolve_project};

/// Which of the two configured folders a selection targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FolderKind {
    Base,
    Test,
}

impl FolderKind {
    /// Setting name under the project namespace
    pub fn setting_key(self) -> &'static str {
        match self {
            Self::Base => BASE_PATH_KEY,
            Self::Test => TEST_PATH_KEY,
        }
    }

    /// Lower-case label used in error notifications
    pub fn label(self) -> &'static str {
        match self {
            Self::Base => "base",
            Self::Test => "test",
        }
    }

    /// Capitalized label for the success notification
    pub fn label_capitalized(self) -> &'static str {
        match self {
            Self::Base => "Base",
            Self::Test => "Test",
        }
    }
}

/// Shared flow behind `set-source-folder` and `set-test-folder`
///
/// Exactly one folder may be selected; it must resolve to a registered
/// project, and the setting is written for that project's root.
pub fn set_folder<S>(
    kind: FolderKind,
    store: &mut S,
    picker: &dyn FolderPicker,
    notifier: &dyn Notifier,
) -> Result<CommandOutcome>
where
    S: ProjectRegistry + ProjectSettings,
{
    let Some(paths) = picker.pick_folders()? else {
        return Ok(CommandOutcome::Skipped);
    };

    if paths.len() > 1 {
        notifier.error(&format!("You can only select one {} folder.", kind.label()));
        return Ok(CommandOutcome::Failed);
    }
    let Some(picked) = paths.first() else {
        // An empty selection behaves like a cancelled picker
        return Ok(CommandOutcome::Skipped);
    };
    let picked = absolutize(picked)?;

    let roots = store.roots();
    let Some(root) = resolve_project(&roots, &picked) else {
        notifier.error(&format!(
            "Selected {} folder was not within a project directory.",
            kind.label()
        ));
        return Ok(CommandOutcome::Failed);
    };
    let root_path = root.path.clone();

    match store.set(&root_path, kind.setting_key(), &picked.display().to_string()) {
        Ok(()) => {
            notifier.success(&format!(
                "{} folder \"{}\" set successfully.",
                kind.label_capitalized(),
                display_relative_to(&root_path, &picked)
            ));
            Ok(CommandOutcome::Completed)
        }
        Err(err) => {
            eprintln!("Warning: Failed to persist {} folder: {}", kind.label(), err);
            notifier.error(&format!("Unable to set {} folder.", kind.label()));
            Ok(CommandOutcome::Failed)
        }
    }
}
