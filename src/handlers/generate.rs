use std::path::Path;

use anyhow::Result;

use super::CommandOutcome;
use crate::generator::{BoilerplateGenerator, GenerationRequest, GeneratorError, first_conflict};
use crate::settings::{BASE_PATH_KEY, ProjectSettings, TEST_PATH_KEY};
use crate::ui::{ConfirmDialog, FileOpener, Notifier};
use crate::utils::paths::absolutize;
use crate::workspace::{ProjectRegistry, resolve_project};

/// Generate boilerplate for `file`, driving the conflict/overwrite flow
///
/// The generator is only invoked once both folders are configured for the
/// owning project. A conflict reported in the first output line triggers a
/// confirmation prompt and, on approval, a forced re-run with identical paths.
pub fn generate<S>(
    file: Option<&Path>,
    store: &S,
    generator: &dyn BoilerplateGenerator,
    notifier: &dyn Notifier,
    confirm: &dyn ConfirmDialog,
    opener: &dyn FileOpener,
) -> Result<CommandOutcome>
where
    S: ProjectRegistry + ProjectSettings,
{
    // No target file is the "nothing is open" case: not an error, no notification
    let Some(file) = file else {
        return Ok(CommandOutcome::Skipped);
    };
    let file_path = absolutize(file)?;

    let roots = store.roots();
    let Some(root) = resolve_project(&roots, &file_path) else {
        notifier.error("This file is not within a project directory.");
        return Ok(CommandOutcome::Failed);
    };

    let base_path = store.get(&root.path, BASE_PATH_KEY).unwrap_or_default();
    let test_path = store.get(&root.path, TEST_PATH_KEY).unwrap_or_default();
    if base_path.is_empty() || test_path.is_empty() {
        notifier.error("This project has not been configured for boilerplate generation.");
        return Ok(CommandOutcome::Failed);
    }

    let request = GenerationRequest {
        base_path: base_path.into(),
        test_path: test_path.into(),
        file_path,
        force: false,
    };

    let output = match generator.generate(&request) {
        Ok(output) => output,
        Err(err) => return Ok(report_failure(notifier, &err)),
    };

    if let Some(conflict) = first_conflict(&output) {
        if !confirm.confirm_overwrite(&format!("Boilerplate file {conflict}."))? {
            return Ok(CommandOutcome::Completed);
        }

        let retry = GenerationRequest { force: true, ..request };
        match generator.generate(&retry) {
            Ok(output) => open_files(&retry.test_path, &output, opener),
            Err(err) => return Ok(report_failure(notifier, &err)),
        }
        return Ok(CommandOutcome::Completed);
    }

    open_files(&request.test_path, &output, opener);
    Ok(CommandOutcome::Completed)
}

/// Log the full diagnostic; the notification stays generic
fn report_failure(notifier: &dyn Notifier, err: &GeneratorError) -> CommandOutcome {
    eprintln!("{}", err.diagnostic());
    notifier.error(
        "Unable to generate boilerplate.\n\nCheck that the generator is installed and supports the selected file.",
    );
    CommandOutcome::Failed
}

/// Open every non-empty file name, resolved relative to the test folder
fn open_files(test_path: &Path, output: &[String], opener: &dyn FileOpener) {
    for name in output {
        if name.is_empty() {
            continue;
        }
        let path = test_path.join(name);
        if let Err(err) = opener.open(&path) {
            eprintln!("Warning: Failed to open {}: {}", path.display(), err);
        }
    }
}
