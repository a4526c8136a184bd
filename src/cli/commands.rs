use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::generator::CommandGenerator;
use crate::handlers::{
    CommandOutcome, FolderKind, add_project, generate, list_projects, set_folder,
};
use crate::settings::SettingsStore;
use crate::ui::{
    AutoConfirm, ConfirmDialog, ConsoleNotifier, EditorOpener, TerminalConfirm,
    TerminalFolderPicker,
};

#[derive(Parser)]
#[command(name = "boilerplate-companion")]
#[command(version = "0.1.0")]
#[command(about = "Drive an external boilerplate generator from the terminal", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate boilerplate for a source file
    Generate {
        /// Source file to generate boilerplate for
        file: Option<PathBuf>,
        /// Overwrite existing boilerplate without prompting
        #[arg(long)]
        force: bool,
    },
    /// Configure a project's source folder
    SetSourceFolder {
        /// Folder to use (prompts when omitted)
        folders: Vec<PathBuf>,
    },
    /// Configure a project's test folder
    SetTestFolder {
        /// Folder to use (prompts when omitted)
        folders: Vec<PathBuf>,
    },
    /// Register a project root
    AddProject {
        /// Project root directory
        dir: PathBuf,
    },
    /// List registered projects and their configured folders
    ListProjects,
}

pub fn run() -> Result<ExitCode> {
    let cli = Cli::parse();

    let Some(command) = cli.command else {
        println!("Use --help for usage information");
        return Ok(ExitCode::SUCCESS);
    };

    let notifier = ConsoleNotifier;
    let outcome = match command {
        Commands::Generate { file, force } => {
            let store = SettingsStore::load_default()?;
            let generator = CommandGenerator::from_settings(&store);
            let confirm: &dyn ConfirmDialog = if force { &AutoConfirm } else { &TerminalConfirm };
            generate(file.as_deref(), &store, &generator, &notifier, confirm, &EditorOpener)?
        }
        Commands::SetSourceFolder { folders } => {
            let mut store = SettingsStore::load_default()?;
            set_folder(
                FolderKind::Base,
                &mut store,
                &TerminalFolderPicker::new(folders),
                &notifier,
            )?
        }
        Commands::SetTestFolder { folders } => {
            let mut store = SettingsStore::load_default()?;
            set_folder(
                FolderKind::Test,
                &mut store,
                &TerminalFolderPicker::new(folders),
                &notifier,
            )?
        }
        Commands::AddProject { dir } => {
            let mut store = SettingsStore::load_default()?;
            add_project(&dir, &mut store, &notifier)?
        }
        Commands::ListProjects => {
            let store = SettingsStore::load_default()?;
            list_projects(&store)?
        }
    };

    Ok(match outcome {
        CommandOutcome::Completed | CommandOutcome::Skipped => ExitCode::SUCCESS,
        CommandOutcome::Failed => ExitCode::FAILURE,
    })
}
