//! Command-line surface

pub mod commands;

pub use commands::{Cli, Commands, run};
