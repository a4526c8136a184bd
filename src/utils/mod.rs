pub mod environment;
pub mod paths;

pub use environment::{
    CONFIG_DIR_ENV, DEFAULT_GENERATOR_COMMAND, GENERATOR_ENV, generator_override, get_config_dir,
};
pub use paths::{absolutize, display_relative_to, path_contains};
