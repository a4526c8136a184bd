//! External generator subprocess boundary
//!
//! # Error Handling Strategy
//!
//! The invocation is a blocking synchronous call returning a result type, so
//! the "file already exists" and "non-zero exit" branches stay symmetric:
//!
//! - **Spawn/exit failures**: returned as [`GeneratorError`] carrying the raw
//!   process diagnostic. Handlers log the diagnostic and surface a generic
//!   error; internal detail never reaches a notification.
//!
//! - **Conflicts**: reported in-band as an `"already exists"` line in the
//!   parsed output. Only the first output element is inspected, matching the
//!   upstream tool's single-file conflict reporting.
//!
//! - **Protocol drift**: stdout without the file-list marker is an explicit
//!   [`GeneratorError::MissingMarker`], not a panic.

pub mod invoker;
pub mod output;

pub use invoker::{
    BoilerplateGenerator, CommandGenerator, GenerationRequest, GeneratorError, generator_command,
};
pub use output::{ALREADY_EXISTS_MARKER, OUTPUT_MARKER, first_conflict, parse_generator_stdout};
