//! Parsing of the generator's stdout protocol

use super::invoker::GeneratorError;

/// Marker line preceding the emitted file-name list
pub const OUTPUT_MARKER: &str = "Writing boilerplate files...\n";

/// Substring signalling a name collision instead of a generated file
pub const ALREADY_EXISTS_MARKER: &str = "already exists";

/// Split stdout after the marker into the emitted file-name list
///
/// Empty elements are preserved; consumers skip them when opening files.
pub fn parse_generator_stdout(stdout: &str) -> Result<Vec<String>, GeneratorError> {
    let rest = stdout
        .splitn(2, OUTPUT_MARKER)
        .nth(1)
        .ok_or_else(|| GeneratorError::MissingMarker { stdout: stdout.to_string() })?;

    Ok(rest.split('\n').map(str::to_string).collect())
}

/// Conflict signalled by the generator, if any
///
/// Only the first element is inspected; conflicts further down the list are
/// not reported by the upstream tool either.
pub fn first_conflict(output: &[String]) -> Option<&str> {
    output.first().filter(|line| line.contains(ALREADY_EXISTS_MARKER)).map(String::as_str)
}
