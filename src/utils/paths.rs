use std::path::{MAIN_SEPARATOR, Path, PathBuf};

use anyhow::{Context, Result};

/// Containment predicate used for project resolution
///
/// Matching is per path component, so `/proj` does not contain `/project2`.
/// A directory does not contain itself.
pub fn path_contains(root: &Path, path: &Path) -> bool {
    path != root && path.starts_with(root)
}

/// Make a path absolute against the current directory without touching the
/// file system (the target may not exist yet)
pub fn absolutize(path: &Path) -> Result<PathBuf> {
    std::path::absolute(path)
        .with_context(|| format!("Failed to resolve path: {}", path.display()))
}

/// Render `path` relative to `root` for display, keeping a leading separator
///
/// Falls back to the full path when `path` is not under `root`.
pub fn display_relative_to(root: &Path, path: &Path) -> String {
    match path.strip_prefix(root) {
        Ok(rel) if rel.as_os_str().is_empty() => String::new(),
        Ok(rel) => format!("{}{}", MAIN_SEPARATOR, rel.display()),
        Err(_) => path.display().to_string(),
    }
}
