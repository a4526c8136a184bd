use std::path::Path;

/// Namespace prefixing every persisted key
pub const CONFIG_NAMESPACE: &str = "boilerplate-companion";

/// Setting name for a project's source folder
pub const BASE_PATH_KEY: &str = "basePath";

/// Setting name for a project's test folder
pub const TEST_PATH_KEY: &str = "testPath";

/// Top-level setting name for the generator executable
pub const GENERATOR_PATH_KEY: &str = "generatorPath";

/// Dotted settings key for a per-project entry
///
/// Always yields `boilerplate-companion.project.<root-path>.<key>`.
pub fn project_config_key(root: &Path, key: &str) -> String {
    format!("{}.project.{}.{}", CONFIG_NAMESPACE, root.display(), key)
}
