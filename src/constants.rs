//! Application-wide constants.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "Article Params";

/// The binary name of the application (used in command examples, lowercase with hyphens).
pub const APP_BINARY_NAME: &str = "article-params";

/// Directory under the platform config dir holding `config.toml`.
pub const APP_DATA_DIR: &str = "ArticleParams";
