use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    /// Catalog YAML to load; the embedded catalog is used when `None`.
    pub catalog_path: Option<PathBuf>,
    /// Model selected at startup. Must exist in the catalog.
    pub default_model: String,
    /// Directory exported reports are written to.
    pub export_dir: PathBuf,
}
