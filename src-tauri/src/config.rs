//! Application Configuration
//!
//! File names and locations, with an environment override for the database.

use std::path::{Path, PathBuf};

/// Environment variable overriding the full database path
pub const DB_PATH_ENV: &str = "TODO_APP_DB_PATH";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Database file name inside the app data dir
    pub db_file_name: String,
    /// Log file stem inside the app log dir
    pub log_name: String,
    /// Explicit database path (takes precedence over the data dir)
    pub db_path_override: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            db_file_name: "todo_app.db".to_string(),
            log_name: "TodoApp".to_string(),
            db_path_override: None,
        }
    }
}

impl AppConfig {
    /// Defaults plus overrides from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let db_path_override = lookup(DB_PATH_ENV)
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        Self {
            db_path_override,
            ..Self::default()
        }
    }

    /// Resolve the database path for a given app data dir
    pub fn db_path(&self, app_data_dir: &Path) -> PathBuf {
        match &self.db_path_override {
            Some(path) => path.clone(),
            None => app_data_dir.join(&self.db_file_name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_db_path_is_in_data_dir() {
        let config = AppConfig::default();
        assert_eq!(
            config.db_path(Path::new("/data/app")),
            PathBuf::from("/data/app/todo_app.db")
        );
    }

    #[test]
    fn test_env_override_wins() {
        let config = AppConfig::from_lookup(|key| {
            (key == DB_PATH_ENV).then(|| "/tmp/elsewhere.db".to_string())
        });
        assert_eq!(
            config.db_path(Path::new("/data/app")),
            PathBuf::from("/tmp/elsewhere.db")
        );
    }

    #[test]
    fn test_blank_override_is_ignored() {
        let config = AppConfig::from_lookup(|_| Some("  ".to_string()));
        assert_eq!(config.db_path_override, None);
    }
}
