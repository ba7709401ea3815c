//! Configuration file support for xcresolve.
//!
//! Two configuration file locations are read:
//! - Global: `~/.xcresolve/config.toml` - User-wide defaults
//! - Project: `.xcresolve/config.toml` - Project-specific overrides
//!
//! Project config takes precedence over global config.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Default depth for walking a directory in search of projects.
pub const DEFAULT_SEARCH_DEPTH: usize = 4;

/// xcresolve configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Resolution settings
    pub resolve: ResolveConfig,
}

/// Resolution-related configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolveConfig {
    /// Prefer the Release configuration over Debug (default: true)
    pub prefer_release: Option<bool>,

    /// Name used to break ties between equally ranked targets
    pub project_name_hint: Option<String>,

    /// Maximum directory depth searched for projects
    pub search_depth: Option<usize>,
}

impl ResolveConfig {
    pub fn prefer_release(&self) -> bool {
        self.prefer_release.unwrap_or(true)
    }

    pub fn search_depth(&self) -> usize {
        self.search_depth.unwrap_or(DEFAULT_SEARCH_DEPTH)
    }
}

impl Config {
    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", path.display()))
    }

    /// Load configuration with fallback to defaults if the file is missing
    /// or invalid.
    pub fn load_or_default(path: &Path) -> Self {
        if path.exists() {
            Self::load(path).unwrap_or_else(|e| {
                tracing::warn!("Failed to load config from {}: {:#}", path.display(), e);
                Self::default()
            })
        } else {
            Self::default()
        }
    }

    /// Merge another config into this one (other takes precedence).
    pub fn merge(&mut self, other: Config) {
        if other.resolve.prefer_release.is_some() {
            self.resolve.prefer_release = other.resolve.prefer_release;
        }
        if other.resolve.project_name_hint.is_some() {
            self.resolve.project_name_hint = other.resolve.project_name_hint;
        }
        if other.resolve.search_depth.is_some() {
            self.resolve.search_depth = other.resolve.search_depth;
        }
    }
}

/// Get the global xcresolve config directory (~/.xcresolve).
pub fn global_config_dir() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|b| b.home_dir().join(".xcresolve"))
}

/// Get the global config path (~/.xcresolve/config.toml).
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("config.toml"))
}

/// Get the project config path (.xcresolve/config.toml).
pub fn project_config_path(project_root: &Path) -> PathBuf {
    project_root.join(".xcresolve").join("config.toml")
}

/// Load merged configuration from global and project locations.
///
/// Order of precedence (highest to lowest):
/// 1. Project config (.xcresolve/config.toml)
/// 2. Global config (~/.xcresolve/config.toml)
/// 3. Defaults
pub fn load_config(global_path: Option<&Path>, project_path: &Path) -> Config {
    let mut config = Config::default();

    if let Some(global_path) = global_path {
        config.merge(Config::load_or_default(global_path));
    }

    config.merge(Config::load_or_default(project_path));

    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.resolve.prefer_release());
        assert_eq!(config.resolve.search_depth(), DEFAULT_SEARCH_DEPTH);
        assert!(config.resolve.project_name_hint.is_none());
    }

    #[test]
    fn test_config_load() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("config.toml");

        std::fs::write(
            &config_path,
            r#"
[resolve]
prefer_release = false
project_name_hint = "Shop"
search_depth = 2
"#,
        )
        .unwrap();

        let config = Config::load(&config_path).unwrap();
        assert!(!config.resolve.prefer_release());
        assert_eq!(config.resolve.project_name_hint.as_deref(), Some("Shop"));
        assert_eq!(config.resolve.search_depth(), 2);
    }

    #[test]
    fn test_invalid_config_falls_back_to_default() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("config.toml");
        std::fs::write(&config_path, "[resolve\nprefer_release = ").unwrap();

        assert!(Config::load(&config_path).is_err());
        assert_eq!(Config::load_or_default(&config_path), Config::default());
    }

    #[test]
    fn test_load_config_precedence() {
        let tmp = TempDir::new().unwrap();
        let global_path = tmp.path().join("global.toml");
        let project_path = tmp.path().join("project.toml");

        std::fs::write(
            &global_path,
            r#"
[resolve]
prefer_release = false
search_depth = 6
"#,
        )
        .unwrap();
        std::fs::write(
            &project_path,
            r#"
[resolve]
search_depth = 1
"#,
        )
        .unwrap();

        let config = load_config(Some(&global_path), &project_path);
        assert!(!config.resolve.prefer_release());
        assert_eq!(config.resolve.search_depth(), 1);
    }
}
