//! Configuration management for Stylus.
//!
//! Loads `config.toml` with priority: `--config` override > `.stylus/config.toml`
//! discovered from the working directory > the embedded defaults.
//!
//! # Testing
//!
//! Tests use [`Config::load()`] with explicit paths to temporary directories.

use crate::smart_edit::DEFAULT_TAB_WIDTH;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use stylus_text::{lexer::DEFAULT_INCLUDE_LOOKBACK, LexerConfig};

/// Directory searched for a project-local `config.toml`.
pub const CONFIG_DIR: &str = ".stylus";

/// Global configuration for Stylus, loaded from `config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Spaces inserted by Tab and per indent level on Enter.
    pub tab_width: usize,

    /// Step over typed closers and auto-insert bracket and quote pairs.
    pub auto_close: bool,

    /// Number of UTF-16 code units before a `<` searched for `#include` when
    /// deciding whether `<...>` is an include target.
    pub include_lookback: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tab_width: DEFAULT_TAB_WIDTH,
            auto_close: true,
            include_lookback: DEFAULT_INCLUDE_LOOKBACK,
        }
    }
}

impl Config {
    /// Read and deserialize a TOML config file from the given path.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        tracing::info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Load configuration with priority: CLI override > discovered path > defaults.
    pub fn load_with_overrides(
        cli_override: Option<&Path>,
        discovered_path: Option<&Path>,
    ) -> Result<Self> {
        if let Some(path) = cli_override {
            return Self::load(path);
        }
        if let Some(path) = discovered_path {
            return Self::load(path);
        }
        Self::load_embedded()
    }

    /// `<dir>/.stylus/config.toml` if it exists.
    pub fn discover(dir: &Path) -> Option<PathBuf> {
        let path = dir.join(CONFIG_DIR).join("config.toml");
        path.is_file().then_some(path)
    }

    fn load_embedded() -> Result<Self> {
        let source = include_str!("../../config.toml");
        toml::from_str(source).context("Failed to parse embedded config.toml")
    }

    pub fn lexer(&self) -> LexerConfig {
        LexerConfig {
            include_lookback: self.include_lookback,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn loads_empty_config() {
        let tmp_dir = tempdir().unwrap();
        let config_path = tmp_dir.path().join("config.toml");
        std::fs::write(&config_path, "").unwrap();

        let config = Config::load(&config_path).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn loads_partial_config() {
        let tmp_dir = tempdir().unwrap();
        let config_path = tmp_dir.path().join("config.toml");
        std::fs::write(&config_path, "tab_width = 2\n").unwrap();

        let config = Config::load(&config_path).unwrap();
        assert_eq!(config.tab_width, 2);
        assert!(config.auto_close);
        assert_eq!(config.include_lookback, 10);
    }

    #[test]
    fn rejects_unknown_fields() {
        let tmp_dir = tempdir().unwrap();
        let config_path = tmp_dir.path().join("config.toml");
        std::fs::write(&config_path, "tab_size = 2\n").unwrap();

        let err = Config::load(&config_path).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to parse config file"));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = Config::load(Path::new("/nonexistent/stylus.toml")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/stylus.toml"));
    }

    #[test]
    fn embedded_matches_defaults() {
        let config = Config::load_with_overrides(None, None).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn override_wins_over_discovered() {
        let tmp_dir = tempdir().unwrap();
        let cli = tmp_dir.path().join("cli.toml");
        let found = tmp_dir.path().join("found.toml");
        std::fs::write(&cli, "auto_close = false\n").unwrap();
        std::fs::write(&found, "tab_width = 8\n").unwrap();

        let config = Config::load_with_overrides(Some(&cli), Some(&found)).unwrap();
        assert!(!config.auto_close);
        assert_eq!(config.tab_width, 4);

        let config = Config::load_with_overrides(None, Some(&found)).unwrap();
        assert_eq!(config.tab_width, 8);
    }

    #[test]
    fn discovers_project_config() {
        let tmp_dir = tempdir().unwrap();
        assert_eq!(Config::discover(tmp_dir.path()), None);

        let dir = tmp_dir.path().join(CONFIG_DIR);
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("config.toml"), "").unwrap();
        assert_eq!(
            Config::discover(tmp_dir.path()),
            Some(dir.join("config.toml"))
        );
    }
}
