//! Configuration management for the editor.
//!
//! Handles:
//! - Command-line argument parsing
//! - The optional TOML settings file
//! - Resolving the default documents directory

use anyhow::{Context, Result};
use clap::Parser;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Command-line arguments for the editor
#[derive(Debug, Parser)]
#[command(name = "textpad")]
#[command(about = "Minimal plain-text editor")]
#[command(version)]
pub struct Args {
    /// File to open at startup
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Settings file to read instead of the default location
    #[arg(long, help = "Path to a TOML settings file")]
    pub config: Option<PathBuf>,

    /// Log filter for the editor
    #[arg(
        long,
        default_value = "warn",
        help = "Log level (trace, debug, info, warn, error, off)"
    )]
    pub log_level: String,

    /// Log file; defaults to `textpad.log` in the per-user state directory
    #[arg(long, help = "File that receives log output")]
    pub log_file: Option<PathBuf>,
}

/// File filter offered by the open and save pickers
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct FilterSettings {
    pub description: String,
    pub extensions: Vec<String>,
}

impl Default for FilterSettings {
    fn default() -> Self {
        Self {
            description: "Text Files".to_string(),
            extensions: vec!["txt".to_string()],
        }
    }
}

/// Settings file structure (matches TOML)
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Suggested file name when saving a new document
    pub untitled_name: String,
    /// Suggested directory when saving a new document
    pub documents_dir: Option<PathBuf>,
    /// Ask before discarding a modified document even when it is empty
    pub confirm_empty_changes: bool,
    pub filter: FilterSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            untitled_name: "Untitled.txt".to_string(),
            documents_dir: None,
            confirm_empty_changes: false,
            filter: FilterSettings::default(),
        }
    }
}

impl Settings {
    /// Parse settings from TOML text
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).context("invalid settings")
    }

    /// Read and parse a settings file
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read settings file {}", path.display()))?;
        Self::from_toml(&text).with_context(|| format!("in {}", path.display()))
    }
}

/// Combined configuration from all sources
#[derive(Debug, Clone)]
pub struct Config {
    /// File named on the command line
    pub startup_file: Option<PathBuf>,
    /// Settings file that was actually read, if any
    pub settings_path: Option<PathBuf>,
    pub settings: Settings,
    /// Log level
    pub log_level: String,
    pub log_file: Option<PathBuf>,
}

impl Config {
    /// Create configuration from command-line arguments
    pub fn from_args_and_env() -> Result<Self> {
        Self::from_args(Args::parse())
    }

    /// Create configuration from explicit arguments (useful for testing)
    pub fn from_args(args: Args) -> Result<Self> {
        let (settings, settings_path) = match args.config {
            // An explicitly named file has to exist
            Some(path) => (Settings::load(&path)?, Some(path)),
            None => match default_settings_path().filter(|path| path.is_file()) {
                Some(path) => (Settings::load(&path)?, Some(path)),
                None => (Settings::default(), None),
            },
        };

        if let Some(path) = &settings_path {
            log::debug!("Loaded settings from {}", path.display());
        }

        Ok(Config {
            startup_file: args.file,
            settings_path,
            settings,
            log_level: args.log_level,
            log_file: args.log_file,
        })
    }

    /// Directory suggested by Save As for a document that has no file yet
    pub fn documents_dir(&self) -> PathBuf {
        self.settings
            .documents_dir
            .clone()
            .or_else(dirs::document_dir)
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// Where log records go: `--log-file`, else the per-user state or cache directory.
    ///
    /// The terminal owns stdout and stderr while the editor runs, so there is
    /// no console fallback.
    pub fn log_path(&self) -> Option<PathBuf> {
        self.log_file.clone().or_else(default_log_path)
    }
}

/// `<state dir>/textpad/textpad.log`, falling back to the cache directory
pub fn default_log_path() -> Option<PathBuf> {
    dirs::state_dir()
        .or_else(dirs::cache_dir)
        .map(|dir| dir.join("textpad").join("textpad.log"))
}

/// `<config dir>/textpad/config.toml`
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("textpad").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_defaults() {
        let settings = Settings::from_toml("").unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.untitled_name, "Untitled.txt");
        assert_eq!(settings.filter.extensions, vec!["txt"]);
        assert!(!settings.confirm_empty_changes);
    }

    #[test]
    fn test_settings_partial_override() {
        let settings = Settings::from_toml(
            r#"
confirm_empty_changes = true

[filter]
extensions = ["txt", "md"]
"#,
        )
        .unwrap();

        assert!(settings.confirm_empty_changes);
        assert_eq!(settings.filter.description, "Text Files");
        assert_eq!(settings.filter.extensions, vec!["txt", "md"]);
        assert_eq!(settings.untitled_name, "Untitled.txt");
    }

    #[test]
    fn test_settings_reject_unknown_keys() {
        assert!(Settings::from_toml("font_size = 12").is_err());
    }

    #[test]
    fn test_documents_dir_prefers_settings() {
        let config = Config {
            startup_file: None,
            settings_path: None,
            settings: Settings {
                documents_dir: Some(PathBuf::from("/srv/notes")),
                ..Settings::default()
            },
            log_level: "warn".to_string(),
            log_file: None,
        };
        assert_eq!(config.documents_dir(), PathBuf::from("/srv/notes"));
    }

    #[test]
    fn test_log_path_prefers_explicit_file() {
        let config = Config {
            startup_file: None,
            settings_path: None,
            settings: Settings::default(),
            log_level: "warn".to_string(),
            log_file: Some(PathBuf::from("/tmp/textpad-debug.log")),
        };
        assert_eq!(config.log_path(), Some(PathBuf::from("/tmp/textpad-debug.log")));

        let config = Config {
            log_file: None,
            ..config
        };
        assert_eq!(config.log_path(), default_log_path());
        if let Some(path) = config.log_path() {
            assert!(path.ends_with("textpad/textpad.log"));
        }
    }
}
