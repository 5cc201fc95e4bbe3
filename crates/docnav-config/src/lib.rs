//! Configuration management for docnav.
//!
//! Parses `docnav.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! The central piece is the header menu: the list of top-level
//! documentation sections, each carrying the bucket path prefix that
//! scopes the sidebar to that section.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "docnav.toml";

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Header navigation configuration.
    pub header: HeaderConfig,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Header navigation configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct HeaderConfig {
    /// Second-level header menu items. Each item names a top-level
    /// documentation section and the bucket that scopes the sidebar.
    pub second_level_menu_items: Vec<MenuItem>,
}

/// One entry of the second-level header menu.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct MenuItem {
    /// Display text.
    pub text: String,
    /// Route the menu entry links to.
    pub to: String,
    /// Bucket path prefix (e.g. `/orm`) selecting the sidebar subtree.
    pub bucket_name: String,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        let item = |text: &str, to: &str, bucket: &str| MenuItem {
            text: text.to_owned(),
            to: to.to_owned(),
            bucket_name: bucket.to_owned(),
        };
        Self {
            second_level_menu_items: vec![
                item(
                    "Getting Started",
                    "/getting-started/quickstart",
                    "/getting-started",
                ),
                item("Concepts", "/concepts/overview", "/concepts"),
                item("ORM", "/orm/overview", "/orm"),
                item("Guides", "/guides", "/guides"),
                item("Reference", "/reference", "/reference"),
                item("About", "/about", "/about"),
            ],
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
}

impl Config {
    /// Load configuration from file.
    ///
    /// If `config_path` is provided, loads from that file. Otherwise,
    /// searches for `docnav.toml` in the current directory and parents,
    /// falling back to defaults when none is found.
    ///
    /// # Errors
    ///
    /// Returns error if an explicit `config_path` doesn't exist or if
    /// parsing or validation fails.
    pub fn load(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        let config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default()
        };

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;
        config.config_path = Some(path.to_path_buf());
        Ok(config)
    }

    /// Search for `docnav.toml` in the current directory and its parents.
    fn discover_config() -> Option<PathBuf> {
        let mut dir = std::env::current_dir().ok()?;
        loop {
            let candidate = dir.join(CONFIG_FILENAME);
            if candidate.is_file() {
                return Some(candidate);
            }
            if !dir.pop() {
                return None;
            }
        }
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any menu item is malformed
    /// or two items share a bucket name.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let items = &self.header.second_level_menu_items;
        for item in items {
            require_non_empty(&item.text, "header menu item text")?;
            require_bucket_name(&item.bucket_name)?;
        }
        for (i, item) in items.iter().enumerate() {
            if items[..i]
                .iter()
                .any(|other| other.bucket_name == item.bucket_name)
            {
                return Err(ConfigError::Validation(format!(
                    "duplicate bucket name: {}",
                    item.bucket_name
                )));
            }
        }
        Ok(())
    }

    /// Bucket names of all configured top-level sections, in menu order.
    #[must_use]
    pub fn bucket_names(&self) -> Vec<&str> {
        self.header
            .second_level_menu_items
            .iter()
            .map(|item| item.bucket_name.as_str())
            .collect()
    }
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a bucket name to be a single leading-slash path segment.
fn require_bucket_name(bucket: &str) -> Result<(), ConfigError> {
    let Some(segment) = bucket.strip_prefix('/') else {
        return Err(ConfigError::Validation(format!(
            "bucket name must start with '/': {bucket}"
        )));
    };
    if segment.is_empty() || segment.contains('/') {
        return Err(ConfigError::Validation(format!(
            "bucket name must be a single path segment: {bucket}"
        )));
    }
    Ok(())
}
