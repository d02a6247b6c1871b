//! Configuration management for post-composer
//!
//! Config file location:
//! - Linux: ~/.config/post-composer/config.toml
//! - macOS: ~/Library/Application Support/post-composer/config.toml
//! - Windows: %APPDATA%/post-composer/config.toml
//!
//! You can override the config location by setting `POST_COMPOSER_CONFIG_PATH`.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::post::Author;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Author descriptor used on every post
    #[serde(default)]
    pub author: AuthorConfig,

    /// Photo library settings
    #[serde(default)]
    pub photos: PhotosConfig,

    /// Acceptance feed behavior
    #[serde(default)]
    pub feed: FeedConfig,
}

impl Config {
    /// Load configuration from file or create default
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = fs::read_to_string(&config_path)
                .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

            let config: Config = toml::from_str(&content).with_context(|| {
                format!("Failed to parse config from {}", config_path.display())
            })?;

            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml = toml::to_string_pretty(self).context("Failed to serialize config to TOML")?;

        fs::write(&config_path, toml)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        Ok(())
    }

    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf> {
        if let Ok(path) = std::env::var("POST_COMPOSER_CONFIG_PATH") {
            let trimmed = path.trim();
            if !trimmed.is_empty() {
                return Ok(PathBuf::from(trimmed));
            }
        }

        let proj_dirs = ProjectDirs::from("com", "postcomposer", "post-composer")
            .context("Could not determine project directories")?;

        Ok(proj_dirs.config_dir().join("config.toml"))
    }

    /// The author descriptor used for submissions
    pub fn author(&self) -> Author {
        Author {
            name: self.author.name.clone(),
            avatar: self.author.avatar.clone(),
            handle: self.author.handle.clone(),
        }
    }
}

/// Author descriptor configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthorConfig {
    /// Display name
    #[serde(default = "default_author_name")]
    pub name: String,

    /// Avatar URI
    #[serde(default = "default_author_avatar")]
    pub avatar: String,

    /// Handle shown next to the name
    #[serde(default = "default_author_handle")]
    pub handle: String,
}

impl Default for AuthorConfig {
    fn default() -> Self {
        Self {
            name: default_author_name(),
            avatar: default_author_avatar(),
            handle: default_author_handle(),
        }
    }
}

fn default_author_name() -> String {
    "You".to_string()
}

fn default_author_avatar() -> String {
    "avatar://default".to_string()
}

fn default_author_handle() -> String {
    "@you".to_string()
}

/// Photo library configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PhotosConfig {
    /// Photo library directory; platform pictures directory when unset
    pub library_dir: Option<String>,
}

/// Acceptance feed configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedConfig {
    /// Simulated acceptance round-trip delay in milliseconds
    #[serde(default = "default_accept_delay_ms")]
    pub accept_delay_ms: u64,

    /// Reject every post; lets you walk the retry path without a real outage
    #[serde(default)]
    pub accept_always_fails: bool,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            accept_delay_ms: default_accept_delay_ms(),
            accept_always_fails: false,
        }
    }
}

fn default_accept_delay_ms() -> u64 {
    900
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.author.name, "You");
        assert_eq!(config.author.handle, "@you");
        assert!(config.photos.library_dir.is_none());
        assert_eq!(config.feed.accept_delay_ms, 900);
        assert!(!config.feed.accept_always_fails);
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml = toml::to_string(&config).unwrap();

        assert!(toml.contains("[author]"));
        assert!(toml.contains("handle"));
        assert!(toml.contains("accept_delay_ms"));
    }

    #[test]
    fn test_partial_config_parses_with_defaults() {
        let config: Config = toml::from_str(
            r#"
            [author]
            name = "Jess"
            "#,
        )
        .unwrap();

        assert_eq!(config.author.name, "Jess");
        assert_eq!(config.author.handle, "@you");
        assert_eq!(config.feed.accept_delay_ms, 900);
    }
}
