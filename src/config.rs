use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ReleaseError, Result};

/// Name of the configuration file looked up in the working directory and
/// the user config directory.
pub const CONFIG_FILE_NAME: &str = "autorelease.toml";

/// Represents the complete configuration for autorelease.
///
/// The auth token is deliberately absent: it only ever comes from the
/// command line or the environment.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default = "default_manifest_path")]
    pub manifest_path: String,

    #[serde(default = "default_changelog_path")]
    pub changelog_path: String,

    #[serde(default = "default_tag_prefix")]
    pub tag_prefix: String,

    #[serde(default)]
    pub draft: bool,

    #[serde(default)]
    pub prerelease: bool,

    #[serde(default = "default_remote")]
    pub remote: String,

    #[serde(default = "default_api_url")]
    pub api_url: String,
}

fn default_manifest_path() -> String {
    "package.json".to_string()
}

fn default_changelog_path() -> String {
    "CHANGELOG.md".to_string()
}

fn default_tag_prefix() -> String {
    "v".to_string()
}

fn default_remote() -> String {
    "origin".to_string()
}

fn default_api_url() -> String {
    crate::hosting::github::GITHUB_API.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            manifest_path: default_manifest_path(),
            changelog_path: default_changelog_path(),
            tag_prefix: default_tag_prefix(),
            draft: false,
            prerelease: false,
            remote: default_remote(),
            api_url: default_api_url(),
        }
    }
}

/// Values given on the command line or through the environment.
///
/// `None` (or `false` for flags) leaves the file/default value in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigOverrides {
    pub manifest_path: Option<String>,
    pub changelog_path: Option<String>,
    pub tag_prefix: Option<String>,
    pub draft: bool,
    pub prerelease: bool,
    pub remote: Option<String>,
    pub api_url: Option<String>,
}

impl Config {
    /// Apply command-line/environment overrides on top of this config.
    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(path) = overrides.manifest_path {
            self.manifest_path = path;
        }
        if let Some(path) = overrides.changelog_path {
            self.changelog_path = path;
        }
        if let Some(prefix) = overrides.tag_prefix {
            self.tag_prefix = prefix;
        }
        if let Some(remote) = overrides.remote {
            self.remote = remote;
        }
        if let Some(url) = overrides.api_url {
            self.api_url = url;
        }
        self.draft |= overrides.draft;
        self.prerelease |= overrides.prerelease;
        self
    }
}

/// Validate the auth token given on the command line or in the environment.
///
/// # Errors
/// * `ReleaseError::Config` - If the token is missing or empty
pub fn require_token(token: Option<String>) -> Result<String> {
    token
        .filter(|token| !token.trim().is_empty())
        .ok_or_else(|| ReleaseError::config("auth token is required"))
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `autorelease.toml` in current directory
/// 3. `autorelease.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err(ReleaseError::Config)` - If a file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let path = match config_path {
        Some(path) => Some(PathBuf::from(path)),
        None => find_config_file(),
    };

    match path {
        Some(path) => read_config_file(&path),
        None => Ok(Config::default()),
    }
}

fn find_config_file() -> Option<PathBuf> {
    let local = Path::new(".").join(CONFIG_FILE_NAME);
    if local.exists() {
        return Some(local);
    }

    dirs::config_dir()
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .filter(|path| path.exists())
}

fn read_config_file(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path).map_err(|e| {
        ReleaseError::config(format!("cannot read {}: {}", path.display(), e))
    })?;

    toml::from_str(&content)
        .map_err(|e| ReleaseError::config(format!("invalid {}: {}", path.display(), e)))
}
