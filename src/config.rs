use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

/// Settings for the command line tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Config {
    /// Output in descending order.
    pub reverse: bool,
    /// Only output the first of a run of lines which compare equal.
    pub unique: bool,
    /// Keep lines which compare equal in input order.
    pub stable: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            reverse: false,
            unique: false,
            stable: true,
        }
    }
}

impl Config {
    /// Load configuration from the given path, or from the per-user
    /// configuration file if it exists.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::from_path(path);
        }

        let Some(path) = default_path() else {
            tracing::debug!("No configuration directory available");
            return Ok(Self::default());
        };

        if !path.exists() {
            return Ok(Self::default());
        }

        Self::from_path(&path)
    }

    fn from_path(path: &Path) -> Result<Self> {
        tracing::debug!(path = ?path, "Loading configuration");

        let data = fs::read_to_string(path).with_context(|| path.display().to_string())?;
        let config = toml::from_str(&data).with_context(|| path.display().to_string())?;
        Ok(config)
    }
}

/// Get the path of the per-user configuration file.
fn default_path() -> Option<PathBuf> {
    let dirs = ProjectDirs::from("", "", "jisx4061")?;
    Some(dirs.config_dir().join("config.toml"))
}

#[test]
fn parse_partial() -> Result<()> {
    let config: Config = toml::from_str("reverse = true")?;
    assert!(config.reverse);
    assert!(!config.unique);
    assert!(config.stable);

    let config: Config = toml::from_str("unique = true\nstable = false")?;
    assert!(config.unique);
    assert!(!config.stable);
    Ok(())
}

#[test]
fn roundtrip_default() -> Result<()> {
    let string = toml::to_string(&Config::default())?;
    let config: Config = toml::from_str(&string)?;
    assert_eq!(config, Config::default());
    Ok(())
}
