use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Settings read from ~/.config/gistsched/config.toml
///
/// The token is deliberately not a field here: it comes from the command
/// line or the environment and is never written to disk.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Gist holding the schedule file
    pub gist_id: Option<String>,

    /// File inside the gist, e.g. "schedule.json"
    pub filename: Option<String>,

    /// GitHub REST API base URL
    #[serde(default = "default_api_url")]
    pub api_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            gist_id: None,
            filename: None,
            api_url: default_api_url(),
        }
    }
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

/// Get the config directory path (~/.config/gistsched)
pub fn config_dir() -> Result<PathBuf> {
    let config_dir = dirs::config_dir()
        .context("Could not determine config directory")?
        .join("gistsched");
    Ok(config_dir)
}

/// Get the config file path (~/.config/gistsched/config.toml)
pub fn config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.toml"))
}

/// Load config from `path`, or the default location.
///
/// A missing file is not an error; every setting can also be given as a flag.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => config_path()?,
    };

    if !path.exists() {
        tracing::debug!("no config file at {}", path.display());
        return Ok(Config::default());
    }

    let contents = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config file at {}", path.display()))?;

    parse_config(&contents).with_context(|| format!("Failed to parse config file at {}", path.display()))
}

fn parse_config(contents: &str) -> Result<Config> {
    Ok(toml::from_str(contents)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_config() {
        let cfg = parse_config(
            r#"
            gist_id = "abc123"
            filename = "schedule.json"
            api_url = "https://github.example.com/api/v3"
            "#,
        )
        .unwrap();

        assert_eq!(cfg.gist_id.as_deref(), Some("abc123"));
        assert_eq!(cfg.filename.as_deref(), Some("schedule.json"));
        assert_eq!(cfg.api_url, "https://github.example.com/api/v3");
    }

    #[test]
    fn empty_config_uses_defaults() {
        let cfg = parse_config("").unwrap();
        assert!(cfg.gist_id.is_none());
        assert_eq!(cfg.api_url, DEFAULT_API_URL);
    }

    #[test]
    fn token_is_not_a_config_key() {
        assert!(parse_config("token = \"ghp_x\"").is_err());
    }

    #[test]
    fn missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = load_config(Some(&dir.path().join("nope.toml"))).unwrap();
        assert!(cfg.filename.is_none());
    }

    #[test]
    fn malformed_file_names_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "gist_id = [").unwrap();

        let err = load_config(Some(&path)).unwrap_err();
        assert!(format!("{:#}", err).contains("config.toml"));
    }
}
