use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::cli::OutputFormat;

/// Keys accepted by `helpdesk config set`.
pub const KEYS: &[&str] = &["server", "format", "timeout_secs", "api_prefix"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ProfileConfig {
    pub server: Option<String>,
    pub format: Option<String>,
    pub timeout_secs: Option<u64>,
    pub api_prefix: Option<String>,
}

impl ProfileConfig {
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "server" => self.server = Some(value.trim_end_matches('/').to_string()),
            "format" => {
                OutputFormat::from_str(value, true)
                    .map_err(|_| anyhow::anyhow!("Invalid format: {value}. Valid: json, yaml, table"))?;
                self.format = Some(value.to_ascii_lowercase());
            }
            "timeout_secs" => {
                let secs: u64 = value
                    .parse()
                    .with_context(|| format!("timeout_secs must be a whole number, got {value}"))?;
                anyhow::ensure!(secs > 0, "timeout_secs must be greater than zero");
                self.timeout_secs = Some(secs);
            }
            "api_prefix" => self.api_prefix = Some(value.to_string()),
            other => anyhow::bail!("Unknown config key: {other}. Valid keys: {}", KEYS.join(", ")),
        }
        Ok(())
    }

    /// Format from the profile; unknown values fall back to the default.
    pub fn output_format(&self) -> Option<OutputFormat> {
        self.format
            .as_deref()
            .and_then(|f| OutputFormat::from_str(f, true).ok())
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

pub type ConfigFile = BTreeMap<String, ProfileConfig>;

fn config_dir() -> Result<PathBuf> {
    let dir = dirs::home_dir()
        .context("Cannot determine home directory")?
        .join(".helpdesk");
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

pub fn config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.toml"))
}

pub fn load_all(path: &Path) -> Result<ConfigFile> {
    if !path.exists() {
        return Ok(ConfigFile::new());
    }
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config: {}", path.display()))?;
    toml::from_str(&content).with_context(|| format!("Invalid config: {}", path.display()))
}

pub fn load_profile(path: &Path, profile: &str) -> Result<ProfileConfig> {
    Ok(load_all(path)?.remove(profile).unwrap_or_default())
}

pub fn save_profile(path: &Path, profile: &str, config: &ProfileConfig) -> Result<()> {
    let mut all = load_all(path)?;
    all.insert(profile.to_string(), config.clone());
    let content = toml::to_string_pretty(&all)?;
    fs::write(path, content)
        .with_context(|| format!("Failed to write config: {}", path.display()))?;
    Ok(())
}

pub fn resolve_server(cli_server: Option<&str>, profile: &ProfileConfig) -> Result<String> {
    // --server flag / HELPDESK_URL env
    if let Some(s) = cli_server {
        return Ok(s.to_string());
    }
    if let Some(s) = &profile.server {
        return Ok(s.clone());
    }
    anyhow::bail!(
        "No server URL configured. Use --server, set HELPDESK_URL, or run: helpdesk config set server <url>"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        assert!(load_all(&path).unwrap().is_empty());
        assert_eq!(load_profile(&path, "default").unwrap(), ProfileConfig::default());
    }

    #[test]
    fn test_profiles_are_saved_side_by_side() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut local = ProfileConfig::default();
        local.set("server", "http://localhost:8080/").unwrap();
        local.set("timeout_secs", "90").unwrap();
        save_profile(&path, "default", &local).unwrap();

        let mut staging = ProfileConfig::default();
        staging.set("server", "https://staging.example.com").unwrap();
        staging.set("api_prefix", "/backend/api").unwrap();
        staging.set("format", "TABLE").unwrap();
        save_profile(&path, "staging", &staging).unwrap();

        let loaded = load_profile(&path, "default").unwrap();
        assert_eq!(loaded.server.as_deref(), Some("http://localhost:8080"));
        assert_eq!(loaded.timeout(), Some(Duration::from_secs(90)));

        let loaded = load_profile(&path, "staging").unwrap();
        assert_eq!(loaded.api_prefix.as_deref(), Some("/backend/api"));
        assert_eq!(loaded.output_format(), Some(OutputFormat::Table));

        let raw = fs::read_to_string(&path).unwrap();
        assert!(raw.contains("[staging]"));
    }

    #[test]
    fn test_set_rejects_bad_values() {
        let mut cfg = ProfileConfig::default();
        assert!(cfg.set("format", "xml").is_err());
        assert!(cfg.set("timeout_secs", "soon").is_err());
        assert!(cfg.set("timeout_secs", "0").is_err());
        assert!(cfg.set("token", "abc").is_err());
        assert_eq!(cfg, ProfileConfig::default());
    }

    #[test]
    fn test_invalid_toml_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[default\nserver = 1").unwrap();
        let err = load_all(&path).unwrap_err();
        assert!(format!("{err:#}").contains("Invalid config"));
    }

    #[test]
    fn test_server_resolution_order() {
        let profile = ProfileConfig {
            server: Some("http://from-profile".into()),
            ..ProfileConfig::default()
        };
        assert_eq!(
            resolve_server(Some("http://from-flag"), &profile).unwrap(),
            "http://from-flag"
        );
        assert_eq!(resolve_server(None, &profile).unwrap(), "http://from-profile");
        assert!(resolve_server(None, &ProfileConfig::default()).is_err());
    }
}
