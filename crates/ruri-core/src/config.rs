use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::batch::BatchFormat;

/// How resolved values are printed by the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Plain,
    Json,
}

/// Global configuration loaded from `~/.config/ruri/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuriConfig {
    /// Base used when no `--base` is given (None = empty base).
    #[serde(default)]
    pub default_base: Option<String>,
    /// Output format: "plain" (default) or "json".
    #[serde(default)]
    pub output: OutputFormat,
    /// Line format for `batch`: "tsv" (default) or "jsonl".
    #[serde(default)]
    pub batch_format: BatchFormat,
}

impl RuriConfig {
    /// The explicit base if given, else the configured default, else `""`.
    pub fn base_or_default<'a>(&'a self, explicit: Option<&'a str>) -> &'a str {
        explicit
            .or(self.default_base.as_deref())
            .unwrap_or_default()
    }

    /// Pretty TOML, as written to the config file.
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("ruri")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<RuriConfig> {
    load_or_init_at(&config_path()?)
}

/// Same as [`load_or_init`] for an explicit path.
pub fn load_or_init_at(path: &Path) -> Result<RuriConfig> {
    if !path.exists() {
        let default_cfg = RuriConfig::default();
        let toml = default_cfg.to_toml()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml).with_context(|| format!("write config: {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }
    load_from_path(path)
}

/// Parse an existing config file.
pub fn load_from_path(path: &Path) -> Result<RuriConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config: {}", path.display()))?;
    let cfg: RuriConfig =
        toml::from_str(&data).with_context(|| format!("parse config: {}", path.display()))?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn default_config_values() {
        let cfg = RuriConfig::default();
        assert!(cfg.default_base.is_none());
        assert_eq!(cfg.output, OutputFormat::Plain);
        assert_eq!(cfg.batch_format, BatchFormat::Tsv);
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = RuriConfig {
            default_base: Some("https://cdn.example.com/dist/".to_string()),
            output: OutputFormat::Json,
            batch_format: BatchFormat::Jsonl,
        };
        let toml = cfg.to_toml().unwrap();
        let parsed: RuriConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed, cfg);
    }

    #[test]
    fn config_toml_empty_uses_defaults() {
        let cfg: RuriConfig = toml::from_str("").unwrap();
        assert_eq!(cfg, RuriConfig::default());
    }

    #[test]
    fn config_toml_custom_values() {
        let toml = r#"
            default_base = "/srv/maps/"
            output = "json"
            batch_format = "jsonl"
        "#;
        let cfg: RuriConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.default_base.as_deref(), Some("/srv/maps/"));
        assert_eq!(cfg.output, OutputFormat::Json);
        assert_eq!(cfg.batch_format, BatchFormat::Jsonl);
    }

    #[test]
    fn config_toml_rejects_unknown_format() {
        assert!(toml::from_str::<RuriConfig>("output = \"yaml\"").is_err());
    }

    #[test]
    fn base_or_default_precedence() {
        let mut cfg = RuriConfig::default();
        assert_eq!(cfg.base_or_default(None), "");
        cfg.default_base = Some("/root/".to_string());
        assert_eq!(cfg.base_or_default(None), "/root/");
        assert_eq!(cfg.base_or_default(Some("//foo.com")), "//foo.com");
    }

    #[test]
    fn load_or_init_creates_then_reads() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let created = load_or_init_at(&path).unwrap();
        assert_eq!(created, RuriConfig::default());
        assert!(path.exists());

        fs::write(&path, "default_base = \"//foo.com/\"\n").unwrap();
        let loaded = load_or_init_at(&path).unwrap();
        assert_eq!(loaded.default_base.as_deref(), Some("//foo.com/"));
    }

    #[test]
    fn load_from_path_reports_bad_toml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "default_base = [").unwrap();
        let err = load_from_path(&path).unwrap_err();
        assert!(format!("{err:#}").contains("parse config"));
    }
}
