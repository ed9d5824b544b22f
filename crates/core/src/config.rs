use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    Batch,
    Single,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("--mode は必須です")]
    MissingMode,
    #[error("不正なモードです: {0} (b または s を指定してください)")]
    InvalidMode(String),
    #[error("--filename は必須です")]
    MissingFileName,
    #[error("シングルモードでは --targetfile は必須です")]
    MissingTargetFile,
}

impl RunMode {
    pub fn parse(value: &str) -> Result<Self, ConfigError> {
        match value {
            "b" => Ok(RunMode::Batch),
            "s" => Ok(RunMode::Single),
            other => Err(ConfigError::InvalidMode(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub exclude_names: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct AppPaths {
    pub config_dir: PathBuf,
    pub config_path: PathBuf,
}

pub fn app_paths() -> Result<AppPaths> {
    let proj = ProjectDirs::from("com", "redress", "redress")
        .context("OS標準設定ディレクトリを取得できませんでした")?;
    let config_dir = proj.config_dir().to_path_buf();
    Ok(AppPaths {
        config_path: config_dir.join("config.toml"),
        config_dir,
    })
}

pub fn load_config() -> Result<AppConfig> {
    let paths = app_paths()?;
    load_config_from(&paths.config_path)
}

pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    if !path.exists() {
        return Ok(AppConfig::default());
    }

    let raw = fs::read_to_string(path)
        .with_context(|| format!("設定ファイルを読めませんでした: {}", path.display()))?;

    let config = toml::from_str::<AppConfig>(&raw).context("設定ファイルのパースに失敗しました")?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_short_mode_flags() {
        assert_eq!(RunMode::parse("b"), Ok(RunMode::Batch));
        assert_eq!(RunMode::parse("s"), Ok(RunMode::Single));
    }

    #[test]
    fn parse_rejects_anything_else() {
        let err = RunMode::parse("batch").expect_err("long form must be rejected");
        assert_eq!(err, ConfigError::InvalidMode("batch".to_string()));
        assert!(RunMode::parse("").is_err());
    }

    #[test]
    fn config_roundtrips_through_toml() {
        let config = AppConfig {
            exclude_names: vec!["redress".to_string(), "keep.txt".to_string()],
        };
        let body = toml::to_string_pretty(&config).expect("serialize");
        let parsed = toml::from_str::<AppConfig>(&body).expect("parse");
        assert_eq!(parsed.exclude_names, config.exclude_names);
    }

    #[test]
    fn empty_config_file_yields_defaults() {
        let parsed = toml::from_str::<AppConfig>("").expect("parse");
        assert!(parsed.exclude_names.is_empty());
    }

    #[test]
    fn load_config_from_missing_path_yields_defaults() {
        let temp = tempfile::tempdir().expect("tempdir");
        let config = load_config_from(&temp.path().join("config.toml")).expect("load");
        assert!(config.exclude_names.is_empty());
    }

    #[test]
    fn load_config_from_reads_exclude_names() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "exclude_names = [\"keep.txt\"]\n").expect("write config");

        let config = load_config_from(&path).expect("load");
        assert_eq!(config.exclude_names, vec!["keep.txt".to_string()]);
    }

    #[test]
    fn load_config_from_rejects_broken_toml() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "exclude_names = ???").expect("write config");

        let err = load_config_from(&path).expect_err("broken toml must fail");
        assert!(err.to_string().contains("設定ファイルのパースに失敗しました"));
    }
}
