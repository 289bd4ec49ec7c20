use crate::error::{BoycottCheckError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// `base_url` を上書きする環境変数
pub const BASE_URL_ENV: &str = "BOYCOTT_API_URL";

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub base_url: String,
    /// 未設定ならタイムアウトなし
    pub timeout_seconds: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            timeout_seconds: None,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| BoycottCheckError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("boycott-check").join("config.json"))
    }

    /// 実際に使うベースURL
    ///
    /// 優先順位: `--base-url` > 環境変数 > 設定ファイル
    pub fn resolve_base_url(&self, cli_override: Option<&str>) -> String {
        let env = std::env::var(BASE_URL_ENV).ok();
        pick_base_url(cli_override, env.as_deref(), &self.base_url)
    }

    pub fn set_base_url(&mut self, url: String) -> Result<()> {
        let url = url.trim();
        if url.is_empty() {
            return Err(BoycottCheckError::Config("ベースURLが空です".into()));
        }
        self.base_url = url.to_string();
        self.save()
    }
}

fn pick_base_url(cli: Option<&str>, env: Option<&str>, file: &str) -> String {
    [cli, env]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|url| !url.is_empty())
        .unwrap_or(file)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.base_url, "http://localhost:8000");
        assert_eq!(config.timeout_seconds, None);
    }

    #[test]
    fn test_load_missing_file_uses_default() {
        let dir = tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.json")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let config = Config {
            base_url: "https://boycott.example".into(),
            timeout_seconds: Some(30),
        };
        config.save_to(&path).unwrap();

        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"timeout_seconds": 10}"#).unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout_seconds, Some(10));
    }

    #[test]
    fn test_base_url_priority() {
        assert_eq!(
            pick_base_url(Some("http://cli"), Some("http://env"), "http://file"),
            "http://cli"
        );
        assert_eq!(pick_base_url(None, Some("http://env"), "http://file"), "http://env");
        assert_eq!(pick_base_url(None, None, "http://file"), "http://file");
        // 空文字は未指定扱い
        assert_eq!(pick_base_url(Some("  "), Some(""), "http://file"), "http://file");
    }
}
