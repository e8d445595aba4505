use crate::error::{AppError, Result};
use artwork_select_common::ARTIC_API_URL;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// APIのURLを上書きする環境変数
pub const API_URL_ENV: &str = "ARTIC_API_URL";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api_url: String,
    pub timeout_seconds: u64,
    /// `AIC-User-Agent` ヘッダーに送る連絡先
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_config()
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default_config())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| AppError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("artwork-select").join("config.json"))
    }

    fn default_config() -> Self {
        Self {
            api_url: ARTIC_API_URL.into(),
            timeout_seconds: 30,
            user_agent: format!("artwork-select/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    /// 実際に使うAPIのURL
    pub fn api_url(&self) -> String {
        // 環境変数を優先
        match std::env::var(API_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => url.trim().to_string(),
            _ => self.api_url.clone(),
        }
    }

    pub fn set_api_url(&mut self, url: String) -> Result<()> {
        let url = url.trim().to_string();
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(AppError::Config(format!("URLはhttp(s)で始めてください: {}", url)));
        }
        self.api_url = url;
        self.save()
    }

    pub fn set_timeout(&mut self, seconds: u64) -> Result<()> {
        if seconds == 0 {
            return Err(AppError::Config("タイムアウトは1秒以上にしてください".into()));
        }
        self.timeout_seconds = seconds;
        self.save()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.api_url, ARTIC_API_URL);
        assert_eq!(config.timeout_seconds, 30);
        assert!(config.user_agent.starts_with("artwork-select/"));
    }

    #[test]
    fn test_config_partial_json_uses_defaults() {
        let config: Config = serde_json::from_str(r#"{"timeout_seconds": 5}"#).expect("デシリアライズ失敗");
        assert_eq!(config.timeout_seconds, 5);
        assert_eq!(config.api_url, ARTIC_API_URL);
    }

    #[test]
    fn test_set_api_url_rejects_non_http() {
        let mut config = Config::default();
        let result = config.set_api_url("ftp://example.com".to_string());
        assert!(matches!(result, Err(AppError::Config(_))));
        assert_eq!(config.api_url, ARTIC_API_URL);
    }

    #[test]
    fn test_set_timeout_rejects_zero() {
        let mut config = Config::default();
        assert!(matches!(config.set_timeout(0), Err(AppError::Config(_))));
        assert_eq!(config.timeout_seconds, 30);
    }
}
