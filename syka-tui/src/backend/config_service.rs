//! 配置服务
//!
//! 配置文件位于 `<config dir>/syka-tui/config.json`，所有字段均可省略。

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 获取配置目录路径
pub fn get_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("syka-tui")
}

/// 应用配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppConfig {
    /// 每页行数
    pub page_size: usize,
    /// 提示消息的显示时长（毫秒）
    pub toast_duration_ms: u64,
    /// 位置为空时显示的区块
    pub default_section: String,
    /// 启动时的位置片段，如 `#proxies`
    pub start_location: String,
    pub language: String,
    /// `dark` 或 `light`
    pub theme: String,
    /// 模拟账号数量
    pub mock_accounts: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            page_size: 10,
            toast_duration_ms: 3000,
            default_section: "dashboard".to_string(),
            start_location: String::new(),
            language: "en-US".to_string(),
            theme: "dark".to_string(),
            mock_accounts: 53,
        }
    }
}

/// 配置读取失败的原因
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("malformed config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// 配置服务 trait
pub trait ConfigService: Send + Sync {
    /// 加载配置
    fn load(&self) -> Result<AppConfig, ConfigError>;

    /// 保存配置
    fn save(&self, config: &AppConfig) -> Result<()>;

    /// 加载配置，失败时回退到默认值
    fn load_or_default(&self) -> AppConfig {
        match self.load() {
            Ok(config) => config,
            Err(e) => {
                log::warn!("{e}; using default configuration");
                AppConfig::default()
            }
        }
    }
}

/// 本地配置服务
pub struct LocalConfigService {
    path: PathBuf,
}

impl LocalConfigService {
    pub fn new() -> Self {
        Self::with_path(get_config_dir().join("config.json"))
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for LocalConfigService {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigService for LocalConfigService {
    fn load(&self) -> Result<AppConfig, ConfigError> {
        if !self.path.exists() {
            log::debug!("no config at {}, using defaults", self.path.display());
            return Ok(AppConfig::default());
        }

        let content = std::fs::read_to_string(&self.path).map_err(|source| ConfigError::Read {
            path: self.path.clone(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: self.path.clone(),
            source,
        })
    }

    fn save(&self, config: &AppConfig) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("creating {}", dir.display()))?;
        }
        let content = serde_json::to_string_pretty(config)?;
        std::fs::write(&self.path, content)
            .with_context(|| format!("writing {}", self.path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("syka-tui-config-{}-{name}", std::process::id()))
            .join("config.json")
    }

    #[test]
    fn defaults() {
        let config = AppConfig::default();
        assert_eq!(config.page_size, 10);
        assert_eq!(config.toast_duration_ms, 3000);
        assert_eq!(config.default_section, "dashboard");
        assert_eq!(config.mock_accounts, 53);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let config: AppConfig =
            serde_json::from_str(r##"{"pageSize": 25, "startLocation": "#proxies"}"##).unwrap();
        assert_eq!(config.page_size, 25);
        assert_eq!(config.start_location, "#proxies");
        assert_eq!(config.toast_duration_ms, 3000);
        assert_eq!(config.language, "en-US");
    }

    #[test]
    fn missing_file_gives_defaults() {
        let service = LocalConfigService::with_path(temp_path("missing"));
        assert_eq!(service.load().unwrap(), AppConfig::default());
    }

    #[test]
    fn malformed_file_falls_back() {
        let path = temp_path("malformed");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "{ not json").unwrap();

        let service = LocalConfigService::with_path(&path);
        assert!(matches!(service.load(), Err(ConfigError::Parse { .. })));
        assert_eq!(service.load_or_default(), AppConfig::default());

        std::fs::remove_dir_all(path.parent().unwrap()).ok();
    }

    #[test]
    fn save_then_load() {
        let path = temp_path("save");
        let service = LocalConfigService::with_path(&path);
        let config = AppConfig {
            language: "ru-RU".to_string(),
            ..AppConfig::default()
        };
        service.save(&config).unwrap();
        assert_eq!(service.load().unwrap(), config);

        std::fs::remove_dir_all(path.parent().unwrap()).ok();
    }
}
