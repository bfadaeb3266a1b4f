use crate::error::{AppResult, ConfigError};
use serde::Deserialize;
use std::path::Path;

/// 配置文件路径的环境变量
pub const CONFIG_PATH_ENV: &str = "LAWMASTER_CONFIG";
/// 默认配置文件路径
pub const DEFAULT_CONFIG_PATH: &str = "lawmaster.toml";

/// 程序配置文件
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 题库纯文本文件
    pub questions_file: String,
    /// 题库远程地址（设置后优先于本地文件）
    pub source_url: Option<String>,
    /// 已分类的参考题库 JSON（用于按题号标注分类）
    pub reference_json: Option<String>,
    /// 转换结果输出的 JSON 文件
    pub output_json: String,
    /// 降级题目写入的警告文件
    pub warn_file: String,
    /// 排行榜存储文件
    pub leaderboard_file: String,
    /// 输出日志文件
    pub output_log_file: String,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            questions_file: "300 câu.txt".to_string(),
            source_url: None,
            reference_json: None,
            output_json: "questions_300.json".to_string(),
            warn_file: "warn.txt".to_string(),
            leaderboard_file: "leaderboard.json".to_string(),
            output_log_file: "output.txt".to_string(),
            verbose_logging: false,
        }
    }
}

impl Config {
    /// 默认配置 + 环境变量覆盖
    pub fn from_env() -> Self {
        Self::default().with_env_overrides()
    }

    /// 从 TOML 文件读取配置，未写出的字段使用默认值
    pub fn from_toml_file(path: &Path) -> AppResult<Self> {
        let display = path.display().to_string();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFailed {
            path: display.clone(),
            source,
        })?;
        let config = toml::from_str(&content).map_err(|source| ConfigError::TomlParseFailed {
            path: display,
            source,
        })?;
        Ok(config)
    }

    /// 配置文件（存在时）+ 环境变量覆盖
    pub fn load() -> AppResult<Self> {
        let path =
            std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        let path = Path::new(&path);

        let base = if path.exists() {
            tracing::info!("读取配置文件: {}", path.display());
            Self::from_toml_file(path)?
        } else {
            Self::default()
        };

        Ok(base.with_env_overrides())
    }

    /// 用环境变量覆盖各字段，无法解析的值保持原样
    pub fn with_env_overrides(self) -> Self {
        Self {
            questions_file: std::env::var("QUESTIONS_FILE").unwrap_or(self.questions_file),
            source_url: std::env::var("QUESTIONS_URL").ok().or(self.source_url),
            reference_json: std::env::var("REFERENCE_JSON").ok().or(self.reference_json),
            output_json: std::env::var("OUTPUT_JSON").unwrap_or(self.output_json),
            warn_file: std::env::var("WARN_FILE").unwrap_or(self.warn_file),
            leaderboard_file: std::env::var("LEADERBOARD_FILE")
                .unwrap_or(self.leaderboard_file),
            output_log_file: std::env::var("OUTPUT_LOG_FILE").unwrap_or(self.output_log_file),
            verbose_logging: std::env::var("VERBOSE_LOGGING")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(self.verbose_logging),
        }
    }
}
