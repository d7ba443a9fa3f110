//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. 环境变量
//! 2. 配置文件（bing-tts.toml）
//! 3. 默认值

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use std::path::Path;
use thiserror::Error;

use super::types::AppConfig;

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 配置文件搜索路径
const CONFIG_FILE_NAMES: &[&str] = &["bing-tts", "bing-tts.local"];

/// 加载应用配置
///
/// # 参数
/// - `config_path` - 可选的配置文件路径，如果为 None 则使用默认搜索路径
///
/// # 环境变量示例
/// - `BING_TTS_TOKEN__URL=https://eastus.api.cognitive.microsoft.com/sts/v1.0/issueToken`
/// - `BING_TTS_TTS__TIMEOUT_SECS=30`
/// - `BING_TTS_LOG__LEVEL=debug`
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let defaults = AppConfig::default();
    let mut builder = Config::builder();

    // 1. 默认值（最低优先级）
    builder = builder
        .set_default("token.url", defaults.token.url)?
        .set_default("token.timeout_secs", defaults.token.timeout_secs)?
        .set_default("tts.url", defaults.tts.url)?
        .set_default("tts.timeout_secs", defaults.tts.timeout_secs)?
        .set_default("tts.output_format", defaults.tts.output_format)?
        .set_default("tts.app_id", defaults.tts.app_id)?
        .set_default("tts.client_id", defaults.tts.client_id)?
        .set_default("tts.user_agent", defaults.tts.user_agent)?
        .set_default("tts.escape_text", defaults.tts.escape_text)?
        .set_default("playback.grace_ms", defaults.playback.grace_ms)?
        .set_default("playback.tail_ms", defaults.playback.tail_ms)?
        .set_default("log.level", defaults.log.level)?
        .set_default("log.json", defaults.log.json)?;

    // 2. 配置文件
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 3. 环境变量（最高优先级）
    // 前缀: BING_TTS_，层级分隔符: __
    builder = builder.add_source(
        Environment::with_prefix("BING_TTS")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder.build()?;

    let app_config: AppConfig = config.try_deserialize().map_err(|e| {
        ConfigError::ParseError(format!("Failed to deserialize config: {}", e))
    })?;

    validate_config(&app_config)?;

    Ok(app_config)
}

/// 验证配置有效性
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.token.url.is_empty() {
        return Err(ConfigError::ValidationError(
            "Token URL cannot be empty".to_string(),
        ));
    }

    if config.tts.url.is_empty() {
        return Err(ConfigError::ValidationError(
            "TTS URL cannot be empty".to_string(),
        ));
    }

    if config.token.timeout_secs == 0 || config.tts.timeout_secs == 0 {
        return Err(ConfigError::ValidationError(
            "Request timeout cannot be 0".to_string(),
        ));
    }

    if config.tts.output_format.is_empty() {
        return Err(ConfigError::ValidationError(
            "TTS output format cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// 打印配置信息
pub fn print_config(config: &AppConfig) {
    tracing::debug!("=== Application Configuration ===");
    tracing::debug!("Token URL: {}", config.token.url);
    tracing::debug!("Token Timeout: {}s", config.token.timeout_secs);
    tracing::debug!("TTS URL: {}", config.tts.url);
    tracing::debug!("TTS Timeout: {}s", config.tts.timeout_secs);
    tracing::debug!("TTS Output Format: {}", config.tts.output_format);
    tracing::debug!("Escape Text: {}", config.tts.escape_text);
    tracing::debug!("Playback Grace: {}ms", config.playback.grace_ms);
    tracing::debug!("Log Level: {}", config.log.level);
    tracing::debug!("=================================");
}

/// 环境变量为进程级共享状态，读写环境或加载配置的测试需持有此锁
#[cfg(test)]
pub(crate) static ENV_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());
