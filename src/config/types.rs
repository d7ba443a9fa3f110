//! Configuration Types
//!
//! 定义所有配置结构体。默认值与线上服务的固定参数一致。

use serde::Deserialize;

/// 应用主配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// 令牌服务配置
    #[serde(default)]
    pub token: TokenConfig,

    /// TTS 服务配置
    #[serde(default)]
    pub tts: TtsConfig,

    /// 播放配置
    #[serde(default)]
    pub playback: PlaybackConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

/// 令牌服务配置
#[derive(Debug, Clone, Deserialize)]
pub struct TokenConfig {
    /// 令牌签发地址
    #[serde(default = "default_token_url")]
    pub url: String,

    /// 请求超时时间（秒）
    #[serde(default = "default_token_timeout")]
    pub timeout_secs: u64,
}

fn default_token_url() -> String {
    "https://api.cognitive.microsoft.com/sts/v1.0/issueToken".to_string()
}

fn default_token_timeout() -> u64 {
    30
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            url: default_token_url(),
            timeout_secs: default_token_timeout(),
        }
    }
}

/// TTS 服务配置
#[derive(Debug, Clone, Deserialize)]
pub struct TtsConfig {
    /// 合成服务地址
    #[serde(default = "default_tts_url")]
    pub url: String,

    /// 请求超时时间（秒）
    #[serde(default = "default_tts_timeout")]
    pub timeout_secs: u64,

    /// `X-Microsoft-OutputFormat` 请求头
    #[serde(default = "default_output_format")]
    pub output_format: String,

    #[serde(default = "default_app_id")]
    pub app_id: String,

    #[serde(default = "default_client_id")]
    pub client_id: String,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// 是否转义消息中的 XML 特殊字符
    /// 关闭后消息可直接携带 SSML 标签
    #[serde(default = "default_escape_text")]
    pub escape_text: bool,
}

fn default_tts_url() -> String {
    "https://speech.platform.bing.com/synthesize".to_string()
}

fn default_tts_timeout() -> u64 {
    60
}

fn default_output_format() -> String {
    "riff-16khz-16bit-mono-pcm".to_string()
}

fn default_app_id() -> String {
    "07D3234E49CE426DAA29772419F436CA".to_string()
}

fn default_client_id() -> String {
    "1ECFAE91408841A480F00935DC390960".to_string()
}

fn default_user_agent() -> String {
    "TTSForPython".to_string()
}

fn default_escape_text() -> bool {
    true
}

impl Default for TtsConfig {
    fn default() -> Self {
        Self {
            url: default_tts_url(),
            timeout_secs: default_tts_timeout(),
            output_format: default_output_format(),
            app_id: default_app_id(),
            client_id: default_client_id(),
            user_agent: default_user_agent(),
            escape_text: default_escape_text(),
        }
    }
}

/// 播放配置
#[derive(Debug, Clone, Deserialize)]
pub struct PlaybackConfig {
    /// 等待播放完成的宽限时间（毫秒）
    #[serde(default = "default_grace_ms")]
    pub grace_ms: u64,

    /// 末尾样本交给设备后的等待时间（毫秒）
    #[serde(default = "default_tail_ms")]
    pub tail_ms: u64,
}

fn default_grace_ms() -> u64 {
    2000
}

fn default_tail_ms() -> u64 {
    200
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            grace_ms: default_grace_ms(),
            tail_ms: default_tail_ms(),
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,

    /// 是否启用 JSON 格式
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}
