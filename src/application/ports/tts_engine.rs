//! TTS Engine Port - 语音合成抽象
//!
//! 定义语音合成的抽象接口，具体实现在 infrastructure/adapters 层

use async_trait::async_trait;
use thiserror::Error;

use super::AccessToken;

/// TTS 错误
#[derive(Debug, Error)]
pub enum TtsError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Request timeout")]
    Timeout,

    #[error("Service error: {0}")]
    ServiceError(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// 合成请求
#[derive(Debug, Clone)]
pub struct SynthesisRequest {
    /// Bearer 令牌
    pub token: AccessToken,
    /// SSML 请求体
    pub ssml: String,
}

/// 合成响应
#[derive(Debug, Clone)]
pub struct SynthesisResponse {
    /// 请求 ID（用于日志追踪）
    pub request_id: String,
    /// 原始音频数据，未做任何裁剪
    pub audio_data: Vec<u8>,
}

/// TTS Engine Port
#[async_trait]
pub trait TtsEnginePort: Send + Sync {
    /// 发送 SSML，返回完整缓冲的音频数据
    async fn synthesize(&self, request: SynthesisRequest) -> Result<SynthesisResponse, TtsError>;
}
