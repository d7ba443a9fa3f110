//! 应用层错误定义
//!
//! 统一的命令错误类型

use thiserror::Error;

use crate::application::ports::{PlaybackError, TokenError, TtsError};
use crate::domain::VoiceError;

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 验证错误（参数不合法，未发起任何网络请求）
    #[error("{0}")]
    Validation(String),

    /// 令牌获取失败
    #[error("Token fetch failed: {0}")]
    Token(#[from] TokenError),

    /// 语音合成失败
    #[error("Synthesis failed: {0}")]
    Synthesis(#[from] TtsError),

    /// 播放失败
    #[error("Playback failed: {0}")]
    Playback(#[from] PlaybackError),

    /// 内部错误
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    /// 创建内部错误
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<VoiceError> for ApplicationError {
    fn from(err: VoiceError) -> Self {
        Self::Validation(err.to_string())
    }
}
