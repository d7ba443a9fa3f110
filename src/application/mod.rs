//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（TokenProvider、TtsEngine、AudioSink）
//! - commands: Speak 命令及处理器
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod ports;

// Re-exports
pub use commands::{
    handlers::{SpeakHandler, SpeakHandlerConfig},
    Speak, SpeakResponse,
};

pub use error::ApplicationError;

pub use ports::{
    // Token provider
    AccessToken,
    TokenError,
    TokenProviderPort,
    // TTS engine
    SynthesisRequest,
    SynthesisResponse,
    TtsEnginePort,
    TtsError,
    // Audio sink
    AudioSinkPort,
    PcmFormat,
    PlaybackError,
    PlaybackReport,
};
