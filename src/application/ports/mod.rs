//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod audio_sink;
mod token_provider;
mod tts_engine;

pub use audio_sink::{AudioSinkPort, PcmFormat, PlaybackError, PlaybackReport};
pub use token_provider::{AccessToken, TokenError, TokenProviderPort};
pub use tts_engine::{SynthesisRequest, SynthesisResponse, TtsEnginePort, TtsError};

#[cfg(test)]
pub(crate) mod fakes;
