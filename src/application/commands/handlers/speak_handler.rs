//! Speak Command Handler
//!
//! 依次执行：校验音色索引 → 获取令牌 → 合成 → 播放。
//! 三步严格串行，任何一步失败立即返回，不重试。

use std::sync::Arc;

use crate::application::commands::{Speak, SpeakResponse};
use crate::application::error::ApplicationError;
use crate::application::ports::{
    AudioSinkPort, PcmFormat, SynthesisRequest, TokenProviderPort, TtsEnginePort,
};
use crate::domain::{lookup, render_ssml};

/// Speak Handler 配置
#[derive(Debug, Clone)]
pub struct SpeakHandlerConfig {
    /// 是否转义消息中的 XML 特殊字符
    pub escape_text: bool,
    /// 播放格式
    pub format: PcmFormat,
}

impl Default for SpeakHandlerConfig {
    fn default() -> Self {
        Self {
            escape_text: true,
            format: PcmFormat::SPEECH_16K_MONO,
        }
    }
}

/// Speak Handler
pub struct SpeakHandler {
    config: SpeakHandlerConfig,
    token_provider: Arc<dyn TokenProviderPort>,
    tts_engine: Arc<dyn TtsEnginePort>,
    audio_sink: Arc<dyn AudioSinkPort>,
}

impl SpeakHandler {
    pub fn new(
        config: SpeakHandlerConfig,
        token_provider: Arc<dyn TokenProviderPort>,
        tts_engine: Arc<dyn TtsEnginePort>,
        audio_sink: Arc<dyn AudioSinkPort>,
    ) -> Self {
        Self {
            config,
            token_provider,
            tts_engine,
            audio_sink,
        }
    }

    pub async fn handle(&self, command: Speak) -> Result<SpeakResponse, ApplicationError> {
        // 索引校验必须先于任何网络请求
        let voice = lookup(command.voice_index)?;

        tracing::debug!(
            voice_index = command.voice_index,
            locale = voice.locale(),
            gender = %voice.gender(),
            "Voice selected"
        );

        let token = self.token_provider.fetch_token(&command.api_key).await?;

        let ssml = render_ssml(voice, &command.message, self.config.escape_text);
        let response = self
            .tts_engine
            .synthesize(SynthesisRequest { token, ssml })
            .await?;

        let bytes_received = response.audio_data.len();
        let format = self.config.format;
        let sink = self.audio_sink.clone();
        let audio = response.audio_data;

        // 输出流不可跨线程移动，在阻塞线程中完成打开、写入、关闭
        let report = tokio::task::spawn_blocking(move || sink.play(format, &audio))
            .await
            .map_err(|e| ApplicationError::internal(format!("Playback task failed: {}", e)))??;

        tracing::info!(
            request_id = %response.request_id,
            voice_index = command.voice_index,
            audio_size = bytes_received,
            duration_ms = format.duration_ms(bytes_received),
            "Speech played"
        );

        Ok(SpeakResponse {
            voice,
            request_id: response.request_id,
            bytes_received,
            bytes_played: report.bytes_written,
        })
    }
}
