//! 测试用端口实现：记录调用次数与请求内容

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use super::{
    AccessToken, AudioSinkPort, PcmFormat, PlaybackError, PlaybackReport, SynthesisRequest,
    SynthesisResponse, TokenError, TokenProviderPort, TtsEnginePort, TtsError,
};

#[derive(Default)]
pub struct FakeTokenProvider {
    pub calls: AtomicUsize,
    pub fail: bool,
}

impl FakeTokenProvider {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TokenProviderPort for FakeTokenProvider {
    async fn fetch_token(&self, api_key: &str) -> Result<AccessToken, TokenError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(TokenError::Rejected {
                status: 401,
                body: "denied".to_string(),
            });
        }
        Ok(AccessToken::new(format!("token-for-{}", api_key)))
    }
}

pub struct FakeTtsEngine {
    pub requests: Mutex<Vec<SynthesisRequest>>,
    audio: Vec<u8>,
}

impl FakeTtsEngine {
    pub fn new(audio: Vec<u8>) -> Self {
        Self {
            requests: Mutex::new(Vec::new()),
            audio,
        }
    }

    pub fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl TtsEnginePort for FakeTtsEngine {
    async fn synthesize(&self, request: SynthesisRequest) -> Result<SynthesisResponse, TtsError> {
        self.requests.lock().unwrap().push(request);
        Ok(SynthesisResponse {
            request_id: "req-1".to_string(),
            audio_data: self.audio.clone(),
        })
    }
}

#[derive(Default)]
pub struct FakeAudioSink {
    pub played: Mutex<Vec<(PcmFormat, usize)>>,
}

impl FakeAudioSink {
    pub fn calls(&self) -> usize {
        self.played.lock().unwrap().len()
    }
}

impl AudioSinkPort for FakeAudioSink {
    fn play(&self, format: PcmFormat, audio: &[u8]) -> Result<PlaybackReport, PlaybackError> {
        self.played.lock().unwrap().push((format, audio.len()));
        Ok(PlaybackReport {
            bytes_written: audio.len(),
        })
    }
}
