//! Speak Commands

use crate::domain::VoiceEntry;

/// 合成并播放命令
#[derive(Debug, Clone)]
pub struct Speak {
    pub api_key: String,
    pub voice_index: usize,
    pub message: String,
}

/// 合成并播放响应
#[derive(Debug, Clone)]
pub struct SpeakResponse {
    pub voice: &'static VoiceEntry,
    pub request_id: String,
    pub bytes_received: usize,
    pub bytes_played: usize,
}
