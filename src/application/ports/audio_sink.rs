//! Audio Sink Port - 本地音频输出抽象

use thiserror::Error;

/// 播放错误
#[derive(Debug, Error)]
pub enum PlaybackError {
    #[error("No audio output device available")]
    NoOutputDevice,

    #[error("Failed to build output stream: {0}")]
    StreamBuild(String),

    #[error("Failed to start output stream: {0}")]
    StreamPlay(String),

    #[error("Playback did not finish within {0} ms")]
    Timeout(u64),
}

/// PCM 格式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PcmFormat {
    /// 采样率（Hz）
    pub sample_rate: u32,
    /// 声道数
    pub channels: u16,
    /// 位深
    pub bits_per_sample: u16,
}

impl PcmFormat {
    /// 服务端固定输出格式：16kHz / 16bit / 单声道
    pub const SPEECH_16K_MONO: PcmFormat = PcmFormat {
        sample_rate: 16000,
        channels: 1,
        bits_per_sample: 16,
    };

    pub fn bytes_per_second(&self) -> u64 {
        self.sample_rate as u64 * self.channels as u64 * (self.bits_per_sample as u64 / 8)
    }

    /// 缓冲区时长（毫秒）
    pub fn duration_ms(&self, byte_len: usize) -> u64 {
        let bps = self.bytes_per_second();
        if bps == 0 {
            return 0;
        }
        (byte_len as u64 * 1000).div_ceil(bps)
    }
}

/// 播放结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaybackReport {
    /// 写入输出设备的字节数
    pub bytes_written: usize,
}

/// Audio Sink Port
///
/// 阻塞式写入：返回时整段音频已播放完毕，输出流已关闭
pub trait AudioSinkPort: Send + Sync {
    fn play(&self, format: PcmFormat, audio: &[u8]) -> Result<PlaybackReport, PlaybackError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_speech_format() {
        let format = PcmFormat::SPEECH_16K_MONO;
        assert_eq!(format.bytes_per_second(), 32000);
    }

    #[test]
    fn test_duration_ms() {
        let format = PcmFormat::SPEECH_16K_MONO;
        assert_eq!(format.duration_ms(0), 0);
        assert_eq!(format.duration_ms(32000), 1000);
        assert_eq!(format.duration_ms(16001), 501);
    }
}
