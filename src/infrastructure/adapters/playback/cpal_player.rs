//! Cpal Audio Player - 本地 PCM 播放
//!
//! 实现 AudioSinkPort trait，基于 cpal 打开默认输出设备。
//! 整段缓冲写入后阻塞等待播放完成，返回前关闭输出流。

use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use std::sync::mpsc;
use std::time::Duration;

use crate::application::ports::{AudioSinkPort, PcmFormat, PlaybackError, PlaybackReport};

/// 播放器配置
#[derive(Debug, Clone)]
pub struct CpalPlayerConfig {
    /// 等待播放完成的额外宽限时间（毫秒）
    pub grace_ms: u64,
    /// 排空设备缓冲后额外等待的余量（毫秒）
    ///
    /// 排空时间取自 cpal 上报的输出延迟加末批样本时长；
    /// 不上报延迟的后端只能依赖此余量，缓冲较长时需调大
    pub tail_ms: u64,
}

impl Default for CpalPlayerConfig {
    fn default() -> Self {
        Self {
            grace_ms: 2000,
            tail_ms: 200,
        }
    }
}

/// Cpal 播放器
pub struct CpalAudioPlayer {
    config: CpalPlayerConfig,
}

impl CpalAudioPlayer {
    pub fn new(config: CpalPlayerConfig) -> Self {
        Self { config }
    }
}

impl Default for CpalAudioPlayer {
    fn default() -> Self {
        Self::new(CpalPlayerConfig::default())
    }
}

/// 16bit 小端 PCM 字节转换为样本
///
/// 奇数长度时最后一个字节作为末样本的低字节
pub fn pcm16le_to_samples(audio: &[u8]) -> Vec<i16> {
    audio
        .chunks(2)
        .map(|chunk| match *chunk {
            [lo, hi] => i16::from_le_bytes([lo, hi]),
            [lo] => i16::from_le_bytes([lo, 0]),
            _ => 0,
        })
        .collect()
}

/// 末批样本交给设备后，播放完毕还需等待的时间
///
/// `latency` 为回调时刻到该批首样本实际输出的间隔
pub fn drain_time(latency: Duration, last_batch_samples: usize, format: PcmFormat) -> Duration {
    let samples_per_sec = format.sample_rate as u64 * format.channels.max(1) as u64;
    if samples_per_sec == 0 {
        return latency;
    }
    latency + Duration::from_micros(last_batch_samples as u64 * 1_000_000 / samples_per_sec)
}

impl AudioSinkPort for CpalAudioPlayer {
    fn play(&self, format: PcmFormat, audio: &[u8]) -> Result<PlaybackReport, PlaybackError> {
        if format.bits_per_sample != 16 {
            return Err(PlaybackError::StreamBuild(format!(
                "unsupported sample width: {} bits",
                format.bits_per_sample
            )));
        }

        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .ok_or(PlaybackError::NoOutputDevice)?;

        let stream_config = cpal::StreamConfig {
            channels: format.channels,
            sample_rate: cpal::SampleRate(format.sample_rate),
            buffer_size: cpal::BufferSize::Default,
        };

        tracing::debug!(
            device = %device.name().unwrap_or_else(|_| "unknown".to_string()),
            sample_rate = format.sample_rate,
            channels = format.channels,
            audio_size = audio.len(),
            "Opening output stream"
        );

        let samples = pcm16le_to_samples(audio);
        let (done_tx, done_rx) = mpsc::sync_channel::<Duration>(1);
        let mut done_tx = Some(done_tx);
        let mut pos = 0usize;

        let stream = device
            .build_output_stream(
                &stream_config,
                move |data: &mut [i16], info: &cpal::OutputCallbackInfo| {
                    let n = data.len().min(samples.len() - pos);
                    data[..n].copy_from_slice(&samples[pos..pos + n]);
                    data[n..].fill(0);
                    pos += n;
                    if pos >= samples.len() {
                        if let Some(tx) = done_tx.take() {
                            let ts = info.timestamp();
                            let latency = ts.playback.duration_since(&ts.callback).unwrap_or_default();
                            let _ = tx.send(drain_time(latency, n, format));
                        }
                    }
                },
                |err| {
                    tracing::error!(error = %err, "Output stream error");
                },
                None,
            )
            .map_err(|e| PlaybackError::StreamBuild(e.to_string()))?;

        stream
            .play()
            .map_err(|e| PlaybackError::StreamPlay(e.to_string()))?;

        let wait_ms = format.duration_ms(audio.len()) + self.config.grace_ms;
        let drain = done_rx
            .recv_timeout(Duration::from_millis(wait_ms))
            .map_err(|_| PlaybackError::Timeout(wait_ms))?;

        tracing::debug!(drain_ms = drain.as_millis() as u64, "Draining output buffer");

        std::thread::sleep(drain + Duration::from_millis(self.config.tail_ms));
        drop(stream);

        tracing::debug!(bytes_written = audio.len(), "Playback finished");

        Ok(PlaybackReport {
            bytes_written: audio.len(),
        })
    }
}
