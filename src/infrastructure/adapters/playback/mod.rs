//! Playback Adapter - cpal 输出流实现

mod cpal_player;

pub use cpal_player::{drain_time, pcm16le_to_samples, CpalAudioPlayer, CpalPlayerConfig};
