//! Domain Layer - 领域层
//!
//! Voice Context: 音色表与 SSML 渲染

pub mod voice;

pub use voice::{lookup, render_ssml, Gender, VoiceEntry, VoiceError, VOICE_CATALOG};
