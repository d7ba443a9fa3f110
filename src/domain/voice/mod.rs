//! Voice Context - 音色上下文
//!
//! 职责:
//! - 静态音色表与索引查找
//! - SSML 请求体渲染

mod catalog;
mod errors;
mod ssml;
mod value_objects;

pub use catalog::{lookup, VOICE_CATALOG};
pub use errors::VoiceError;
pub use ssml::{escape_xml, render_ssml};
pub use value_objects::{Gender, VoiceEntry};
