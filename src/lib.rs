//! bing-tts - 云端语音合成播放工具
//!
//! 架构设计: Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Voice Context: 静态音色表、SSML 渲染
//!
//! 应用层 (application/):
//! - Ports: TokenProvider, TtsEngine, AudioSink
//! - Commands: Speak 命令处理器
//!
//! 入口 (app.rs): 参数解析、配置加载、端口组装与退出码
//!
//! 基础设施层 (infrastructure/):
//! - Adapters: HTTP Token/TTS 客户端、cpal 播放器

pub mod app;
pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;
