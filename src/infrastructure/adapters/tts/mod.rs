//! TTS Adapter - 令牌与合成的 HTTP 客户端实现

mod http_token_client;
mod http_tts_client;

pub use http_token_client::*;
pub use http_tts_client::*;
