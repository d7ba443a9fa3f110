//! bing-tts - 云端语音合成播放工具
//!
//! 获取令牌 → 合成 → 本地播放，单次串行执行后退出

use bing_tts::app::{default_ports, run};

#[tokio::main]
async fn main() {
    let code = run(std::env::args_os().collect(), default_ports).await;
    std::process::exit(code);
}
