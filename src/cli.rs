//! Command Line Interface
//!
//! `bing-tts <api_key> <lang_index> <message>`
//!
//! 三个位置参数在 clap 层面均为可选，缺失时由调用方打印用法并以 -1 退出。

use clap::Parser;
use std::path::PathBuf;
use thiserror::Error;

use crate::application::Speak;
use crate::domain::VOICE_CATALOG;

/// 参数错误时的进程退出码
pub const EXIT_USAGE: i32 = -1;

#[derive(Parser, Debug)]
#[command(name = "bing-tts", version, about = "Synthesize a message with a cloud TTS voice and play it")]
pub struct Cli {
    /// Subscription key for the token service
    pub api_key: Option<String>,

    /// Voice index (see --list-voices)
    pub lang_index: Option<usize>,

    /// Message to speak (use quotes)
    pub message: Option<String>,

    /// 多余的位置参数：只读取第一个消息词，其余忽略
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
    pub rest: Vec<String>,

    /// List supported voices and exit
    #[arg(long = "list-voices")]
    pub list_voices: bool,

    /// Emit JSON for --list-voices
    #[arg(long, requires = "list_voices")]
    pub json: bool,

    /// Use an explicit config file
    #[arg(long = "config", value_name = "FILE")]
    pub config_path: Option<PathBuf>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum UsageError {
    #[error("missing arguments")]
    MissingArguments,
}

/// 解析后的调用
#[derive(Debug)]
pub enum Invocation {
    ListVoices { json: bool },
    Speak(Speak),
}

impl Cli {
    pub fn into_invocation(self) -> Result<Invocation, UsageError> {
        if self.list_voices {
            return Ok(Invocation::ListVoices { json: self.json });
        }

        match (self.api_key, self.lang_index, self.message) {
            (Some(api_key), Some(voice_index), Some(message)) => Ok(Invocation::Speak(Speak {
                api_key,
                voice_index,
                message,
            })),
            _ => Err(UsageError::MissingArguments),
        }
    }
}

/// 用法说明
pub fn usage(program: &str) -> String {
    format!("Play TTS:\n\nUsage: {} api_key langcode message", program)
}

/// 渲染音色列表
pub fn render_voice_list(json: bool) -> Result<String, serde_json::Error> {
    if json {
        let voices: Vec<_> = VOICE_CATALOG
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                serde_json::json!({
                    "index": index,
                    "locale": entry.locale(),
                    "gender": entry.gender(),
                    "mapping": entry.mapping(),
                })
            })
            .collect();
        return serde_json::to_string_pretty(&voices);
    }

    Ok(VOICE_CATALOG
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            format!(
                "{:>2}  {:<6} {:<7} {}\n",
                index,
                entry.locale(),
                entry.gender(),
                entry.mapping()
            )
        })
        .collect())
}
