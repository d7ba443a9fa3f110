//! 应用层 - 命令

mod speak_commands;

pub mod handlers;

pub use speak_commands::*;
