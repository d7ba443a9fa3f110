//! Command Handlers 实现

mod speak_handler;

pub use speak_handler::*;
