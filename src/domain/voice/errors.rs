//! Voice Context - Errors

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum VoiceError {
    #[error("lang over support {supported}")]
    IndexOutOfRange { index: usize, supported: usize },
}
