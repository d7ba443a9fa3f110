//! Token Provider Port - 访问令牌获取抽象

use async_trait::async_trait;
use thiserror::Error;

/// 令牌错误
#[derive(Debug, Error)]
pub enum TokenError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Request timeout")]
    Timeout,

    #[error("Token request rejected: HTTP {status}: {body}")]
    Rejected { status: u16, body: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// 短期有效的 Bearer 令牌
///
/// 仅在单次进程调用内有效，不缓存、不持久化
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `Authorization` 头的值
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

// 令牌内容不写入日志
impl std::fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "AccessToken(len={})", self.0.len())
    }
}

/// Token Provider Port
///
/// 用订阅密钥换取 Bearer 令牌
#[async_trait]
pub trait TokenProviderPort: Send + Sync {
    async fn fetch_token(&self, api_key: &str) -> Result<AccessToken, TokenError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bearer_header() {
        let token = AccessToken::new("abc");
        assert_eq!(token.bearer(), "Bearer abc");
    }

    #[test]
    fn test_debug_hides_token() {
        let token = AccessToken::new("secret-token");
        let debug = format!("{:?}", token);
        assert!(!debug.contains("secret"));
        assert_eq!(debug, "AccessToken(len=12)");
    }
}
