//! HTTP Token Client - 订阅密钥换取 Bearer 令牌
//!
//! POST https://api.cognitive.microsoft.com/sts/v1.0/issueToken
//! Header: Ocp-Apim-Subscription-Key: <api_key>
//! Response: 令牌文本（UTF-8）

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use crate::application::ports::{AccessToken, TokenError, TokenProviderPort};

/// 订阅密钥请求头
pub const SUBSCRIPTION_KEY_HEADER: &str = "Ocp-Apim-Subscription-Key";

/// HTTP Token 客户端配置
#[derive(Debug, Clone)]
pub struct HttpTokenClientConfig {
    /// 令牌签发地址
    pub url: String,
    /// 请求超时时间（秒）
    pub timeout_secs: u64,
}

impl Default for HttpTokenClientConfig {
    fn default() -> Self {
        Self {
            url: "https://api.cognitive.microsoft.com/sts/v1.0/issueToken".to_string(),
            timeout_secs: 30,
        }
    }
}

impl HttpTokenClientConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// HTTP Token 客户端
pub struct HttpTokenClient {
    client: Client,
    config: HttpTokenClientConfig,
}

impl HttpTokenClient {
    pub fn new(config: HttpTokenClientConfig) -> Result<Self, TokenError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| TokenError::NetworkError(e.to_string()))?;

        Ok(Self { client, config })
    }
}

#[async_trait]
impl TokenProviderPort for HttpTokenClient {
    async fn fetch_token(&self, api_key: &str) -> Result<AccessToken, TokenError> {
        tracing::debug!(url = %self.config.url, "Requesting access token");

        let response = self
            .client
            .post(&self.config.url)
            .header(SUBSCRIPTION_KEY_HEADER, api_key)
            .body("")
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    TokenError::Timeout
                } else if e.is_connect() {
                    TokenError::NetworkError(format!("Cannot connect to token service: {}", e))
                } else {
                    TokenError::NetworkError(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), "Token request rejected");
            return Err(TokenError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        let token = response
            .text()
            .await
            .map_err(|e| TokenError::InvalidResponse(format!("Failed to read token: {}", e)))?;

        if token.trim().is_empty() {
            return Err(TokenError::InvalidResponse("empty token".to_string()));
        }

        tracing::debug!(token_len = token.len(), "Access token issued");

        Ok(AccessToken::new(token))
    }
}
