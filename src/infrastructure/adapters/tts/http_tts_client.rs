//! HTTP TTS Client - 调用云端语音合成服务
//!
//! 实现 TtsEnginePort trait
//!
//! 外部 TTS API:
//! POST https://speech.platform.bing.com/synthesize
//! Request: SSML (application/ssml+xml)，Bearer 令牌鉴权
//! Response: 音频二进制（riff-16khz-16bit-mono-pcm）

use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use reqwest::Client;
use std::time::Duration;

use crate::application::ports::{SynthesisRequest, SynthesisResponse, TtsEnginePort, TtsError};

pub const OUTPUT_FORMAT_HEADER: &str = "X-Microsoft-OutputFormat";
pub const APP_ID_HEADER: &str = "X-Search-AppId";
pub const CLIENT_ID_HEADER: &str = "X-Search-ClientID";
const SSML_CONTENT_TYPE: &str = "application/ssml+xml";

/// HTTP TTS 客户端配置
#[derive(Debug, Clone)]
pub struct HttpTtsClientConfig {
    /// 合成服务地址
    pub url: String,
    /// 请求超时时间（秒）
    pub timeout_secs: u64,
    /// 音频输出格式
    pub output_format: String,
    pub app_id: String,
    pub client_id: String,
    pub user_agent: String,
}

impl Default for HttpTtsClientConfig {
    fn default() -> Self {
        Self {
            url: "https://speech.platform.bing.com/synthesize".to_string(),
            timeout_secs: 60,
            output_format: "riff-16khz-16bit-mono-pcm".to_string(),
            app_id: "07D3234E49CE426DAA29772419F436CA".to_string(),
            client_id: "1ECFAE91408841A480F00935DC390960".to_string(),
            user_agent: "TTSForPython".to_string(),
        }
    }
}

impl HttpTtsClientConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }
}

/// HTTP TTS 客户端
pub struct HttpTtsClient {
    client: Client,
    config: HttpTtsClientConfig,
}

impl HttpTtsClient {
    /// 创建新的 HTTP TTS 客户端
    pub fn new(config: HttpTtsClientConfig) -> Result<Self, TtsError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| TtsError::NetworkError(e.to_string()))?;

        Ok(Self { client, config })
    }
}

#[async_trait]
impl TtsEnginePort for HttpTtsClient {
    async fn synthesize(&self, request: SynthesisRequest) -> Result<SynthesisResponse, TtsError> {
        tracing::debug!(
            url = %self.config.url,
            ssml_len = request.ssml.len(),
            output_format = %self.config.output_format,
            "Sending synthesis request"
        );

        let response = self
            .client
            .post(&self.config.url)
            .header(CONTENT_TYPE, SSML_CONTENT_TYPE)
            .header(OUTPUT_FORMAT_HEADER, &self.config.output_format)
            .header(AUTHORIZATION, request.token.bearer())
            .header(APP_ID_HEADER, &self.config.app_id)
            .header(CLIENT_ID_HEADER, &self.config.client_id)
            .header(USER_AGENT, &self.config.user_agent)
            .body(request.ssml)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    TtsError::Timeout
                } else if e.is_connect() {
                    TtsError::NetworkError(format!("Cannot connect to TTS service: {}", e))
                } else {
                    TtsError::NetworkError(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(TtsError::ServiceError(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        let request_id = response
            .headers()
            .get("X-RequestId")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
            .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());

        // 完整缓冲后再交给播放端
        let audio_data = response
            .bytes()
            .await
            .map_err(|e| TtsError::InvalidResponse(format!("Failed to read audio: {}", e)))?
            .to_vec();

        tracing::info!(
            request_id = %request_id,
            audio_size = audio_data.len(),
            "TTS synthesis completed"
        );

        Ok(SynthesisResponse {
            request_id,
            audio_data,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::AccessToken;
    use axum::http::{HeaderMap, StatusCode};
    use axum::{extract::State, routing::post, Router};
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Captured {
        headers: Arc<Mutex<Option<HeaderMap>>>,
        body: Arc<Mutex<Option<String>>>,
    }

    async fn synthesize_ok(
        State(captured): State<Captured>,
        headers: HeaderMap,
        body: String,
    ) -> (StatusCode, [(&'static str, &'static str); 1], Vec<u8>) {
        *captured.headers.lock().unwrap() = Some(headers);
        *captured.body.lock().unwrap() = Some(body);
        let audio: Vec<u8> = (0..1001u32).map(|i| (i % 251) as u8).collect();
        (StatusCode::OK, [("X-RequestId", "abc-123")], audio)
    }

    async fn synthesize_forbidden() -> (StatusCode, &'static str) {
        (StatusCode::FORBIDDEN, "token expired")
    }

    async fn spawn_stub(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}/synthesize", addr)
    }

    fn header<'a>(headers: &'a HeaderMap, name: &str) -> &'a str {
        headers.get(name).and_then(|v| v.to_str().ok()).unwrap_or_default()
    }

    #[test]
    fn test_config_default() {
        let config = HttpTtsClientConfig::default();
        assert_eq!(config.url, "https://speech.platform.bing.com/synthesize");
        assert_eq!(config.output_format, "riff-16khz-16bit-mono-pcm");
        assert_eq!(config.user_agent, "TTSForPython");
    }

    #[tokio::test]
    async fn test_synthesize_sends_headers_and_body() {
        let captured = Captured::default();
        let url = spawn_stub(
            Router::new()
                .route("/synthesize", post(synthesize_ok))
                .with_state(captured.clone()),
        )
        .await;
        let client = HttpTtsClient::new(HttpTtsClientConfig::new(url)).unwrap();

        let ssml = "<speak version='1.0' xml:lang='en-us'>hi</speak>".to_string();
        let response = client
            .synthesize(SynthesisRequest {
                token: AccessToken::new("tok"),
                ssml: ssml.clone(),
            })
            .await
            .unwrap();

        assert_eq!(response.request_id, "abc-123");
        assert_eq!(response.audio_data.len(), 1001);
        assert_eq!(response.audio_data[250], 250);
        assert_eq!(response.audio_data[251], 0);

        let headers = captured.headers.lock().unwrap().clone().unwrap();
        assert_eq!(header(&headers, "authorization"), "Bearer tok");
        assert_eq!(header(&headers, "content-type"), "application/ssml+xml");
        assert_eq!(
            header(&headers, "x-microsoft-outputformat"),
            "riff-16khz-16bit-mono-pcm"
        );
        assert_eq!(
            header(&headers, "x-search-appid"),
            "07D3234E49CE426DAA29772419F436CA"
        );
        assert_eq!(
            header(&headers, "x-search-clientid"),
            "1ECFAE91408841A480F00935DC390960"
        );
        assert_eq!(header(&headers, "user-agent"), "TTSForPython");
        assert_eq!(captured.body.lock().unwrap().as_deref(), Some(ssml.as_str()));
    }

    #[tokio::test]
    async fn test_synthesize_service_error() {
        let url = spawn_stub(Router::new().route("/synthesize", post(synthesize_forbidden))).await;
        let client = HttpTtsClient::new(HttpTtsClientConfig::new(url)).unwrap();

        let err = client
            .synthesize(SynthesisRequest {
                token: AccessToken::new("stale"),
                ssml: "<speak/>".to_string(),
            })
            .await
            .unwrap_err();

        match err {
            TtsError::ServiceError(msg) => {
                assert!(msg.contains("403"));
                assert!(msg.contains("token expired"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
