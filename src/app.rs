//! Application Entry - 进程级调度
//!
//! 解析参数 → 校验 → 加载配置 → 组装端口 → 执行 Speak，返回进程退出码。
//! 参数缺失、索引越界在加载配置和创建任何客户端之前处理。

use std::ffi::OsString;
use std::sync::Arc;

use clap::Parser;

use crate::application::{
    AudioSinkPort, PcmFormat, SpeakHandler, SpeakHandlerConfig, TokenProviderPort, TtsEnginePort,
};
use crate::cli::{render_voice_list, usage, Cli, Invocation, EXIT_USAGE};
use crate::config::{load_config_from_path, print_config, AppConfig, LogConfig};
use crate::domain::lookup;
use crate::infrastructure::{
    CpalAudioPlayer, CpalPlayerConfig, HttpTokenClient, HttpTokenClientConfig, HttpTtsClient,
    HttpTtsClientConfig,
};

/// 运行时错误退出码
pub const EXIT_FAILURE: i32 = 1;

/// 应用端口集合
pub struct AppPorts {
    pub token_provider: Arc<dyn TokenProviderPort>,
    pub tts_engine: Arc<dyn TtsEnginePort>,
    pub audio_sink: Arc<dyn AudioSinkPort>,
}

/// 按配置创建 HTTP 客户端与 cpal 播放器
pub fn default_ports(config: &AppConfig) -> anyhow::Result<AppPorts> {
    let token_client = HttpTokenClient::new(
        HttpTokenClientConfig::new(&config.token.url).with_timeout(config.token.timeout_secs),
    )?;

    let tts_client = HttpTtsClient::new(HttpTtsClientConfig {
        url: config.tts.url.clone(),
        timeout_secs: config.tts.timeout_secs,
        output_format: config.tts.output_format.clone(),
        app_id: config.tts.app_id.clone(),
        client_id: config.tts.client_id.clone(),
        user_agent: config.tts.user_agent.clone(),
    })?;

    let player = CpalAudioPlayer::new(CpalPlayerConfig {
        grace_ms: config.playback.grace_ms,
        tail_ms: config.playback.tail_ms,
    });

    Ok(AppPorts {
        token_provider: Arc::new(token_client),
        tts_engine: Arc::new(tts_client),
        audio_sink: Arc::new(player),
    })
}

/// 初始化日志（重复初始化时忽略）
pub fn init_tracing(log: &LogConfig) {
    let log_filter = format!("{},bing_tts={}", log.level, log.level);
    let builder = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter)),
        )
        .with_writer(std::io::stderr);

    let _ = if log.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
}

/// 执行一次调用，返回进程退出码
pub async fn run<F>(args: Vec<OsString>, build_ports: F) -> i32
where
    F: FnOnce(&AppConfig) -> anyhow::Result<AppPorts>,
{
    let program = args
        .first()
        .map(|arg| arg.to_string_lossy().into_owned())
        .unwrap_or_else(|| "bing-tts".to_string());

    let cli = match Cli::try_parse_from(&args) {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return match e.kind() {
                clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => 0,
                _ => EXIT_USAGE,
            };
        }
    };

    let config_path = cli.config_path.clone();

    let command = match cli.into_invocation() {
        Ok(Invocation::Speak(command)) => command,
        Ok(Invocation::ListVoices { json }) => {
            return match render_voice_list(json) {
                Ok(listing) => {
                    println!("{}", listing.trim_end());
                    0
                }
                Err(e) => {
                    eprintln!("Error: {}", e);
                    EXIT_FAILURE
                }
            };
        }
        Err(_) => {
            println!("{}", usage(&program));
            return EXIT_USAGE;
        }
    };

    // 索引越界不依赖配置
    if let Err(e) = lookup(command.voice_index) {
        println!("{}", e);
        return EXIT_USAGE;
    }

    let config = match load_config_from_path(config_path.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: Failed to load config: {}", e);
            return EXIT_FAILURE;
        }
    };

    init_tracing(&config.log);
    print_config(&config);

    let ports = match build_ports(&config) {
        Ok(ports) => ports,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            return EXIT_FAILURE;
        }
    };

    let handler = SpeakHandler::new(
        SpeakHandlerConfig {
            escape_text: config.tts.escape_text,
            format: PcmFormat::SPEECH_16K_MONO,
        },
        ports.token_provider,
        ports.tts_engine,
        ports.audio_sink,
    );

    match handler.handle(command).await {
        Ok(response) => {
            tracing::info!(
                voice = %response.voice,
                request_id = %response.request_id,
                bytes_played = response.bytes_played,
                "Done"
            );
            0
        }
        Err(e) if e.is_validation() => {
            println!("{}", e);
            EXIT_USAGE
        }
        Err(e) => {
            eprintln!("Error: {:#}", anyhow::Error::from(e));
            EXIT_FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::fakes::{FakeAudioSink, FakeTokenProvider, FakeTtsEngine};
    use crate::config::ENV_LOCK;
    use std::io::Write;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct Harness {
        tokens: Arc<FakeTokenProvider>,
        tts: Arc<FakeTtsEngine>,
        sink: Arc<FakeAudioSink>,
        builds: AtomicUsize,
    }

    impl Harness {
        fn new(tokens: FakeTokenProvider) -> Self {
            Self {
                tokens: Arc::new(tokens),
                tts: Arc::new(FakeTtsEngine::new(vec![0; 64])),
                sink: Arc::new(FakeAudioSink::default()),
                builds: AtomicUsize::new(0),
            }
        }

        async fn run(&self, args: &[&str]) -> i32 {
            let args = std::iter::once("bing-tts")
                .chain(args.iter().copied())
                .map(OsString::from)
                .collect();
            run(args, |_| {
                self.builds.fetch_add(1, Ordering::SeqCst);
                Ok(AppPorts {
                    token_provider: self.tokens.clone(),
                    tts_engine: self.tts.clone(),
                    audio_sink: self.sink.clone(),
                })
            })
            .await
        }

        fn assert_untouched(&self) {
            assert_eq!(self.builds.load(Ordering::SeqCst), 0);
            assert_eq!(self.tokens.calls(), 0);
            assert_eq!(self.tts.calls(), 0);
            assert_eq!(self.sink.calls(), 0);
        }
    }

    fn config_file(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    #[tokio::test]
    async fn test_missing_arguments_exit_usage() {
        let cases: [&[&str]; 3] = [&[], &["k"], &["k", "8"]];
        for args in cases {
            let harness = Harness::new(FakeTokenProvider::default());
            assert_eq!(harness.run(args).await, EXIT_USAGE, "args: {args:?}");
            harness.assert_untouched();
        }
    }

    #[tokio::test]
    async fn test_out_of_range_index_exit_usage() {
        let harness = Harness::new(FakeTokenProvider::default());
        assert_eq!(harness.run(&["k", "29", "hi"]).await, EXIT_USAGE);
        harness.assert_untouched();
    }

    #[tokio::test]
    async fn test_out_of_range_index_ignores_broken_config() {
        let harness = Harness::new(FakeTokenProvider::default());
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.toml");
        let missing = missing.to_str().unwrap();

        assert_eq!(
            harness.run(&["--config", missing, "k", "29", "hi"]).await,
            EXIT_USAGE
        );
        assert_eq!(harness.run(&["--config", missing, "--list-voices"]).await, 0);
        harness.assert_untouched();
    }

    #[tokio::test]
    async fn test_unparsable_arguments_exit_usage() {
        let harness = Harness::new(FakeTokenProvider::default());
        assert_eq!(harness.run(&["k", "en-US", "hi"]).await, EXIT_USAGE);
        harness.assert_untouched();
    }

    #[tokio::test]
    async fn test_speak_success_exit_zero() {
        let file = config_file("[log]\nlevel = \"off\"\n");
        let path = file.path().to_str().unwrap().to_string();
        let harness = Harness::new(FakeTokenProvider::default());

        let code = {
            let _lock = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
            harness
                .run(&["--config", &path, "k", "8", "hello", "world"])
                .await
        };

        assert_eq!(code, 0);
        assert_eq!(harness.builds.load(Ordering::SeqCst), 1);
        assert_eq!(harness.tokens.calls(), 1);
        let requests = harness.tts.requests.lock().unwrap();
        assert!(requests[0].ssml.contains(">hello</voice>"));
        assert_eq!(harness.sink.played.lock().unwrap()[0].1, 64);
    }

    #[tokio::test]
    async fn test_runtime_failure_exit_failure() {
        let file = config_file("[log]\nlevel = \"off\"\n");
        let path = file.path().to_str().unwrap().to_string();
        let harness = Harness::new(FakeTokenProvider {
            fail: true,
            ..Default::default()
        });

        let code = {
            let _lock = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
            harness.run(&["--config", &path, "k", "8", "hello"]).await
        };

        assert_eq!(code, EXIT_FAILURE);
        assert_eq!(harness.tokens.calls(), 1);
        assert_eq!(harness.tts.calls(), 0);
        assert_eq!(harness.sink.calls(), 0);
    }
}
