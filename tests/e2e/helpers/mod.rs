use async_trait::async_trait;
use speak::domain::auth::AuthService;
use speak::domain::tts::{AudioOutputFormat, TtsService, VoiceSettings};
use speak::infrastructure::config::{Config, ConfigOverrides};
use speak::infrastructure::playback::AudioSink;
use speak::infrastructure::repositories::{CognitiveTtsRepository, StsTokenRepository};
use std::sync::{Arc, Mutex};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub mod fixtures;

pub const TOKEN_PATH: &str = "/sts/v1.0/issueToken";
pub const SYNTHESIS_PATH: &str = "/synthesize";
pub const API_KEY: &str = "test-subscription-key";

/// Sink that keeps what it was asked to play
#[derive(Default)]
pub struct RecordingSink {
    played: Mutex<Vec<(Vec<u8>, AudioOutputFormat)>>,
}

impl RecordingSink {
    pub fn played(&self) -> Vec<(Vec<u8>, AudioOutputFormat)> {
        self.played.lock().unwrap().clone()
    }
}

#[async_trait]
impl AudioSink for RecordingSink {
    async fn play(&self, audio: Vec<u8>, format: AudioOutputFormat) -> Result<(), String> {
        self.played.lock().unwrap().push((audio, format));
        Ok(())
    }
}

pub struct TestContext {
    pub server: MockServer,
    pub config: Config,
    pub sink: Arc<RecordingSink>,
    pub service: TtsService,
}

impl TestContext {
    pub async fn new() -> Self {
        Self::with_overrides(ConfigOverrides::default()).await
    }

    pub async fn with_overrides(overrides: ConfigOverrides) -> Self {
        let server = MockServer::start().await;

        let config = Config::default()
            .apply_overrides(ConfigOverrides {
                token_url: Some(format!("{}{}", server.uri(), TOKEN_PATH)),
                synthesis_url: Some(format!("{}{}", server.uri(), SYNTHESIS_PATH)),
                ..overrides
            })
            .expect("mock server urls are valid");

        let token_repo = Arc::new(
            StsTokenRepository::new(config.token_url.clone(), config.request_timeout).unwrap(),
        );
        let tts_repo = Arc::new(CognitiveTtsRepository::new(config.request_timeout).unwrap());
        let sink = Arc::new(RecordingSink::default());
        let auth_service =
            Arc::new(AuthService::new(token_repo, config.token_lifetime).unwrap());
        let service = TtsService::new(
            auth_service,
            tts_repo,
            sink.clone(),
            VoiceSettings::from(&config),
        );

        Self {
            server,
            config,
            sink,
            service,
        }
    }

    pub async fn mount_token(&self, status: u16, body: &str, expected_calls: u64) {
        Mock::given(method("POST"))
            .and(path(TOKEN_PATH))
            .respond_with(ResponseTemplate::new(status).set_body_string(body))
            .expect(expected_calls)
            .mount(&self.server)
            .await;
    }

    pub async fn mount_synthesis(&self, status: u16, audio: Vec<u8>, expected_calls: u64) {
        Mock::given(method("POST"))
            .and(path(SYNTHESIS_PATH))
            .respond_with(ResponseTemplate::new(status).set_body_bytes(audio))
            .expect(expected_calls)
            .mount(&self.server)
            .await;
    }

    /// Paths of the requests received so far, in arrival order
    pub async fn received_paths(&self) -> Vec<String> {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .map(|r| r.url.path().to_string())
            .collect()
    }
}
