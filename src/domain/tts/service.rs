use super::error::TtsServiceError;
use super::{AudioOutputFormat, Gender, SynthesisRequest};
use crate::domain::auth::AuthService;
use crate::infrastructure::config::Config;
use crate::infrastructure::playback::AudioSink;
use crate::infrastructure::repositories::TtsRepository;
use reqwest::Url;
use std::sync::Arc;
use std::time::Duration;

/// Voice and endpoint settings applied to every synthesis request
#[derive(Debug, Clone)]
pub struct VoiceSettings {
    pub request_uri: Url,
    pub locale: String,
    pub voice_name: String,
    pub gender: Gender,
    pub output_format: AudioOutputFormat,
}

impl From<&Config> for VoiceSettings {
    fn from(config: &Config) -> Self {
        Self {
            request_uri: config.synthesis_url.clone(),
            locale: config.locale.clone(),
            voice_name: config.voice_name.clone(),
            gender: config.gender,
            output_format: config.output_format,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SpeakOutcome {
    pub audio_size_bytes: usize,
    pub output_format: AudioOutputFormat,
    pub synthesis_latency: Duration,
}

pub struct TtsService {
    auth_service: Arc<AuthService>,
    tts_repo: Arc<dyn TtsRepository>,
    audio_sink: Arc<dyn AudioSink>,
    settings: VoiceSettings,
}

impl TtsService {
    pub fn new(
        auth_service: Arc<AuthService>,
        tts_repo: Arc<dyn TtsRepository>,
        audio_sink: Arc<dyn AudioSink>,
        settings: VoiceSettings,
    ) -> Self {
        Self {
            auth_service,
            tts_repo,
            audio_sink,
            settings,
        }
    }

    /// Speak `text` with the configured voice
    ///
    /// This operation:
    /// - Obtains a bearer token for the API key (no synthesis if this fails)
    /// - Issues exactly one synthesis request
    /// - Hands the returned audio to the sink
    pub async fn speak(&self, api_key: &str, text: &str) -> Result<SpeakOutcome, TtsServiceError> {
        tracing::info!(input = %text, text_length = text.len(), "TTS speak request");

        if text.trim().is_empty() {
            return Err(TtsServiceError::Invalid("text must not be empty".to_string()));
        }

        // 1. Authenticate
        let token = self.auth_service.access_token(api_key).await?;

        // 2. Build the request options
        let request = self.build_request(text, &token.bearer())?;

        // 3. Synthesize
        let start_time = std::time::Instant::now();
        let audio = self
            .tts_repo
            .synthesize(&request)
            .await
            .map_err(TtsServiceError::Synthesis)?;
        let synthesis_latency = start_time.elapsed();

        let outcome = SpeakOutcome {
            audio_size_bytes: audio.len(),
            output_format: request.output_format,
            synthesis_latency,
        };

        // 4. Play
        self.audio_sink
            .play(audio, request.output_format)
            .await
            .map_err(TtsServiceError::Playback)?;

        Ok(outcome)
    }

    fn build_request(
        &self,
        text: &str,
        authorization: &str,
    ) -> Result<SynthesisRequest, TtsServiceError> {
        SynthesisRequest::builder(self.settings.request_uri.clone())
            .text(text)
            .locale(self.settings.locale.as_str())
            .voice_name(self.settings.voice_name.as_str())
            .gender(self.settings.gender)
            .output_format(self.settings.output_format)
            .authorization_token(authorization)
            .build()
            .map_err(TtsServiceError::Invalid)
    }
}
