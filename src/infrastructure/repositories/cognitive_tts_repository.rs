use super::tts_repository::TtsRepository;
use crate::domain::tts::{ssml, SynthesisRequest};
use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use std::time::Duration;
use uuid::Uuid;

pub const OUTPUT_FORMAT_HEADER: &str = "X-Microsoft-OutputFormat";
pub const APP_ID_HEADER: &str = "X-Search-AppId";
pub const CLIENT_ID_HEADER: &str = "X-Search-ClientID";
const SSML_CONTENT_TYPE: &str = "application/ssml+xml";
const CLIENT_USER_AGENT: &str = "TTSClient";

/// Synthesis endpoint client. Posts SSML and returns the audio body.
pub struct CognitiveTtsRepository {
    http_client: reqwest::Client,
    app_id: String,
    client_id: String,
}

impl CognitiveTtsRepository {
    pub fn new(timeout: Duration) -> Result<Self, String> {
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| format!("Failed to build HTTP client: {}", e))?;

        Ok(Self {
            http_client,
            app_id: Uuid::new_v4().simple().to_string(),
            client_id: Uuid::new_v4().simple().to_string(),
        })
    }
}

#[async_trait]
impl TtsRepository for CognitiveTtsRepository {
    async fn synthesize(&self, request: &SynthesisRequest) -> Result<Vec<u8>, String> {
        let start_time = std::time::Instant::now();
        let body = ssml::render(request);

        tracing::info!(
            url = %request.request_uri,
            locale = %request.locale,
            voice = %request.voice_name,
            gender = %request.gender,
            output_format = %request.output_format,
            text_length = request.text.len(),
            "Calling synthesis endpoint"
        );

        let response = self
            .http_client
            .post(request.request_uri.clone())
            .header(CONTENT_TYPE, SSML_CONTENT_TYPE)
            .header(USER_AGENT, CLIENT_USER_AGENT)
            .header(OUTPUT_FORMAT_HEADER, request.output_format.as_str())
            .header(AUTHORIZATION, request.authorization_token.as_str())
            .header(APP_ID_HEADER, self.app_id.as_str())
            .header(CLIENT_ID_HEADER, self.client_id.as_str())
            .body(body)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(
                    error = %e,
                    url = %request.request_uri,
                    "Synthesis request failed"
                );
                format!("Synthesis request failed: {}", e)
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            tracing::error!(
                status = status.as_u16(),
                body = %error_text,
                "Synthesis endpoint rejected the request"
            );
            return Err(format!("Synthesis endpoint returned {}: {}", status, error_text));
        }

        let audio_bytes = response
            .bytes()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Failed to read audio stream");
                format!("Failed to read audio stream: {}", e)
            })?
            .to_vec();

        if audio_bytes.is_empty() {
            return Err("Synthesis endpoint returned no audio".to_string());
        }

        let duration = start_time.elapsed();
        tracing::info!(
            provider = "cognitive-services",
            latency_ms = duration.as_millis(),
            characters_count = request.text.len(),
            audio_size_bytes = audio_bytes.len(),
            "TTS synthesis completed"
        );

        Ok(audio_bytes)
    }
}
