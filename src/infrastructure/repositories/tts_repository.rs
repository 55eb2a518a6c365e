use crate::domain::tts::SynthesisRequest;
use async_trait::async_trait;

/// Repository for TTS synthesis operations.
/// Abstracts the synthesis endpoint behind the request options value.
#[async_trait]
pub trait TtsRepository: Send + Sync {
    /// Synthesize the request's text
    ///
    /// Returns the audio body in the request's output format
    ///
    /// # Errors
    /// Returns error if synthesis fails, the endpoint rejects the token, or
    /// no audio comes back
    async fn synthesize(&self, request: &SynthesisRequest) -> Result<Vec<u8>, String>;
}
