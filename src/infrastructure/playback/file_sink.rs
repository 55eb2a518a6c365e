use super::AudioSink;
use crate::domain::tts::AudioOutputFormat;
use async_trait::async_trait;
use std::path::PathBuf;

/// Writes the audio to a file instead of playing it
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl AudioSink for FileSink {
    async fn play(&self, audio: Vec<u8>, format: AudioOutputFormat) -> Result<(), String> {
        let size = audio.len();
        tokio::fs::write(&self.path, audio).await.map_err(|e| {
            tracing::error!(error = %e, path = %self.path.display(), "Failed to write audio file");
            format!("Failed to write {}: {}", self.path.display(), e)
        })?;

        tracing::info!(
            path = %self.path.display(),
            audio_size_bytes = size,
            output_format = %format,
            "Audio written to file"
        );
        Ok(())
    }
}
