use super::AudioSink;
use crate::domain::tts::AudioOutputFormat;
use async_trait::async_trait;
use rodio::{Decoder, OutputStream, Sink};
use std::io::Cursor;

/// Plays audio on the default output device
#[derive(Default)]
pub struct SpeakerSink;

impl SpeakerSink {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl AudioSink for SpeakerSink {
    async fn play(&self, audio: Vec<u8>, format: AudioOutputFormat) -> Result<(), String> {
        if !format.is_playable() {
            return Err(format!(
                "Output format {} cannot be played locally; use a RIFF PCM format such as {} or write it to a file with --output",
                format,
                AudioOutputFormat::Riff16Khz16BitMonoPcm
            ));
        }

        let size = audio.len();
        tracing::info!(audio_size_bytes = size, output_format = %format, "Playing audio");

        tokio::task::spawn_blocking(move || play_blocking(audio))
            .await
            .map_err(|e| format!("Playback task failed: {}", e))??;

        tracing::info!("Playback finished");
        Ok(())
    }
}

fn play_blocking(audio: Vec<u8>) -> Result<(), String> {
    let (_stream, stream_handle) = OutputStream::try_default()
        .map_err(|e| format!("No audio output device: {}", e))?;
    let sink = Sink::try_new(&stream_handle).map_err(|e| format!("Failed to open sink: {}", e))?;
    let source =
        Decoder::new(Cursor::new(audio)).map_err(|e| format!("Failed to decode audio: {}", e))?;

    sink.append(source);
    sink.sleep_until_end();
    Ok(())
}
