//! Destinations for synthesized audio.
//!
//! The speaker sink decodes and plays the audio on the default output device
//! and blocks until playback ends. The file sink writes the raw bytes to disk.

pub mod file_sink;
#[cfg(feature = "playback")]
pub mod speaker_sink;

use crate::domain::tts::AudioOutputFormat;
use async_trait::async_trait;

pub use file_sink::FileSink;
#[cfg(feature = "playback")]
pub use speaker_sink::SpeakerSink;

/// Receives the audio once the synthesis endpoint has returned it
#[async_trait]
pub trait AudioSink: Send + Sync {
    /// Consume the audio; returns once it has been played or stored
    async fn play(&self, audio: Vec<u8>, format: AudioOutputFormat) -> Result<(), String>;
}
