pub mod dto;
pub mod error;
pub mod format;
pub mod service;
pub mod ssml;
pub mod voice;

pub use dto::{SynthesisRequest, SynthesisRequestBuilder};
pub use error::TtsServiceError;
pub use format::AudioOutputFormat;
pub use service::{SpeakOutcome, TtsService, VoiceSettings};
pub use voice::Gender;
