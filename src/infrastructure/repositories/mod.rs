pub mod cognitive_tts_repository;
pub mod sts_token_repository;
pub mod token_repository;
pub mod tts_repository;

pub use cognitive_tts_repository::CognitiveTtsRepository;
pub use sts_token_repository::StsTokenRepository;
pub use token_repository::TokenRepository;
pub use tts_repository::TtsRepository;
