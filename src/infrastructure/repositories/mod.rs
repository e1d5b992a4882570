pub mod gemini_tts_repository;
pub mod tts_repository;

pub use gemini_tts_repository::GeminiTtsRepository;
pub use tts_repository::{BackendError, TtsRepository};

#[cfg(test)]
pub use tts_repository::testing;
