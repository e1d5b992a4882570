pub mod audio;
pub mod history;
pub mod tts;
