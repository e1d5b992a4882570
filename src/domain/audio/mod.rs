pub mod merger;
pub mod resource;
pub mod wav;

pub use merger::{merge, MergedBuffer, RawAudioBuffer};
pub use resource::{AudioResource, SharedAudio};
pub use wav::{encode, EncodedAudioFile, PcmFormat, WavHeader, WavHeaderError, WAV_HEADER_LEN};

/// MIME type of every file produced by the encoder.
pub const WAV_CONTENT_TYPE: &str = "audio/wav";
