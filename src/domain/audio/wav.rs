use serde::Serialize;

/// Size of the canonical PCM WAV header written by [`encode`].
pub const WAV_HEADER_LEN: usize = 44;

/// Bytes of the RIFF chunk counted by `chunkSize` besides the data payload.
const RIFF_OVERHEAD: u32 = 36;
const FMT_CHUNK_LEN: u32 = 16;
const FORMAT_TAG_PCM: u16 = 1;

/// Sample layout of the payload carried by an encoded file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PcmFormat {
    pub sample_rate: u32,
    pub channels: u16,
    pub bits_per_sample: u16,
}

impl PcmFormat {
    /// 16-bit signed mono PCM, the only layout the backend produces.
    pub fn mono_16(sample_rate: u32) -> Self {
        Self {
            sample_rate,
            channels: 1,
            bits_per_sample: 16,
        }
    }

    pub fn block_align(&self) -> u16 {
        self.channels * self.bits_per_sample / 8
    }

    pub fn byte_rate(&self) -> u32 {
        self.sample_rate * u32::from(self.block_align())
    }
}

/// A self-describing WAV file: 44-byte header followed by the payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedAudioFile {
    bytes: Vec<u8>,
    format: PcmFormat,
}

impl EncodedAudioFile {
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn format(&self) -> PcmFormat {
        self.format
    }

    pub fn payload(&self) -> &[u8] {
        &self.bytes[WAV_HEADER_LEN..]
    }

    pub fn duration_seconds(&self) -> f64 {
        let byte_rate = self.format.byte_rate();
        if byte_rate == 0 {
            return 0.0;
        }
        self.payload().len() as f64 / f64::from(byte_rate)
    }
}

/// Wrap a merged PCM buffer in a canonical RIFF/WAVE container.
///
/// The payload is copied unmodified. A payload that is not a multiple of
/// the block alignment is still written with its literal length.
pub fn encode(buffer: super::MergedBuffer, format: PcmFormat) -> EncodedAudioFile {
    let payload = buffer.into_bytes();
    debug_assert!(
        payload.len() <= (u32::MAX - RIFF_OVERHEAD) as usize,
        "payload too large for a RIFF container"
    );
    let data_size = payload.len() as u32;

    let mut bytes = Vec::with_capacity(WAV_HEADER_LEN + payload.len());
    bytes.extend_from_slice(b"RIFF");
    bytes.extend_from_slice(&(RIFF_OVERHEAD + data_size).to_le_bytes());
    bytes.extend_from_slice(b"WAVE");
    bytes.extend_from_slice(b"fmt ");
    bytes.extend_from_slice(&FMT_CHUNK_LEN.to_le_bytes());
    bytes.extend_from_slice(&FORMAT_TAG_PCM.to_le_bytes());
    bytes.extend_from_slice(&format.channels.to_le_bytes());
    bytes.extend_from_slice(&format.sample_rate.to_le_bytes());
    bytes.extend_from_slice(&format.byte_rate().to_le_bytes());
    bytes.extend_from_slice(&format.block_align().to_le_bytes());
    bytes.extend_from_slice(&format.bits_per_sample.to_le_bytes());
    bytes.extend_from_slice(b"data");
    bytes.extend_from_slice(&data_size.to_le_bytes());
    debug_assert_eq!(bytes.len(), WAV_HEADER_LEN);

    bytes.extend_from_slice(&payload);
    debug_assert_eq!(bytes.len() - WAV_HEADER_LEN, data_size as usize);

    EncodedAudioFile { bytes, format }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum WavHeaderError {
    #[error("file shorter than a WAV header ({0} bytes)")]
    TooShort(usize),
    #[error("missing {0} marker")]
    MissingMarker(&'static str),
}

/// Decoded fields of a canonical 44-byte PCM WAV header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavHeader {
    pub chunk_size: u32,
    pub format_tag: u16,
    pub channels: u16,
    pub sample_rate: u32,
    pub byte_rate: u32,
    pub block_align: u16,
    pub bits_per_sample: u16,
    pub data_size: u32,
}

impl WavHeader {
    pub fn parse(bytes: &[u8]) -> Result<Self, WavHeaderError> {
        if bytes.len() < WAV_HEADER_LEN {
            return Err(WavHeaderError::TooShort(bytes.len()));
        }

        let u16_at = |at: usize| u16::from_le_bytes([bytes[at], bytes[at + 1]]);
        let u32_at = |at: usize| {
            u32::from_le_bytes([bytes[at], bytes[at + 1], bytes[at + 2], bytes[at + 3]])
        };

        for (at, marker) in [(0, "RIFF"), (8, "WAVE"), (12, "fmt "), (36, "data")] {
            if &bytes[at..at + 4] != marker.as_bytes() {
                return Err(WavHeaderError::MissingMarker(marker));
            }
        }

        Ok(Self {
            chunk_size: u32_at(4),
            format_tag: u16_at(20),
            channels: u16_at(22),
            sample_rate: u32_at(24),
            byte_rate: u32_at(28),
            block_align: u16_at(32),
            bits_per_sample: u16_at(34),
            data_size: u32_at(40),
        })
    }
}
