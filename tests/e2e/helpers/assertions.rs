use hound::{SampleFormat, WavReader};
use serde_json::Value;
use std::io::Cursor;

/// Decode a WAV body with a standard reader and return its samples
pub fn decode_wav(bytes: &[u8], expected_rate: u32) -> Vec<i16> {
    let mut reader = WavReader::new(Cursor::new(bytes.to_vec())).expect("Body is not a WAV file");
    let spec = reader.spec();
    assert_eq!(spec.channels, 1);
    assert_eq!(spec.sample_rate, expected_rate);
    assert_eq!(spec.bits_per_sample, 16);
    assert_eq!(spec.sample_format, SampleFormat::Int);

    reader
        .samples::<i16>()
        .collect::<Result<Vec<_>, _>>()
        .expect("Failed to decode samples")
}

/// Check the declared sizes of a canonical 44-byte WAV header
pub fn assert_wav_sizes(bytes: &[u8]) {
    assert!(bytes.len() >= 44, "WAV body shorter than its header");
    let chunk_size = u32::from_le_bytes([bytes[4], bytes[5], bytes[6], bytes[7]]);
    let data_size = u32::from_le_bytes([bytes[40], bytes[41], bytes[42], bytes[43]]);
    assert_eq!(data_size as usize, bytes.len() - 44);
    assert_eq!(chunk_size, 36 + data_size);
}

pub fn assert_history_entry(entry: &Value) {
    assert!(entry.get("id").and_then(|v| v.as_str()).is_some());
    assert!(entry.get("created_at").is_some());
    assert!(entry.get("snippet").and_then(|v| v.as_str()).is_some());
    assert!(entry.get("duration_seconds").and_then(|v| v.as_f64()).is_some());
    assert!(entry.get("size_bytes").and_then(|v| v.as_u64()).is_some());
    assert!(entry.get("is_active").and_then(|v| v.as_bool()).is_some());
}
