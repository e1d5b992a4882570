/// Raw PCM bytes returned by the backend for a single segment.
///
/// All buffers of one run are expected to share the same sample format
/// (16-bit signed little-endian, mono, fixed rate). The merger does not
/// check this: mixing formats here produces a corrupt file.
pub type RawAudioBuffer = Vec<u8>;

/// Concatenation of every segment buffer of a run, in segment order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergedBuffer {
    bytes: Vec<u8>,
}

impl MergedBuffer {
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

impl From<Vec<u8>> for MergedBuffer {
    fn from(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }
}

/// Concatenate segment buffers byte for byte, preserving their order.
///
/// No resampling and no silence is inserted between segments.
pub fn merge(buffers: Vec<RawAudioBuffer>) -> MergedBuffer {
    let total: usize = buffers.iter().map(Vec::len).sum();
    let mut bytes = Vec::with_capacity(total);

    for buffer in buffers {
        bytes.extend_from_slice(&buffer);
    }

    MergedBuffer { bytes }
}
