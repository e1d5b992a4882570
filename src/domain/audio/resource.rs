use super::wav::{EncodedAudioFile, PcmFormat};
use std::sync::Arc;
use uuid::Uuid;

/// Shared handle to generated audio.
///
/// The active result and a history entry may alias the same resource; the
/// backing bytes are freed when the last handle is dropped.
pub type SharedAudio = Arc<AudioResource>;

/// Owner of one encoded audio file.
#[derive(Debug)]
pub struct AudioResource {
    id: Uuid,
    file: EncodedAudioFile,
}

impl AudioResource {
    pub fn new(file: EncodedAudioFile) -> SharedAudio {
        let resource = Self {
            id: Uuid::new_v4(),
            file,
        };
        tracing::debug!(
            resource_id = %resource.id,
            size_bytes = resource.file.len(),
            "Audio resource allocated"
        );
        Arc::new(resource)
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn bytes(&self) -> &[u8] {
        self.file.as_bytes()
    }

    pub fn size_bytes(&self) -> usize {
        self.file.len()
    }

    pub fn format(&self) -> PcmFormat {
        self.file.format()
    }

    pub fn duration_seconds(&self) -> f64 {
        self.file.duration_seconds()
    }
}

impl Drop for AudioResource {
    fn drop(&mut self) {
        tracing::debug!(
            resource_id = %self.id,
            size_bytes = self.file.len(),
            "Audio resource released"
        );
    }
}
