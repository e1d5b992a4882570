pub mod error;
pub mod generation;
pub mod orchestrator;
pub mod segmenter;
pub mod service;

pub use error::TtsServiceError;
pub use generation::{GenerationCounter, GenerationTicket};
pub use orchestrator::{SegmentProgress, SynthesisError};
pub use segmenter::{clamp_input, segment, Segment, PARAGRAPH_SEPARATOR};
pub use service::{TtsService, TtsServiceApi};

use crate::domain::history::HistoryEntryResponse;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use uuid::Uuid;

/// Tunables of the synthesis pipeline
#[derive(Debug, Clone, PartialEq)]
pub struct SynthesisSettings {
    /// Sample rate of the PCM returned by the backend
    pub sample_rate: u32,
    /// Segments grow while they stay below this many characters
    pub segment_soft_limit: usize,
    /// Longer input is truncated before segmentation
    pub max_text_length: usize,
    /// Upper bound for a single backend call
    pub segment_timeout: Duration,
}

impl Default for SynthesisSettings {
    fn default() -> Self {
        Self {
            sample_rate: 24_000,
            segment_soft_limit: 800,
            max_text_length: 50_000,
            segment_timeout: Duration::from_secs(60),
        }
    }
}

/// Request for POST /api/tts/generate
#[derive(Debug, Serialize, Deserialize)]
pub struct GenerateRequest {
    pub text: String,
}

/// Response for POST /api/tts/generate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationResult {
    pub entry: HistoryEntryResponse,
    pub segment_count: usize,
    pub characters: usize,
    pub truncated: bool,
}

/// Observable state of the most recent generation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum GenerationStatus {
    Idle,
    Synthesizing {
        generation: u64,
        current: usize,
        total: usize,
    },
    Completed {
        generation: u64,
        entry_id: Uuid,
    },
    Failed {
        generation: u64,
        message: String,
    },
}
