pub mod cache;
pub mod error;
pub mod model;
pub mod service;

pub use cache::{ResourceCache, SharedCache};
pub use error::HistoryServiceError;
pub use model::{snippet_of, HistoryEntry, SNIPPET_MAX_CHARS};
pub use service::{HistoryService, HistoryServiceApi};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Response for history listing endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntryResponse {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub snippet: String,
    pub duration_seconds: f64,
    pub size_bytes: usize,
    pub is_active: bool,
}

impl HistoryEntryResponse {
    pub fn from_entry(entry: &HistoryEntry, is_active: bool) -> Self {
        Self {
            id: entry.id,
            created_at: entry.created_at,
            snippet: entry.snippet.clone(),
            duration_seconds: entry.audio.duration_seconds(),
            size_bytes: entry.audio.size_bytes(),
            is_active,
        }
    }
}

/// Response for POST /api/history/{id}/restore
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RestoredEntryResponse {
    #[serde(flatten)]
    pub entry: HistoryEntryResponse,
    pub source_text: String,
}

impl RestoredEntryResponse {
    pub fn from_entry(entry: &HistoryEntry, is_active: bool) -> Self {
        Self {
            entry: HistoryEntryResponse::from_entry(entry, is_active),
            source_text: entry.source_text.clone(),
        }
    }
}
