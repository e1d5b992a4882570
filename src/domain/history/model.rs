use crate::domain::audio::SharedAudio;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Maximum number of characters of source text shown in a history snippet.
pub const SNIPPET_MAX_CHARS: usize = 60;
const ELLIPSIS: char = '…';

/// One completed generation. Owns a handle to its audio until deleted.
#[derive(Debug)]
pub struct HistoryEntry {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub snippet: String,
    pub source_text: String,
    pub audio: SharedAudio,
}

impl HistoryEntry {
    pub fn new(source_text: String, audio: SharedAudio) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            snippet: snippet_of(&source_text),
            source_text,
            audio,
        }
    }
}

/// Single-line preview of `text`, cut at [`SNIPPET_MAX_CHARS`] characters.
pub fn snippet_of(text: &str) -> String {
    let flattened = text.split_whitespace().collect::<Vec<_>>().join(" ");

    if flattened.chars().count() <= SNIPPET_MAX_CHARS {
        return flattened;
    }

    let mut snippet: String = flattened.chars().take(SNIPPET_MAX_CHARS).collect();
    snippet.truncate(snippet.trim_end().len());
    snippet.push(ELLIPSIS);
    snippet
}
