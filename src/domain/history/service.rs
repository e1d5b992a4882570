use super::cache::{ResourceCache, SharedCache};
use super::error::HistoryServiceError;
use super::{HistoryEntryResponse, RestoredEntryResponse};
use crate::domain::audio::SharedAudio;
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

pub struct HistoryService {
    cache: SharedCache,
}

impl HistoryService {
    pub fn new(cache: SharedCache) -> Self {
        Self { cache }
    }
}

#[async_trait]
pub trait HistoryServiceApi: Send + Sync {
    /// All entries, most recent first
    async fn list(&self) -> Vec<HistoryEntryResponse>;

    /// Make an entry's audio the active result and return the entry with
    /// its full source text
    async fn restore(&self, id: Uuid) -> Result<RestoredEntryResponse, HistoryServiceError>;

    /// Audio of a single entry
    async fn audio(&self, id: Uuid) -> Result<SharedAudio, HistoryServiceError>;

    /// Audio of the active result
    async fn active_audio(&self) -> Result<SharedAudio, HistoryServiceError>;

    /// Delete an entry. Unknown ids are logged and ignored.
    async fn delete(&self, id: Uuid);

    /// Delete every entry. Returns how many were removed.
    async fn clear_history(&self) -> usize;
}

#[async_trait]
impl HistoryServiceApi for HistoryService {
    async fn list(&self) -> Vec<HistoryEntryResponse> {
        let cache = self.cache.lock().await;
        cache
            .list_most_recent_first()
            .map(|entry| HistoryEntryResponse::from_entry(entry, cache.is_active(&entry.audio)))
            .collect()
    }

    async fn restore(&self, id: Uuid) -> Result<RestoredEntryResponse, HistoryServiceError> {
        let mut cache = self.cache.lock().await;

        if cache.restore(id).is_none() {
            tracing::warn!(entry_id = %id, "Restore requested for unknown history entry");
            return Err(HistoryServiceError::NotFound(id));
        }

        let entry = cache
            .get(id)
            .ok_or(HistoryServiceError::NotFound(id))?;

        tracing::info!(
            entry_id = %id,
            resource_id = %entry.audio.id(),
            "History entry restored as active result"
        );

        Ok(RestoredEntryResponse::from_entry(entry, true))
    }

    async fn audio(&self, id: Uuid) -> Result<SharedAudio, HistoryServiceError> {
        let cache = self.cache.lock().await;
        cache
            .get(id)
            .map(|entry| Arc::clone(&entry.audio))
            .ok_or(HistoryServiceError::NotFound(id))
    }

    async fn active_audio(&self) -> Result<SharedAudio, HistoryServiceError> {
        let cache = self.cache.lock().await;
        cache
            .active()
            .map(Arc::clone)
            .ok_or(HistoryServiceError::NoActiveResult)
    }

    async fn delete(&self, id: Uuid) {
        let mut cache = self.cache.lock().await;
        if cache.delete(id) {
            tracing::info!(entry_id = %id, remaining = cache.len(), "History entry deleted");
        } else {
            tracing::warn!(entry_id = %id, "Delete requested for unknown history entry");
        }
    }

    async fn clear_history(&self) -> usize {
        let mut cache = self.cache.lock().await;
        let removed = cache.clear_history();
        tracing::info!(removed, "History cleared");
        removed
    }
}

impl HistoryService {
    /// Direct access to the shared cache, for components that insert entries
    pub fn cache(&self) -> SharedCache {
        Arc::clone(&self.cache)
    }

    pub fn empty() -> Self {
        Self::new(ResourceCache::shared())
    }
}
