use super::model::HistoryEntry;
use crate::domain::audio::SharedAudio;
use std::collections::VecDeque;
use std::sync::Arc;
use tokio::sync::Mutex;
use uuid::Uuid;

/// Cache shared between the generation pipeline and history actions.
pub type SharedCache = Arc<Mutex<ResourceCache>>;

/// Generated audio kept for the session, most recent first, plus the slot
/// holding the currently playable result.
///
/// Entries are only removed by [`ResourceCache::delete`] or
/// [`ResourceCache::clear_history`]; there is no eviction. The active result
/// is a second handle to the same [`crate::domain::audio::AudioResource`], so
/// storage is released when whichever of the two goes last is dropped.
#[derive(Debug, Default)]
pub struct ResourceCache {
    entries: VecDeque<HistoryEntry>,
    active: Option<SharedAudio>,
}

impl ResourceCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shared() -> SharedCache {
        Arc::new(Mutex::new(Self::new()))
    }

    pub fn insert(&mut self, entry: HistoryEntry) -> Uuid {
        let id = entry.id;
        self.entries.push_front(entry);
        id
    }

    pub fn get(&self, id: Uuid) -> Option<&HistoryEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// Remove an entry and drop its audio handle.
    ///
    /// Clears the active result when it aliases the removed entry's audio.
    /// Returns `false` for an unknown id.
    pub fn delete(&mut self, id: Uuid) -> bool {
        let Some(position) = self.entries.iter().position(|entry| entry.id == id) else {
            return false;
        };

        if let Some(entry) = self.entries.remove(position) {
            if self.is_active(&entry.audio) {
                self.active = None;
            }
            tracing::debug!(
                entry_id = %entry.id,
                resource_id = %entry.audio.id(),
                "History entry removed"
            );
        }

        true
    }

    pub fn list_most_recent_first(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Make `audio` the active result, dropping the previous handle.
    pub fn set_active(&mut self, audio: SharedAudio) {
        self.active = Some(audio);
    }

    /// Make an entry's audio the active result.
    pub fn restore(&mut self, id: Uuid) -> Option<SharedAudio> {
        let audio = Arc::clone(&self.get(id)?.audio);
        self.set_active(Arc::clone(&audio));
        Some(audio)
    }

    /// Returns whether a result was active.
    pub fn clear_active(&mut self) -> bool {
        self.active.take().is_some()
    }

    pub fn active(&self) -> Option<&SharedAudio> {
        self.active.as_ref()
    }

    /// Id of the entry whose audio is currently active, if any.
    pub fn active_entry_id(&self) -> Option<Uuid> {
        let active = self.active.as_ref()?;
        self.entries
            .iter()
            .find(|entry| Arc::ptr_eq(&entry.audio, active))
            .map(|entry| entry.id)
    }

    pub fn is_active(&self, audio: &SharedAudio) -> bool {
        self.active
            .as_ref()
            .is_some_and(|active| Arc::ptr_eq(active, audio))
    }

    /// Delete every entry. Returns how many were removed.
    pub fn clear_history(&mut self) -> usize {
        let ids: Vec<Uuid> = self.entries.iter().map(|entry| entry.id).collect();
        ids.into_iter().filter(|id| self.delete(*id)).count()
    }
}
