use super::error::TtsServiceError;
use super::generation::{GenerationCounter, GenerationTicket};
use super::orchestrator::{self, SegmentProgress, SynthesisError};
use super::segmenter::{clamp_input, segment};
use super::{GenerationResult, GenerationStatus, SynthesisSettings};
use crate::domain::audio::{encode, AudioResource, PcmFormat};
use crate::domain::history::{HistoryEntry, HistoryEntryResponse, SharedCache};
use crate::infrastructure::repositories::TtsRepository;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::watch;

pub struct TtsService {
    tts_repo: Arc<dyn TtsRepository>,
    cache: SharedCache,
    settings: SynthesisSettings,
    generations: Arc<GenerationCounter>,
    status: watch::Sender<GenerationStatus>,
}

impl TtsService {
    pub fn new(
        tts_repo: Arc<dyn TtsRepository>,
        cache: SharedCache,
        settings: SynthesisSettings,
    ) -> Self {
        let (status, _) = watch::channel(GenerationStatus::Idle);

        Self {
            tts_repo,
            cache,
            settings,
            generations: GenerationCounter::new(),
            status,
        }
    }

    pub fn settings(&self) -> &SynthesisSettings {
        &self.settings
    }

    pub fn backend_name(&self) -> &str {
        self.tts_repo.name()
    }
}

#[async_trait]
pub trait TtsServiceApi: Send + Sync {
    /// Turn a script into one WAV file
    ///
    /// This operation:
    /// - Truncates the text to the configured maximum length
    /// - Splits it into paragraph segments
    /// - Synthesizes segments one at a time, aborting on the first failure
    /// - Encodes the merged samples and stores them as a new history entry,
    ///   which also becomes the active result
    ///
    /// A newer call supersedes a running one; the older call then returns
    /// `Superseded` and leaves the history untouched.
    async fn generate(&self, text: String) -> Result<GenerationResult, TtsServiceError>;

    /// Latest progress of the current run
    fn status(&self) -> GenerationStatus;

    /// Receiver notified on every status change
    fn subscribe(&self) -> watch::Receiver<GenerationStatus>;

    /// Drop the active result and abandon any run in flight
    async fn clear(&self);
}

#[async_trait]
impl TtsServiceApi for TtsService {
    async fn generate(&self, text: String) -> Result<GenerationResult, TtsServiceError> {
        let (accepted, truncated) = clamp_input(&text, self.settings.max_text_length);
        if truncated {
            tracing::warn!(
                original_chars = text.chars().count(),
                max_chars = self.settings.max_text_length,
                "Input text truncated to maximum length"
            );
        }

        let segments = segment(accepted, self.settings.segment_soft_limit);
        if segments.is_empty() {
            return Err(TtsServiceError::EmptyInput);
        }

        let ticket = self.generations.begin();
        let characters = accepted.chars().count();

        tracing::info!(
            generation = ticket.id(),
            backend = self.tts_repo.name(),
            characters,
            segment_count = segments.len(),
            soft_limit = self.settings.segment_soft_limit,
            "Starting generation"
        );

        let started = std::time::Instant::now();
        let merged = orchestrator::synthesize(
            &segments,
            self.tts_repo.as_ref(),
            self.settings.segment_timeout,
            &ticket,
            |progress| self.publish_progress(&ticket, progress),
        )
        .await;

        let merged = match merged {
            Ok(merged) => merged,
            Err(SynthesisError::Superseded) => return Err(TtsServiceError::Superseded),
            Err(e) => {
                self.publish(&ticket, GenerationStatus::Failed {
                    generation: ticket.id(),
                    message: e.to_string(),
                });
                return Err(e.into());
            }
        };

        let file = encode(merged, PcmFormat::mono_16(self.settings.sample_rate));
        let audio = AudioResource::new(file);

        let mut cache = self.cache.lock().await;
        if !ticket.is_current() {
            tracing::info!(
                generation = ticket.id(),
                "Discarding audio of superseded generation"
            );
            return Err(TtsServiceError::Superseded);
        }

        let entry = HistoryEntry::new(accepted.to_string(), Arc::clone(&audio));
        let entry_response = HistoryEntryResponse::from_entry(&entry, true);
        let entry_id = cache.insert(entry);
        cache.set_active(audio);
        let history_size = cache.len();
        drop(cache);

        self.publish(&ticket, GenerationStatus::Completed {
            generation: ticket.id(),
            entry_id,
        });

        tracing::info!(
            generation = ticket.id(),
            entry_id = %entry_id,
            segment_count = segments.len(),
            audio_size_bytes = entry_response.size_bytes,
            duration_seconds = entry_response.duration_seconds,
            latency_ms = started.elapsed().as_millis(),
            history_size,
            "Generation completed"
        );

        Ok(GenerationResult {
            entry: entry_response,
            segment_count: segments.len(),
            characters,
            truncated,
        })
    }

    fn status(&self) -> GenerationStatus {
        self.status.borrow().clone()
    }

    fn subscribe(&self) -> watch::Receiver<GenerationStatus> {
        self.status.subscribe()
    }

    async fn clear(&self) {
        let abandoned = self.generations.abandon();
        let had_active = self.cache.lock().await.clear_active();
        self.status.send_replace(GenerationStatus::Idle);

        tracing::info!(generation = abandoned, had_active, "Active result cleared");
    }
}

impl TtsService {
    fn publish_progress(&self, ticket: &GenerationTicket, progress: SegmentProgress) {
        self.publish(ticket, GenerationStatus::Synthesizing {
            generation: ticket.id(),
            current: progress.current,
            total: progress.total,
        });
    }

    /// Publish a status update unless the run has been superseded.
    fn publish(&self, ticket: &GenerationTicket, next: GenerationStatus) {
        self.status.send_if_modified(|status| {
            if !ticket.is_current() {
                return false;
            }
            *status = next;
            true
        });
    }
}
