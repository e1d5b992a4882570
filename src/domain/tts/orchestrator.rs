use super::generation::GenerationTicket;
use super::segmenter::Segment;
use crate::domain::audio::{merge, MergedBuffer};
use crate::infrastructure::repositories::{BackendError, TtsRepository};
use serde::Serialize;
use std::time::{Duration, Instant};

/// Position of the segment about to be synthesized, 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SegmentProgress {
    pub current: usize,
    pub total: usize,
}

#[derive(Debug, thiserror::Error)]
pub enum SynthesisError {
    #[error("segment {segment} of {total} failed: {source}")]
    Backend {
        segment: usize,
        total: usize,
        #[source]
        source: BackendError,
    },
    #[error("run superseded by a newer generation")]
    Superseded,
}

impl SynthesisError {
    pub fn backend_error(&self) -> Option<&BackendError> {
        match self {
            Self::Backend { source, .. } => Some(source),
            Self::Superseded => None,
        }
    }
}

/// Synthesize every segment in order, one backend call at a time, and merge
/// the results.
///
/// `on_progress` is called before each backend call. The first failure or
/// timeout aborts the run and drops the buffers collected so far. A run
/// whose ticket went stale stops before its next call; the result of a call
/// already in flight is discarded.
pub async fn synthesize<F>(
    segments: &[Segment],
    backend: &dyn TtsRepository,
    timeout: Duration,
    ticket: &GenerationTicket,
    mut on_progress: F,
) -> Result<MergedBuffer, SynthesisError>
where
    F: FnMut(SegmentProgress) + Send,
{
    let total = segments.len();
    let mut buffers = Vec::with_capacity(total);

    for (position, segment) in segments.iter().enumerate() {
        if !ticket.is_current() {
            tracing::info!(
                generation = ticket.id(),
                completed = position,
                total,
                "Generation superseded, stopping before next segment"
            );
            return Err(SynthesisError::Superseded);
        }

        on_progress(SegmentProgress {
            current: position + 1,
            total,
        });

        tracing::info!(
            generation = ticket.id(),
            segment = position + 1,
            total,
            segment_chars = segment.char_count(),
            "Synthesizing segment"
        );

        let started = Instant::now();
        let outcome = tokio::time::timeout(timeout, backend.synthesize_segment(&segment.text))
            .await
            .unwrap_or(Err(BackendError::Timeout(timeout)));

        let audio = outcome.map_err(|source| {
            tracing::error!(
                generation = ticket.id(),
                segment = position + 1,
                total,
                backend = backend.name(),
                error = %source,
                "Segment synthesis failed, aborting run"
            );
            SynthesisError::Backend {
                segment: position + 1,
                total,
                source,
            }
        })?;

        tracing::debug!(
            generation = ticket.id(),
            segment = position + 1,
            audio_size = audio.len(),
            latency_ms = started.elapsed().as_millis(),
            "Segment synthesized"
        );
        buffers.push(audio);
    }

    if !ticket.is_current() {
        return Err(SynthesisError::Superseded);
    }

    Ok(merge(buffers))
}
