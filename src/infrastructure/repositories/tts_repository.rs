use crate::domain::audio::RawAudioBuffer;
use async_trait::async_trait;
use std::time::Duration;

/// Why a single backend call failed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BackendError {
    #[error("could not reach synthesis backend: {0}")]
    Connectivity(String),
    #[error("synthesis backend timed out after {0:?}")]
    Timeout(Duration),
    #[error("synthesis quota exhausted: {0}")]
    Quota(String),
    #[error("synthesis backend rejected the text: {0}")]
    ContentRejected(String),
    #[error("synthesis backend error: {0}")]
    Provider(String),
    #[error("invalid synthesis response: {0}")]
    InvalidResponse(String),
}

impl BackendError {
    /// Failures caused by the network rather than by the request itself
    pub fn is_connectivity(&self) -> bool {
        matches!(self, Self::Connectivity(_) | Self::Timeout(_))
    }
}

/// Repository for speech synthesis of a single text segment.
/// Abstracts the underlying provider.
///
/// Implementations must always return 16-bit signed little-endian mono PCM
/// at the configured sample rate, without any container header. Splitting
/// long text and merging audio is done by the caller.
#[async_trait]
pub trait TtsRepository: Send + Sync {
    /// Synthesize one segment into raw PCM samples
    ///
    /// # Errors
    /// Returns a [`BackendError`] describing whether the provider was
    /// unreachable, over quota, or refused the content
    async fn synthesize_segment(&self, text: &str) -> Result<RawAudioBuffer, BackendError>;

    /// Provider name used in logs and health responses
    fn name(&self) -> &str;
}
