use super::orchestrator::SynthesisError;
use crate::error::AppError;
use crate::infrastructure::repositories::BackendError;

#[derive(Debug, thiserror::Error)]
pub enum TtsServiceError {
    #[error("no text to process")]
    EmptyInput,
    #[error("generation superseded by a newer request")]
    Superseded,
    #[error(transparent)]
    Synthesis(SynthesisError),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<SynthesisError> for TtsServiceError {
    fn from(err: SynthesisError) -> Self {
        match err {
            SynthesisError::Superseded => TtsServiceError::Superseded,
            other => TtsServiceError::Synthesis(other),
        }
    }
}

impl From<TtsServiceError> for AppError {
    fn from(err: TtsServiceError) -> Self {
        match err {
            TtsServiceError::EmptyInput => AppError::BadRequest("No text to process".to_string()),
            TtsServiceError::Superseded => {
                AppError::Conflict("Generation superseded by a newer request".to_string())
            }
            TtsServiceError::Synthesis(e) => {
                let message = e.to_string();
                match e.backend_error() {
                    Some(BackendError::Connectivity(_) | BackendError::Timeout(_)) => {
                        AppError::ServiceUnavailable(message)
                    }
                    Some(BackendError::Quota(_)) => AppError::RateLimitExceeded(message),
                    Some(BackendError::ContentRejected(_)) => {
                        AppError::UnprocessableContent(message)
                    }
                    _ => AppError::ExternalService(message),
                }
            }
            TtsServiceError::Other(e) => AppError::Internal(e.to_string()),
        }
    }
}
