use crate::error::AppError;
use uuid::Uuid;

#[derive(Debug, thiserror::Error)]
pub enum HistoryServiceError {
    #[error("history entry {0} not found")]
    NotFound(Uuid),
    #[error("no active result")]
    NoActiveResult,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<HistoryServiceError> for AppError {
    fn from(err: HistoryServiceError) -> Self {
        match err {
            HistoryServiceError::NotFound(id) => {
                AppError::NotFound(format!("History entry {} not found", id))
            }
            HistoryServiceError::NoActiveResult => {
                AppError::NotFound("No active result".to_string())
            }
            HistoryServiceError::Other(e) => AppError::Internal(e.to_string()),
        }
    }
}
