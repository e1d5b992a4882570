use axum::{
    body::Body,
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    Json,
};
use std::sync::Arc;
use uuid::Uuid;

use super::audio_response;
use crate::{
    domain::history::{
        HistoryEntryResponse, HistoryService, HistoryServiceApi, RestoredEntryResponse,
    },
    error::AppResult,
};

pub struct HistoryController {
    history_service: Arc<HistoryService>,
}

impl HistoryController {
    pub fn new(history_service: Arc<HistoryService>) -> Self {
        Self { history_service }
    }

    /// GET /api/history - List generated audio, most recent first
    pub async fn list(
        State(controller): State<Arc<HistoryController>>,
    ) -> Json<Vec<HistoryEntryResponse>> {
        Json(controller.history_service.list().await)
    }

    /// POST /api/history/{entryId}/restore - Make an entry the active result
    pub async fn restore(
        State(controller): State<Arc<HistoryController>>,
        Path(entry_id): Path<Uuid>,
    ) -> AppResult<Json<RestoredEntryResponse>> {
        let restored = controller.history_service.restore(entry_id).await?;
        Ok(Json(restored))
    }

    /// GET /api/history/{entryId}/audio - Download an entry's WAV file
    pub async fn audio(
        State(controller): State<Arc<HistoryController>>,
        Path(entry_id): Path<Uuid>,
    ) -> AppResult<(StatusCode, HeaderMap, Body)> {
        let audio = controller.history_service.audio(entry_id).await?;
        audio_response(audio)
    }

    /// DELETE /api/history/{entryId} - Delete an entry and release its audio
    pub async fn delete_entry(
        State(controller): State<Arc<HistoryController>>,
        Path(entry_id): Path<Uuid>,
    ) -> StatusCode {
        controller.history_service.delete(entry_id).await;
        StatusCode::NO_CONTENT
    }

    /// DELETE /api/history - Delete every entry
    pub async fn clear_history(State(controller): State<Arc<HistoryController>>) -> StatusCode {
        controller.history_service.clear_history().await;
        StatusCode::NO_CONTENT
    }
}
