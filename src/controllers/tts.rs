use axum::{
    body::Body,
    extract::State,
    http::{HeaderMap, StatusCode},
    Json,
};
use std::sync::Arc;

use super::audio_response;
use crate::{
    domain::{
        history::{HistoryService, HistoryServiceApi},
        tts::{GenerateRequest, GenerationResult, GenerationStatus, TtsService, TtsServiceApi},
    },
    error::{AppError, AppResult},
};

pub struct TtsController {
    tts_service: Arc<TtsService>,
    history_service: Arc<HistoryService>,
}

impl TtsController {
    pub fn new(tts_service: Arc<TtsService>, history_service: Arc<HistoryService>) -> Self {
        Self {
            tts_service,
            history_service,
        }
    }

    pub fn backend_name(&self) -> &str {
        self.tts_service.backend_name()
    }

    /// POST /api/tts/generate - Convert a script to a single WAV file
    pub async fn generate(
        State(controller): State<Arc<TtsController>>,
        Json(request): Json<GenerateRequest>,
    ) -> AppResult<(StatusCode, Json<GenerationResult>)> {
        if request.text.trim().is_empty() {
            return Err(AppError::BadRequest("No text to process".to_string()));
        }

        let result = controller.tts_service.generate(request.text).await?;

        Ok((StatusCode::CREATED, Json(result)))
    }

    /// GET /api/tts/progress - Status of the latest generation
    pub async fn progress(State(controller): State<Arc<TtsController>>) -> Json<GenerationStatus> {
        Json(controller.tts_service.status())
    }

    /// GET /api/tts/active - Audio of the active result
    pub async fn active_audio(
        State(controller): State<Arc<TtsController>>,
    ) -> AppResult<(StatusCode, HeaderMap, Body)> {
        let audio = controller.history_service.active_audio().await?;
        audio_response(audio)
    }

    /// DELETE /api/tts/active - Clear the active result and abandon any running generation
    pub async fn clear(State(controller): State<Arc<TtsController>>) -> StatusCode {
        controller.tts_service.clear().await;
        StatusCode::NO_CONTENT
    }
}
